// Wire DTOs and conversions for messages consumed by render sinks.

use serde::Serialize;

use crate::domain::state::{DecoySnapshot, FighterSnapshot, ProjectileSnapshot, Stance};
use crate::use_cases::types::{FrameUpdate, MatchPhase, MatchSetup};

/// Messages the runtime publishes toward render sinks.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum RenderMessage {
    // Static identity of both selected fighters, for one-time sink setup.
    Roster(RosterDto),
    // Snapshot of the match for a given tick.
    Frame(FrameDto),
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterDto {
    pub fighters: Vec<RosterEntryDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterEntryDto {
    pub side: String,
    pub archetype: String,
    pub name: String,
    pub color: String,
    pub secondary_color: String,
    pub special: String,
    pub ultimate: String,
}

impl From<&MatchSetup> for RosterDto {
    fn from(setup: &MatchSetup) -> Self {
        let sides = ["p1", "p2"];
        Self {
            fighters: setup
                .fighters
                .iter()
                .zip(sides)
                .map(|(config, side)| {
                    let spec = config.archetype.spec();
                    RosterEntryDto {
                        side: side.to_string(),
                        archetype: config.archetype.id().to_string(),
                        name: spec.name.to_string(),
                        color: spec.color.to_string(),
                        secondary_color: spec.secondary_color.to_string(),
                        special: spec.special_name.to_string(),
                        ultimate: spec.ultimate_name.to_string(),
                    }
                })
                .collect(),
        }
    }
}

/// Flattened per-tick match state for wire transmission.
#[derive(Debug, Clone, Serialize)]
pub struct FrameDto {
    pub tick: u64,
    pub phase: PhaseDto,
    pub fighters: Vec<FighterStateDto>,
}

impl From<&FrameUpdate> for FrameDto {
    fn from(update: &FrameUpdate) -> Self {
        Self {
            tick: update.tick,
            phase: PhaseDto::from(update.phase),
            fighters: update.fighters.iter().map(FighterStateDto::from).collect(),
        }
    }
}

/// Match lifecycle state sent to sinks for banner/UI flow.
#[derive(Debug, Clone, Serialize)]
pub enum PhaseDto {
    Running,
    Over { winner: String },
}

impl From<MatchPhase> for PhaseDto {
    fn from(phase: MatchPhase) -> Self {
        match phase {
            MatchPhase::Running => PhaseDto::Running,
            MatchPhase::Over { winner } => PhaseDto::Over {
                winner: winner.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FighterStateDto {
    pub side: String,
    pub archetype: String,
    pub x: f32,
    pub y: f32,
    pub facing_right: bool,
    pub state: String,
    pub hp: i32,
    pub chakra: f32,
    pub blocking: bool,
    pub invincible: u32,
    pub healing: u32,
    pub projectiles: Vec<ProjectileStateDto>,
    pub decoys: Vec<DecoyStateDto>,
}

impl From<&FighterSnapshot> for FighterStateDto {
    fn from(snapshot: &FighterSnapshot) -> Self {
        Self {
            side: snapshot.side.to_string(),
            archetype: snapshot.archetype.id().to_string(),
            x: snapshot.x,
            y: snapshot.y,
            facing_right: snapshot.facing_right,
            state: match snapshot.stance {
                Stance::Idle => "idle",
                Stance::Attack => "attack",
                Stance::Special => "special",
            }
            .to_string(),
            hp: snapshot.hp,
            chakra: snapshot.chakra,
            blocking: snapshot.blocking,
            invincible: snapshot.invincible_ticks,
            healing: snapshot.healing_ticks,
            projectiles: snapshot
                .projectiles
                .iter()
                .map(ProjectileStateDto::from)
                .collect(),
            decoys: snapshot.decoys.iter().map(DecoyStateDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectileStateDto {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub size: f32,
    pub color: String,
}

impl From<&ProjectileSnapshot> for ProjectileStateDto {
    fn from(p: &ProjectileSnapshot) -> Self {
        Self {
            x: p.x,
            y: p.y,
            vx: p.vx,
            size: p.size,
            color: p.color.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DecoyStateDto {
    pub x: f32,
    pub y: f32,
}

impl From<&DecoySnapshot> for DecoyStateDto {
    fn from(d: &DecoySnapshot) -> Self {
        Self { x: d.x, y: d.y }
    }
}
