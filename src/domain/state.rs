// Domain-level simulation entities and snapshot types.

use std::fmt;

use crate::domain::archetype::Archetype;
use crate::domain::tuning::{ArenaTuning, FighterTuning};

/// Which player slot a fighter occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    P1,
    P2,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::P1 => f.write_str("p1"),
            Side::P2 => f.write_str("p2"),
        }
    }
}

/// Animation discriminator shown by render sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stance {
    Idle,
    Attack,
    Special,
}

/// Every per-fighter timer, decremented once per tick until zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cooldowns {
    pub attack: u32,
    pub special: u32,
    pub ultimate: u32,
    pub block: u32,
    pub healing: u32,
    pub invincible: u32,
}

impl Cooldowns {
    /// Advances all timers one tick. Returns true when the healing aura
    /// pulses this tick (every tenth tick of its countdown, including the
    /// final one).
    pub fn tick(&mut self) -> bool {
        self.attack = self.attack.saturating_sub(1);
        self.special = self.special.saturating_sub(1);
        self.ultimate = self.ultimate.saturating_sub(1);
        self.block = self.block.saturating_sub(1);
        let mut heal_pulse = false;
        if self.healing > 0 {
            self.healing -= 1;
            heal_pulse = self.healing % 10 == 0;
        }
        self.invincible = self.invincible.saturating_sub(1);
        heal_pulse
    }

    pub fn attack_ready(&self) -> bool {
        self.attack == 0
    }

    pub fn special_ready(&self) -> bool {
        self.special == 0
    }

    pub fn ultimate_ready(&self) -> bool {
        self.ultimate == 0
    }

    pub fn blocking(&self) -> bool {
        self.block > 0
    }

    pub fn warded(&self) -> bool {
        self.invincible > 0
    }

    /// The stance-reset condition: attack, special and block all elapsed.
    /// Ultimate and status timers do not hold a stance.
    pub fn idle(&self) -> bool {
        self.attack == 0 && self.special == 0 && self.block == 0
    }
}

/// A live special projectile owned by the fighter that launched it.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub color: &'static str,
    pub damage: i32,
    // Set on the first registered hit so the retention pass removes it.
    pub spent: bool,
}

/// Cosmetic decoy with a finite lifespan and no collision.
#[derive(Debug, Clone)]
pub struct Decoy {
    pub x: f32,
    pub y: f32,
    pub life: u32,
}

/// Damage plus the velocity it imparts, applied through the explicit
/// target-mutation API rather than by the attacker reaching into the
/// opponent's fields.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub damage: i32,
    pub push_x: Option<f32>,
    pub push_y: Option<f32>,
}

pub struct FighterState {
    pub side: Side,
    pub archetype: Archetype,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub width: f32,
    pub height: f32,
    pub hp: i32,
    pub chakra: f32,
    pub facing_right: bool,
    pub stance: Stance,
    pub cooldowns: Cooldowns,
    pub projectiles: Vec<Projectile>,
    pub decoys: Vec<Decoy>,
}

impl FighterState {
    pub fn spawn(
        side: Side,
        archetype: Archetype,
        x: f32,
        facing_right: bool,
        tuning: &FighterTuning,
        arena: &ArenaTuning,
    ) -> Self {
        Self {
            side,
            archetype,
            x,
            y: arena.ground_y,
            vx: 0.0,
            vy: 0.0,
            width: tuning.width,
            height: tuning.height,
            hp: tuning.max_hp,
            chakra: tuning.max_chakra,
            facing_right,
            stance: Stance::Idle,
            cooldowns: Cooldowns::default(),
            projectiles: Vec::new(),
            decoys: Vec::new(),
        }
    }

    /// Timer decay and stance reset. Runs before anything else in a tick.
    pub fn begin_tick(&mut self, tuning: &FighterTuning) {
        if self.cooldowns.tick() {
            self.hp = (self.hp + 1).min(tuning.max_hp);
        }
        if self.cooldowns.idle() {
            self.stance = Stance::Idle;
        }
    }

    /// True when incoming damage lands: neither blocking nor warded.
    pub fn vulnerable(&self) -> bool {
        !self.cooldowns.blocking() && !self.cooldowns.warded()
    }

    pub fn apply_hit(&mut self, hit: Hit) {
        self.hp = (self.hp - hit.damage).max(0);
        if let Some(px) = hit.push_x {
            self.vx = px;
        }
        if let Some(py) = hit.push_y {
            self.vy = py;
        }
    }

    pub fn grant_invincibility(&mut self, ticks: u32) {
        self.cooldowns.invincible = ticks;
    }

    pub fn regen_chakra(&mut self, tuning: &FighterTuning) {
        if self.chakra < tuning.max_chakra {
            self.chakra = (self.chakra + tuning.chakra_regen).min(tuning.max_chakra);
        }
    }

    pub fn alive(&self) -> bool {
        self.hp > 0
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

#[derive(Debug, Clone)]
pub struct FighterSnapshot {
    pub side: Side,
    pub archetype: Archetype,
    pub x: f32,
    pub y: f32,
    pub facing_right: bool,
    pub stance: Stance,
    pub hp: i32,
    pub chakra: f32,
    pub blocking: bool,
    pub invincible_ticks: u32,
    pub healing_ticks: u32,
    pub projectiles: Vec<ProjectileSnapshot>,
    pub decoys: Vec<DecoySnapshot>,
}

#[derive(Debug, Clone)]
pub struct ProjectileSnapshot {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub size: f32,
    pub color: &'static str,
}

#[derive(Debug, Clone)]
pub struct DecoySnapshot {
    pub x: f32,
    pub y: f32,
}

impl From<&FighterState> for FighterSnapshot {
    fn from(f: &FighterState) -> Self {
        Self {
            side: f.side,
            archetype: f.archetype,
            x: f.x,
            y: f.y,
            facing_right: f.facing_right,
            stance: f.stance,
            hp: f.hp,
            chakra: f.chakra,
            blocking: f.cooldowns.blocking(),
            invincible_ticks: f.cooldowns.invincible,
            healing_ticks: f.cooldowns.healing,
            projectiles: f.projectiles.iter().map(ProjectileSnapshot::from).collect(),
            decoys: f.decoys.iter().map(DecoySnapshot::from).collect(),
        }
    }
}

impl From<&Projectile> for ProjectileSnapshot {
    fn from(p: &Projectile) -> Self {
        Self {
            x: p.x,
            y: p.y,
            vx: p.vx,
            size: p.size,
            color: p.color,
        }
    }
}

impl From<&Decoy> for DecoySnapshot {
    fn from(d: &Decoy) -> Self {
        Self { x: d.x, y: d.y }
    }
}
