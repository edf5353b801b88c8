// Use-case level inputs/outputs for the match loop.

use std::fmt;

use crate::domain::archetype::{Archetype, UnknownArchetype};
use crate::domain::input::{BindingError, ControlBindings};
use crate::domain::state::{FighterSnapshot, Side};

/// Events flowing from the input boundary into the match task.
#[derive(Debug, Clone)]
pub enum MatchEvent {
    KeyDown { key: String },
    KeyUp { key: String },
    /// Rebuilds both fighters and re-enters Running. Held keys survive.
    Reset,
}

/// High-level match lifecycle. Over is terminal for the simulation; frames
/// keep broadcasting so sinks can render the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Running,
    Over { winner: Side },
}

/// Snapshot of both fighters for a given tick.
#[derive(Debug, Clone)]
pub struct FrameUpdate {
    pub tick: u64,
    pub phase: MatchPhase,
    pub fighters: [FighterSnapshot; 2],
}

/// One fighter's validated selection.
#[derive(Debug, Clone)]
pub struct FighterConfig {
    pub archetype: Archetype,
    pub controls: ControlBindings,
}

/// Both selections, checked before the match task may start.
#[derive(Debug, Clone)]
pub struct MatchSetup {
    pub fighters: [FighterConfig; 2],
}

impl MatchSetup {
    /// Validates archetype ids and control bindings. Every failure here is
    /// fatal to match setup; nothing is retried.
    pub fn new(
        p1_id: &str,
        p2_id: &str,
        p1_controls: ControlBindings,
        p2_controls: ControlBindings,
    ) -> Result<Self, SetupError> {
        let p1 = Archetype::lookup(p1_id)?;
        let p2 = Archetype::lookup(p2_id)?;
        p1_controls.validate()?;
        p2_controls.validate()?;
        ControlBindings::ensure_disjoint(&p1_controls, &p2_controls)?;
        Ok(Self {
            fighters: [
                FighterConfig {
                    archetype: p1,
                    controls: p1_controls,
                },
                FighterConfig {
                    archetype: p2,
                    controls: p2_controls,
                },
            ],
        })
    }

    pub fn with_default_controls(p1_id: &str, p2_id: &str) -> Result<Self, SetupError> {
        Self::new(
            p1_id,
            p2_id,
            ControlBindings::left_side_default(),
            ControlBindings::right_side_default(),
        )
    }
}

/// Selection-time errors surfaced before the loop spawns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    Archetype(UnknownArchetype),
    Controls(BindingError),
}

impl From<UnknownArchetype> for SetupError {
    fn from(e: UnknownArchetype) -> Self {
        SetupError::Archetype(e)
    }
}

impl From<BindingError> for SetupError {
    fn from(e: BindingError) -> Self {
        SetupError::Controls(e)
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Archetype(e) => e.fmt(f),
            SetupError::Controls(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for SetupError {}
