// Domain layer: core simulation types and rules.

pub mod archetype;
pub mod input;
pub mod state;
pub mod systems;
pub mod tuning;

pub use archetype::{Archetype, UnknownArchetype};
pub use input::{BindingError, ControlBindings, InputFrame, KeySampler};
pub use state::{
    DecoySnapshot, FighterSnapshot, FighterState, ProjectileSnapshot, Side, Stance,
};
