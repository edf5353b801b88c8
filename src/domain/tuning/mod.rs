// Gameplay tuning values, grouped by concern.

pub mod arena;
pub mod fighter;

pub use arena::ArenaTuning;
pub use fighter::FighterTuning;
