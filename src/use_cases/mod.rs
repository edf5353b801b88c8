// Use cases layer: application workflows for the match runtime.

pub mod match_loop;
pub mod types;

pub use types::{FighterConfig, FrameUpdate, MatchEvent, MatchPhase, MatchSetup, SetupError};
