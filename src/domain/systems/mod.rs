// Per-tick fighter systems, applied in a fixed order.

pub mod abilities;
pub mod movement;
pub mod projectiles;

use crate::domain::input::InputFrame;
use crate::domain::state::FighterState;
use crate::domain::tuning::{ArenaTuning, FighterTuning};

/// Advances one fighter a single tick. The opponent is mutated only through
/// its hit/effect API, and only from inside these systems; the match loop is
/// the sole caller and never runs two steps concurrently.
pub fn step_fighter(
    fighter: &mut FighterState,
    opponent: &mut FighterState,
    input: &InputFrame,
    tuning: &FighterTuning,
    arena: &ArenaTuning,
) {
    fighter.begin_tick(tuning);
    movement::apply_movement(fighter, input, tuning, arena);
    abilities::tick_block(fighter, input, tuning);
    abilities::tick_melee(fighter, opponent, input, tuning);
    abilities::tick_special(fighter, opponent, input, tuning);
    abilities::tick_ultimate(fighter, opponent, input, tuning);
    projectiles::tick_projectiles(fighter, opponent, tuning, arena);
    abilities::tick_decoys(fighter);
    movement::integrate(fighter, tuning, arena);
    fighter.regen_chakra(tuning);
    movement::clamp_bounds(fighter, arena);
}
