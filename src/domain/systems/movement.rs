use crate::domain::input::InputFrame;
use crate::domain::state::FighterState;
use crate::domain::tuning::{ArenaTuning, FighterTuning};

/// Turns held movement keys into horizontal velocity, facing and jumps.
/// Velocity is recomputed from scratch every tick; when both directions are
/// held the right key wins because it is checked last.
pub fn apply_movement(
    f: &mut FighterState,
    input: &InputFrame,
    tuning: &FighterTuning,
    arena: &ArenaTuning,
) {
    f.vx = 0.0;
    if input.left && f.x > 0.0 {
        f.vx = -tuning.speed;
        f.facing_right = false;
    }
    if input.right && f.x < arena.width - f.width {
        f.vx = tuning.speed;
        f.facing_right = true;
    }
    if input.jump && f.y >= arena.ground_y {
        f.vy = tuning.jump_power;
    }
}

/// Integrates position, applies gravity and resolves ground contact.
pub fn integrate(f: &mut FighterState, tuning: &FighterTuning, arena: &ArenaTuning) {
    f.x += f.vx;
    f.y += f.vy;
    f.vy += tuning.gravity;
    if f.y >= arena.ground_y {
        f.y = arena.ground_y;
        f.vy = 0.0;
    }
}

pub fn clamp_bounds(f: &mut FighterState, arena: &ArenaTuning) {
    f.x = f.x.clamp(0.0, arena.width - f.width);
}
