use tracing::info;

use crate::domain::state::{FighterState, Hit};
use crate::domain::tuning::{ArenaTuning, FighterTuning};

/// Advances the fighter's live projectiles, resolves hits against the
/// opponent's collision footprint and drops spent or out-of-bounds bolts.
/// A bolt that overlaps a blocking or warded opponent flies straight through.
pub fn tick_projectiles(
    f: &mut FighterState,
    opponent: &mut FighterState,
    tuning: &FighterTuning,
    arena: &ArenaTuning,
) {
    for bolt in f.projectiles.iter_mut() {
        bolt.x += bolt.vx;
        bolt.y += bolt.vy;

        let in_footprint = (bolt.x - opponent.center_x()).abs() < opponent.width / 2.0
            && (bolt.y - opponent.center_y()).abs() < opponent.height / 2.0;

        if in_footprint && opponent.vulnerable() {
            let push = if bolt.vx > 0.0 {
                tuning.bolt_knockback
            } else {
                -tuning.bolt_knockback
            };
            opponent.apply_hit(Hit {
                damage: bolt.damage,
                push_x: Some(push),
                push_y: None,
            });
            info!(
                owner = %f.side,
                victim = %opponent.side,
                damage = bolt.damage,
                victim_hp = opponent.hp,
                "bolt hit"
            );
            bolt.spent = true;
        }
    }

    f.projectiles
        .retain(|b| !b.spent && b.x > arena.projectile_min_x() && b.x < arena.projectile_max_x());
}
