use tracing::{debug, info};

use crate::domain::archetype::{SpecialKind, UltimateKind};
use crate::domain::input::InputFrame;
use crate::domain::state::{Decoy, FighterState, Hit, Projectile, Stance};
use crate::domain::tuning::FighterTuning;

/// Holding block re-arms the short cover window every tick; it never stacks.
pub fn tick_block(f: &mut FighterState, input: &InputFrame, tuning: &FighterTuning) {
    if input.block {
        f.cooldowns.block = tuning.block_window;
    }
}

/// Basic melee swing. Swinging always spends the cooldown; damage lands only
/// inside melee range against a vulnerable opponent.
pub fn tick_melee(
    f: &mut FighterState,
    opponent: &mut FighterState,
    input: &InputFrame,
    tuning: &FighterTuning,
) {
    if !input.attack || !f.cooldowns.attack_ready() {
        return;
    }
    f.stance = Stance::Attack;
    f.cooldowns.attack = tuning.attack_cooldown;

    let gap = (f.x - opponent.x).abs();
    if gap < tuning.melee_range && opponent.vulnerable() {
        let push = if f.facing_right {
            tuning.melee_knockback
        } else {
            -tuning.melee_knockback
        };
        opponent.apply_hit(Hit {
            damage: tuning.melee_damage,
            push_x: Some(push),
            push_y: None,
        });
        info!(
            attacker = %f.side,
            victim = %opponent.side,
            damage = tuning.melee_damage,
            victim_hp = opponent.hp,
            "melee hit"
        );
    }
}

/// Special ability: gated on its cooldown and a chakra cost, spent up front
/// even when the effect whiffs.
pub fn tick_special(
    f: &mut FighterState,
    opponent: &mut FighterState,
    input: &InputFrame,
    tuning: &FighterTuning,
) {
    if !input.special || !f.cooldowns.special_ready() || f.chakra < tuning.special_cost {
        return;
    }
    f.stance = Stance::Special;
    f.cooldowns.special = tuning.special_cooldown;
    f.chakra -= tuning.special_cost;

    match f.archetype.special() {
        SpecialKind::Bolt(spec) => {
            let origin_x = if f.facing_right { f.x + f.width } else { f.x };
            let vx = if f.facing_right { spec.speed } else { -spec.speed };
            f.projectiles.push(Projectile {
                x: origin_x,
                y: f.y + tuning.cast_height,
                vx,
                vy: 0.0,
                size: spec.size,
                color: spec.color,
                damage: spec.damage,
                spent: false,
            });
            debug!(caster = %f.side, damage = spec.damage, "bolt launched");
        }
        SpecialKind::Burst {
            range,
            damage,
            knockback,
            launch,
        } => {
            let gap = (f.x - opponent.x).abs();
            if gap < range && opponent.vulnerable() {
                let push = if f.facing_right { knockback } else { -knockback };
                opponent.apply_hit(Hit {
                    damage,
                    push_x: Some(push),
                    push_y: Some(launch),
                });
                info!(
                    attacker = %f.side,
                    victim = %opponent.side,
                    damage,
                    victim_hp = opponent.hp,
                    "burst hit"
                );
            }
        }
    }
}

/// Ultimate ability: same shape as the special with a larger cost and
/// cooldown. Leaves the stance untouched.
pub fn tick_ultimate(
    f: &mut FighterState,
    opponent: &mut FighterState,
    input: &InputFrame,
    tuning: &FighterTuning,
) {
    if !input.ultimate || !f.cooldowns.ultimate_ready() || f.chakra < tuning.ultimate_cost {
        return;
    }
    f.cooldowns.ultimate = tuning.ultimate_cooldown;
    f.chakra -= tuning.ultimate_cost;

    match f.archetype.ultimate() {
        UltimateKind::Decoys { count, spread, life } => {
            for i in 0..count {
                f.decoys.push(Decoy {
                    x: f.x + (i as f32 - 1.0) * spread,
                    y: f.y,
                    life,
                });
            }
            debug!(caster = %f.side, count, "decoys deployed");
        }
        UltimateKind::Smite { damage, ward } => {
            // Ignores block; only an existing ward stops it. The struck
            // fighter walks away with the mercy window, not the caster.
            if !opponent.cooldowns.warded() {
                opponent.apply_hit(Hit {
                    damage,
                    push_x: None,
                    push_y: None,
                });
                opponent.grant_invincibility(ward);
                info!(
                    attacker = %f.side,
                    victim = %opponent.side,
                    damage,
                    victim_hp = opponent.hp,
                    "smite hit"
                );
            }
        }
        UltimateKind::Mend { heal, aura } => {
            f.cooldowns.healing = aura;
            f.hp = (f.hp + heal).min(tuning.max_hp);
            debug!(caster = %f.side, hp = f.hp, "mend cast");
        }
    }
}

/// Decoys burn one tick of life and vanish at zero.
pub fn tick_decoys(f: &mut FighterState) {
    for decoy in f.decoys.iter_mut() {
        decoy.life = decoy.life.saturating_sub(1);
    }
    f.decoys.retain(|d| d.life > 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::archetype::Archetype;
    use crate::domain::state::Side;
    use crate::domain::tuning::ArenaTuning;

    fn pair_at(gap: f32, left: Archetype, right: Archetype) -> (FighterState, FighterState) {
        let tuning = FighterTuning::default();
        let arena = ArenaTuning::default();
        (
            FighterState::spawn(Side::P1, left, 300.0, true, &tuning, &arena),
            FighterState::spawn(Side::P2, right, 300.0 + gap, false, &tuning, &arena),
        )
    }

    fn held(action: fn(&mut InputFrame)) -> InputFrame {
        let mut input = InputFrame::default();
        action(&mut input);
        input
    }

    #[test]
    fn when_block_is_held_then_the_window_is_rearmed_not_stacked() {
        let tuning = FighterTuning::default();
        let (mut f, _) = pair_at(500.0, Archetype::Ronin, Archetype::Tempest);
        let input = held(|i| i.block = true);

        tick_block(&mut f, &input, &tuning);
        assert_eq!(f.cooldowns.block, tuning.block_window);
        tick_block(&mut f, &input, &tuning);
        assert_eq!(f.cooldowns.block, tuning.block_window);
    }

    #[test]
    fn when_opponent_is_just_inside_melee_range_then_damage_and_knockback_land() {
        let tuning = FighterTuning::default();
        let (mut f, mut opp) = pair_at(79.0, Archetype::Ronin, Archetype::Tempest);
        let input = held(|i| i.attack = true);

        tick_melee(&mut f, &mut opp, &input, &tuning);
        assert_eq!(f.stance, Stance::Attack);
        assert_eq!(f.cooldowns.attack, tuning.attack_cooldown);
        assert_eq!(opp.hp, 95);
        assert_eq!(opp.vx, tuning.melee_knockback);
    }

    #[test]
    fn when_opponent_is_just_outside_melee_range_then_the_swing_whiffs() {
        let tuning = FighterTuning::default();
        let (mut f, mut opp) = pair_at(81.0, Archetype::Ronin, Archetype::Tempest);
        let input = held(|i| i.attack = true);

        tick_melee(&mut f, &mut opp, &input, &tuning);
        // The swing still spends its cooldown.
        assert_eq!(f.cooldowns.attack, tuning.attack_cooldown);
        assert_eq!(opp.hp, 100);
        assert_eq!(opp.vx, 0.0);
    }

    #[test]
    fn when_opponent_blocks_then_melee_deals_nothing() {
        let tuning = FighterTuning::default();
        let (mut f, mut opp) = pair_at(40.0, Archetype::Ronin, Archetype::Tempest);
        opp.cooldowns.block = 5;
        let input = held(|i| i.attack = true);

        tick_melee(&mut f, &mut opp, &input, &tuning);
        assert_eq!(opp.hp, 100);
    }

    #[test]
    fn when_chakra_is_one_short_then_special_is_a_silent_no_op() {
        let tuning = FighterTuning::default();
        let (mut f, mut opp) = pair_at(500.0, Archetype::Ronin, Archetype::Tempest);
        f.chakra = 29.0;
        let input = held(|i| i.special = true);

        tick_special(&mut f, &mut opp, &input, &tuning);
        assert_eq!(f.stance, Stance::Idle);
        assert_eq!(f.chakra, 29.0);
        assert_eq!(f.cooldowns.special, 0);
        assert!(f.projectiles.is_empty());
    }

    #[test]
    fn when_chakra_exactly_covers_the_cost_then_special_fires_and_drains_it() {
        let tuning = FighterTuning::default();
        let (mut f, mut opp) = pair_at(500.0, Archetype::Ronin, Archetype::Tempest);
        f.chakra = 30.0;
        let input = held(|i| i.special = true);

        tick_special(&mut f, &mut opp, &input, &tuning);
        assert_eq!(f.stance, Stance::Special);
        assert_eq!(f.chakra, 0.0);
        assert_eq!(f.cooldowns.special, tuning.special_cooldown);
        assert_eq!(f.projectiles.len(), 1);
    }

    #[test]
    fn when_a_bolt_is_cast_then_it_spawns_at_the_leading_edge() {
        let tuning = FighterTuning::default();
        let (mut f, mut opp) = pair_at(500.0, Archetype::Tempest, Archetype::Ronin);
        let input = held(|i| i.special = true);

        tick_special(&mut f, &mut opp, &input, &tuning);
        let bolt = &f.projectiles[0];
        assert_eq!(bolt.x, f.x + f.width);
        assert_eq!(bolt.y, f.y + tuning.cast_height);
        assert_eq!(bolt.vx, 12.0);
        assert_eq!(bolt.damage, 20);

        // Facing the other way launches from the trailing edge, mirrored.
        f.facing_right = false;
        f.cooldowns.special = 0;
        f.chakra = 100.0;
        tick_special(&mut f, &mut opp, &input, &tuning);
        let bolt = &f.projectiles[1];
        assert_eq!(bolt.x, f.x);
        assert_eq!(bolt.vx, -12.0);
    }

    #[test]
    fn when_a_burst_connects_then_the_opponent_is_launched() {
        let tuning = FighterTuning::default();
        let (mut f, mut opp) = pair_at(99.0, Archetype::Warden, Archetype::Ronin);
        let input = held(|i| i.special = true);

        tick_special(&mut f, &mut opp, &input, &tuning);
        assert_eq!(opp.hp, 75);
        assert_eq!(opp.vx, 15.0);
        assert_eq!(opp.vy, -10.0);
        assert!(f.projectiles.is_empty());
    }

    #[test]
    fn when_a_burst_whiffs_then_chakra_and_cooldown_are_still_spent() {
        let tuning = FighterTuning::default();
        let (mut f, mut opp) = pair_at(101.0, Archetype::Warden, Archetype::Ronin);
        let input = held(|i| i.special = true);

        tick_special(&mut f, &mut opp, &input, &tuning);
        assert_eq!(opp.hp, 100);
        assert_eq!(f.chakra, 70.0);
        assert_eq!(f.cooldowns.special, tuning.special_cooldown);
    }

    #[test]
    fn when_decoys_deploy_then_three_fan_out_around_the_caster() {
        let tuning = FighterTuning::default();
        let (mut f, mut opp) = pair_at(500.0, Archetype::Ronin, Archetype::Tempest);
        let input = held(|i| i.ultimate = true);

        tick_ultimate(&mut f, &mut opp, &input, &tuning);
        assert_eq!(f.chakra, 50.0);
        assert_eq!(f.cooldowns.ultimate, tuning.ultimate_cooldown);
        let xs: Vec<f32> = f.decoys.iter().map(|d| d.x).collect();
        assert_eq!(xs, vec![f.x - 80.0, f.x, f.x + 80.0]);
        assert!(f.decoys.iter().all(|d| d.life == 60));
    }

    #[test]
    fn when_decoys_burn_out_then_they_are_removed() {
        let tuning = FighterTuning::default();
        let (mut f, mut opp) = pair_at(500.0, Archetype::Ronin, Archetype::Tempest);
        tick_ultimate(&mut f, &mut opp, &held(|i| i.ultimate = true), &tuning);

        for _ in 0..59 {
            tick_decoys(&mut f);
        }
        assert_eq!(f.decoys.len(), 3);
        tick_decoys(&mut f);
        assert!(f.decoys.is_empty());
    }

    #[test]
    fn when_smite_lands_then_the_victim_gains_the_mercy_window() {
        let tuning = FighterTuning::default();
        let (mut f, mut opp) = pair_at(500.0, Archetype::Tempest, Archetype::Ronin);
        let input = held(|i| i.ultimate = true);

        tick_ultimate(&mut f, &mut opp, &input, &tuning);
        assert_eq!(opp.hp, 70);
        assert_eq!(opp.cooldowns.invincible, 60);
        // The caster stays fully exposed.
        assert_eq!(f.cooldowns.invincible, 0);
        assert_eq!(f.chakra, 50.0);
    }

    #[test]
    fn when_the_victim_blocks_then_smite_still_lands() {
        let tuning = FighterTuning::default();
        let (mut f, mut opp) = pair_at(500.0, Archetype::Tempest, Archetype::Ronin);
        opp.cooldowns.block = 5;

        tick_ultimate(&mut f, &mut opp, &held(|i| i.ultimate = true), &tuning);
        assert_eq!(opp.hp, 70);
    }

    #[test]
    fn when_the_victim_is_already_warded_then_smite_fizzles_but_is_paid_for() {
        let tuning = FighterTuning::default();
        let (mut f, mut opp) = pair_at(500.0, Archetype::Tempest, Archetype::Ronin);
        opp.grant_invincibility(30);

        tick_ultimate(&mut f, &mut opp, &held(|i| i.ultimate = true), &tuning);
        assert_eq!(opp.hp, 100);
        assert_eq!(opp.cooldowns.invincible, 30);
        assert_eq!(f.chakra, 50.0);
        assert_eq!(f.cooldowns.ultimate, tuning.ultimate_cooldown);
    }

    #[test]
    fn when_mend_is_cast_then_it_heals_up_front_and_starts_the_aura() {
        let tuning = FighterTuning::default();
        let (mut f, mut opp) = pair_at(500.0, Archetype::Warden, Archetype::Ronin);
        f.hp = 40;

        tick_ultimate(&mut f, &mut opp, &held(|i| i.ultimate = true), &tuning);
        assert_eq!(f.hp, 70);
        assert_eq!(f.cooldowns.healing, 100);
    }

    #[test]
    fn when_mend_would_overheal_then_hp_caps_at_the_maximum() {
        let tuning = FighterTuning::default();
        let (mut f, mut opp) = pair_at(500.0, Archetype::Warden, Archetype::Ronin);
        f.hp = 90;

        tick_ultimate(&mut f, &mut opp, &held(|i| i.ultimate = true), &tuning);
        assert_eq!(f.hp, 100);
    }

    #[test]
    fn when_chakra_is_below_the_ultimate_cost_then_nothing_happens() {
        let tuning = FighterTuning::default();
        let (mut f, mut opp) = pair_at(500.0, Archetype::Tempest, Archetype::Ronin);
        f.chakra = 49.0;

        tick_ultimate(&mut f, &mut opp, &held(|i| i.ultimate = true), &tuning);
        assert_eq!(opp.hp, 100);
        assert_eq!(f.chakra, 49.0);
        assert_eq!(f.cooldowns.ultimate, 0);
    }
}
