#[derive(Debug, Clone, Copy)]
pub struct FighterTuning {
    pub speed: f32,
    pub jump_power: f32,
    pub gravity: f32,
    pub width: f32,
    pub height: f32,
    pub max_hp: i32,
    pub max_chakra: f32,
    /// Passive chakra gain per tick while below the cap.
    pub chakra_regen: f32,
    pub melee_range: f32,
    pub melee_damage: i32,
    pub melee_knockback: f32,
    pub attack_cooldown: u32,
    /// Ticks of cover re-armed every tick the block key is held.
    pub block_window: u32,
    pub special_cooldown: u32,
    pub special_cost: f32,
    pub ultimate_cooldown: u32,
    pub ultimate_cost: f32,
    /// Height above the fighter origin where projectiles spawn and fly.
    pub cast_height: f32,
    /// Horizontal shove applied by a connecting projectile.
    pub bolt_knockback: f32,
}

impl Default for FighterTuning {
    fn default() -> Self {
        Self {
            speed: 5.0,
            jump_power: -15.0,
            gravity: 0.8,
            width: 60.0,
            height: 100.0,
            max_hp: 100,
            max_chakra: 100.0,
            chakra_regen: 0.1,
            melee_range: 80.0,
            melee_damage: 5,
            melee_knockback: 10.0,
            attack_cooldown: 30,
            block_window: 5,
            special_cooldown: 60,
            special_cost: 30.0,
            ultimate_cooldown: 180,
            ultimate_cost: 50.0,
            cast_height: 40.0,
            bolt_knockback: 8.0,
        }
    }
}
