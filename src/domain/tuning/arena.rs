#[derive(Debug, Clone, Copy)]
pub struct ArenaTuning {
    pub width: f32,
    pub height: f32,
    /// Resting vertical coordinate for a grounded fighter.
    pub ground_y: f32,
    /// How far past the side walls a projectile may fly before despawning.
    pub projectile_margin: f32,
    pub left_spawn_x: f32,
    pub right_spawn_x: f32,
}

impl ArenaTuning {
    pub fn projectile_min_x(&self) -> f32 {
        -self.projectile_margin
    }

    pub fn projectile_max_x(&self) -> f32 {
        self.width + self.projectile_margin
    }
}

impl Default for ArenaTuning {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 600.0,
            ground_y: 400.0,
            projectile_margin: 50.0,
            left_spawn_x: 100.0,
            right_spawn_x: 1000.0,
        }
    }
}
