use std::{env, time::Duration};

// Runtime constants (not gameplay tuning).

pub const INPUT_CHANNEL_CAPACITY: usize = 1024;
pub const FRAME_BROADCAST_CAPACITY: usize = 128;

// One simulation step per rendered frame at 60 Hz.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000 / 60);

// How often the headless frame logger emits a status line.
pub const FRAME_LOG_EVERY_TICKS: u64 = 60;

pub fn p1_archetype() -> String {
    env::var("P1_ARCHETYPE").unwrap_or_else(|_| "ronin".to_string())
}

pub fn p2_archetype() -> String {
    env::var("P2_ARCHETYPE").unwrap_or_else(|_| "tempest".to_string())
}
