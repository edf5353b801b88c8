// Framework bootstrap for the match runtime.

use std::io::Result;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, broadcast, mpsc, watch};
use tracing::info;

use crate::frameworks::config;
use crate::interface_adapters::protocol::RosterDto;
use crate::interface_adapters::render::{frame_logger, frame_serializer};
use crate::interface_adapters::state::MatchHandle;
use crate::use_cases::match_loop::match_task;
use crate::use_cases::types::{FrameUpdate, MatchEvent, MatchPhase, MatchSetup};

/// Shared configuration for spawning match runtimes.
#[derive(Debug, Clone)]
pub struct MatchSettings {
    /// Capacity for inbound key events.
    pub input_channel_capacity: usize,
    /// Capacity for broadcast frame updates.
    pub frame_broadcast_capacity: usize,
    /// Fixed tick interval for the match loop.
    pub tick_interval: Duration,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            input_channel_capacity: config::INPUT_CHANNEL_CAPACITY,
            frame_broadcast_capacity: config::FRAME_BROADCAST_CAPACITY,
            tick_interval: config::TICK_INTERVAL,
        }
    }
}

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Wires channels and spawns the match task plus the frame serializer.
/// Must be called from within a tokio runtime.
pub fn start_match(setup: MatchSetup, settings: MatchSettings) -> MatchHandle {
    let (input_tx, input_rx) = mpsc::channel::<MatchEvent>(settings.input_channel_capacity);
    let (frame_tx, _frame_rx) =
        broadcast::channel::<FrameUpdate>(settings.frame_broadcast_capacity);
    let (frame_bytes_tx, _frame_bytes_rx) =
        broadcast::channel::<Arc<str>>(settings.frame_broadcast_capacity);
    let (frame_latest_tx, _frame_latest_rx) = watch::channel::<Arc<str>>(Arc::from(""));
    let (phase_tx, phase_rx) = watch::channel::<MatchPhase>(MatchPhase::Running);
    let shutdown = Arc::new(Notify::new());

    // Spawn the authoritative match loop.
    tokio::spawn(match_task(
        input_rx,
        frame_tx.clone(),
        phase_tx,
        settings.tick_interval,
        shutdown.clone(),
        setup,
    ));

    // Spawn the frame serializer in the adapter layer.
    tokio::spawn(frame_serializer(
        frame_tx.subscribe(),
        frame_bytes_tx.clone(),
        frame_latest_tx.clone(),
    ));

    MatchHandle {
        input_tx,
        frame_tx,
        frame_bytes_tx,
        frame_latest_tx,
        phase_rx,
        shutdown,
    }
}

/// Binary entry point: select fighters from the environment, start the
/// runtime and serve frames to the logging sink until interrupted.
pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let setup = MatchSetup::with_default_controls(&config::p1_archetype(), &config::p2_archetype())
        .map_err(|e| std::io::Error::other(format!("invalid match setup: {e}")))?;

    for entry in RosterDto::from(&setup).fighters {
        info!(
            side = %entry.side,
            archetype = %entry.archetype,
            special = %entry.special,
            ultimate = %entry.ultimate,
            "fighter selected"
        );
    }

    let handle = start_match(setup, MatchSettings::default());
    tokio::spawn(frame_logger(
        handle.frame_tx.subscribe(),
        config::FRAME_LOG_EVERY_TICKS,
    ));

    info!("match loop running; press ctrl-c to quit");
    tokio::signal::ctrl_c().await?;
    handle.shutdown.notify_one();
    Ok(())
}
