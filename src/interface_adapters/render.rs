// Render-sink boundary: serialization and the headless logging sink.

use std::sync::Arc;

use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

use crate::interface_adapters::protocol::{FrameDto, RenderMessage};
use crate::use_cases::types::{FrameUpdate, MatchPhase};

/// Serializes each frame once and broadcasts the shared bytes to every
/// attached sink, keeping the most recent frame in a watch slot for lag
/// recovery.
pub async fn frame_serializer(
    mut frame_rx: broadcast::Receiver<FrameUpdate>,
    frame_bytes_tx: broadcast::Sender<Arc<str>>,
    frame_latest_tx: watch::Sender<Arc<str>>,
) {
    loop {
        match frame_rx.recv().await {
            Ok(update) => {
                let msg = RenderMessage::Frame(FrameDto::from(&update));
                let txt = match serde_json::to_string(&msg) {
                    Ok(txt) => txt,
                    Err(e) => {
                        error!(error = ?e, "failed to serialize frame");
                        continue;
                    }
                };

                let bytes: Arc<str> = Arc::from(txt);
                let _ = frame_latest_tx.send(bytes.clone());
                let _ = frame_bytes_tx.send(bytes);
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!(missed = n, "frame serializer lagged; skipping to latest frame");
            }
            Err(broadcast::error::RecvError::Closed) => {
                warn!("frame channel closed; serializer exiting");
                break;
            }
        }
    }
}

/// Headless render sink: logs phase transitions and a periodic status line.
/// Consumes snapshots only; never touches simulation state.
pub async fn frame_logger(mut frame_rx: broadcast::Receiver<FrameUpdate>, every_ticks: u64) {
    let mut last_phase: Option<MatchPhase> = None;
    loop {
        match frame_rx.recv().await {
            Ok(frame) => {
                if last_phase != Some(frame.phase) {
                    match frame.phase {
                        MatchPhase::Running => info!(tick = frame.tick, "match running"),
                        MatchPhase::Over { winner } => {
                            info!(tick = frame.tick, winner = %winner, "match over")
                        }
                    }
                    last_phase = Some(frame.phase);
                }
                if frame.tick % every_ticks == 0 {
                    let [p1, p2] = &frame.fighters;
                    info!(
                        tick = frame.tick,
                        p1_hp = p1.hp,
                        p1_chakra = p1.chakra,
                        p2_hp = p2.hp,
                        p2_chakra = p2.chakra,
                        "frame"
                    );
                }
            }
            Err(broadcast::error::RecvError::Lagged(_)) => continue,
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
