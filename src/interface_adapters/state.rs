use std::sync::Arc;

use tokio::sync::{Notify, broadcast, mpsc, watch};

use crate::use_cases::types::{FrameUpdate, MatchEvent, MatchPhase};

/// Channel bundle an embedder holds to drive and observe one match.
#[derive(Clone)]
pub struct MatchHandle {
    // Key events flowing from the input boundary into the match loop.
    pub input_tx: mpsc::Sender<MatchEvent>,
    // Frame snapshots produced by the match loop (domain structs).
    pub frame_tx: broadcast::Sender<FrameUpdate>,
    // Serialized frames, shared across all render sinks.
    pub frame_bytes_tx: broadcast::Sender<Arc<str>>,
    // Latest serialized frame for late or lagging sinks.
    pub frame_latest_tx: watch::Sender<Arc<str>>,
    // High-level match phase (running/over).
    pub phase_rx: watch::Receiver<MatchPhase>,
    // Tears the match task down when notified.
    pub shutdown: Arc<Notify>,
}
