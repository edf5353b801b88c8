use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, broadcast, mpsc, watch};
use tracing::info;

use crate::domain::input::KeySampler;
use crate::domain::state::{FighterSnapshot, FighterState, Side};
use crate::domain::systems::step_fighter;
use crate::domain::tuning::{ArenaTuning, FighterTuning};
use crate::use_cases::types::{FrameUpdate, MatchEvent, MatchPhase, MatchSetup};

fn spawn_fighters(
    setup: &MatchSetup,
    tuning: &FighterTuning,
    arena: &ArenaTuning,
) -> [FighterState; 2] {
    [
        FighterState::spawn(
            Side::P1,
            setup.fighters[0].archetype,
            arena.left_spawn_x,
            true,
            tuning,
            arena,
        ),
        FighterState::spawn(
            Side::P2,
            setup.fighters[1].archetype,
            arena.right_spawn_x,
            false,
            tuning,
            arena,
        ),
    ]
}

/// Authoritative fixed-tick match loop.
///
/// Each tick: drain key events into the sampler, step fighter one then
/// fighter two (the second step sees whatever the first already did this
/// tick), evaluate the win condition and broadcast a frame. Once the phase
/// is Over the fighters are frozen but frames keep flowing so render sinks
/// can keep showing the result.
pub async fn match_task(
    mut input_rx: mpsc::Receiver<MatchEvent>,
    frame_tx: broadcast::Sender<FrameUpdate>,
    phase_tx: watch::Sender<MatchPhase>,
    tick_interval: Duration,
    shutdown: Arc<Notify>,
    setup: MatchSetup,
) {
    let tuning = FighterTuning::default();
    let arena = ArenaTuning::default();

    let mut fighters = spawn_fighters(&setup, &tuning, &arena);
    let mut sampler = KeySampler::default();
    let mut phase = MatchPhase::Running;
    let mut tick: u64 = 0;

    info!(
        p1 = setup.fighters[0].archetype.id(),
        p2 = setup.fighters[1].archetype.id(),
        "match started"
    );
    let _ = phase_tx.send(MatchPhase::Running);

    // Drive the fixed-step loop at the configured tick rate.
    let mut interval = tokio::time::interval(tick_interval);

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                // Exit cleanly when the embedder tears the match down.
                break;
            }
            _ = interval.tick() => {}
        }

        while let Ok(event) = input_rx.try_recv() {
            match event {
                MatchEvent::KeyDown { key } => sampler.press(&key),
                MatchEvent::KeyUp { key } => sampler.release(&key),
                MatchEvent::Reset => {
                    info!("match reset");
                    fighters = spawn_fighters(&setup, &tuning, &arena);
                    phase = MatchPhase::Running;
                    let _ = phase_tx.send(phase);
                }
            }
        }

        if phase == MatchPhase::Running {
            let p1_input = sampler.sample(&setup.fighters[0].controls);
            let p2_input = sampler.sample(&setup.fighters[1].controls);

            let (left, right) = fighters.split_at_mut(1);
            let p1 = &mut left[0];
            let p2 = &mut right[0];
            step_fighter(p1, p2, &p1_input, &tuning, &arena);
            step_fighter(p2, p1, &p2_input, &tuning, &arena);

            if !p1.alive() || !p2.alive() {
                // A double KO on the same tick goes to the second fighter.
                let winner = if p1.alive() { Side::P1 } else { Side::P2 };
                phase = MatchPhase::Over { winner };
                info!(winner = %winner, p1_hp = p1.hp, p2_hp = p2.hp, "match over");
                let _ = phase_tx.send(phase);
            }
        }

        tick += 1;
        let _ = frame_tx.send(FrameUpdate {
            tick,
            phase,
            fighters: [
                FighterSnapshot::from(&fighters[0]),
                FighterSnapshot::from(&fighters[1]),
            ],
        });
    }
}
