use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use impact_core::{Effect, Msg};
use impact_engine::{EngineEvent, EngineHandle, ImpactSource};
use impact_logging::{impact_debug, impact_info, impact_warn};

/// Executes core effects: loads through the engine, timers through threads.
///
/// Every timer reports back by sending a `Msg` into the app inbox.
pub struct EffectRunner {
    engine: EngineHandle,
    msg_tx: mpsc::Sender<Msg>,
    /// Bumped on every restart or stop; a sleeping timer only fires if its
    /// generation is still current when it wakes.
    auto_advance_generation: Arc<AtomicU64>,
}

impl EffectRunner {
    pub fn new(source: Arc<dyn ImpactSource>, msg_tx: mpsc::Sender<Msg>) -> Self {
        let engine = EngineHandle::new(source);
        let runner = Self {
            engine,
            msg_tx,
            auto_advance_generation: Arc::new(AtomicU64::new(0)),
        };
        runner.spawn_event_loop();
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadImpacts => {
                    impact_info!("LoadImpacts");
                    self.engine.load();
                }
                Effect::BeginTransition { duration } => {
                    let msg_tx = self.msg_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(duration);
                        let _ = msg_tx.send(Msg::TransitionElapsed);
                    });
                }
                Effect::RestartAutoAdvance { interval } => {
                    let generation =
                        self.auto_advance_generation.fetch_add(1, Ordering::SeqCst) + 1;
                    impact_debug!(
                        "RestartAutoAdvance interval_ms={} generation={}",
                        interval.as_millis(),
                        generation
                    );
                    self.spawn_auto_advance(interval, generation);
                }
                Effect::StopAutoAdvance => {
                    self.auto_advance_generation.fetch_add(1, Ordering::SeqCst);
                    impact_debug!("StopAutoAdvance");
                }
            }
        }
    }

    fn spawn_auto_advance(&self, interval: Duration, generation: u64) {
        let current = self.auto_advance_generation.clone();
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || {
            thread::sleep(interval);
            if current.load(Ordering::SeqCst) == generation {
                let _ = msg_tx.send(Msg::AutoAdvanceElapsed);
            }
        });
    }

    fn spawn_event_loop(&self) {
        let engine = self.engine.clone();
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let msg = match event {
                    EngineEvent::Loaded { source, impacts } => {
                        impact_info!("Loaded {} impacts from {}", impacts.len(), source);
                        Msg::ImpactsLoaded(impacts)
                    }
                    EngineEvent::LoadFailed { source, error } => {
                        impact_warn!("Load from {} failed: {}", source, error);
                        Msg::LoadFailed(error.to_string())
                    }
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}
