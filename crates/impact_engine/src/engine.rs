use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use impact_core::Impact;
use impact_logging::{impact_error, impact_info, impact_warn};

use crate::{EngineEvent, FailureKind, ImpactSource, LoadError};

enum EngineCommand {
    Load,
}

/// Runs loads on a background thread and hands results back as events.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(source: Arc<dyn ImpactSource>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    impact_error!("Failed to start loader runtime: {}", err);
                    while cmd_rx.recv().is_ok() {
                        let _ = event_tx.send(EngineEvent::LoadFailed {
                            source: source.describe(),
                            error: LoadError::new(FailureKind::Io, err.to_string()),
                        });
                    }
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let event = runtime.block_on(handle_command(source.as_ref(), command));
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    /// Request a fresh load of the whole list.
    pub fn load(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Load);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(source: &dyn ImpactSource, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::Load => {
            let description = source.describe();
            impact_info!("Loading impacts from {}", description);
            match source.load().await {
                Ok(impacts) => EngineEvent::Loaded {
                    source: description,
                    impacts,
                },
                Err(error) => {
                    impact_warn!("Loading impacts from {} failed: {}", description, error);
                    EngineEvent::LoadFailed {
                        source: description,
                        error,
                    }
                }
            }
        }
    }
}

/// Load synchronously on a private runtime, for one-shot commands.
pub fn load_now(source: &dyn ImpactSource) -> Result<Vec<Impact>, LoadError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| LoadError::new(FailureKind::Io, err.to_string()))?;
    runtime.block_on(source.load())
}
