use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use impact_core::{update, AppState, AppViewModel, DisplayConfig, Msg};
use impact_engine::ImpactSource;
use impact_logging::{impact_debug, impact_info};

use super::effects::EffectRunner;
use super::ui;
use super::ui::input::UserCommand;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Interactive carousel: one impact at a time until the user quits.
pub fn run_carousel(config: DisplayConfig, source: Arc<dyn ImpactSource>) -> anyhow::Result<()> {
    impact_info!(
        "Starting carousel from {} mode={:?} interval={:?}",
        source.describe(),
        config.mode,
        config.auto_advance_interval
    );

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let quit = Arc::new(AtomicBool::new(false));
    let runner = EffectRunner::new(source, msg_tx.clone());
    spawn_input_reader(msg_tx, quit.clone());

    let mut presenter = Presenter::default();
    let (mut state, effects) = AppState::boot(config);
    presenter.show(&state.view())?;
    runner.enqueue(effects);

    while !quit.load(Ordering::SeqCst) {
        match msg_rx.recv_timeout(POLL_INTERVAL) {
            Ok(msg) => {
                let (next, effects) = update(state, msg);
                state = next;
                runner.enqueue(effects);
                if state.consume_dirty() {
                    presenter.show(&state.view())?;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    impact_info!("Carousel stopped");
    Ok(())
}

fn spawn_input_reader(msg_tx: mpsc::Sender<Msg>, quit: Arc<AtomicBool>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            match ui::input::parse_command(&line) {
                Some(UserCommand::Send(msg)) => {
                    if msg_tx.send(msg).is_err() {
                        break;
                    }
                }
                Some(UserCommand::Quit) => {
                    quit.store(true, Ordering::SeqCst);
                    break;
                }
                None => impact_debug!("Ignoring input {:?}", line),
            }
        }
    });
}

/// Prints a view only when it differs from what is already on screen.
#[derive(Default)]
struct Presenter {
    last: Vec<String>,
}

impl Presenter {
    fn show(&mut self, view: &AppViewModel) -> anyhow::Result<()> {
        let lines = ui::render::render(view);
        if lines.is_empty() || lines == self.last {
            return Ok(());
        }

        let mut out = io::stdout().lock();
        writeln!(out).context("write to stdout")?;
        for line in &lines {
            writeln!(out, "{line}").context("write to stdout")?;
        }
        out.flush().context("flush stdout")?;
        self.last = lines;
        Ok(())
    }
}
