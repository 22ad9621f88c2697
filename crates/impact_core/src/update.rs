use rand::Rng;

use crate::selector::{self, find_index_by_id};
use crate::state::{Direction, Notice};
use crate::{AppState, Effect, Impact, Msg, SelectError, SelectionMode};

/// Pure update function: applies a message to state and returns any effects.
///
/// Randomness comes from the thread-local generator; use [`update_with_rng`]
/// to drive it deterministically.
pub fn update(state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    update_with_rng(state, msg, &mut rand::rng())
}

/// [`update`] with an explicit random source.
pub fn update_with_rng<R: Rng + ?Sized>(
    mut state: AppState,
    msg: Msg,
    rng: &mut R,
) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ImpactsLoaded(impacts) => {
            let overwrite_id = state.config().overwrite_id;
            let impacts = match overwrite_id {
                Some(id) => impacts
                    .into_iter()
                    .filter(|impact| impact.id == id)
                    .collect(),
                None => impacts,
            };
            state.set_loaded(impacts);

            if state.impacts().is_empty() {
                if let Some(id) = overwrite_id {
                    state.set_notice(Notice::MissingOverwrite { id });
                }
                return (state, vec![Effect::StopAutoAdvance]);
            }

            let config = state.config();
            let start = selector::initial_index(state.impacts(), config.mode, config.start_id, rng);
            let (index, notice) = match start {
                Ok(index) => (index, None),
                Err(SelectError::InvalidReference { id }) => (0, Some(Notice::UnknownStart { id })),
                Err(SelectError::EmptyCollection) => return (state, Vec::new()),
            };
            state.select_index(index);
            if let Some(notice) = notice {
                state.set_notice(notice);
            }
            vec![auto_advance_effect(&state)]
        }
        Msg::LoadFailed(reason) => {
            state.set_failed(reason);
            vec![Effect::StopAutoAdvance]
        }
        Msg::AutoAdvanceElapsed => {
            if state.auto_advance_active() {
                begin_transition(&mut state, Direction::Next)
            } else {
                Vec::new()
            }
        }
        Msg::NextPressed => begin_transition(&mut state, Direction::Next),
        Msg::PreviousPressed => begin_transition(&mut state, Direction::Previous),
        Msg::TransitionElapsed => match state.take_pending() {
            Some(direction) => {
                state.mark_dirty();
                match advance(&state, direction, rng) {
                    Ok(index) => {
                        state.select_index(index);
                        vec![auto_advance_effect(&state)]
                    }
                    // Unreachable while a selection exists; keep the display.
                    Err(_) => Vec::new(),
                }
            }
            None => Vec::new(),
        },
        Msg::JumpRequested(id) => {
            let can_jump = state.config().mode == SelectionMode::Sequential
                && state.selection().is_some()
                && !state.is_transitioning();
            if !can_jump {
                return (state, Vec::new());
            }
            match find_index_by_id(state.impacts(), id) {
                Ok(index) => {
                    state.select_index(index);
                    vec![auto_advance_effect(&state)]
                }
                Err(_) => {
                    state.set_notice(Notice::InvalidReference { id });
                    Vec::new()
                }
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Opens a transition window unless one is already open or nothing is shown.
fn begin_transition(state: &mut AppState, direction: Direction) -> Vec<Effect> {
    if state.selection().is_none() || state.is_transitioning() {
        return Vec::new();
    }
    state.begin_transition(direction);
    vec![Effect::BeginTransition {
        duration: state.config().transition_duration,
    }]
}

fn advance<R: Rng + ?Sized>(
    state: &AppState,
    direction: Direction,
    rng: &mut R,
) -> Result<usize, SelectError> {
    let impacts = state.impacts();
    let current = state.selection().ok_or(SelectError::EmptyCollection)?;
    match (state.config().mode, direction) {
        (SelectionMode::Sequential, Direction::Next) => {
            selector::select_next_sequential(impacts, current.index).map(|(_, index)| index)
        }
        (SelectionMode::Sequential, Direction::Previous) => {
            selector::select_previous_sequential(impacts, current.index).map(|(_, index)| index)
        }
        (SelectionMode::Random, _) => {
            let next: &Impact = selector::select_random(impacts, Some(&current.impact), rng)?;
            Ok(impacts
                .iter()
                .position(|impact| std::ptr::eq(impact, next))
                .unwrap_or(current.index))
        }
    }
}

fn auto_advance_effect(state: &AppState) -> Effect {
    if state.auto_advance_active() {
        Effect::RestartAutoAdvance {
            interval: state.config().auto_advance_interval,
        }
    } else {
        Effect::StopAutoAdvance
    }
}
