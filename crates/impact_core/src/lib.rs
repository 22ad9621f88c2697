//! Impact core: selection policy, ticker shuffling and the carousel state machine.
mod config;
mod effect;
mod error;
mod impact;
mod msg;
pub mod selector;
pub mod shuffle;
mod state;
mod stats;
pub mod text;
mod update;
mod view_model;

pub use config::{
    DisplayConfig, SelectionMode, DEFAULT_AUTO_ADVANCE_INTERVAL, DEFAULT_TRANSITION_DURATION,
};
pub use effect::Effect;
pub use error::SelectError;
pub use impact::{Impact, ImpactId};
pub use msg::Msg;
pub use selector::{
    find_index_by_id, select_next_sequential, select_previous_sequential, select_random,
};
pub use shuffle::{build_endless_sequence, extend_endless_sequence, DEFAULT_PASS_COUNT};
pub use state::{AppState, Direction, LoadPhase, Notice, Selection};
pub use stats::{filter_by_entity, find_by_id, impact_stats, ImpactStats};
pub use update::{update, update_with_rng};
pub use view_model::{AppViewModel, ImpactView};
