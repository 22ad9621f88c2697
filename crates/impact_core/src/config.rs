use std::time::Duration;

use crate::shuffle::DEFAULT_PASS_COUNT;
use crate::ImpactId;

pub const DEFAULT_AUTO_ADVANCE_INTERVAL: Duration = Duration::from_secs(10);
pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Follow list order, wrapping at both ends.
    #[default]
    Sequential,
    /// Draw uniformly, avoiding the current text and entity.
    Random,
}

/// Display settings handed to the state machine at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub mode: SelectionMode,
    pub auto_advance_interval: Duration,
    /// Delay between an advance trigger and the selection change.
    pub transition_duration: Duration,
    /// Pin the display to this single impact and disable auto-advance.
    pub overwrite_id: Option<ImpactId>,
    /// First impact shown in sequential mode.
    pub start_id: Option<ImpactId>,
    /// Number of shuffled passes concatenated for the ticker.
    pub ticker_passes: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: SelectionMode::default(),
            auto_advance_interval: DEFAULT_AUTO_ADVANCE_INTERVAL,
            transition_duration: DEFAULT_TRANSITION_DURATION,
            overwrite_id: None,
            start_id: None,
            ticker_passes: DEFAULT_PASS_COUNT,
        }
    }
}
