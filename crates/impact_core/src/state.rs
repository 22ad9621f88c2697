use crate::view_model::{AppViewModel, ImpactView};
use crate::{DisplayConfig, Effect, Impact, ImpactId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Non-fatal conditions surfaced to the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The configured overwrite id is not in the loaded list.
    MissingOverwrite { id: ImpactId },
    /// The configured start id is not in the loaded list; display started at 0.
    UnknownStart { id: ImpactId },
    /// A jump named an id that is not in the loaded list.
    InvalidReference { id: ImpactId },
}

/// The impact on screen and its position in the loaded list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub impact: Impact,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    config: DisplayConfig,
    phase: LoadPhase,
    impacts: Vec<Impact>,
    selection: Option<Selection>,
    pending: Option<Direction>,
    notice: Option<Notice>,
    dirty: bool,
}

impl AppState {
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Fresh state plus the effect that starts the one-time load.
    pub fn boot(config: DisplayConfig) -> (Self, Vec<Effect>) {
        (Self::new(config), vec![Effect::LoadImpacts])
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn impacts(&self) -> &[Impact] {
        &self.impacts
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn current(&self) -> Option<&Impact> {
        self.selection.as_ref().map(|selection| &selection.impact)
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Auto-advance runs only with something to rotate and no pinned impact.
    pub fn auto_advance_active(&self) -> bool {
        self.selection.is_some() && self.impacts.len() > 1 && self.config.overwrite_id.is_none()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase.clone(),
            mode: self.config.mode,
            current: self.current().map(ImpactView::from_impact),
            position: self.selection.as_ref().map(|selection| selection.index),
            total: self.impacts.len(),
            overwrite_id: self.config.overwrite_id,
            transitioning: self.is_transitioning(),
            notice: self.notice,
            dirty: self.dirty,
        }
    }

    /// Returns whether the view changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_loaded(&mut self, impacts: Vec<Impact>) {
        self.phase = LoadPhase::Ready;
        self.impacts = impacts;
        self.selection = None;
        self.pending = None;
        self.notice = None;
        self.mark_dirty();
    }

    pub(crate) fn set_failed(&mut self, reason: String) {
        self.phase = LoadPhase::Failed(reason);
        self.impacts.clear();
        self.selection = None;
        self.pending = None;
        self.mark_dirty();
    }

    pub(crate) fn select_index(&mut self, index: usize) {
        if let Some(impact) = self.impacts.get(index) {
            self.selection = Some(Selection {
                index,
                impact: impact.clone(),
            });
            self.notice = None;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.mark_dirty();
    }

    pub(crate) fn begin_transition(&mut self, direction: Direction) {
        self.pending = Some(direction);
        self.mark_dirty();
    }

    pub(crate) fn take_pending(&mut self) -> Option<Direction> {
        self.pending.take()
    }
}
