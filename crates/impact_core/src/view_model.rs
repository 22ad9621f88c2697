use crate::text::{prevent_orphan, split_highlight, HighlightedText};
use crate::{Impact, ImpactId, LoadPhase, Notice, SelectionMode};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: LoadPhase,
    pub mode: SelectionMode,
    pub current: Option<ImpactView>,
    /// Index of `current` in the loaded list.
    pub position: Option<usize>,
    pub total: usize,
    pub overwrite_id: Option<ImpactId>,
    pub transitioning: bool,
    pub notice: Option<Notice>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactView {
    pub id: ImpactId,
    pub entity: String,
    /// Orphan-proofed text split at its highlight.
    pub text: HighlightedText,
}

impl ImpactView {
    pub fn from_impact(impact: &Impact) -> Self {
        Self {
            id: impact.id,
            entity: impact.entity.clone(),
            text: split_highlight(&prevent_orphan(&impact.text), &impact.highlight),
        }
    }
}
