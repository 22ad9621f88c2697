#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The loader delivered the full impact list.
    ImpactsLoaded(Vec<crate::Impact>),
    /// The loader gave up; the display stays empty.
    LoadFailed(String),
    /// Auto-advance timer fired.
    AutoAdvanceElapsed,
    /// User asked for the next impact.
    NextPressed,
    /// User asked for the previous impact.
    PreviousPressed,
    /// User asked to jump to a specific impact (sequential mode only).
    JumpRequested(crate::ImpactId),
    /// The transition window opened by `Effect::BeginTransition` has passed.
    TransitionElapsed,
    /// Fallback for placeholder wiring.
    NoOp,
}
