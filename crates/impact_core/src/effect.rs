use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the impact list and answer with `Msg::ImpactsLoaded` or `Msg::LoadFailed`.
    LoadImpacts,
    /// Send `Msg::TransitionElapsed` after `duration`.
    BeginTransition { duration: Duration },
    /// Cancel any running auto-advance timer and start a new one.
    RestartAutoAdvance { interval: Duration },
    StopAutoAdvance,
}
