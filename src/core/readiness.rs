use serde::{Deserialize, Serialize};

/// Aggregated asynchronous readiness signals.
///
/// Signals move monotonically toward ready, with two exceptions:
/// `record_fetched` regresses when the host re-subscribes for a different
/// record, and `script_failed` latches the widget permanently out of the
/// rendering path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessState {
    pub dom_mounted: bool,
    pub script_loaded: bool,
    pub script_failed: bool,
    pub record_fetched: bool,
}

impl ReadinessState {
    /// True when every signal required for the active mode holds.
    ///
    /// Record-field mode additionally waits for the first snapshot; the
    /// other modes depend only on DOM mount and script load.
    #[must_use]
    pub const fn is_ready(&self, uses_record_field: bool) -> bool {
        self.dom_mounted && self.script_loaded && (!uses_record_field || self.record_fetched)
    }
}
