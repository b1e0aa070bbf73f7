/// Render orchestrator state. At most one `Requesting` exists system-wide;
/// pointer input to the editing surface is rejected for its duration, which
/// is the only mechanism guarding the mutable batch/mask state in this
/// single-threaded model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderState {
    /// No request in flight; pointer input allowed.
    #[default]
    Idle,
    /// A line is open and points are being appended; no network activity.
    AwaitingStroke,
    /// Exactly one render call in flight.
    Requesting,
    /// Per-attempt failure state; recovery transitions straight back to
    /// `Idle`.
    Error,
}

impl RenderState {
    pub fn accepts_input(self) -> bool {
        !matches!(self, RenderState::Requesting)
    }
}
