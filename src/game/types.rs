// Shared enums used by the simulation step and the host loop

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Player health reached zero
    PlayerDefeated,
    /// The host asked to quit
    Quit,
}

/// Session state returned by every update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Ended(EndReason),
}

impl SessionState {
    pub fn is_running(&self) -> bool {
        matches!(self, SessionState::Running)
    }
}
