//! Client-side activity state.

/// Activity state for the client's current action.
///
/// A tagged state rather than separate loading and error flags, so a busy
/// action can never simultaneously carry a surfaced failure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Activity {
    /// No request in flight and no surfaced failure.
    #[default]
    Idle,
    /// A request is in flight.
    Busy,
    /// The last action failed with a user-facing message.
    Failed(String),
}

impl Activity {
    /// Returns true while a request is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self, Self::Busy)
    }

    /// Returns the surfaced failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            Self::Idle | Self::Busy => None,
        }
    }
}
