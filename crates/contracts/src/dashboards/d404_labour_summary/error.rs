use super::level::Level;
use thiserror::Error;

/// Rejected navigator transition; state is left untouched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("cannot select a {selected} item while {current} are displayed")]
    LevelMismatch { current: Level, selected: Level },

    #[error("a skill is already selected; go back to choose another")]
    PathComplete,

    #[error("item {id} is not in the displayed {level} list")]
    UnknownItem { level: Level, id: String },

    #[error("breadcrumb at depth {target} is not behind the current depth {depth}")]
    ActiveCrumb { target: usize, depth: usize },

    #[error("{level} needs {expected} parent selections, got {actual}")]
    ParentChainMismatch {
        level: Level,
        expected: usize,
        actual: usize,
    },
}

/// Failure of a single level fetch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP error: {status}")]
    Http { status: u16 },

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("request cancelled")]
    Cancelled,
}

impl FetchError {
    /// Cancellation is expected on supersession and never shown to the user
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
