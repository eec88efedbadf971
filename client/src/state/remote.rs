//! The uniform per-page fetch lifecycle.
//!
//! Every page holds its primary resource in a `RemoteData` signal and
//! walks `Idle -> Loading -> Loaded | Errored`; drill-down sections hold a
//! second `RemoteData` so a failed secondary fetch degrades that section
//! without touching the primary view. Nothing here is persisted; navigating
//! away discards the signal.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use models::ApiError;

/// State of one fetched resource.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RemoteData<T> {
    /// No fetch attempted yet.
    #[default]
    Idle,
    /// A fetch is in flight; prior data is discarded.
    Loading,
    Loaded(T),
    Errored(String),
}

impl<T> RemoteData<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Errored(message) => Some(message),
            _ => None,
        }
    }

    /// Fold a fetch result into the terminal state, using the friendly
    /// rendering of the structured error.
    #[must_use]
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::Loaded(data),
            Err(err) => Self::Errored(err.friendly_message()),
        }
    }

    /// Update the loaded value in place; no-op in any other state.
    pub fn update_loaded(&mut self, apply: impl FnOnce(&mut T)) {
        if let Self::Loaded(data) = self {
            apply(data);
        }
    }
}
