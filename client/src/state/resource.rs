//! Load status for views backed by a guarded fetch.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use session::ApiError;

/// Lifecycle of one view's fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    /// Fold a fetch result into a view state.
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
