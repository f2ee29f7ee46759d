use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Current page/query state as delivered by the host's navigation provider.
///
/// Refreshed wholesale on every navigation event; the widget reads at most
/// one key from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    params: IndexMap<String, String>,
}

impl NavigationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.insert(name.into(), value.into());
    }

    /// Parameter lookup treating blank values as absent.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }
}
