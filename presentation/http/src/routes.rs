//! Route group composition

use crate::AppState;
use axum::Router;
use voicegate_core::errors::{CoreError, CoreResult};

/// Process-wide routing table under construction.
///
/// Each route group occupies exactly one path prefix. Prefixes must be
/// absolute and unique; registration happens once at startup and the
/// assembled router is never mutated afterwards.
#[derive(Default)]
pub struct RouteTable {
    groups: Vec<(String, Router<AppState>)>,
}

impl RouteTable {
    /// Create an empty routing table
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a route group under a path prefix.
    ///
    /// All handlers within the group become reachable at `prefix` plus the
    /// group's internal path. Fails when the prefix is empty, not absolute,
    /// the bare root, or already taken by another group.
    pub fn register(&mut self, prefix: &str, group: Router<AppState>) -> CoreResult<()> {
        if prefix.is_empty() || !prefix.starts_with('/') {
            return Err(CoreError::Configuration(format!(
                "route prefix must be absolute, got {:?}",
                prefix
            )));
        }
        if prefix == "/" {
            return Err(CoreError::Configuration(
                "route groups cannot be mounted at the root".to_string(),
            ));
        }
        if self.groups.iter().any(|(existing, _)| existing == prefix) {
            return Err(CoreError::Configuration(format!(
                "route prefix already registered: {}",
                prefix
            )));
        }

        self.groups.push((prefix.to_string(), group));
        Ok(())
    }

    /// Prefixes registered so far, in registration order
    pub fn prefixes(&self) -> Vec<&str> {
        self.groups.iter().map(|(prefix, _)| prefix.as_str()).collect()
    }

    /// Assemble the final router, nesting each group under its prefix
    pub fn into_router(self) -> Router<AppState> {
        self.groups
            .into_iter()
            .fold(Router::new(), |router, (prefix, group)| {
                router.nest(&prefix, group)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_unique_prefixes() {
        let mut table = RouteTable::new();
        table.register("/stt", Router::new()).unwrap();
        table.register("/tts", Router::new()).unwrap();

        assert_eq!(table.prefixes(), vec!["/stt", "/tts"]);
    }

    #[test]
    fn test_register_rejects_duplicate_prefix() {
        let mut table = RouteTable::new();
        table.register("/tts", Router::new()).unwrap();

        let err = table.register("/tts", Router::new()).unwrap_err();
        assert!(matches!(err, CoreError::Configuration(_)));
    }

    #[test]
    fn test_register_rejects_relative_prefix() {
        let mut table = RouteTable::new();
        assert!(table.register("tts", Router::new()).is_err());
        assert!(table.register("", Router::new()).is_err());
    }

    #[test]
    fn test_register_rejects_root_prefix() {
        let mut table = RouteTable::new();
        assert!(table.register("/", Router::new()).is_err());
    }

    #[test]
    fn test_failed_registration_leaves_table_unchanged() {
        let mut table = RouteTable::new();
        table.register("/llm", Router::new()).unwrap();
        let _ = table.register("/llm", Router::new());

        assert_eq!(table.prefixes(), vec!["/llm"]);
    }
}
