//! Command execution route group.
//!
//! Execution endpoints are supplied by an external integration; the group
//! currently only reserves its prefix.

use crate::AppState;
use axum::Router;

/// Routes mounted under the `/execute` prefix
pub fn router() -> Router<AppState> {
    Router::new()
}
