//! Language model route group.
//!
//! Completion endpoints belong to an external model integration and are
//! not mounted here; requests under the prefix fall through to 404.

use crate::AppState;
use axum::Router;

/// Routes mounted under the `/llm` prefix
pub fn router() -> Router<AppState> {
    Router::new()
}
