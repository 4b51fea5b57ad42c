//! Speech-to-text route group.
//!
//! Endpoints are contributed by an external engine integration; none are
//! mounted in the local gateway yet. The group still owns its prefix so
//! composition reserves it.

use crate::AppState;
use axum::Router;

/// Routes mounted under the `/stt` prefix
pub fn router() -> Router<AppState> {
    Router::new()
}
