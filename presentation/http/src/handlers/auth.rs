//! Authentication route group.
//!
//! Optional: mounted only when `enable_auth_routes` is set in the gateway
//! configuration. The token scheme lives with the deployment that opts in,
//! so no endpoints are defined here.

use crate::AppState;
use axum::Router;

/// Routes mounted under the `/auth` prefix
pub fn router() -> Router<AppState> {
    Router::new()
}
