//! Route definition for the form-schema read endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers::form_schema;
use crate::state::AppState;

/// Top-level form-schema route.
///
/// ```text
/// GET    /form-schema    get_form_schema (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/form-schema", get(form_schema::get_form_schema))
}
