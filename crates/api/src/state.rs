use std::sync::Arc;

use spmb_core::form::FormSchema;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: spmb_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Field gating schema for the admission form, loaded once at startup.
    pub form_schema: Arc<FormSchema>,
}
