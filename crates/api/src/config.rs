use spmb_core::error::CoreError;
use spmb_core::form::FormSchema;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Optional path to a JSON form-schema file overriding the built-in
    /// field gating defaults.
    pub form_schema_path: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `FORM_SCHEMA_PATH`     | (unset -> built-in schema) |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let form_schema_path = std::env::var("FORM_SCHEMA_PATH").ok();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            form_schema_path,
        }
    }

    /// Load the form-gating schema: from `FORM_SCHEMA_PATH` when set,
    /// otherwise the built-in defaults. A path that does not parse is a
    /// startup error -- a typo'd schema must not silently gate nothing.
    pub fn load_form_schema(&self) -> Result<FormSchema, CoreError> {
        match self.form_schema_path.as_deref() {
            None => Ok(FormSchema::default()),
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|e| {
                    CoreError::Internal(format!("Cannot read form schema at '{path}': {e}"))
                })?;
                FormSchema::from_json(&raw)
            }
        }
    }
}
