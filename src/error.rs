//! Planner Errors
//!
//! All fallible planner operations return `PlannerResult`.

use thiserror::Error;

/// Common result type for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;

#[derive(Debug, Error)]
pub enum PlannerError {
    /// Key-value storage unavailable or rejected a write
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON could not be parsed or produced
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A restore file does not look like a backup
    #[error("Invalid backup: {0}")]
    InvalidBackup(String),

    /// Form input rejected
    #[error("Invalid input: {0}")]
    Validation(String),

    /// A browser API call failed
    #[error("Browser error: {0}")]
    Browser(String),
}

impl PlannerError {
    /// Wrap a JS exception value
    pub fn browser(value: wasm_bindgen::JsValue) -> Self {
        PlannerError::Browser(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
