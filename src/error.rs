//! Error types for override loading
//!
//! The merge and format pipeline itself never errors: malformed values pass
//! through unconverted and land in the rendered page as-is. Errors only
//! surface at the explicit inbound edges, when override text or files fail
//! to parse.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("failed to read override file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML overrides: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON overrides: {0}")]
    Json(#[from] serde_json::Error),
}
