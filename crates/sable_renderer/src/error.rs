//! Render errors.

use thiserror::Error;

/// Errors that stop a render before it starts.
///
/// Once a render begins it always completes: every ray resolves to a
/// surface colour or the background.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for render entry points.
pub type RenderResult<T> = Result<T, RenderError>;
