//! Scene construction errors.

use sable_math::MathError;
use thiserror::Error;

/// Errors raised while building a scene.
///
/// All validation happens when spheres and lights are constructed, so a
/// `Scene` that exists is always safe to render.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Invalid sphere: radius must be positive and finite, got {radius}")]
    InvalidSphere { radius: f64 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Math(#[from] MathError),
}

/// Result type for scene construction.
pub type SceneResult<T> = Result<T, SceneError>;
