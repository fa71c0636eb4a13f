//! Error types for field construction.
//!
//! Only surface acquisition can fail. Runtime sampling misses are expected
//! outcomes and travel as `Option`, never as errors.

use std::fmt;

/// Errors that can occur while acquiring the drawing surface.
#[derive(Debug)]
pub enum FieldError {
    /// No surface exists under the given identifier.
    SurfaceNotFound(String),
    /// The surface exists but the requested drawing context could not be
    /// obtained.
    ContextUnavailable(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::SurfaceNotFound(id) => {
                write!(f, "surface \"{}\" not found", id)
            }
            FieldError::ContextUnavailable(kind) => {
                write!(f, "could not get \"{}\" drawing context from surface", kind)
            }
        }
    }
}

impl std::error::Error for FieldError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_surface() {
        let err = FieldError::SurfaceNotFound("particle-canvas".to_string());
        assert_eq!(err.to_string(), "surface \"particle-canvas\" not found");
    }

    #[test]
    fn display_names_the_context() {
        let err = FieldError::ContextUnavailable("2d".to_string());
        assert!(err.to_string().contains("2d"));
    }
}
