//! Error type returned by the polygon boolean operations.
use crate::polygon::PolygonRole;
use thiserror::Error;

/// Errors that can occur when performing a polygon boolean operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipError {
    /// A polygon operand has 1 or 2 points so no closed boundary can be formed from its edges.
    #[error("{role} polygon has insufficient vertices ({count}), at least 3 are required")]
    InsufficientVertices { role: PolygonRole, count: usize },
}

impl ClipError {
    /// Which operand caused the error.
    pub fn role(&self) -> PolygonRole {
        match *self {
            ClipError::InsufficientVertices { role, .. } => role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_operand_and_count() {
        let err = ClipError::InsufficientVertices {
            role: PolygonRole::Clip,
            count: 2,
        };
        assert_eq!(
            err.to_string(),
            "clip polygon has insufficient vertices (2), at least 3 are required"
        );
        assert_eq!(err.role(), PolygonRole::Clip);
    }
}
