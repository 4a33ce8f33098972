//! Polygon boolean operations (intersect, union, difference) using the Greiner-Hormann clipping
//! algorithm, extended to handle degenerate configurations (shared vertices, vertex on edge
//! touches, and coincident edges).
//!
//! # Examples
//!
//! ```
//! # use greiner_hormann::polygon::*;
//! # use greiner_hormann::polygon;
//! let subject: Polygon = polygon![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
//! let clip: Polygon = polygon![(2.0, 2.0), (6.0, 2.0), (6.0, 6.0), (2.0, 6.0)];
//! let result = subject.intersect(&clip).unwrap();
//! assert_eq!(result.polygons.len(), 1);
//! assert!((result.polygons[0].area().abs() - 4.0).abs() < 1e-8);
//! ```
#[macro_use]
mod macros;
pub mod core;
pub mod error;
pub mod polygon;

pub use static_aabb2d_index;
