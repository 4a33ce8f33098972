//! Core/common math functions for working with points, signed areas, and tolerant signs in 2D
//! space.
mod base_math;
mod vector2;

pub use base_math::*;
pub use vector2::{vec2, Vector2};
