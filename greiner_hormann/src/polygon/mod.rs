//! This module has all the types and functions associated with polygons and the boolean operations
//! between them.
pub mod internal;
mod poly;
mod polygon_types;

pub use poly::*;
pub use polygon_types::*;
