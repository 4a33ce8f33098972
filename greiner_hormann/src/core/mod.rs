//! Core module has common/shared math and numeric trait modules used by the polygon clipping
//! engine.
pub mod math;
pub mod traits;
