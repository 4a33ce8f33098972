#![allow(dead_code)]
mod polygon_test_properties;

pub use polygon_test_properties::*;
