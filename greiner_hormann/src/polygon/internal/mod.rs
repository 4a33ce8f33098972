//! Internal polygon boolean modules made public for visualization, benchmarking, and testing
//! purposes.
//!
//! Not expected to be used directly as part of the library but may be used to help learn about the
//! algorithm phases.
pub mod boolean_policy;
pub mod hole_split;
pub mod intersection_phase;
pub mod labeling_phase;
pub mod polygon_boolean;
pub mod predicates;
pub mod tracing_phase;
pub mod vertex_store;
