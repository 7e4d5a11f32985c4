//! Internal test modules - whitebox tests with crate access
//!
//! Property tests over the arrangement and gesture protocol, plus
//! harness-driven acceptance scenarios.

mod gesture_properties;
mod list_snapshots;
