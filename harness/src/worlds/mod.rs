//! World implementations for the harness runner.

pub mod slippery_vacuum;
pub mod vacuum;
