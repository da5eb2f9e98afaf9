//! Contingency Harness: world-level orchestration for the And-Or engine.
//!
//! The harness runs a world through `contingency_search` (search → verify →
//! digest) and packages the result as a self-contained plan report that can
//! be persisted and re-verified offline.
//!
//! The harness does NOT implement search logic; it delegates to the engine.
//! Worlds provide domain data only; the harness owns orchestration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod logging;
pub mod report_dir;
pub mod runner;
pub mod worlds;
