//! sdfont Core
//!
//! Shared primitives for the sdfont crates: math and geometry types, colors,
//! hash collections, logging, profiling and runtime configuration.

pub mod alloc;
pub mod color;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
