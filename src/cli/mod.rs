//! CLI command handlers for Tonematch.
//!
//! This module provides headless, scriptable access to the matcher and
//! catalogs for automation, testing, and CI integration.

pub mod common;
pub mod matcher;
pub mod products;

// Re-export types used by main.rs and tests
pub use common::ExitCode;
pub use matcher::{ColorsArgs, MatchArgs};
pub use products::ProductsArgs;
