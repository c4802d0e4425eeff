//! Tonematch Library
//!
//! Core functionality for the Tonematch application: matching colors against
//! the Monk skin tone reference scale, serving curated color recommendations,
//! managing capture sessions, and querying product and outfit catalogs.

// Module declarations
pub mod capture;
pub mod catalog;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod matcher;
pub mod models;
pub mod session;
pub mod web;
