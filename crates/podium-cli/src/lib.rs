//! Command-line components for Olympic dataset reconciliation.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
pub mod types;
