// ABOUTME: Library root for nexus-cleaner - exposes the retention engine and Nexus gateway.
// ABOUTME: The main binary is in main.rs.

pub mod cleanup;
pub mod config;
pub mod error;
pub mod nexus;
pub mod output;
pub mod retention;
pub mod types;
