// ABOUTME: Command module aggregator for the nexus-cleaner CLI.
// ABOUTME: Re-exports clean and repos command handlers.

mod clean;
mod repos;

pub use clean::clean;
pub use repos::repos;
