// ABOUTME: Type-safe identifiers and validated domain types.
// ABOUTME: Uses phantom types to prevent ID confusion at compile time.

mod id;
mod keep_count;

pub use id::{AssetId, Id, RepositoryName};
pub use keep_count::{KeepCount, KeepCountError};
