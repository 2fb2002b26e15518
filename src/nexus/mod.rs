// ABOUTME: Remote listing gateway for Sonatype Nexus.
// ABOUTME: Wire models, the Gateway trait, the paging stream, and the HTTP client.

mod client;
mod error;
mod gateway;
mod models;

pub use client::NexusClient;
pub use error::{BODY_EXCERPT_LEN, GatewayError, GatewayErrorKind};
pub use gateway::{Gateway, collect_items, items};
pub use models::{Page, RawAsset, RawItem, Repository, RepositoryKind};
