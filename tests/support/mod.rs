// ABOUTME: Test support utilities.
// ABOUTME: Provides listing builders, an in-memory gateway, and a fake Nexus server.

use chrono::{DateTime, TimeZone, Utc};
use nexus_cleaner::nexus::{RawAsset, RawItem};
use nexus_cleaner::types::AssetId;
use std::sync::Once;

// Each test binary only uses some of these modules, so allow dead_code.
#[allow(dead_code)]
pub mod fake_gateway;
#[allow(dead_code)]
pub mod fake_nexus;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("nexus_cleaner=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Midnight UTC on the given day.
#[allow(dead_code)]
pub fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

/// A search item with one asset per `(id, timestamp)` pair.
#[allow(dead_code)]
pub fn item(name: &str, version: &str, assets: &[(&str, DateTime<Utc>)]) -> RawItem {
    RawItem {
        name: name.to_string(),
        version: version.to_string(),
        assets: assets
            .iter()
            .map(|(id, when)| RawAsset {
                id: AssetId::new(*id),
                last_modified: *when,
            })
            .collect(),
    }
}

/// `count` single-asset versions of `name`, one per day from 2024-01-01.
/// Version `i` is `{name}-{i}` and its asset id is `{name}-{i}-blob`.
#[allow(dead_code)]
pub fn daily(name: &str, count: usize) -> Vec<RawItem> {
    (0..count)
        .map(|i| {
            let when = at(2024, 1, 1) + chrono::Duration::days(i as i64);
            let id = format!("{name}-{i}-blob");
            item(name, &format!("{name}-{i}"), &[(id.as_str(), when)])
        })
        .collect()
}
