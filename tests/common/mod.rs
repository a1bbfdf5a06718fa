//! Shared helpers for the zone API integration tests

#![allow(dead_code)]

use denominator::{MockZoneApi, Zone, ZoneStore};
use std::sync::{Arc, Once};

static TRACING: Once = Once::new();

/// Install a test subscriber once; honors RUST_LOG
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A mock API over a fresh store, seeded with the default zone
pub fn fresh_api() -> MockZoneApi {
    init_tracing();
    MockZoneApi::new(Arc::new(ZoneStore::new())).expect("fresh store accepts the seed zone")
}

/// The zone a mock backend derives for `name` with default SOA values
pub fn expected_zone(name: &str) -> Zone {
    Zone {
        name: name.to_string(),
        id: name.to_string(),
        ttl: 86400,
        email: format!("admin.{}", name),
    }
}
