//! Shared helpers for the live-registry integration tests.

#![allow(dead_code)]

use std::env;

use vehicle_registry_client::RegistryClient;

/// Skip the test when the named environment variables are missing.
#[macro_export]
macro_rules! skip_if_no_registry {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Test context wrapping a client pointed at a live registry.
pub struct TestContext {
    pub client: RegistryClient,
}

impl TestContext {
    /// Build a context from `REGISTRY_BASE_URL`.
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("REGISTRY_BASE_URL").ok()?;
        Some(Self {
            client: RegistryClient::new(base_url),
        })
    }
}
