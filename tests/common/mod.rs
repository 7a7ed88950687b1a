//! Shared helpers for connector integration tests
#![allow(dead_code)]

use mt_connectors::domain::model::EndpointConfig;
use mt_connectors::infrastructure::config::Config;
use mt_connectors::infrastructure::storage::credentials::MemorySecretStore;
use mt_connectors::state::AppState;
use std::sync::Arc;
use wiremock::MockServer;

/// Split a mock server address into the url/port pair a user would enter
pub fn mtuoc_endpoint(server: &MockServer) -> EndpointConfig {
    let addr = server.address();
    EndpointConfig::new(
        Some(format!("http://{}", addr.ip())),
        Some(addr.port().to_string()),
    )
}

pub fn state_for(server: &MockServer) -> AppState {
    let endpoint = mtuoc_endpoint(server);
    let mut config = Config::default();
    config.azure.url = server.uri();
    config.mtuoc.engine_url = endpoint.url;
    config.mtuoc.engine_port = endpoint.port;
    AppState::new(config, Arc::new(MemorySecretStore::new())).unwrap()
}

/// A local port with nothing listening on it
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}
