pub mod directions;
pub mod geocoding;
pub mod google_maps;
pub mod media;
pub mod path_interpolator;
pub mod records;
pub mod route_orchestrator;
pub mod weather;

use reqwest::Client;
use std::time::Duration;

/// One pooled client for every outbound call, with a per-request timeout.
pub fn build_http_client(timeout_secs: u64) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!("shiori/", env!("CARGO_PKG_VERSION")))
        .build()
}
