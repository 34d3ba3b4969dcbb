use crate::constants::GOOGLE_MAPS_API_BASE_URL;
use reqwest::Client;

/// Shared transport for the Google Maps web services (geocoding and directions).
///
/// The API key is optional: the server starts without it and each call fails
/// with a "missing key" error instead of reaching the network.
#[derive(Clone)]
pub struct GoogleMapsClient {
    pub(crate) client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GoogleMapsClient {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self::with_config(client, api_key, GOOGLE_MAPS_API_BASE_URL.to_string())
    }

    /// Point the client at another root, e.g. a local proxy or a mock server
    pub fn with_config(client: Client, api_key: Option<String>, base_url: String) -> Self {
        GoogleMapsClient {
            client,
            // An empty env var counts as "not configured"
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// `{base_url}/{service}/json`, e.g. `.../geocode/json`
    pub(crate) fn endpoint(&self, service: &str) -> String {
        format!("{}/{}/json", self.base_url, service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_google_base_url() {
        let client = GoogleMapsClient::new(Client::new(), Some("AIza-test".to_string()));
        assert_eq!(client.base_url, GOOGLE_MAPS_API_BASE_URL);
        assert_eq!(client.api_key(), Some("AIza-test"));
        assert_eq!(
            client.endpoint("geocode"),
            "https://maps.googleapis.com/maps/api/geocode/json"
        );
    }

    #[test]
    fn test_with_config_trims_trailing_slash() {
        let client = GoogleMapsClient::with_config(
            Client::new(),
            Some("key".to_string()),
            "http://localhost:4000/maps/api/".to_string(),
        );
        assert_eq!(
            client.endpoint("directions"),
            "http://localhost:4000/maps/api/directions/json"
        );
    }

    #[test]
    fn test_blank_key_is_not_configured() {
        let client = GoogleMapsClient::new(Client::new(), Some("  ".to_string()));
        assert!(!client.has_api_key());
        assert!(GoogleMapsClient::new(Client::new(), None).api_key().is_none());
    }
}
