//! Contact form settings.

use serde::Deserialize;

/// Where the form posts and how its notices behave.
///
/// Every key is optional when deserializing; missing keys take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// URL of the contact POST
    pub endpoint: String,
    /// Lifetime of the failure notification
    pub toast_duration_ms: u64,
    /// Max toasts on screen at once
    pub toast_limit: usize,
}

/// Default contact endpoint, relative to the site origin.
pub const DEFAULT_ENDPOINT: &str = "/api/contact";

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            toast_duration_ms: 5000,
            toast_limit: 1,
        }
    }
}

impl ContactConfig {
    /// Defaults with the endpoint replaced, if one is given.
    ///
    /// Blank overrides are ignored so an empty build variable does not
    /// break the form.
    pub fn with_endpoint(mut self, endpoint: Option<&str>) -> Self {
        if let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            self.endpoint = endpoint.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = ContactConfig::default();
        assert_eq!(config.endpoint, "/api/contact");
        assert_eq!(config.toast_duration_ms, 5000);
        assert_eq!(config.toast_limit, 1);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: ContactConfig =
            serde_json::from_str(r#"{"endpoint": "https://api.bird.so/contact"}"#).unwrap();

        assert_eq!(
            config,
            ContactConfig {
                endpoint: "https://api.bird.so/contact".into(),
                ..ContactConfig::default()
            }
        );
    }

    #[test]
    fn endpoint_override() {
        let config = ContactConfig::default().with_endpoint(Some("https://x.test/c"));
        assert_eq!(config.endpoint, "https://x.test/c");

        assert_eq!(ContactConfig::default().with_endpoint(Some("  ")).endpoint, DEFAULT_ENDPOINT);
        assert_eq!(ContactConfig::default().with_endpoint(None).endpoint, DEFAULT_ENDPOINT);
    }
}
