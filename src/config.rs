use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://beta.sree.shop/v1/images/generations";

pub const API_KEY_VAR: &str = "SREE_API_KEY";
pub const ENDPOINT_VAR: &str = "SREE_API_ENDPOINT";
pub const TIMEOUT_VAR: &str = "SREE_API_TIMEOUT_SECS";

#[derive(Clone, PartialEq, Eq)]
pub struct ImageApiConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Default for ImageApiConfig {
    fn default() -> Self {
        ImageApiConfig {
            endpoint: None,
            api_key: None,
            timeout_secs: None,
        }
    }
}

impl fmt::Debug for ImageApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageApiConfig")
            .field("endpoint", &self.endpoint())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ImageApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source. Blank values count as unset
    /// and an unparseable timeout is ignored.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| get(name).filter(|v| !v.trim().is_empty());

        let api_key = non_empty(API_KEY_VAR);
        let endpoint = non_empty(ENDPOINT_VAR);
        let timeout_secs = non_empty(TIMEOUT_VAR).and_then(|s| s.trim().parse().ok());

        ImageApiConfig {
            endpoint,
            api_key,
            timeout_secs,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.as_deref().map_or(false, |k| !k.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> ImageApiConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ImageApiConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn blank_or_unparseable_variables_count_as_unset() {
        for key in ["", "  "] {
            let config = lookup(&[
                (API_KEY_VAR, key),
                (ENDPOINT_VAR, ""),
                (TIMEOUT_VAR, "abc"),
            ]);
            assert!(!config.has_credential());
            assert_eq!(config.api_key, None);
            assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
            assert_eq!(config.timeout(), None);
        }

        let config = lookup(&[]);
        assert_eq!(config, ImageApiConfig::new());
    }

    #[test]
    fn set_variables_are_read() {
        let config = lookup(&[
            (API_KEY_VAR, "sk-live"),
            (ENDPOINT_VAR, "http://localhost:9000/v1/images/generations"),
            (TIMEOUT_VAR, " 45 "),
        ]);
        assert!(config.has_credential());
        assert_eq!(config.api_key.as_deref(), Some("sk-live"));
        assert_eq!(
            config.endpoint(),
            "http://localhost:9000/v1/images/generations"
        );
        assert_eq!(config.timeout(), Some(Duration::from_secs(45)));
    }

    #[test]
    fn endpoint_falls_back_to_default() {
        let config = ImageApiConfig::new();
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);

        let config = config.with_endpoint("http://localhost:9000/v1/images/generations");
        assert_eq!(
            config.endpoint(),
            "http://localhost:9000/v1/images/generations"
        );
    }

    #[test]
    fn blank_key_is_not_a_credential() {
        assert!(!ImageApiConfig::new().has_credential());
        assert!(!ImageApiConfig::new().with_api_key("  ").has_credential());
        assert!(ImageApiConfig::new().with_api_key("sk-test").has_credential());
    }

    #[test]
    fn debug_output_hides_the_key() {
        let config = ImageApiConfig::new()
            .with_api_key("sk-very-secret")
            .with_timeout_secs(30);
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk-very-secret"));
        assert!(rendered.contains("<redacted>"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    }
}
