/// Runtime configuration, environment-derived with defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Automation webhook that receives the multipart upload.
    pub webhook_url: String,
    /// Bound on how long a single upload may wait on the webhook.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webhook_url: "http://localhost:5678/webhook-test/document-upload".to_string(),
            timeout_secs: 120,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            webhook_url: std::env::var("DOCDROP_WEBHOOK_URL").unwrap_or(default.webhook_url),
            timeout_secs: std::env::var("DOCDROP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_webhook() {
        let config = Config::default();
        assert!(config.webhook_url.starts_with("http://localhost:5678/"));
        assert_eq!(config.timeout_secs, 120);
    }
}
