use std::env;

pub const DEFAULT_POLLINATIONS_URL: &str = "https://image.pollinations.ai/prompt";
pub const DEFAULT_HUGGINGFACE_URL: &str =
    "https://api-inference.huggingface.co/models/runwayml/stable-diffusion-v1-5";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub pollinations_url: String,
    pub huggingface_url: String,
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            pollinations_url: DEFAULT_POLLINATIONS_URL.to_string(),
            huggingface_url: DEFAULT_HUGGINGFACE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads endpoint overrides from the environment, falling back to the
    /// production endpoints. `POLLINATIONS_URL`, `HUGGINGFACE_URL` and
    /// `GENERATION_TIMEOUT_SECS` are recognized.
    pub fn from_env() -> Self {
        let pollinations_url =
            env::var("POLLINATIONS_URL").unwrap_or_else(|_| DEFAULT_POLLINATIONS_URL.to_string());
        let huggingface_url =
            env::var("HUGGINGFACE_URL").unwrap_or_else(|_| DEFAULT_HUGGINGFACE_URL.to_string());
        let timeout_secs = env::var("GENERATION_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        GeneratorConfig {
            pollinations_url,
            huggingface_url,
            timeout_secs,
        }
    }

    pub fn with_pollinations_url(mut self, url: impl Into<String>) -> Self {
        self.pollinations_url = url.into();
        self
    }

    pub fn with_huggingface_url(mut self, url: impl Into<String>) -> Self {
        self.huggingface_url = url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_production_endpoints() {
        let config = GeneratorConfig::default();
        assert_eq!(config.pollinations_url, DEFAULT_POLLINATIONS_URL);
        assert_eq!(config.huggingface_url, DEFAULT_HUGGINGFACE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn builders_override_fields() {
        let config = GeneratorConfig::new()
            .with_pollinations_url("http://127.0.0.1:9000/prompt")
            .with_timeout_secs(5);
        assert_eq!(config.pollinations_url, "http://127.0.0.1:9000/prompt");
        assert_eq!(config.huggingface_url, DEFAULT_HUGGINGFACE_URL);
        assert_eq!(config.timeout_secs, 5);
    }
}
