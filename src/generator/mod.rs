pub mod huggingface;
pub mod pollinations;

use std::time::Duration;

use crate::{
    config::GeneratorConfig,
    error::{GenerateError, Result},
    models::{GenerationOutcome, GenerationRequest, Provider, ProviderInfo, Style},
    prompt,
};

pub use huggingface::HuggingFaceClient;
pub use pollinations::PollinationsClient;

/// Dispatcher over the supported providers. Holds no mutable state; one
/// instance can serve any number of sequential generations.
#[derive(Clone)]
pub struct ImageGenerator {
    pollinations: PollinationsClient,
    huggingface: HuggingFaceClient,
}

impl ImageGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GenerateError::ConfigError(e.to_string()))?;

        Ok(Self {
            pollinations: PollinationsClient::new(http.clone(), config.pollinations_url),
            huggingface: HuggingFaceClient::new(http, config.huggingface_url),
        })
    }

    pub fn pollinations(&self) -> &PollinationsClient {
        &self.pollinations
    }

    pub fn huggingface(&self) -> &HuggingFaceClient {
        &self.huggingface
    }

    /// Runs one generation against the provider named in the request.
    /// Every error is absorbed into the returned outcome; this never
    /// panics and never surfaces a raw transport error.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationOutcome {
        if let Err(e) = request.validate() {
            log::error!("Rejected generation request: {}", e);
            return GenerationOutcome::failure(e.to_string());
        }

        let enhanced = prompt::enhance(&request.prompt, request.style);
        log::info!(
            "🎨 Generating with {} ({}x{}, style: {})",
            request.provider.display_name(),
            request.width,
            request.height,
            request.style.as_str()
        );
        log::debug!("Enhanced prompt: {}", enhanced);

        let mut timer = crate::logger::timer("image generation");
        let result = match request.provider {
            Provider::Pollinations => {
                self.pollinations
                    .generate(&enhanced, request.width, request.height)
                    .await
            }
            Provider::HuggingFace => self.huggingface.generate(&enhanced).await,
        };
        timer.stop();

        match &result {
            Ok(image) => log::info!(
                "✅ Generated {}x{} image",
                image.width(),
                image.height()
            ),
            Err(e) => log::error!("❌ Generation failed: {}", e),
        }

        GenerationOutcome::from_result(result)
    }

    /// String-keyed dispatch for callers holding an untyped provider
    /// selection. An unrecognized key fails without any network call.
    pub async fn generate_by_key(
        &self,
        provider_key: &str,
        request: &GenerationRequest,
    ) -> GenerationOutcome {
        match Provider::from_key(provider_key) {
            Some(provider) => {
                let mut request = request.clone();
                request.provider = provider;
                self.generate(&request).await
            }
            None => {
                let error = GenerateError::InvalidSelection(provider_key.to_string());
                log::error!("{}", error);
                GenerationOutcome::failure(error.to_string())
            }
        }
    }

    /// Caller-level retry policy: a failed Hugging Face generation is
    /// retried exactly once against Pollinations with the same prompt and
    /// dimensions. The retry's outcome is final, and no other direction
    /// triggers a retry.
    pub async fn generate_with_fallback(&self, request: &GenerationRequest) -> GenerationOutcome {
        let outcome = self.generate(request).await;
        if outcome.is_success() || request.provider != Provider::HuggingFace {
            return outcome;
        }

        log::warn!(
            "⚠️  {} failed ({}), retrying once with {}",
            request.provider.display_name(),
            outcome.message(),
            Provider::Pollinations.display_name()
        );

        let mut retry = request.clone();
        retry.provider = Provider::Pollinations;
        match self.generate(&retry).await {
            GenerationOutcome::Success { image, .. } => {
                GenerationOutcome::success(image, "Image generated with fallback provider")
            }
            failure => failure,
        }
    }

    pub fn supported_providers() -> Vec<ProviderInfo> {
        Provider::all().iter().map(Provider::info).collect()
    }

    pub fn supported_styles() -> Vec<(&'static str, &'static str)> {
        Style::all()
            .iter()
            .map(|style| (style.as_str(), style.descriptor()))
            .collect()
    }
}
