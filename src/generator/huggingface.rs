use serde_json::json;

use crate::{
    error::{GenerateError, Result},
    models::GeneratedImage,
};

// Fixed diffusion parameters for the anonymous free tier.
const NUM_INFERENCE_STEPS: u32 = 20;
const GUIDANCE_SCALE: f64 = 7.5;

/// Client for the Hugging Face inference endpoint, anonymous tier, no auth
/// header. The model always renders at its own default resolution, so
/// requested dimensions are not forwarded.
#[derive(Clone)]
pub struct HuggingFaceClient {
    http: reqwest::Client,
    base_url: String,
}

impl HuggingFaceClient {
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    pub async fn generate(&self, prompt: &str) -> Result<GeneratedImage> {
        let payload = json!({
            "inputs": prompt,
            "parameters": {
                "num_inference_steps": NUM_INFERENCE_STEPS,
                "guidance_scale": GUIDANCE_SCALE
            }
        });

        log::debug!("POST {}", self.base_url);

        let response = self
            .http
            .post(&self.base_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| GenerateError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(GenerateError::HttpStatusError(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GenerateError::NetworkError(e.to_string()))?;

        GeneratedImage::from_bytes(&bytes)
    }
}
