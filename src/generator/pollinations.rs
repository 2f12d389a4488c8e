use crate::{
    error::{GenerateError, Result},
    models::GeneratedImage,
};

/// Client for the Pollinations image endpoint. The prompt travels in the
/// URL path, so it must be percent-encoded; the endpoint honors the
/// requested dimensions.
#[derive(Clone)]
pub struct PollinationsClient {
    http: reqwest::Client,
    base_url: String,
}

impl PollinationsClient {
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    pub fn request_url(&self, prompt: &str, width: u32, height: u32) -> String {
        format!(
            "{}/{}?width={}&height={}&nologo=true&enhance=true",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(prompt),
            width,
            height
        )
    }

    pub async fn generate(&self, prompt: &str, width: u32, height: u32) -> Result<GeneratedImage> {
        let url = self.request_url(prompt, width, height);
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
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
