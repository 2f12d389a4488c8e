use std::io::Cursor;

use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::{
    error::{GenerateError, Result},
    models::{Provider, Style},
};

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub style: Style,
    pub width: u32,
    pub height: u32,
    pub provider: Provider,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, provider: Provider) -> Self {
        Self {
            prompt: prompt.into(),
            style: Style::None,
            width: 512,
            height: 512,
            provider,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_preset(self, preset: SizePreset) -> Self {
        let (width, height) = preset.dimensions();
        self.with_size(width, height)
    }

    pub fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(GenerateError::InvalidRequest(
                "prompt must not be empty".into(),
            ));
        }
        if self.width == 0 || self.height == 0 {
            return Err(GenerateError::InvalidRequest(
                "width and height must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Preset dimensions matching what the Pollinations endpoint handles well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizePreset {
    Square,
    Landscape,
    Portrait,
    HdLandscape,
}

impl SizePreset {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "square" | "512x512" => Some(SizePreset::Square),
            "landscape" | "768x512" => Some(SizePreset::Landscape),
            "portrait" | "512x768" => Some(SizePreset::Portrait),
            "hd_landscape" | "1024x768" => Some(SizePreset::HdLandscape),
            _ => None,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            SizePreset::Square => (512, 512),
            SizePreset::Landscape => (768, 512),
            SizePreset::Portrait => (512, 768),
            SizePreset::HdLandscape => (1024, 768),
        }
    }
}

/// A decoded image returned by a provider, re-encodable for download.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    image: DynamicImage,
}

impl GeneratedImage {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| GenerateError::DecodeError(e.to_string()))?;
        Ok(Self { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .map_err(|e| GenerateError::EncodeError(e.to_string()))?;
        Ok(buf)
    }
}

/// Terminal result of one generation call. Exactly one form is ever
/// populated: an image with a success message, or a failure message alone.
#[derive(Debug)]
pub enum GenerationOutcome {
    Success {
        image: GeneratedImage,
        message: String,
    },
    Failure {
        message: String,
    },
}

impl GenerationOutcome {
    pub fn success(image: GeneratedImage, message: impl Into<String>) -> Self {
        GenerationOutcome::Success {
            image,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        GenerationOutcome::Failure {
            message: message.into(),
        }
    }

    pub fn from_result(result: Result<GeneratedImage>) -> Self {
        match result {
            Ok(image) => GenerationOutcome::success(image, "Image generated successfully"),
            Err(e) => GenerationOutcome::failure(e.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GenerationOutcome::Success { .. })
    }

    pub fn image(&self) -> Option<&GeneratedImage> {
        match self {
            GenerationOutcome::Success { image, .. } => Some(image),
            GenerationOutcome::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            GenerationOutcome::Success { message, .. } => message,
            GenerationOutcome::Failure { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prompt_is_rejected() {
        let request = GenerationRequest::new("   ", Provider::Pollinations);
        assert!(request.validate().is_err());
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let request = GenerationRequest::new("a cat", Provider::Pollinations).with_size(0, 512);
        assert!(request.validate().is_err());
    }

    #[test]
    fn presets_map_to_expected_dimensions() {
        assert_eq!(SizePreset::Square.dimensions(), (512, 512));
        assert_eq!(SizePreset::Landscape.dimensions(), (768, 512));
        assert_eq!(SizePreset::Portrait.dimensions(), (512, 768));
        assert_eq!(SizePreset::HdLandscape.dimensions(), (1024, 768));
        assert_eq!(SizePreset::from_key("1024x768"), Some(SizePreset::HdLandscape));
        assert_eq!(SizePreset::from_key("banner"), None);
    }

    #[test]
    fn invalid_bytes_fail_to_decode() {
        let result = GeneratedImage::from_bytes(b"definitely not an image");
        assert!(matches!(result, Err(GenerateError::DecodeError(_))));
    }

    #[test]
    fn png_round_trip() {
        let dynamic = DynamicImage::new_rgb8(4, 4);
        let mut buf = Vec::new();
        dynamic
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();

        let generated = GeneratedImage::from_bytes(&buf).unwrap();
        assert_eq!(generated.width(), 4);
        assert_eq!(generated.height(), 4);
        assert!(!generated.to_png_bytes().unwrap().is_empty());
    }

    #[test]
    fn outcome_forms_are_exclusive() {
        let failure = GenerationOutcome::failure("API error: status 500");
        assert!(!failure.is_success());
        assert!(failure.image().is_none());
        assert!(failure.message().contains("500"));
    }
}
