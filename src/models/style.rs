use serde::{Deserialize, Serialize};

/// Art style applied to a prompt before it is sent to a provider.
///
/// The set is closed: unknown style keys fall back to [`Style::None`]
/// instead of failing, so style selection can never abort a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    None,
    Realistic,
    Artistic,
    DigitalArt,
    Anime,
    Vintage,
    Fantasy,
    Cyberpunk,
}

impl Style {
    pub fn from_key(key: &str) -> Self {
        match key {
            "realistic" => Style::Realistic,
            "artistic" => Style::Artistic,
            "digital_art" => Style::DigitalArt,
            "anime" => Style::Anime,
            "vintage" => Style::Vintage,
            "fantasy" => Style::Fantasy,
            "cyberpunk" => Style::Cyberpunk,
            _ => Style::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::None => "none",
            Style::Realistic => "realistic",
            Style::Artistic => "artistic",
            Style::DigitalArt => "digital_art",
            Style::Anime => "anime",
            Style::Vintage => "vintage",
            Style::Fantasy => "fantasy",
            Style::Cyberpunk => "cyberpunk",
        }
    }

    /// Descriptor phrase appended to the prompt. Empty for [`Style::None`].
    pub fn descriptor(&self) -> &'static str {
        match self {
            Style::None => "",
            Style::Realistic => "photorealistic, highly detailed, 8k, professional photography",
            Style::Artistic => "artistic, beautiful, masterpiece, oil painting",
            Style::DigitalArt => "digital art, concept art, trending on artstation, detailed",
            Style::Anime => "anime style, manga style, cel shading, vibrant colors",
            Style::Vintage => "vintage style, retro, classic, film photography",
            Style::Fantasy => "fantasy art, magical, ethereal, enchanted",
            Style::Cyberpunk => "cyberpunk, neon lights, futuristic, sci-fi",
        }
    }

    pub fn all() -> &'static [Style] {
        &[
            Style::None,
            Style::Realistic,
            Style::Artistic,
            Style::DigitalArt,
            Style::Anime,
            Style::Vintage,
            Style::Fantasy,
            Style::Cyberpunk,
        ]
    }
}
