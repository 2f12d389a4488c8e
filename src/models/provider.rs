use serde::{Deserialize, Serialize};

/// Image generation backend. The set is closed on purpose: an unrecognized
/// provider key is a validation failure, never a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Pollinations,
    HuggingFace,
}

/// How a provider is called on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// GET with the prompt encoded into the URL path.
    Direct,
    /// POST with a JSON payload.
    Post,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
    pub kind: ProviderKind,
    pub description: String,
}

impl Provider {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "pollinations" => Some(Provider::Pollinations),
            "huggingface" => Some(Provider::HuggingFace),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Pollinations => "pollinations",
            Provider::HuggingFace => "huggingface",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Pollinations => "Pollinations AI",
            Provider::HuggingFace => "Hugging Face (Free)",
        }
    }

    pub fn kind(&self) -> ProviderKind {
        match self {
            Provider::Pollinations => ProviderKind::Direct,
            Provider::HuggingFace => ProviderKind::Post,
        }
    }

    pub fn all() -> &'static [Provider] {
        &[Provider::Pollinations, Provider::HuggingFace]
    }

    pub fn info(&self) -> ProviderInfo {
        ProviderInfo {
            id: self.as_str().to_string(),
            name: self.display_name().to_string(),
            kind: self.kind(),
            description: match self {
                Provider::Pollinations => {
                    "Fast and reliable, honors requested dimensions".to_string()
                }
                Provider::HuggingFace => {
                    "Higher quality, fixed model resolution, may rate limit".to_string()
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_round_trip() {
        for provider in Provider::all() {
            assert_eq!(Provider::from_key(provider.as_str()), Some(*provider));
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert_eq!(Provider::from_key("dall-e"), None);
        assert_eq!(Provider::from_key(""), None);
    }

    #[test]
    fn wire_kinds() {
        assert_eq!(Provider::Pollinations.kind(), ProviderKind::Direct);
        assert_eq!(Provider::HuggingFace.kind(), ProviderKind::Post);
    }
}
