pub mod config;
pub mod error;
pub mod generator;
pub mod logger;
pub mod models;
pub mod prompt;

pub use config::GeneratorConfig;
pub use error::{GenerateError, Result};
pub use generator::{HuggingFaceClient, ImageGenerator, PollinationsClient};
pub use models::{
    GeneratedImage, GenerationOutcome, GenerationRequest, Provider, ProviderInfo, ProviderKind,
    SizePreset, Style,
};
pub use prompt::{enhance, enhance_by_key};
