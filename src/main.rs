use std::env;
use std::fs;

use pixgen::{
    GenerationRequest, GeneratorConfig, ImageGenerator, Provider, SizePreset, Style,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    pixgen::logger::init_with_config(
        pixgen::logger::LoggerConfig::development()
            .with_level(pixgen::logger::LogLevel::Debug),
    )?;

    log::info!("🖼️  Available providers:");
    for info in ImageGenerator::supported_providers() {
        log::info!("  {} - {} ({:?})", info.id, info.name, info.kind);
    }

    log::info!("🎨 Available styles:");
    for (key, descriptor) in ImageGenerator::supported_styles() {
        if descriptor.is_empty() {
            log::info!("  {} - no enhancement", key);
        } else {
            log::info!("  {} - {}", key, descriptor);
        }
    }

    let prompt = env::args().skip(1).collect::<Vec<_>>().join(" ");
    let prompt = if prompt.trim().is_empty() {
        "a beautiful sunset over mountains with a calm lake".to_string()
    } else {
        prompt
    };
    log::info!("✨ Prompt: {}", prompt);

    let generator = ImageGenerator::new(GeneratorConfig::from_env())?;

    // Primary path: Pollinations, with a style and a size preset.
    let request = GenerationRequest::new(prompt.clone(), Provider::Pollinations)
        .with_style(Style::DigitalArt)
        .with_preset(SizePreset::HdLandscape);

    let outcome = generator.generate(&request).await;
    log::info!("📝 {}", outcome.message());

    if let Some(image) = outcome.image() {
        let filename = format!("generated_{}.png", chrono::Utc::now().timestamp());
        match image.to_png_bytes() {
            Ok(bytes) => {
                fs::write(&filename, bytes)?;
                log::info!("💾 Image saved to: {}", filename);
            }
            Err(e) => log::error!("❌ Failed to encode image: {}", e),
        }
    }

    // Fallback path: Hugging Face with an automatic single retry against
    // Pollinations when the free tier is unavailable.
    let request = GenerationRequest::new(prompt, Provider::HuggingFace)
        .with_style(Style::Realistic);

    let outcome = generator.generate_with_fallback(&request).await;
    log::info!("📝 {}", outcome.message());

    if let Some(image) = outcome.image() {
        let filename = format!("generated_fallback_{}.png", chrono::Utc::now().timestamp());
        fs::write(&filename, image.to_png_bytes()?)?;
        log::info!("💾 Image saved to: {}", filename);
    }

    log::info!("🎉 Done");
    Ok(())
}
