//! Minimal end-to-end usage: health check, model metadata, one prediction.
//!
//! Run with: FURSIGHT_API_KEY=... cargo run --example basic_usage

use fursight::{ClientConfig, FurSightClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("FURSIGHT_API_KEY")?;
    let client = FurSightClient::new(ClientConfig::new(api_key))?;

    let health = client.health().await?;
    println!("service: {} (model loaded: {})", health.status, health.model_loaded);

    let info = client.model_info().await?;
    println!(
        "model: {} v{} ({} features)",
        info.model_name, info.model_version, info.features_count
    );

    let mut form = client.form();
    form.set_adopter_field("adopter_housing_type", "Suburban Home")
        .set_adopter_field("adopter_has_kids", "Yes")
        .set_adopter_field("adopter_yard_type", "Fenced")
        .set_dog_field("dog_breed", "Labrador Mix")
        .set_dog_field("dog_size", "Medium")
        .set_dog_field("dog_energyLevel", "Moderate");

    let prediction = form.submit(true).await?;
    println!(
        "{} (probability {:.2}, confidence {:.2}, model {})",
        prediction.recommendation,
        prediction.adoption_probability,
        prediction.confidence_score,
        prediction.model_version
    );

    Ok(())
}
