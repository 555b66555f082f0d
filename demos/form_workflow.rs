//! Form workflow: templates, field introspection and branching on error
//! kinds the way an interactive caller would.
//!
//! Run with: FURSIGHT_API_KEY=... cargo run --example form_workflow

use fursight::{AdoptionForm, ClientConfig, Error, FormTemplate, FurSightClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("FURSIGHT_API_KEY")?;
    let client = FurSightClient::new(ClientConfig::new(api_key))?;

    let mut form = AdoptionForm::from_template(client.clone(), FormTemplate::FamilyWithKids);

    // Show which of the adopter fields are dropdown-constrained.
    for name in form.adopter_fields().await?.iter().take(10) {
        let info = form.field_info(name).await?;
        if info.is_dropdown {
            println!("{}: one of {:?}", name, info.allowed_values);
        }
    }

    // Deliberately suspicious value; submit() validates before any predict
    // call goes out.
    form.set_adopter_field("adopter_preferred_size", "Gigantic");

    match form.submit(true).await {
        Ok(prediction) => println!(
            "{} ({:.0}%)",
            prediction.recommendation,
            prediction.adoption_probability * 100.0
        ),
        Err(Error::Validation { message }) => println!("fix the form first: {message}"),
        Err(Error::RateLimited {
            retry_after_secs, ..
        }) => println!("rate limited, retry in {retry_after_secs}s"),
        Err(Error::Authentication { .. }) => println!("check FURSIGHT_API_KEY"),
        Err(other) => return Err(other.into()),
    }

    Ok(())
}
