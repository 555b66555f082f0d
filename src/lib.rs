//! # fursight
//!
//! Rust client SDK for the FurSight pet-adoption-matching API.
//!
//! ## Overview
//!
//! FurSight predicts how well a potential adopter and a shelter dog match.
//! The service does all scoring remotely; this crate is the client side of
//! that contract. It owns the request lifecycle (pacing, retries, typed
//! error classification) and a form layer that assembles and validates the
//! 120+-field adopter/dog profile against server-provided dropdown
//! constraints before anything goes over the wire.
//!
//! ## Key Features
//!
//! - **Typed client**: [`FurSightClient`] exposes one method per API
//!   operation with typed responses
//! - **Reliability layer**: per-client request pacing, exponential backoff
//!   for transient failures, rate-limit aware retries via [`client`]
//! - **Closed error taxonomy**: every failure is one [`Error`] variant;
//!   raw transport errors never cross the crate boundary
//! - **Form builder**: [`AdoptionForm`] accumulates adopter/dog fields,
//!   validates them against cached dropdown constraints, and submits
//! - **Templates**: [`FormTemplate`] starter configurations for common
//!   adoption scenarios
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fursight::{ClientConfig, FurSightClient};
//!
//! #[tokio::main]
//! async fn main() -> fursight::Result<()> {
//!     let client = FurSightClient::new(ClientConfig::new("your-api-key"))?;
//!
//!     let mut form = client.form();
//!     form.set_adopter_field("adopter_housing_type", "Apartment")
//!         .set_dog_field("dog_breed", "Labrador Mix");
//!
//!     let prediction = form.submit(true).await?;
//!     println!(
//!         "{} ({:.0}% adoption probability)",
//!         prediction.recommendation,
//!         prediction.adoption_probability * 100.0
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Request execution: pacing, retries, error classification |
//! | [`config`] | Client configuration and defaults |
//! | [`facade`] | Typed API surface, one method per remote operation |
//! | [`form`] | Form accumulation, validation and templates |
//! | [`resilience`] | Request pacing primitive |
//! | [`transport`] | HTTP transport wrapper |
//! | [`types`] | Field values, partitions and typed responses |

pub mod client;
pub mod config;
pub mod facade;
pub mod form;
pub mod resilience;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use facade::FurSightClient;
pub use form::{AdoptionForm, FormTemplate};
pub use types::{
    DropdownValues, FieldCategory, FieldInfo, FieldMap, FieldValue, HealthStatus, ModelInfo,
    PredictionResponse,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
