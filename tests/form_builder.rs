//! Form builder integration tests: constraint validation, metadata caching
//! and submission against a mock server.

use fursight::{
    AdoptionForm, ClientConfig, Error, FieldCategory, FieldValue, FormTemplate, FurSightClient,
};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;
use std::time::Duration;

fn client_for(server: &ServerGuard) -> FurSightClient {
    FurSightClient::new(
        ClientConfig::new("test-key")
            .with_base_url(server.url())
            .with_min_request_interval(Duration::ZERO),
    )
    .unwrap()
}

async fn mock_dropdowns(server: &mut ServerGuard, body: serde_json::Value) -> Mock {
    server
        .mock("GET", "/form/dropdown-values")
        .with_status(200)
        .with_body(json!({ "dropdown_values": body }).to_string())
        .create_async()
        .await
}

async fn mock_sample(server: &mut ServerGuard, body: serde_json::Value) -> Mock {
    server
        .mock("GET", "/form/sample-data")
        .with_status(200)
        .with_body(json!({ "sample_data": body }).to_string())
        .create_async()
        .await
}

#[tokio::test]
async fn test_submit_sends_merged_payload() {
    let mut server = mockito::Server::new_async().await;
    let _dropdowns = mock_dropdowns(
        &mut server,
        json!({ "adopter_housing_type": ["Apartment", "House"] }),
    )
    .await;
    let predict = server
        .mock("POST", "/predict/single")
        .match_query(Matcher::UrlEncoded(
            "include_explanation".into(),
            "true".into(),
        ))
        .match_body(Matcher::Json(json!({
            "adopter_housing_type": "Apartment",
            "dog_breed": "Labrador Mix"
        })))
        .with_status(200)
        .with_body(
            json!({
                "recommendation": "Good Match",
                "adoption_probability": 0.87,
                "confidence_score": 0.91,
                "model_version": "2.1.0",
                "timestamp": "2026-08-01T12:00:00Z",
                "simplified_band_info": { "band": "green" }
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let mut form = client_for(&server).form();
    form.set_adopter_field("adopter_housing_type", "Apartment")
        .set_dog_field("dog_breed", "Labrador Mix");

    let prediction = form.submit(true).await.unwrap();
    assert_eq!(prediction.recommendation, "Good Match");
    assert!((prediction.adoption_probability - 0.87).abs() < 1e-9);
    assert!(prediction.simplified_band_info.is_some());
    predict.assert_async().await;
}

#[tokio::test]
async fn test_rejected_submit_makes_no_predict_call() {
    let mut server = mockito::Server::new_async().await;
    let _dropdowns = mock_dropdowns(
        &mut server,
        json!({ "adopter_housing_type": ["Apartment", "House"] }),
    )
    .await;
    let predict = server
        .mock("POST", "/predict/single")
        .expect(0)
        .create_async()
        .await;

    let mut form = client_for(&server).form();
    form.set_adopter_field("adopter_housing_type", "Castle");

    let err = form.submit(true).await.unwrap_err();
    match err {
        Error::Validation { message } => {
            assert!(message.contains("Apartment, House"));
            assert!(message.contains("Castle"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
    predict.assert_async().await;
}

#[tokio::test]
async fn test_validation_message_truncates_long_value_lists() {
    let mut server = mockito::Server::new_async().await;
    let _dropdowns = mock_dropdowns(
        &mut server,
        json!({ "dog_color": ["Black", "Brown", "White", "Golden", "Brindle", "Merle"] }),
    )
    .await;

    let form = client_for(&server).form();
    let err = form
        .validate_field("dog_color", &FieldValue::from("Plaid"))
        .await
        .unwrap_err();

    match err {
        Error::Validation { message } => {
            // First five values plus an ellipsis marker; the sixth is elided.
            assert!(message.contains("Brindle"));
            assert!(message.contains("..."));
            assert!(!message.contains("Merle"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_validate_field_is_idempotent_and_fetches_once() {
    let mut server = mockito::Server::new_async().await;
    let dropdowns = mock_dropdowns(
        &mut server,
        json!({ "adopter_housing_type": ["Apartment", "House"] }),
    )
    .await;

    let form = client_for(&server).form();
    let value = FieldValue::from("Apartment");
    assert!(form
        .validate_field("adopter_housing_type", &value)
        .await
        .is_ok());
    assert!(form
        .validate_field("adopter_housing_type", &value)
        .await
        .is_ok());

    // Constraints were fetched exactly once despite two checks.
    dropdowns.assert_async().await;
}

#[tokio::test]
async fn test_unconstrained_fields_are_accepted() {
    let mut server = mockito::Server::new_async().await;
    let _dropdowns = mock_dropdowns(
        &mut server,
        json!({ "adopter_housing_type": ["Apartment", "House"] }),
    )
    .await;

    let form = client_for(&server).form();
    assert!(form
        .validate_field("dog_breed", &FieldValue::from("Anything Goes"))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_single_field_form_validates() {
    let mut server = mockito::Server::new_async().await;
    let _dropdowns = mock_dropdowns(&mut server, json!({})).await;

    let mut form = client_for(&server).form();
    form.set_dog_field("dog_breed", "Labrador Mix");
    assert!(form.validate().await.is_ok());
}

#[tokio::test]
async fn test_null_values_are_skipped_by_validation() {
    let mut server = mockito::Server::new_async().await;
    let _dropdowns = mock_dropdowns(
        &mut server,
        json!({ "adopter_housing_type": ["Apartment", "House"] }),
    )
    .await;

    let mut form = client_for(&server).form();
    // Null would fail the membership check if it were validated.
    form.set_adopter_field("adopter_housing_type", FieldValue::Null)
        .set_dog_field("dog_breed", "Labrador Mix");
    assert!(form.validate().await.is_ok());
}

#[tokio::test]
async fn test_load_sample_data_partitions_by_prefix() {
    let mut server = mockito::Server::new_async().await;
    let _sample = mock_sample(
        &mut server,
        json!({
            "adopter_has_kids": "No",
            "adopter_num_kids": 0,
            "dog_age": "Adult",
            "shelter_id": "S-17"
        }),
    )
    .await;

    let mut form = client_for(&server).form();
    form.load_sample_data().await.unwrap();

    assert_eq!(
        form.adopter_data()["adopter_has_kids"],
        FieldValue::Text("No".into())
    );
    assert_eq!(
        form.adopter_data()["adopter_num_kids"],
        FieldValue::Number(0.0)
    );
    assert_eq!(form.dog_data()["dog_age"], FieldValue::Text("Adult".into()));
    // Names matching neither prefix are dropped.
    assert!(!form.adopter_data().contains_key("shelter_id"));
    assert!(!form.dog_data().contains_key("shelter_id"));
}

#[tokio::test]
async fn test_all_fields_is_sorted_union_of_both_sources() {
    let mut server = mockito::Server::new_async().await;
    let _dropdowns = mock_dropdowns(
        &mut server,
        json!({ "dog_size": ["Small", "Medium", "Large"], "adopter_housing_type": ["Apartment"] }),
    )
    .await;
    let _sample = mock_sample(
        &mut server,
        json!({ "adopter_has_kids": "No", "dog_size": "Medium" }),
    )
    .await;

    let form = client_for(&server).form();
    let all = form.all_fields().await.unwrap();
    assert_eq!(
        all,
        vec!["adopter_has_kids", "adopter_housing_type", "dog_size"]
    );

    assert_eq!(
        form.adopter_fields().await.unwrap(),
        vec!["adopter_has_kids", "adopter_housing_type"]
    );
    assert_eq!(form.dog_fields().await.unwrap(), vec!["dog_size"]);
}

#[tokio::test]
async fn test_field_info_reports_constraints_and_category() {
    let mut server = mockito::Server::new_async().await;
    let _dropdowns = mock_dropdowns(
        &mut server,
        json!({ "adopter_housing_type": ["Apartment", "House"] }),
    )
    .await;

    let mut form = client_for(&server).form();
    form.set_adopter_field("adopter_housing_type", "House");

    let info = form.field_info("adopter_housing_type").await.unwrap();
    assert!(info.is_dropdown);
    assert_eq!(info.allowed_values, vec!["Apartment", "House"]);
    assert_eq!(info.current_value, Some(FieldValue::Text("House".into())));
    assert_eq!(info.category, FieldCategory::Adopter);

    let info = form.field_info("dog_breed").await.unwrap();
    assert!(!info.is_dropdown);
    assert!(info.allowed_values.is_empty());
    assert!(info.current_value.is_none());
    assert_eq!(info.category, FieldCategory::Dog);

    let info = form.field_info("shelter_id").await.unwrap();
    assert_eq!(info.category, FieldCategory::Unknown);
}

#[tokio::test]
async fn test_invalidate_caches_forces_refetch() {
    let mut server = mockito::Server::new_async().await;
    let dropdowns = server
        .mock("GET", "/form/dropdown-values")
        .with_status(200)
        .with_body(json!({ "dropdown_values": {} }).to_string())
        .expect(2)
        .create_async()
        .await;

    let form = client_for(&server).form();
    form.dropdown_values().await.unwrap();
    form.invalidate_caches().await;
    form.dropdown_values().await.unwrap();

    dropdowns.assert_async().await;
}

#[tokio::test]
async fn test_template_form_submits_without_extra_setup() {
    let mut server = mockito::Server::new_async().await;
    let _dropdowns = mock_dropdowns(&mut server, json!({})).await;
    let predict = server
        .mock("POST", "/predict/single")
        .match_query(Matcher::UrlEncoded(
            "include_explanation".into(),
            "false".into(),
        ))
        .with_status(200)
        .with_body(
            json!({
                "recommendation": "Good Match",
                "adoption_probability": 0.75,
                "confidence_score": 0.8,
                "model_version": "2.1.0",
                "timestamp": "2026-08-01T12:00:00Z"
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let form = AdoptionForm::from_template(client_for(&server), FormTemplate::SeniorAdopter);
    let prediction = form.submit(false).await.unwrap();
    assert_eq!(prediction.recommendation, "Good Match");
    predict.assert_async().await;
}
