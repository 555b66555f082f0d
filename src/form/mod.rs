//! Form accumulation, validation and submission.

mod cache;
mod templates;

pub use templates::FormTemplate;

use crate::facade::FurSightClient;
use crate::types::{
    DropdownValues, FieldCategory, FieldInfo, FieldMap, FieldValue, PredictionResponse,
    ADOPTER_PREFIX, DOG_PREFIX,
};
use crate::{Error, Result};
use cache::RemoteCache;
use std::collections::BTreeSet;

/// Incremental builder for an adoption prediction form.
///
/// Accumulates adopter-side and dog-side fields, validates them against the
/// server's dropdown constraints, and submits the merged set for
/// prediction. Setters mutate in place and return `&mut Self` for
/// chaining. Nothing is validated at set time — partially-invalid
/// intermediate states are fine until [`AdoptionForm::validate`] or
/// [`AdoptionForm::submit`] runs.
///
/// Dropdown constraints and sample data are fetched at most once per form
/// instance (the constraint set is stable for the lifetime of a
/// form-filling session); [`AdoptionForm::invalidate_caches`] forces a
/// re-fetch.
pub struct AdoptionForm {
    client: FurSightClient,
    adopter_data: FieldMap,
    dog_data: FieldMap,
    dropdown_cache: RemoteCache<DropdownValues>,
    sample_cache: RemoteCache<FieldMap>,
}

impl AdoptionForm {
    pub fn new(client: FurSightClient) -> Self {
        Self {
            client,
            adopter_data: FieldMap::new(),
            dog_data: FieldMap::new(),
            dropdown_cache: RemoteCache::new(),
            sample_cache: RemoteCache::new(),
        }
    }

    /// Start a form pre-populated from a named template. Purely local; no
    /// validation or network access happens here.
    pub fn from_template(client: FurSightClient, template: FormTemplate) -> Self {
        let mut form = Self::new(client);
        template.populate(&mut form);
        form
    }

    /// Allowed-value lists per constrained field, fetched once per form.
    pub async fn dropdown_values(&self) -> Result<DropdownValues> {
        let client = self.client.clone();
        self.dropdown_cache
            .get_or_fetch(|| async move { client.dropdown_values().await })
            .await
    }

    /// Exemplar field set, fetched once per form.
    pub async fn sample_data(&self) -> Result<FieldMap> {
        let client = self.client.clone();
        self.sample_cache
            .get_or_fetch(|| async move { client.sample_data().await })
            .await
    }

    /// Drop both metadata caches; the next use re-fetches from the service.
    pub async fn invalidate_caches(&self) {
        self.dropdown_cache.invalidate().await;
        self.sample_cache.invalidate().await;
    }

    /// Set one adopter-side field.
    pub fn set_adopter_field(
        &mut self,
        field_name: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> &mut Self {
        self.adopter_data.insert(field_name.into(), value.into());
        self
    }

    /// Set one dog-side field.
    pub fn set_dog_field(
        &mut self,
        field_name: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> &mut Self {
        self.dog_data.insert(field_name.into(), value.into());
        self
    }

    /// Bulk-merge adopter-side fields, overwriting existing keys.
    pub fn set_adopter_data<K, V, I>(&mut self, data: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        for (field_name, value) in data {
            self.adopter_data.insert(field_name.into(), value.into());
        }
        self
    }

    /// Bulk-merge dog-side fields, overwriting existing keys.
    pub fn set_dog_data<K, V, I>(&mut self, data: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        for (field_name, value) in data {
            self.dog_data.insert(field_name.into(), value.into());
        }
        self
    }

    /// Fetch sample data (cached) and merge it into the form, partitioned by
    /// the prefix convention. Existing keys are overwritten; names matching
    /// neither prefix are skipped.
    pub async fn load_sample_data(&mut self) -> Result<&mut Self> {
        let sample = self.sample_data().await?;
        for (field_name, value) in sample {
            match FieldCategory::of(&field_name) {
                FieldCategory::Adopter => {
                    self.adopter_data.insert(field_name, value);
                }
                FieldCategory::Dog => {
                    self.dog_data.insert(field_name, value);
                }
                FieldCategory::Unknown => {}
            }
        }
        Ok(self)
    }

    /// Check one value against the dropdown constraints.
    ///
    /// Fields absent from the constraint mapping (or with an empty allowed
    /// list) are accepted unconditionally. Has no observable effect beyond
    /// possibly populating the constraint cache.
    pub async fn validate_field(&self, field_name: &str, value: &FieldValue) -> Result<()> {
        let dropdown_values = self.dropdown_values().await?;
        let Some(allowed) = dropdown_values.get(field_name) else {
            return Ok(());
        };
        if allowed.is_empty() {
            return Ok(());
        }

        let candidate = value.to_string();
        if allowed.iter().any(|v| v == &candidate) {
            return Ok(());
        }

        let mut shown = allowed
            .iter()
            .take(5)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        if allowed.len() > 5 {
            shown.push_str(", ...");
        }
        Err(Error::validation(format!(
            "field '{}' must be one of: {} (received '{}')",
            field_name, shown, candidate
        )))
    }

    /// Validate every set field with a non-null value, then require the
    /// form to be non-empty. Stops at the first failing field.
    pub async fn validate(&self) -> Result<()> {
        for (field_name, value) in self.adopter_data.iter().chain(self.dog_data.iter()) {
            if !value.is_null() {
                self.validate_field(field_name, value).await?;
            }
        }

        if self.adopter_data.is_empty() && self.dog_data.is_empty() {
            return Err(Error::validation(
                "form must contain at least some adopter or dog data",
            ));
        }

        Ok(())
    }

    /// Validate, then submit the merged partitions for prediction. A
    /// validation failure is raised before any predict call goes out.
    pub async fn submit(&self, include_explanation: bool) -> Result<PredictionResponse> {
        self.validate().await?;
        self.client
            .predict_single(&self.adopter_data, &self.dog_data, include_explanation)
            .await
    }

    /// Reset both partitions to empty.
    pub fn clear(&mut self) -> &mut Self {
        self.adopter_data.clear();
        self.dog_data.clear();
        self
    }

    /// Flatten both partitions into one mapping.
    pub fn to_map(&self) -> FieldMap {
        let mut merged = self.adopter_data.clone();
        merged.extend(self.dog_data.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    /// Reset and repopulate from a flat mapping, partitioned by the prefix
    /// convention. Keys matching neither prefix are silently dropped.
    pub fn from_map(&mut self, data: FieldMap) -> &mut Self {
        self.clear();
        for (field_name, value) in data {
            match FieldCategory::of(&field_name) {
                FieldCategory::Adopter => {
                    self.adopter_data.insert(field_name, value);
                }
                FieldCategory::Dog => {
                    self.dog_data.insert(field_name, value);
                }
                FieldCategory::Unknown => {}
            }
        }
        self
    }

    /// Constraint, current-value and category info for one field.
    pub async fn field_info(&self, field_name: &str) -> Result<FieldInfo> {
        let dropdown_values = self.dropdown_values().await?;
        let current_value = self
            .adopter_data
            .get(field_name)
            .or_else(|| self.dog_data.get(field_name))
            .cloned();

        Ok(FieldInfo {
            field_name: field_name.to_string(),
            is_dropdown: dropdown_values.contains_key(field_name),
            allowed_values: dropdown_values.get(field_name).cloned().unwrap_or_default(),
            current_value,
            category: FieldCategory::of(field_name),
        })
    }

    /// Union of field names known from constraints and sample data,
    /// deduplicated and sorted. Forces both fetches if not yet cached.
    pub async fn all_fields(&self) -> Result<Vec<String>> {
        let dropdown_values = self.dropdown_values().await?;
        let sample = self.sample_data().await?;
        let names: BTreeSet<String> = dropdown_values
            .keys()
            .chain(sample.keys())
            .cloned()
            .collect();
        Ok(names.into_iter().collect())
    }

    /// Known adopter-side field names, sorted.
    pub async fn adopter_fields(&self) -> Result<Vec<String>> {
        Ok(self
            .all_fields()
            .await?
            .into_iter()
            .filter(|f| f.starts_with(ADOPTER_PREFIX))
            .collect())
    }

    /// Known dog-side field names, sorted.
    pub async fn dog_fields(&self) -> Result<Vec<String>> {
        Ok(self
            .all_fields()
            .await?
            .into_iter()
            .filter(|f| f.starts_with(DOG_PREFIX))
            .collect())
    }

    /// Read access to the adopter-side partition.
    pub fn adopter_data(&self) -> &FieldMap {
        &self.adopter_data
    }

    /// Read access to the dog-side partition.
    pub fn dog_data(&self) -> &FieldMap {
        &self.dog_data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    fn offline_form() -> AdoptionForm {
        // Default endpoint; none of these tests issue requests.
        let client = FurSightClient::new(ClientConfig::new("test-key")).unwrap();
        AdoptionForm::new(client)
    }

    #[test]
    fn test_setters_chain_and_partition() {
        let mut form = offline_form();
        form.set_adopter_field("adopter_has_kids", "Yes")
            .set_dog_field("dog_size", "Medium")
            .set_adopter_field("adopter_num_kids", 2.0);

        assert_eq!(form.adopter_data().len(), 2);
        assert_eq!(form.dog_data().len(), 1);
        assert_eq!(
            form.adopter_data()["adopter_num_kids"],
            FieldValue::Number(2.0)
        );
    }

    #[test]
    fn test_bulk_merge_overwrites_existing_keys() {
        let mut form = offline_form();
        form.set_adopter_field("adopter_has_kids", "No");
        form.set_adopter_data([("adopter_has_kids", "Yes"), ("adopter_yard_type", "Fenced")]);

        assert_eq!(
            form.adopter_data()["adopter_has_kids"],
            FieldValue::Text("Yes".into())
        );
        assert_eq!(form.adopter_data().len(), 2);
    }

    #[test]
    fn test_clear_resets_both_partitions() {
        let mut form = offline_form();
        form.set_adopter_field("adopter_has_kids", "Yes")
            .set_dog_field("dog_size", "Medium")
            .clear();
        assert!(form.adopter_data().is_empty());
        assert!(form.dog_data().is_empty());
    }

    #[test]
    fn test_map_round_trip() {
        let mut form = offline_form();
        form.set_adopter_field("adopter_housing_type", "Apartment")
            .set_dog_field("dog_breed", "Labrador Mix")
            .set_dog_field("dog_sizeCurrent", 42.5);

        let snapshot = form.to_map();
        let mut restored = offline_form();
        restored.from_map(snapshot);

        assert_eq!(restored.adopter_data(), form.adopter_data());
        assert_eq!(restored.dog_data(), form.dog_data());
    }

    #[test]
    fn test_from_map_drops_unknown_prefixes() {
        let mut data = FieldMap::new();
        data.insert("adopter_has_kids".into(), FieldValue::from("Yes"));
        data.insert("shelter_id".into(), FieldValue::from("S-17"));

        let mut form = offline_form();
        form.from_map(data);
        assert_eq!(form.adopter_data().len(), 1);
        assert!(form.dog_data().is_empty());
    }

    #[tokio::test]
    async fn test_validate_rejects_structurally_empty_form() {
        let form = offline_form();
        // No network: the field loop is empty, so the emptiness check fires
        // before any constraint fetch could happen.
        let err = form.validate().await.unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }
}
