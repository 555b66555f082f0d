//! Prebuilt starting configurations for common adoption scenarios.

use super::AdoptionForm;
use crate::types::FieldValue;

/// Named starter configurations.
///
/// Applying one only sets local field values — no validation, no network.
/// The values are starting points a counselor refines, not complete
/// profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTemplate {
    /// Minimal sensible defaults.
    Basic,
    /// Suburban family with school-age children.
    FamilyWithKids,
    /// Small-dog setup for shared housing.
    ApartmentDweller,
    /// Low-energy companion for an older adopter.
    SeniorAdopter,
}

impl FormTemplate {
    pub(crate) fn populate(self, form: &mut AdoptionForm) {
        match self {
            FormTemplate::Basic => {
                form.set_adopter_data([
                    ("adopter_housing_type", FieldValue::from("Suburban Home")),
                    ("adopter_has_kids", FieldValue::from("No")),
                    ("adopter_previous_dog_experience", FieldValue::from("Moderate")),
                    ("adopter_long_term_commitment", FieldValue::from("Yes")),
                ]);
                form.set_dog_data([
                    ("dog_age", FieldValue::from("Adult")),
                    ("dog_size", FieldValue::from("Medium")),
                    ("dog_energyLevel", FieldValue::from("Moderate")),
                ]);
            }
            FormTemplate::FamilyWithKids => {
                form.set_adopter_data([
                    ("adopter_housing_type", FieldValue::from("Suburban Home")),
                    ("adopter_has_kids", FieldValue::from("Yes")),
                    ("adopter_num_kids", FieldValue::from(2.0)),
                    ("adopter_kids_ages", FieldValue::from("8, 12")),
                    ("adopter_kids_dog_experience", FieldValue::from("Good")),
                    ("adopter_yard_type", FieldValue::from("Fenced")),
                    ("adopter_preferred_size", FieldValue::from("Medium")),
                    ("adopter_previous_dog_experience", FieldValue::from("Moderate")),
                ]);
                form.set_dog_data([
                    ("dog_kids", FieldValue::from("Yes")),
                    ("dog_size", FieldValue::from("Medium")),
                    ("dog_energyLevel", FieldValue::from("Moderate")),
                    ("dog_housetrained", FieldValue::from("Yes")),
                ]);
            }
            FormTemplate::ApartmentDweller => {
                form.set_adopter_data([
                    ("adopter_housing_type", FieldValue::from("Apartment")),
                    ("adopter_has_kids", FieldValue::from("No")),
                    ("adopter_yard_type", FieldValue::from("Shared")),
                    ("adopter_preferred_size", FieldValue::from("Small")),
                    ("adopter_exercise_routine", FieldValue::from("Walks")),
                ]);
                form.set_dog_data([
                    ("dog_size", FieldValue::from("Small")),
                    ("dog_apartment", FieldValue::from("Yes")),
                    ("dog_energyLevel", FieldValue::from("Low")),
                    ("dog_vocal", FieldValue::from("Quiet")),
                ]);
            }
            FormTemplate::SeniorAdopter => {
                form.set_adopter_data([
                    ("adopter_housing_type", FieldValue::from("Condo")),
                    ("adopter_has_kids", FieldValue::from("No")),
                    ("adopter_preferred_age", FieldValue::from("Senior")),
                    ("adopter_preferred_energy_level", FieldValue::from("Low")),
                    ("adopter_exercise_routine", FieldValue::from("Walks")),
                ]);
                form.set_dog_data([
                    ("dog_age", FieldValue::from("Senior")),
                    ("dog_energyLevel", FieldValue::from("Low")),
                    ("dog_oKForSeniors", FieldValue::from("Yes")),
                    ("dog_gentle", FieldValue::from("Yes")),
                ]);
            }
        }
    }
}
