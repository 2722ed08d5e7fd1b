//! Product data model.
//!
//! `Product` is the stored record, `NewProduct` the creation payload with
//! all business fields required, and `ProductPatch` the update payload
//! where every field is optional. Fields omitted from a patch keep their
//! stored values.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Storage-assigned unique identifier (24-char hex), immutable
    #[schema(example = "64b7f3a2e4b0c93f5a1d2e3f")]
    pub id: String,

    /// Product category
    #[schema(example = "Clothing")]
    pub category: String,

    /// Product name
    #[schema(example = "dress")]
    pub name: String,

    /// Product size
    #[schema(example = "S")]
    pub size: String,

    /// Product value
    #[schema(example = 39.90)]
    pub value: f64,
}

/// Payload for creating a product. All four fields are required.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct NewProduct {
    pub category: String,
    pub name: String,
    pub size: String,
    pub value: f64,
}

impl NewProduct {
    /// Reject empty required fields. Presence is already enforced by
    /// typed deserialization; this catches `""` values.
    pub fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("category", &self.category),
            ("name", &self.name),
            ("size", &self.size),
        ] {
            if value.trim().is_empty() {
                return Err(format!("field `{field}` must not be empty"));
            }
        }
        Ok(())
    }
}

/// Payload for updating a product. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl ProductPatch {
    /// True when the patch carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.name.is_none() && self.size.is_none() && self.value.is_none()
    }
}

/// Outcome of an update: how many records matched the id and how many
/// were actually modified
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateSummary {
    pub matched: u64,
    pub modified: u64,
}

/// Outcome of a delete: how many records were removed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeleteSummary {
    pub deleted: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewProduct {
        NewProduct {
            category: "Clothing".to_string(),
            name: "dress".to_string(),
            size: "S".to_string(),
            value: 39.90,
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_empty_field_rejected() {
        let mut input = sample();
        input.name = "   ".to_string();
        let err = input.validate().unwrap_err();
        assert!(err.contains("name"));
    }

    #[test]
    fn test_missing_field_fails_deserialization() {
        let body = serde_json::json!({
            "category": "Clothing",
            "name": "dress",
            "size": "S"
        });
        assert!(serde_json::from_value::<NewProduct>(body).is_err());
    }

    #[test]
    fn test_patch_empty_detection() {
        assert!(ProductPatch::default().is_empty());

        let patch = ProductPatch {
            value: Some(29.90),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
