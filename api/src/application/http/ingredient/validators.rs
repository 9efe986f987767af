use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateIngredientValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub linked_item_codes: BTreeSet<String>,

    /// A blank value means no image.
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,
}

/// Custom deserializer that maps an empty or whitespace-only string to `None`
fn deserialize_blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    Ok(value.filter(|v| !v.trim().is_empty()))
}

/// Omitted fields are kept. An empty `image_url` removes the image.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateIngredientValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub linked_item_codes: Option<BTreeSet<String>>,

    #[serde(default)]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn create_payload(image_url: serde_json::Value) -> CreateIngredientValidator {
        serde_json::from_value(json!({"name": "Fruta", "image_url": image_url})).unwrap()
    }

    #[test]
    fn blank_image_url_is_accepted_as_none() {
        for blank in [json!(""), json!("   "), json!(null)] {
            let payload = create_payload(blank);

            assert_eq!(payload.image_url, None);
            assert!(payload.validate().is_ok());
        }
    }

    #[test]
    fn malformed_image_url_is_rejected() {
        let payload = create_payload(json!("not a url"));

        assert!(payload.validate().is_err());
    }

    #[test]
    fn valid_image_url_is_kept() {
        let payload = create_payload(json!("https://example.com/fruta.png"));

        assert_eq!(
            payload.image_url.as_deref(),
            Some("https://example.com/fruta.png")
        );
        assert!(payload.validate().is_ok());
    }
}
