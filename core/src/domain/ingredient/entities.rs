use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{catalog::entities::CatalogItem, common::generate_uuid_v7};

pub const UNKNOWN_ITEM_DESCRIPTION: &str = "Unknown";

/// A named grouping of catalog items.
///
/// `linked_item_codes` is a soft link: codes are not checked against the
/// catalog when the ingredient is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub linked_item_codes: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Ingredient {
    pub fn new(
        name: String,
        description: String,
        linked_item_codes: BTreeSet<String>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id: generate_uuid_v7(),
            name,
            description,
            linked_item_codes,
            image_url,
        }
    }

    pub fn update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        linked_item_codes: Option<BTreeSet<String>>,
        image_url: Option<String>,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(codes) = linked_item_codes {
            self.linked_item_codes = codes;
        }
        if let Some(image_url) = image_url {
            self.image_url = if image_url.trim().is_empty() {
                None
            } else {
                Some(image_url)
            };
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LinkedCatalogItem {
    pub code: String,
    pub description: String,
    pub unit: Option<String>,
}

/// An ingredient with its linked codes resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientDetails {
    pub ingredient: Ingredient,
    pub linked_items: Vec<LinkedCatalogItem>,
}

impl IngredientDetails {
    pub fn resolve(ingredient: Ingredient, catalog: &[CatalogItem]) -> Self {
        let linked_items = ingredient
            .linked_item_codes
            .iter()
            .map(|code| match catalog.iter().find(|item| &item.code == code) {
                Some(item) => LinkedCatalogItem {
                    code: code.clone(),
                    description: item.description.clone(),
                    unit: Some(item.unit.clone()),
                },
                None => LinkedCatalogItem {
                    code: code.clone(),
                    description: UNKNOWN_ITEM_DESCRIPTION.to_string(),
                    unit: None,
                },
            })
            .collect();

        Self {
            ingredient,
            linked_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codes_resolve_to_placeholder() {
        let ingredient = Ingredient::new(
            "Fruit".to_string(),
            "Fresh fruit".to_string(),
            BTreeSet::from(["FRU-001".to_string(), "FRU-999".to_string()]),
            None,
        );

        let details = IngredientDetails::resolve(ingredient, &CatalogItem::demo_items());

        assert_eq!(details.linked_items.len(), 2);
        assert_eq!(details.linked_items[0].description, "Manzana Fuji");
        assert_eq!(details.linked_items[0].unit.as_deref(), Some("Kg"));
        assert_eq!(details.linked_items[1].description, UNKNOWN_ITEM_DESCRIPTION);
        assert_eq!(details.linked_items[1].unit, None);
    }

    #[test]
    fn blank_image_url_clears_it() {
        let mut ingredient = Ingredient::new(
            "Fruit".to_string(),
            String::new(),
            BTreeSet::new(),
            Some("https://example.com/fruit.png".to_string()),
        );

        ingredient.update(None, None, None, Some("  ".to_string()));

        assert_eq!(ingredient.image_url, None);
    }
}
