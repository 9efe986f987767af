use std::collections::BTreeSet;

use uuid::Uuid;

pub struct CreateIngredientInput {
    pub name: String,
    pub description: String,
    pub linked_item_codes: BTreeSet<String>,
    pub image_url: Option<String>,
}

pub struct UpdateIngredientInput {
    pub ingredient_id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub linked_item_codes: Option<BTreeSet<String>>,
    pub image_url: Option<String>,
}
