pub struct CreateCatalogItemInput {
    pub code: String,
    pub description: String,
    pub unit: String,
}

/// Full replacement of the item currently stored under `code`.
pub struct UpdateCatalogItemInput {
    pub code: String,
    pub new_code: String,
    pub description: String,
    pub unit: String,
}
