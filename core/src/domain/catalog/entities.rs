use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A purchasable food article, keyed by its code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogItem {
    pub code: String,
    pub description: String,
    pub unit: String,
}

impl CatalogItem {
    pub fn new(code: String, description: String, unit: String) -> Self {
        Self {
            code,
            description,
            unit,
        }
    }

    /// Items written when the catalog has never been initialised.
    pub fn demo_items() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new("FRU-001".into(), "Manzana Fuji".into(), "Kg".into()),
            CatalogItem::new("VEG-002".into(), "Zanahoria".into(), "Kg".into()),
            CatalogItem::new("PRO-003".into(), "Pechuga de Pollo".into(), "Kg".into()),
        ]
    }
}
