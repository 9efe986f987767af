use std::fmt;

/// Keys under which each collection is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    CatalogItems,
    Ingredients,
    ServiceProfiles,
    PathologyProfiles,
    ScheduledMenus,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::CatalogItems => "catalog-items",
            StorageKey::Ingredients => "ingredients",
            StorageKey::ServiceProfiles => "service-profiles",
            StorageKey::PathologyProfiles => "pathology-profiles",
            StorageKey::ScheduledMenus => "scheduled-menus",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
