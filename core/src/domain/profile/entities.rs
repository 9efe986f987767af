use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    storage::StorageKey,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    Service,
    Pathology,
}

impl ProfileType {
    pub fn storage_key(&self) -> StorageKey {
        match self {
            ProfileType::Service => StorageKey::ServiceProfiles,
            ProfileType::Pathology => StorageKey::PathologyProfiles,
        }
    }
}

impl fmt::Display for ProfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileType::Service => f.write_str("service"),
            ProfileType::Pathology => f.write_str("pathology"),
        }
    }
}

impl FromStr for ProfileType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "service" => Ok(ProfileType::Service),
            "pathology" => Ok(ProfileType::Pathology),
            other => Err(CoreError::Validation(format!(
                "invalid profile type: {other:?}"
            ))),
        }
    }
}

/// A named dietary rule-set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub profile_type: ProfileType,
    pub rules: String,
}

impl Profile {
    pub fn new(profile_type: ProfileType, name: String, rules: String) -> Self {
        Self {
            id: generate_uuid_v7(),
            name,
            profile_type,
            rules,
        }
    }

    pub fn update(&mut self, name: Option<String>, rules: Option<String>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(rules) = rules {
            self.rules = rules;
        }
    }

    /// Text handed to the menu prompt, e.g. `"Vegetarian: no meat"`.
    pub fn prompt_text(&self) -> String {
        format!("{}: {}", self.name, self.rules)
    }
}
