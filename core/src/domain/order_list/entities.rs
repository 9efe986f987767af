use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const UNKNOWN_PROFILE_NAME: &str = "Unknown";

/// A scheduled menu with its profile names resolved for printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderListEntry {
    pub date: NaiveDate,
    pub service_profile_name: String,
    pub pathology_profile_name: String,
    pub menu_text: String,
}
