use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SetMenuInput {
    pub date: NaiveDate,
    pub service_profile_id: Uuid,
    pub pathology_profile_id: Uuid,
    pub menu_text: String,
}

/// Profile ids are optional here so a missing selection surfaces as a
/// validation error rather than a lookup miss.
#[derive(Debug, Clone)]
pub struct GenerateMenuInput {
    pub date: NaiveDate,
    pub service_profile_id: Option<Uuid>,
    pub pathology_profile_id: Option<Uuid>,
}
