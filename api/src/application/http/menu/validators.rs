use chrono::NaiveDate;
use menuplan_core::domain::menu::entities::DateRange;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::ApiError;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DateRangeQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl TryFrom<DateRangeQuery> for DateRange {
    type Error = ApiError;

    fn try_from(query: DateRangeQuery) -> Result<Self, Self::Error> {
        Ok(DateRange::new(query.from, query.to)?)
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SetMenuValidator {
    pub service_profile_id: Uuid,

    pub pathology_profile_id: Uuid,

    #[validate(length(min = 1, message = "menu_text is required"))]
    pub menu_text: String,
}

/// Both profile selections are required; an empty value is reported as a
/// missing selection.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateMenuValidator {
    #[serde(default)]
    pub service_profile_id: Option<String>,

    #[serde(default)]
    pub pathology_profile_id: Option<String>,
}

pub fn parse_profile_id(field: &str, value: Option<String>) -> Result<Option<Uuid>, ApiError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => Uuid::parse_str(raw)
            .map(Some)
            .map_err(|_| ApiError::BadRequest(format!("{field} must be a valid UUID"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_profile_id_is_missing() {
        assert_eq!(parse_profile_id("service_profile_id", None).unwrap(), None);
        assert_eq!(
            parse_profile_id("service_profile_id", Some("  ".to_string())).unwrap(),
            None
        );
    }

    #[test]
    fn malformed_profile_id_is_rejected() {
        assert!(matches!(
            parse_profile_id("service_profile_id", Some("abc".to_string())),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn reversed_range_is_rejected() {
        let query = DateRangeQuery {
            from: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            to: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        };

        assert!(matches!(
            DateRange::try_from(query),
            Err(ApiError::BadRequest(_))
        ));
    }
}
