use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

/// The generated menu bound to one calendar date. The date is the unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScheduledMenu {
    pub date: NaiveDate,
    pub service_profile_id: Uuid,
    pub pathology_profile_id: Uuid,
    pub menu_text: String,
}

impl ScheduledMenu {
    pub fn new(
        date: NaiveDate,
        service_profile_id: Uuid,
        pathology_profile_id: Uuid,
        menu_text: String,
    ) -> Self {
        Self {
            date,
            service_profile_id,
            pathology_profile_id,
            menu_text,
        }
    }
}

/// Inclusive calendar interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, CoreError> {
        if from > to {
            return Err(CoreError::Validation(format!(
                "range start {from} is after range end {to}"
            )));
        }

        Ok(Self { from, to })
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn range_is_inclusive() {
        let range = DateRange::new(day(1), day(3)).unwrap();

        assert!(range.contains(day(1)));
        assert!(range.contains(day(3)));
        assert!(!range.contains(day(4)));
    }

    #[test]
    fn single_day_range_is_valid() {
        assert!(DateRange::new(day(2), day(2)).is_ok());
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert!(matches!(
            DateRange::new(day(3), day(1)),
            Err(CoreError::Validation(_))
        ));
    }
}
