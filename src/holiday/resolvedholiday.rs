use chrono::NaiveDate;
use serde::Serialize;

use crate::holiday::holidayrule::HolidayRuleType;

/// A holiday materialized for one specific year. Built fresh on every
/// yearly-set construction and never mutated afterwards.
#[derive(PartialEq, Eq, Clone, Debug, Serialize)]
pub struct ResolvedHoliday {
    name: String,
    date: NaiveDate,
    rule_type: HolidayRuleType
}

impl ResolvedHoliday {
    pub fn new(name: String,
               date: NaiveDate,
               rule_type: HolidayRuleType) -> ResolvedHoliday {
        ResolvedHoliday {
            name,
            date,
            rule_type
        }
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn rule_type(&self) -> HolidayRuleType {
        self.rule_type
    }
}
