use std::sync::Arc;

use chrono::{
    Datelike,
    NaiveDate
};
use log::debug;
use serde::Serialize;

use crate::holiday::holidayerror::HolidayError;
use crate::holiday::resolvedholiday::ResolvedHoliday;
use crate::holiday::rulestore::RuleStore;
use crate::holiday::yearlyholidayset::build_year;

/// Answer of a point query.
#[derive(Clone, Debug, Serialize)]
pub struct HolidayMatch {
    is_holiday: bool,
    name: Option<String>
}

impl HolidayMatch {
    fn holiday(name: String) -> HolidayMatch {
        HolidayMatch {
            is_holiday: true,
            name: Some(name)
        }
    }

    fn working_day() -> HolidayMatch {
        HolidayMatch {
            is_holiday: false,
            name: None
        }
    }

    pub fn is_holiday(&self) -> bool {
        self.is_holiday
    }

    pub fn name(&self) -> Option<&String> {
        self.name.as_ref()
    }
}

/// Entry point of the engine. Holds the rule store it was wired with at
/// construction; every query loads a fresh snapshot and recomputes the
/// yearly set, so calls are independent and safe to run concurrently.
pub struct HolidayQueryService {
    rule_store: Arc<dyn RuleStore>
}

impl HolidayQueryService {
    pub fn new(rule_store: Arc<dyn RuleStore>) -> HolidayQueryService {
        HolidayQueryService { rule_store }
    }

    /// Checks whether `date` is a holiday, scanning the materialized
    /// yearly set for an exact match. When several rules resolve to the
    /// same date, the first one in rule-collection order names the match.
    pub fn is_holiday(&self, date: Option<NaiveDate>) -> Result<HolidayMatch, HolidayError> {
        let date = date.ok_or(HolidayError::InvalidInput)?;
        let rules = self.rule_store.load_rules();
        let year_set = build_year(&rules, date.year())?;
        debug!("matching {} against {} holidays", date, year_set.len());
        for holiday in year_set {
            if holiday.date() == date {
                return Ok(HolidayMatch::holiday(holiday.name().to_owned()));
            }
        }
        Ok(HolidayMatch::working_day())
    }

    /// All holidays of `year`, in rule-collection order.
    pub fn list_year(&self, year: i32) -> Result<Vec<ResolvedHoliday>, HolidayError> {
        let rules = self.rule_store.load_rules();
        build_year(&rules, year)
    }
}
