use chrono::{
    Duration,
    NaiveDate
};

use crate::holiday::holidayerror::HolidayError;
use crate::holiday::holidayrule::{
    HolidayRule,
    HolidayRuleType
};
use crate::time::easter::easter_sunday;
use crate::time::mondayshift::next_or_same_monday;
use crate::time::utility::days_of_month;

/// Interprets the rule's type tag.
pub fn rule_kind(rule: &HolidayRule) -> Result<HolidayRuleType, HolidayError> {
    HolidayRuleType::parse(rule.rule_type()).ok_or_else(|| HolidayError::InvalidRuleType {
        rule: rule.name().to_owned(),
        value: rule.rule_type().to_owned()
    })
}

/// Derives the concrete date of `rule` in `year`.
pub fn resolve(rule: &HolidayRule, year: i32) -> Result<NaiveDate, HolidayError> {
    let date = match rule_kind(rule)? {
        HolidayRuleType::Fixed => fixed_date(rule, year)?,
        HolidayRuleType::FixedMondayShifted => next_or_same_monday(fixed_date(rule, year)?),
        HolidayRuleType::EasterRelative => easter_shifted_date(rule, year),
        HolidayRuleType::EasterRelativeMondayShifted => next_or_same_monday(easter_shifted_date(rule, year))
    };
    Ok(date)
}

fn fixed_date(rule: &HolidayRule, year: i32) -> Result<NaiveDate, HolidayError> {
    NaiveDate::from_ymd_opt(year, rule.month(), rule.day()).ok_or_else(|| HolidayError::InvalidCalendarDate {
        rule: rule.name().to_owned(),
        year,
        month: rule.month(),
        day: rule.day(),
        month_len: days_of_month(year, rule.month())
    })
}

fn easter_shifted_date(rule: &HolidayRule, year: i32) -> NaiveDate {
    easter_sunday(year) + Duration::days(rule.easter_offset_days() as i64)
}
