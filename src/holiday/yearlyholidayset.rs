use log::debug;

use crate::holiday::holidayerror::HolidayError;
use crate::holiday::holidayrule::HolidayRule;
use crate::holiday::resolvedholiday::ResolvedHoliday;
use crate::holiday::ruleevaluator::{
    resolve,
    rule_kind
};

/// Materializes every rule for `year`, in collection order.
///
/// The first rule that fails resolution aborts the whole build; the
/// caller sees a complete yearly set or a single error, never a
/// truncated list.
pub fn build_year(rules: &[HolidayRule], year: i32) -> Result<Vec<ResolvedHoliday>, HolidayError> {
    let mut resolved = Vec::with_capacity(rules.len());
    for rule in rules {
        let kind = rule_kind(rule)?;
        let date = resolve(rule, year)?;
        resolved.push(ResolvedHoliday::new(rule.name().to_owned(), date, kind));
    }
    debug!("materialized {} holidays for year {}", resolved.len(), year);
    Ok(resolved)
}
