use thiserror::Error;

/// Failures of the computation engine. None of these are recovered
/// internally; each aborts the running resolve/build/query call and
/// carries the rule name and offending value for the caller to report.
#[derive(Debug, Error)]
pub enum HolidayError {
    #[error("a valid calendar date is required")]
    InvalidInput,

    #[error("rule '{rule}': no day {day} in month {month} of year {year} (month has {month_len} days)")]
    InvalidCalendarDate {
        rule: String,
        year: i32,
        month: u32,
        day: u32,
        month_len: u32
    },

    #[error("rule '{rule}': unrecognized rule type '{value}'")]
    InvalidRuleType {
        rule: String,
        value: String
    }
}

/// Failures of the JSON-backed rule store's load path. These never cross
/// the engine's query contracts.
#[derive(Debug, Error)]
pub enum RuleStoreError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error)
}
