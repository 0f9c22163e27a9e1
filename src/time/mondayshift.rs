use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

const ONE_DAY: Days = Days::new(1);

/// Advances `d` to the next Monday; a Monday comes back unchanged.
/// At most 6 single-day steps, so month and year rollovers are handled
/// by `NaiveDate` arithmetic.
pub fn next_or_same_monday(d: NaiveDate) -> NaiveDate {
    let mut shifted = d;
    while shifted.weekday() != Weekday::Mon {
        shifted = shifted + ONE_DAY;
    }
    shifted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monday_is_unchanged() {
        // 2025-01-06 is a Monday
        assert_eq!(next_or_same_monday(date(2025, 1, 6)), date(2025, 1, 6));
    }

    #[test]
    fn sunday_moves_one_day() {
        // 2025-07-20 is a Sunday
        assert_eq!(next_or_same_monday(date(2025, 7, 20)), date(2025, 7, 21));
    }

    #[test]
    fn tuesday_moves_six_days() {
        // 2025-01-07 is a Tuesday
        assert_eq!(next_or_same_monday(date(2025, 1, 7)), date(2025, 1, 13));
    }

    #[test]
    fn rolls_over_month_and_year() {
        // 2025-12-30 is a Tuesday; the next Monday is in 2026
        assert_eq!(next_or_same_monday(date(2025, 12, 30)), date(2026, 1, 5));
    }

    #[test]
    fn lands_on_monday_within_six_days() {
        let mut d = date(2024, 1, 1);
        let end = date(2024, 12, 31);
        while d <= end {
            let shifted = next_or_same_monday(d);
            assert_eq!(shifted.weekday(), Weekday::Mon);
            let gap = (shifted - d).num_days();
            assert!((0..=6).contains(&gap));
            d = d + ONE_DAY;
        }
    }

    #[test]
    fn idempotent() {
        let mut d = date(2025, 3, 1);
        let end = date(2025, 4, 30);
        while d <= end {
            let once = next_or_same_monday(d);
            assert_eq!(next_or_same_monday(once), once);
            d = d + ONE_DAY;
        }
    }
}
