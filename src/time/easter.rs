use chrono::{
    Duration,
    NaiveDate
};

/// Palm Sunday of `year` by the Gauss congruence computus:
/// March 15 plus `d + e` days.
pub fn palm_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year % 4;
    let c = year % 7;
    let d = (19 * a + 24) % 30;
    let e = (2 * b + 4 * c + 6 * d + 5) % 7;
    // March 15 exists in every year
    let march_15 = NaiveDate::from_ymd_opt(year, 3, 15).unwrap();
    march_15 + Duration::days((d + e) as i64)
}

/// Easter Sunday of `year`, one week after Palm Sunday.
pub fn easter_sunday(year: i32) -> NaiveDate {
    palm_sunday(year) + Duration::days(7)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn easter_2023() {
        assert_eq!(easter_sunday(2023), date(2023, 4, 9));
    }

    #[test]
    fn easter_2024() {
        assert_eq!(easter_sunday(2024), date(2024, 3, 31));
    }

    #[test]
    fn easter_2025() {
        assert_eq!(easter_sunday(2025), date(2025, 4, 20));
    }

    #[test]
    fn palm_sunday_one_week_before_easter() {
        for year in 2000..2100 {
            assert_eq!(palm_sunday(year) + Duration::days(7), easter_sunday(year));
        }
    }

    #[test]
    fn palm_sunday_2025() {
        assert_eq!(palm_sunday(2025), date(2025, 4, 13));
    }
}
