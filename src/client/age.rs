//! Whole-years age calculation

use chrono::{Datelike, NaiveDateTime};

/// Age in completed years at `now`.
///
/// The year difference is reduced by one when `(month, day)` of `now` sorts
/// before that of `birth`. Feb 29 gets no special treatment. Birth dates in
/// the future yield 0.
pub fn age_at(birth: NaiveDateTime, now: NaiveDateTime) -> u32 {
    let mut years = now.year() - birth.year();
    if (now.month(), now.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_birthday_not_yet_reached() {
        assert_eq!(age_at(at(1990, 5, 20), at(2024, 1, 1)), 33);
        assert_eq!(age_at(at(1990, 5, 20), at(2024, 5, 19)), 33);
    }

    #[test]
    fn test_birthday_reached() {
        assert_eq!(age_at(at(1990, 5, 20), at(2024, 5, 20)), 34);
        assert_eq!(age_at(at(1990, 5, 20), at(2024, 12, 31)), 34);
    }

    #[test]
    fn test_time_of_day_is_ignored() {
        let birth = NaiveDate::from_ymd_opt(1990, 5, 20)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(age_at(birth, at(2024, 5, 20)), 34);
    }

    #[test]
    fn test_future_birth_is_zero() {
        assert_eq!(age_at(at(2030, 1, 1), at(2024, 6, 1)), 0);
        assert_eq!(age_at(at(2024, 6, 2), at(2024, 6, 1)), 0);
    }

    #[test]
    fn test_leap_day_is_plain_month_day() {
        // (2, 28) < (2, 29) so the birthday has not been reached yet
        assert_eq!(age_at(at(2000, 2, 29), at(2023, 2, 28)), 22);
        assert_eq!(age_at(at(2000, 2, 29), at(2023, 3, 1)), 23);
        assert_eq!(age_at(at(2000, 2, 29), at(2024, 2, 29)), 24);
    }
}
