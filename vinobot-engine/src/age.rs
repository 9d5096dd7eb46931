//! Birth-date parsing and age calculation for the age gate.

use chrono::NaiveDate;

/// Parses a strict `DD.MM.YYYY` date: exactly ten characters, digits in the
/// day/month/year positions, dots at positions 2 and 5, and a valid calendar
/// date. Anything else is None.
pub fn parse_birth_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'.' || bytes[5] != b'.' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| if i == 2 || i == 5 { true } else { b.is_ascii_digit() });
    if !digits_ok {
        return None;
    }

    let day: u32 = text[0..2].parse().ok()?;
    let month: u32 = text[3..5].parse().ok()?;
    let year: i32 = text[6..10].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Full years between `birth` and `today`: the year difference, decremented
/// when the birthday has not yet been reached this year.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    use chrono::Datelike;
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_valid_date() {
        assert_eq!(parse_birth_date("01.01.2000"), Some(date(2000, 1, 1)));
        assert_eq!(parse_birth_date("29.02.2004"), Some(date(2004, 2, 29)));
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert_eq!(parse_birth_date("1.1.2000"), None);
        assert_eq!(parse_birth_date("01-01-2000"), None);
        assert_eq!(parse_birth_date("01.01.00"), None);
        assert_eq!(parse_birth_date("01.01.2000 "), None);
        assert_eq!(parse_birth_date("ab.cd.efgh"), None);
        assert_eq!(parse_birth_date(""), None);
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert_eq!(parse_birth_date("32.01.2000"), None);
        assert_eq!(parse_birth_date("29.02.2003"), None);
        assert_eq!(parse_birth_date("01.13.2000"), None);
    }

    #[test]
    fn test_age_adult_scenario() {
        // Born 01.01.2000, system date 2024-06-01: age 24.
        assert_eq!(age_on(date(2000, 1, 1), date(2024, 6, 1)), 24);
    }

    #[test]
    fn test_age_minor_scenario() {
        // Born 01.01.2010, system date 2024-06-01: age 14.
        assert_eq!(age_on(date(2010, 1, 1), date(2024, 6, 1)), 14);
    }

    #[test]
    fn test_age_decrements_before_birthday() {
        // Birthday later this year: still 17.
        assert_eq!(age_on(date(2006, 12, 31), date(2024, 6, 1)), 17);
        // Birthday today: 18.
        assert_eq!(age_on(date(2006, 6, 1), date(2024, 6, 1)), 18);
        // Birthday yesterday: 18.
        assert_eq!(age_on(date(2006, 5, 31), date(2024, 6, 1)), 18);
    }
}
