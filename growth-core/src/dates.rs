use chrono::{Duration, NaiveDate};
use std::str::FromStr;
use strum_macros::EnumString;

/// ISO format used in the backing file and always accepted as input.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Relative day keywords accepted wherever a date is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum DayKeyword {
    Today,
    Yesterday,
    Tomorrow,
}

impl DayKeyword {
    pub fn resolve(self, reference_date: NaiveDate) -> NaiveDate {
        match self {
            DayKeyword::Today => reference_date,
            DayKeyword::Yesterday => reference_date - Duration::days(1),
            DayKeyword::Tomorrow => reference_date + Duration::days(1),
        }
    }
}

/// Parses a user supplied date.
///
/// Tries, in order: a [`DayKeyword`] relative to `reference_date`, the ISO
/// format, then each of `formats`.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use growth_core::dates::parse_date;
/// let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
///
/// assert_eq!(parse_date("yesterday", today, &[]), NaiveDate::from_ymd_opt(2024, 1, 1));
/// assert_eq!(parse_date("2024-03-05", today, &[]), NaiveDate::from_ymd_opt(2024, 3, 5));
/// assert_eq!(parse_date("nope", today, &[]), None);
/// ```
pub fn parse_date(input: &str, reference_date: NaiveDate, formats: &[String]) -> Option<NaiveDate> {
    let input = input.trim();
    if let Ok(keyword) = DayKeyword::from_str(input) {
        return Some(keyword.resolve(reference_date));
    }
    std::iter::once(ISO_FORMAT)
        .chain(formats.iter().map(String::as_str))
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(parse_date("TODAY", anchor(), &[]), Some(anchor()));
        assert_eq!(
            parse_date("Tomorrow", anchor(), &[]),
            NaiveDate::from_ymd_opt(2025, 8, 16)
        );
    }

    #[test]
    fn custom_formats_are_tried_after_iso() {
        let fmts = vec!["%d/%m/%Y".to_string()];
        assert_eq!(
            parse_date("01/08/2025", anchor(), &fmts),
            NaiveDate::from_ymd_opt(2025, 8, 1)
        );
        assert_eq!(parse_date("01/08/2025", anchor(), &[]), None);
    }
}
