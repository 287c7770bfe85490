//! Common types and utilities shared across handlers and services
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Wire format of every date accepted or produced by the API
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Birthdate range parameters for filtering owners, both bounds inclusive
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateRangeParams {
    /// Lower bound in `yyyy-MM-dd`
    #[param(example = "1960-01-01")]
    pub from: String,
    /// Upper bound in `yyyy-MM-dd`
    #[param(example = "1969-12-31")]
    pub to: String,
}

impl DateRangeParams {
    /// Parses both bounds. A bound that is not a `yyyy-MM-dd` calendar date is
    /// reported as invalid input naming the offending parameter.
    pub fn to_date_range(&self) -> Result<(NaiveDate, NaiveDate), ServiceError> {
        let from = parse_date(&self.from).ok_or_else(|| {
            ServiceError::InvalidInput(format!("Invalid date 'from': {}", self.from))
        })?;
        let to = parse_date(&self.to)
            .ok_or_else(|| ServiceError::InvalidInput(format!("Invalid date 'to': {}", self.to)))?;
        Ok((from, to))
    }
}

/// Strict `yyyy-MM-dd` parsing: exactly ten characters, zero padded, digits only
/// apart from the two dashes.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_only = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_only {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// First eight characters of a uuid, used for compact log fields
pub fn short_id(id: &Uuid) -> String {
    id.simple().to_string()[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1960-05-01", Some((1960, 5, 1)))]
    #[case("2000-02-29", Some((2000, 2, 29)))]
    #[case("1999-02-29", None)]
    #[case("2020-13-01", None)]
    #[case("2020-1-01", None)]
    #[case("2020-01-1", None)]
    #[case("01.05.1960", None)]
    #[case("abc", None)]
    #[case("", None)]
    #[case(" 2020-01-01", None)]
    #[case("+020-01-01", None)]
    #[case("-001-01-01", None)]
    #[case("2020-01- 1", None)]
    #[case("2020- 1-01", None)]
    #[case(" 999-01-01", None)]
    #[case("0999-01-01", Some((999, 1, 1)))]
    fn parse_date_is_strict(#[case] input: &str, #[case] expected: Option<(i32, u32, u32)>) {
        let expected = expected.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d));
        assert_eq!(parse_date(input), expected);
    }

    #[test]
    fn date_range_reports_the_failing_bound() {
        let params = DateRangeParams {
            from: "1960-01-01".into(),
            to: "1969-13-31".into(),
        };
        let err = params.to_date_range().unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: Invalid date 'to': 1969-13-31");

        let params = DateRangeParams {
            from: "abc".into(),
            to: "1969-12-31".into(),
        };
        let err = params.to_date_range().unwrap_err();
        assert!(err.to_string().contains("'from'"));
    }

    #[test]
    fn date_range_keeps_order_of_bounds() {
        let params = DateRangeParams {
            from: "1970-01-01".into(),
            to: "1960-01-01".into(),
        };
        let (from, to) = params.to_date_range().unwrap();
        assert!(from > to);
    }

    #[test]
    fn short_id_takes_first_eight_hex_chars() {
        let id = Uuid::parse_str("10000000-0000-0000-0000-000000000000").unwrap();
        assert_eq!(short_id(&id), "10000000");
    }
}
