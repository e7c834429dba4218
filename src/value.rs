//! Coercion of raw field text into typed values.
//!
//! Only dates can fail: digits that do not form a calendar date mean the layout
//! or the file is corrupt. Numbers and amounts degrade to zero instead.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::error::DecodeError;
use crate::fields::Field;

const DATE_DIGITS: usize = 6;

/// Integer value of the leading digits of `raw`, or `0` when there are none.
pub fn parse_int(raw: Option<&str>) -> u32 {
    let raw = raw.unwrap_or_default().trim();
    let end = raw
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(raw.len());

    raw[..end].parse().unwrap_or(0)
}

/// Monetary value as supplied by the layout engine, already scaled.
pub fn parse_amount(field: Field, raw: Option<&str>) -> Decimal {
    let raw = raw.unwrap_or_default().trim();
    if raw.is_empty() {
        return Decimal::ZERO;
    }

    raw.parse().unwrap_or_else(|e| {
        tracing::warn!("Unparsable amount in field {}: {:?} ({})", field, raw, e);
        Decimal::ZERO
    })
}

/// Decodes a `ddmmyy` date. Zero or empty means "no date".
pub fn parse_date(field: Field, raw: Option<&str>) -> Result<Option<NaiveDateTime>, DecodeError> {
    let raw = raw.unwrap_or_default().trim();
    let malformed = || DecodeError::MalformedDate {
        field,
        raw: raw.to_string(),
    };

    if raw.is_empty() {
        return Ok(None);
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    if raw.bytes().all(|b| b == b'0') {
        return Ok(None);
    }
    if raw.len() > DATE_DIGITS {
        return Err(malformed());
    }

    let padded = format!("{:0>width$}", raw, width = DATE_DIGITS);
    let day: u32 = padded[0..2].parse().map_err(|_| malformed())?;
    let month: u32 = padded[2..4].parse().map_err(|_| malformed())?;
    let year: i32 = padded[4..6].parse().map_err(|_| malformed())?;
    let year = if year < 70 { 2000 + year } else { 1900 + year };

    NaiveDate::from_ymd_opt(year, month, day)
        .map(|date| Some(date.and_time(NaiveTime::MIN)))
        .ok_or_else(malformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int(Some("06")), 6);
        assert_eq!(parse_int(Some(" 25 ")), 25);
        assert_eq!(parse_int(Some("15A")), 15);
        assert_eq!(parse_int(Some("AB")), 0);
        assert_eq!(parse_int(Some("")), 0);
        assert_eq!(parse_int(None), 0);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(Field::PrincipalValue, Some("123.45")), dec!(123.45));
        assert_eq!(parse_amount(Field::PrincipalValue, Some(" 10 ")), dec!(10));
        assert_eq!(parse_amount(Field::PrincipalValue, Some("")), Decimal::ZERO);
        assert_eq!(parse_amount(Field::PrincipalValue, None), Decimal::ZERO);
        assert_eq!(parse_amount(Field::PrincipalValue, Some("n/a")), Decimal::ZERO);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(Field::DueDate, Some("150324")).unwrap(),
            Some(midnight(2024, 3, 15))
        );
        assert_eq!(
            parse_date(Field::DueDate, Some("10399")).unwrap(),
            Some(midnight(1999, 3, 1))
        );
        assert_eq!(
            parse_date(Field::DueDate, Some("311269")).unwrap(),
            Some(midnight(2069, 12, 31))
        );
        assert_eq!(
            parse_date(Field::DueDate, Some("010170")).unwrap(),
            Some(midnight(1970, 1, 1))
        );
    }

    #[test]
    fn test_parse_date_absent() {
        assert_eq!(parse_date(Field::CreditDate, Some("0")).unwrap(), None);
        assert_eq!(parse_date(Field::CreditDate, Some("000000")).unwrap(), None);
        assert_eq!(parse_date(Field::CreditDate, Some("   ")).unwrap(), None);
        assert_eq!(parse_date(Field::CreditDate, None).unwrap(), None);
    }

    #[test]
    fn test_parse_date_malformed() {
        let error = parse_date(Field::OccurrenceDate, Some("310424")).unwrap_err();
        assert_eq!(
            error,
            DecodeError::MalformedDate {
                field: Field::OccurrenceDate,
                raw: "310424".to_string(),
            }
        );

        assert!(parse_date(Field::OccurrenceDate, Some("001324")).is_err());
        assert!(parse_date(Field::OccurrenceDate, Some("15/03/24")).is_err());
        assert!(parse_date(Field::OccurrenceDate, Some("1503240")).is_err());
    }
}
