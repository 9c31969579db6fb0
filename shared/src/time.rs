//! Workbook time formats
//!
//! The workbook serializes timestamps as `YYYY-MM-DD HH:MM:SS` and dates as
//! `YYYY-MM-DD`. The models stay typed (`NaiveDateTime` / `NaiveDate`) while
//! the serde modules below keep the wire format byte-compatible.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{AppError, AppResult};

/// Timestamp format used in workbook cells
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date format used in reservation rows
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a workbook timestamp (`YYYY-MM-DD HH:MM:SS`)
pub fn parse_timestamp(value: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map_err(|_| AppError::validation(format!("Invalid timestamp: {}", value)))
}

/// Parse a workbook date (`YYYY-MM-DD`)
pub fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", value)))
}

/// Parse a 24-hour wall-clock time (`HH:MM`)
pub fn parse_hhmm(value: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| AppError::validation(format!("Invalid time: {}", value)))
}

/// `NaiveDateTime` as `YYYY-MM-DD HH:MM:SS`
pub mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&value.format(super::TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, super::TIMESTAMP_FORMAT)
            .map_err(|_| de::Error::custom(format!("invalid timestamp: {}", raw)))
    }
}

/// `Option<NaiveDateTime>` as `YYYY-MM-DD HH:MM:SS` or null
pub mod option_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => s.serialize_some(&ts.format(super::TIMESTAMP_FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(d)? {
            Some(raw) => NaiveDateTime::parse_from_str(&raw, super::TIMESTAMP_FORMAT)
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid timestamp: {}", raw))),
            None => Ok(None),
        }
    }
}

/// `NaiveDate` as `YYYY-MM-DD`
pub mod date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(value: &NaiveDate, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&value.format(super::DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(d)?;
        NaiveDate::parse_from_str(&raw, super::DATE_FORMAT)
            .map_err(|_| de::Error::custom(format!("invalid date: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp() {
        let ts = parse_timestamp("2024-01-01 09:15:00").unwrap();
        assert_eq!(ts.format(TIMESTAMP_FORMAT).to_string(), "2024-01-01 09:15:00");

        assert!(parse_timestamp("2024-01-01T09:15:00").is_err());
        assert!(parse_timestamp("not a timestamp").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2024-01-01").is_ok());
        assert!(parse_date("01/01/2024").is_err());
    }

    #[test]
    fn test_parse_hhmm() {
        let t = parse_hhmm("09:05").unwrap();
        assert_eq!(t, chrono::NaiveTime::from_hms_opt(9, 5, 0).unwrap());
        assert!(parse_hhmm("25:00").is_err());
        assert!(parse_hhmm("0905").is_err());
    }
}
