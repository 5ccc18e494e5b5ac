//! Wire date decoding.
//!
//! The API sends timestamps as numeric arrays `[year, month, day, hour, minute,
//! second]` (an optional seventh element holds nanoseconds). Months are
//! 1-based on the wire.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Placeholder shown when a timestamp is missing or malformed.
pub const MISSING_DATE: &str = "N/A";

/// A timestamp decoded from the API's array form.
///
/// Arrays that are too short or describe an impossible calendar date decode
/// to an empty value instead of failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct ApiDateTime(Option<NaiveDateTime>);

impl ApiDateTime {
    /// Builds a value from the raw wire parts.
    pub fn from_parts(parts: &[i64]) -> Self {
        if parts.len() < 6 {
            return Self(None);
        }
        let component = |value: i64| u32::try_from(value).ok();
        let year = match i32::try_from(parts[0]) {
            Ok(year) => year,
            Err(_) => return Self(None),
        };
        let nanos = parts.get(6).copied().and_then(component).unwrap_or(0);

        let value = (|| {
            NaiveDate::from_ymd_opt(year, component(parts[1])?, component(parts[2])?)?
                .and_hms_nano_opt(
                    component(parts[3])?,
                    component(parts[4])?,
                    component(parts[5])?,
                    nanos,
                )
        })();
        Self(value)
    }

    pub fn value(&self) -> Option<NaiveDateTime> {
        self.0
    }

    pub fn is_missing(&self) -> bool {
        self.0.is_none()
    }

    /// Renders as `MMM D, YYYY HH:mm`, e.g. `Mar 7, 2025 09:05`.
    pub fn display(&self) -> String {
        match self.0 {
            Some(value) => value.format("%b %-d, %Y %H:%M").to_string(),
            None => MISSING_DATE.to_string(),
        }
    }
}

impl std::fmt::Display for ApiDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

impl<'de> Deserialize<'de> for ApiDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parts: Option<Vec<i64>> = Option::deserialize(deserializer)?;
        Ok(parts
            .map(|parts| Self::from_parts(&parts))
            .unwrap_or_default())
    }
}

impl Serialize for ApiDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use chrono::{Datelike, Timelike};

        match self.0 {
            Some(v) => [
                i64::from(v.year()),
                i64::from(v.month()),
                i64::from(v.day()),
                i64::from(v.hour()),
                i64::from(v.minute()),
                i64::from(v.second()),
            ]
            .serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn month_is_one_based_on_the_wire() {
        let date: ApiDateTime = serde_json::from_str("[2025, 1, 31, 23, 59, 58]").unwrap();
        let value = date.value().unwrap();
        assert_eq!(value.month(), 1);
        assert_eq!(value.day(), 31);
        assert_eq!(value.second(), 58);
    }

    #[test]
    fn trailing_nanoseconds_are_accepted() {
        let date: ApiDateTime =
            serde_json::from_str("[2024, 12, 5, 8, 3, 1, 123000000]").unwrap();
        assert_eq!(date.value().unwrap().nanosecond(), 123_000_000);
    }

    #[test]
    fn short_or_invalid_arrays_decode_as_missing() {
        let short: ApiDateTime = serde_json::from_str("[2024, 12, 5]").unwrap();
        assert!(short.is_missing());
        assert_eq!(short.display(), MISSING_DATE);

        let month_13 = ApiDateTime::from_parts(&[2024, 13, 1, 0, 0, 0]);
        assert!(month_13.is_missing());

        let null: ApiDateTime = serde_json::from_str("null").unwrap();
        assert!(null.is_missing());
    }

    #[test]
    fn display_matches_table_format() {
        let date = ApiDateTime::from_parts(&[2025, 3, 7, 9, 5, 0]);
        assert_eq!(date.display(), "Mar 7, 2025 09:05");
    }

    #[test]
    fn serializes_back_to_array_form() {
        let date = ApiDateTime::from_parts(&[2025, 3, 7, 9, 5, 0]);
        assert_eq!(serde_json::to_string(&date).unwrap(), "[2025,3,7,9,5,0]");
    }
}
