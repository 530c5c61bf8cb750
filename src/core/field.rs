//! Field value types and format validation

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// A polymorphic field value that can hold different types
///
/// Records expose their fields through this enum so that the query engine
/// can evaluate criteria, search terms, and aggregations without knowing
/// the concrete record type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Flag(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Text(String),
    TextList(Vec<String>),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a number if possible
    ///
    /// Integers are widened to `f64` so that numeric range criteria and
    /// sum/average aggregations treat counts and amounts uniformly.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the value as a calendar date if possible
    ///
    /// Timestamps are truncated to their date component, which is the
    /// granularity at which date-range criteria operate.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            FieldValue::DateTime(dt) => Some(dt.date()),
            _ => None,
        }
    }

    /// Get the value as a boolean if possible
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Case-insensitive substring match for free-text search
    ///
    /// `needle` must already be lowercased by the caller. Only textual
    /// values participate in search; list values match if any element
    /// contains the needle.
    pub(crate) fn contains_term(&self, needle: &str) -> bool {
        match self {
            FieldValue::Text(s) => s.to_lowercase().contains(needle),
            FieldValue::TextList(items) => {
                items.iter().any(|item| item.to_lowercase().contains(needle))
            }
            _ => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Flag(b) => write!(f, "{}", b),
            FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            FieldValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::TextList(items) => write!(f, "{}", items.join("; ")),
            FieldValue::Null => Ok(()),
        }
    }
}

/// Field format validators for contact fields
#[derive(Debug, Clone)]
pub enum FieldFormat {
    Email,
    Phone,
    Custom(Regex),
}

impl FieldFormat {
    /// Validate a field value against this format
    pub fn validate(&self, value: &FieldValue) -> bool {
        let string_value = match value.as_text() {
            Some(s) => s,
            None => return false,
        };

        match self {
            FieldFormat::Email => Self::is_valid_email(string_value),
            FieldFormat::Phone => Self::is_valid_phone(string_value),
            FieldFormat::Custom(regex) => regex.is_match(string_value),
        }
    }

    fn is_valid_email(email: &str) -> bool {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
        });
        regex.is_match(email)
    }

    fn is_valid_phone(phone: &str) -> bool {
        static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = PHONE_REGEX.get_or_init(|| {
            // Dashed display format (+1-555-0401) or bare E.164 digits
            Regex::new(r"^\+?[0-9]{1,3}(-[0-9]{3,4}){1,3}$|^\+?[1-9][0-9]{7,14}$").unwrap()
        });
        regex.is_match(phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_field_value_text() {
        let value = FieldValue::Text("test".to_string());
        assert_eq!(value.as_text(), Some("test"));
        assert_eq!(value.as_number(), None);
        assert!(!value.is_null());
    }

    #[test]
    fn test_field_value_numbers() {
        assert_eq!(FieldValue::Integer(42).as_number(), Some(42.0));
        assert_eq!(FieldValue::Float(19.99).as_number(), Some(19.99));
        assert_eq!(FieldValue::Text("42".to_string()).as_number(), None);
    }

    #[test]
    fn test_field_value_dates() {
        let d = date(2024, 1, 15);
        assert_eq!(FieldValue::Date(d).as_date(), Some(d));

        let dt = d.and_hms_opt(9, 30, 0).unwrap();
        assert_eq!(FieldValue::DateTime(dt).as_date(), Some(d));
        assert_eq!(FieldValue::Text("2024".to_string()).as_date(), None);
    }

    #[test]
    fn test_field_value_null() {
        let value = FieldValue::Null;
        assert!(value.is_null());
        assert_eq!(value.as_text(), None);
        assert_eq!(value.as_date(), None);
    }

    #[test]
    fn test_contains_term_text() {
        let value = FieldValue::Text("John Smith".to_string());
        assert!(value.contains_term("smith"));
        assert!(value.contains_term("john"));
        assert!(!value.contains_term("wilson"));
    }

    #[test]
    fn test_contains_term_list() {
        let value = FieldValue::TextList(vec![
            "Premium Package".to_string(),
            "Insurance Add-on".to_string(),
        ]);
        assert!(value.contains_term("insurance"));
        assert!(!value.contains_term("economy"));
    }

    #[test]
    fn test_contains_term_non_text() {
        assert!(!FieldValue::Integer(42).contains_term("42"));
        assert!(!FieldValue::Null.contains_term(""));
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(FieldValue::Float(45.99).to_string(), "45.99");
        assert_eq!(FieldValue::Date(date(2024, 1, 15)).to_string(), "2024-01-15");
        assert_eq!(
            FieldValue::TextList(vec!["a".to_string(), "b".to_string()]).to_string(),
            "a; b"
        );
        assert_eq!(FieldValue::Null.to_string(), "");
    }

    #[test]
    fn test_email_validation() {
        let format = FieldFormat::Email;

        assert!(format.validate(&FieldValue::Text("mike.j@company.com".to_string())));
        assert!(!format.validate(&FieldValue::Text("invalid-email".to_string())));
        assert!(!format.validate(&FieldValue::Text("@company.com".to_string())));
    }

    #[test]
    fn test_phone_validation() {
        let format = FieldFormat::Phone;

        assert!(format.validate(&FieldValue::Text("+1-555-0401".to_string())));
        assert!(format.validate(&FieldValue::Text("+33612345678".to_string())));
        assert!(!format.validate(&FieldValue::Text("123".to_string())));
    }

    #[test]
    fn test_format_validate_rejects_non_text() {
        let format = FieldFormat::Phone;
        assert!(!format.validate(&FieldValue::Integer(5550401)));
        assert!(!format.validate(&FieldValue::Null));
    }

    #[test]
    fn test_serde_roundtrip_integer() {
        let original = FieldValue::Integer(42);
        let json = serde_json::to_string(&original).expect("serialize should succeed");
        let restored: FieldValue =
            serde_json::from_str(&json).expect("deserialize should succeed");
        assert_eq!(original, restored);
    }

    #[test]
    fn test_serde_roundtrip_list() {
        let original = FieldValue::TextList(vec!["Online".to_string(), "Mall Branch".to_string()]);
        let json = serde_json::to_string(&original).expect("serialize should succeed");
        let restored: FieldValue =
            serde_json::from_str(&json).expect("deserialize should succeed");
        assert_eq!(original, restored);
    }
}
