//! Filter criteria and predicate evaluation
//!
//! A criteria set maps field names to predicate specifications. Every
//! present criterion must hold for a record to match; an absent field
//! means "no constraint".

use crate::core::error::ConfigError;
use crate::core::field::FieldValue;
use crate::core::schema::FieldType;
use chrono::NaiveDate;
use indexmap::IndexMap;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A predicate specification for a single field
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// Exact match against an enumerated text value or a flag
    Exact(FieldValue),
    /// Inclusive numeric range: `min <= value <= max`
    Range { min: f64, max: f64 },
    /// Case-insensitive substring match on a text field
    Substring(String),
    /// Inclusive date range; an absent bound is unbounded on that side
    DateRange {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
    /// Set membership: the value (or any element of a list value) must be
    /// one of the given options. An empty set means "no constraint".
    AnyOf(Vec<String>),
}

impl Criterion {
    /// Exact match on an enumerated text value
    pub fn equals(value: impl Into<String>) -> Self {
        Criterion::Exact(FieldValue::Text(value.into()))
    }

    /// Exact match on a flag field
    pub fn is_flag(value: bool) -> Self {
        Criterion::Exact(FieldValue::Flag(value))
    }

    /// Inclusive numeric range
    ///
    /// A range spanning the field's full natural domain is equivalent to
    /// no constraint but is still evaluated identically; only an inverted
    /// range is rejected.
    pub fn range(min: f64, max: f64) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvertedRange { min, max });
        }
        Ok(Criterion::Range { min, max })
    }

    /// Case-insensitive substring match
    pub fn substring(needle: impl Into<String>) -> Self {
        Criterion::Substring(needle.into())
    }

    /// Inclusive date range from `YYYY-MM-DD` bounds
    pub fn date_range(from: Option<&str>, to: Option<&str>) -> Result<Self, ConfigError> {
        let parse = |input: &str| {
            NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|source| {
                ConfigError::InvalidDateBound {
                    input: input.to_string(),
                    source,
                }
            })
        };

        Ok(Criterion::DateRange {
            from: from.map(parse).transpose()?,
            to: to.map(parse).transpose()?,
        })
    }

    /// Set-membership over the given options
    pub fn any_of<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Criterion::AnyOf(options.into_iter().map(Into::into).collect())
    }

    /// Short name used in configuration error messages
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Criterion::Exact(_) => "exact",
            Criterion::Range { .. } => "range",
            Criterion::Substring(_) => "substring",
            Criterion::DateRange { .. } => "date-range",
            Criterion::AnyOf(_) => "any-of",
        }
    }

    /// Whether this criterion may be applied to a field of the given type
    pub(crate) fn applies_to(&self, field_type: FieldType) -> bool {
        match self {
            Criterion::Exact(FieldValue::Flag(_)) => field_type == FieldType::Flag,
            Criterion::Exact(_) => field_type == FieldType::Text,
            Criterion::Range { .. } => field_type == FieldType::Number,
            Criterion::Substring(_) => field_type == FieldType::Text,
            Criterion::DateRange { .. } => field_type == FieldType::Date,
            Criterion::AnyOf(_) => {
                field_type == FieldType::Text || field_type == FieldType::TextList
            }
        }
    }

    /// Evaluate this criterion against a field value
    ///
    /// A missing or null value never satisfies a constraining criterion;
    /// criteria that constrain nothing (empty any-of set, fully open date
    /// range) match regardless of the value.
    pub(crate) fn matches(&self, value: Option<&FieldValue>) -> bool {
        match self {
            Criterion::AnyOf(options) if options.is_empty() => return true,
            Criterion::DateRange {
                from: None,
                to: None,
            } => return true,
            _ => {}
        }

        let value = match value {
            Some(v) if !v.is_null() => v,
            _ => return false,
        };

        match self {
            Criterion::Exact(expected) => value == expected,
            Criterion::Range { min, max } => value
                .as_number()
                .is_some_and(|n| n >= *min && n <= *max),
            Criterion::Substring(needle) => value.contains_term(&needle.to_lowercase()),
            Criterion::DateRange { from, to } => value.as_date().is_some_and(|d| {
                from.is_none_or(|lo| d >= lo) && to.is_none_or(|hi| d <= hi)
            }),
            Criterion::AnyOf(options) => match value {
                FieldValue::Text(s) => options.iter().any(|o| o == s),
                FieldValue::TextList(items) => {
                    items.iter().any(|item| options.iter().any(|o| o == item))
                }
                _ => false,
            },
        }
    }
}

/// A set of criteria, one per field, all of which must hold
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    by_field: IndexMap<String, Criterion>,
}

impl FilterCriteria {
    /// An empty criteria set that matches every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the criterion for a field
    pub fn with(mut self, field: impl Into<String>, criterion: Criterion) -> Self {
        self.set(field, criterion);
        self
    }

    /// Add or replace the criterion for a field in place
    pub fn set(&mut self, field: impl Into<String>, criterion: Criterion) {
        self.by_field.insert(field.into(), criterion);
    }

    /// Remove the criterion for a field, if present
    pub fn clear(&mut self, field: &str) {
        self.by_field.shift_remove(field);
    }

    /// True when no criterion is present
    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    /// Number of criteria present
    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    /// Iterate over field names and their criteria in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Criterion)> {
        self.by_field.iter().map(|(k, v)| (k.as_str(), v))
    }
}
