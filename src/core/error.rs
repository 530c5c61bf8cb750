//! Typed error handling for the query engine
//!
//! Criteria, schemas, and page requests are supplied by the embedding UI
//! code, not by end users, so malformed input here is a programming error.
//! The engine fails fast with a typed error instead of silently ignoring
//! the bad piece of configuration.

use crate::core::schema::FieldType;
use thiserror::Error;

/// Errors raised by schema construction and criteria validation
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A criterion or aggregation references a field the schema does not declare
    #[error("unknown field `{field}` in section `{section}`")]
    UnknownField { section: String, field: String },

    /// A criterion kind does not apply to the declared type of the field
    #[error(
        "criterion `{kind}` cannot be applied to field `{field}` of type {field_type} in section `{section}`"
    )]
    CriterionMismatch {
        section: String,
        field: String,
        field_type: FieldType,
        kind: &'static str,
    },

    /// A searchable field must hold text or a list of text
    #[error("searchable field `{field}` in section `{section}` is not textual")]
    NonTextSearchField { section: String, field: String },

    /// A date bound could not be parsed as `YYYY-MM-DD`
    #[error("invalid date bound `{input}`")]
    InvalidDateBound {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A numeric range with min greater than max can never match
    #[error("inverted numeric range: min {min} is greater than max {max}")]
    InvertedRange { min: f64, max: f64 },

    /// A sum/average aggregation references a non-numeric field
    #[error("aggregation `{name}` requires a numeric field, but `{field}` is {field_type}")]
    NonNumericAggregation {
        name: String,
        field: String,
        field_type: FieldType,
    },

    /// A field was declared twice in the same schema
    #[error("field `{field}` declared twice in section `{section}`")]
    DuplicateField { section: String, field: String },
}

/// Errors raised when constructing a page request
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    /// Page sizes are restricted to the sizes the UI offers
    #[error("unsupported page size {0}, allowed sizes are 10, 20, 50 and 100")]
    UnsupportedPageSize(usize),

    /// Page numbering starts at 1
    #[error("page number must be at least 1")]
    PageNumberZero,
}
