//! Core module containing the query engine and its fundamental types

pub mod criteria;
pub mod engine;
pub mod error;
pub mod field;
pub mod query;
pub mod record;
pub mod schema;

pub use criteria::{Criterion, FilterCriteria};
pub use engine::ListQueryEngine;
pub use error::{ConfigError, PageError};
pub use field::{FieldFormat, FieldValue};
pub use query::{page_window, paginate, PageRequest, ViewResult, PAGE_SIZES, PAGE_WINDOW};
pub use record::Record;
pub use schema::{Aggregation, FieldType, SectionSchema};
