//! # Delivery-Ops
//!
//! A schema-driven list query engine for a delivery-operations CRM dashboard.
//!
//! Every data section of the dashboard (clients, couriers, orders, products,
//! sellers, Fargo shipments) renders the same way: a fixed in-memory record
//! list pushed through free-text search, per-field filter criteria, and
//! pagination, with aggregate summary cards above the table. This crate
//! implements that pipeline once, parameterized by a declarative per-section
//! schema, instead of one hand-written predicate chain per section.
//!
//! ## Features
//!
//! - **Schema-Driven**: Sections declare fields, search surface, and
//!   aggregations as data; one engine interprets all of them
//! - **Pure Computation**: Filtering, pagination, and summaries are
//!   deterministic functions over immutable record lists
//! - **Fail-Fast Configuration**: Unknown fields, mismatched criterion
//!   kinds, and malformed date bounds are typed errors, never silent skips
//! - **Permissive Paging**: An out-of-range page yields an empty slice with
//!   accurate totals, so the UI decides whether to clamp
//! - **Cosmetic Deferral**: An optional last-request-wins loader delays the
//!   display of a computed page without blocking the computation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use delivery_ops::prelude::*;
//! use delivery_ops::sections::clients;
//!
//! let engine = clients::engine()?;
//! let records = clients::sample_clients();
//!
//! let criteria = FilterCriteria::new().with("status", Criterion::equals("vip"));
//! let matched = engine.filter(&records, "", &criteria)?;
//!
//! let view = engine.paginate(&matched, PageRequest::new(1, 10)?);
//! let summary = engine.summarize(&matched);
//! ```

pub mod config;
pub mod core;
pub mod export;
pub mod loader;
pub mod sections;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        criteria::{Criterion, FilterCriteria},
        engine::ListQueryEngine,
        error::{ConfigError, PageError},
        field::{FieldFormat, FieldValue},
        query::{page_window, paginate, PageRequest, ViewResult, PAGE_SIZES, PAGE_WINDOW},
        record::Record,
        schema::{Aggregation, FieldType, SectionSchema},
    };

    // === Collaborators ===
    pub use crate::config::AppConfig;
    pub use crate::export::{tabulate, CsvExporter, LoggingExporter, SpreadsheetExporter};
    pub use crate::loader::PageLoader;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use chrono::{NaiveDate, NaiveDateTime};
    pub use indexmap::IndexMap;
    pub use serde::{Deserialize, Serialize};
}
