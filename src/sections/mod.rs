//! Per-section record types, schemas, and sample datasets
//!
//! Each section module defines its record struct, the [`SectionSchema`]
//! configuring the query engine for that section, and the in-memory sample
//! dataset the dashboard seeds at startup. Section state (search term,
//! criteria, current page) is owned by the embedding UI; nothing here is
//! mutable.
//!
//! [`SectionSchema`]: crate::core::SectionSchema

pub mod clients;
pub mod couriers;
pub mod fargo;
pub mod orders;
pub mod products;
pub mod sellers;

use chrono::{NaiveDate, NaiveDateTime};

// Fixture timestamps are compile-time constants; a bad one is a defect in
// this file, so construction panics rather than propagating.
pub(crate) fn fixture_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date is valid")
}

pub(crate) fn fixture_datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    fixture_date(y, m, d)
        .and_hms_opt(h, min, 0)
        .expect("fixture time is valid")
}
