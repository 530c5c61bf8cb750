//! The list query engine: filter, search, paginate, summarize
//!
//! One engine instance serves one section. All computation is pure and
//! synchronous; the engine holds only the section schema and never touches
//! the record collection it is given.

use crate::core::criteria::FilterCriteria;
use crate::core::error::ConfigError;
use crate::core::query::{paginate, PageRequest, ViewResult};
use crate::core::record::Record;
use crate::core::schema::{Aggregation, SectionSchema};
use indexmap::IndexMap;
use tracing::debug;

/// Schema-driven query engine for one section's record list
#[derive(Debug, Clone)]
pub struct ListQueryEngine {
    schema: SectionSchema,
}

impl ListQueryEngine {
    /// Create an engine over a validated section schema
    pub fn new(schema: SectionSchema) -> Self {
        Self { schema }
    }

    /// The schema this engine interprets
    pub fn schema(&self) -> &SectionSchema {
        &self.schema
    }

    /// Select the records satisfying every criterion and the search term
    ///
    /// A record is included iff it satisfies all present criteria and, when
    /// `search_term` is non-empty, the term appears case-insensitively in
    /// at least one of the section's searchable fields. Original list order
    /// is preserved; no matches is a valid empty result.
    ///
    /// Criteria naming unknown fields or mismatching the field's declared
    /// type are configuration errors and fail fast.
    pub fn filter<R: Record>(
        &self,
        records: &[R],
        search_term: &str,
        criteria: &FilterCriteria,
    ) -> Result<Vec<R>, ConfigError> {
        self.check_criteria(criteria)?;

        let needle = search_term.trim().to_lowercase();
        let matched: Vec<R> = records
            .iter()
            .filter(|record| self.satisfies(*record, &needle, criteria))
            .cloned()
            .collect();

        debug!(
            section = self.schema.section(),
            total = records.len(),
            matched = matched.len(),
            criteria = criteria.len(),
            "filtered records"
        );

        Ok(matched)
    }

    /// Slice one page out of an already-filtered set
    pub fn paginate<R: Clone>(&self, matched: &[R], request: PageRequest) -> ViewResult<R> {
        paginate(matched, request)
    }

    /// Filter then paginate in one call
    pub fn query<R: Record>(
        &self,
        records: &[R],
        search_term: &str,
        criteria: &FilterCriteria,
        request: PageRequest,
    ) -> Result<ViewResult<R>, ConfigError> {
        let matched = self.filter(records, search_term, criteria)?;
        Ok(paginate(&matched, request))
    }

    /// Compute the section's summary-card aggregations over a matched set
    ///
    /// Keys appear in schema declaration order. Averages and ratios over an
    /// empty (or zero-denominator) set yield 0, never an error or NaN.
    pub fn summarize<R: Record>(&self, matched: &[R]) -> IndexMap<&'static str, f64> {
        let mut summary = IndexMap::new();

        for aggregation in self.schema.aggregations() {
            let value = match aggregation {
                Aggregation::Count { .. } => matched.len() as f64,
                Aggregation::Sum { field, .. } => Self::sum_field(matched, field),
                Aggregation::Average { field, .. } => {
                    if matched.is_empty() {
                        0.0
                    } else {
                        Self::sum_field(matched, field) / matched.len() as f64
                    }
                }
                Aggregation::CountWhere { field, equals, .. } => matched
                    .iter()
                    .filter(|r| r.field_value(field).as_ref() == Some(equals))
                    .count() as f64,
                Aggregation::CountAnyOf { field, values, .. } => matched
                    .iter()
                    .filter(|r| {
                        r.field_value(field)
                            .and_then(|v| v.as_text().map(str::to_string))
                            .is_some_and(|s| values.contains(&s.as_str()))
                    })
                    .count() as f64,
                Aggregation::RatioOfSums {
                    numerator,
                    denominator,
                    ..
                } => {
                    let denom = Self::sum_field(matched, denominator);
                    if denom == 0.0 {
                        0.0
                    } else {
                        Self::sum_field(matched, numerator) / denom
                    }
                }
            };
            summary.insert(aggregation.name(), value);
        }

        summary
    }

    fn sum_field<R: Record>(matched: &[R], field: &str) -> f64 {
        matched
            .iter()
            .filter_map(|r| r.field_value(field).and_then(|v| v.as_number()))
            .sum()
    }

    fn check_criteria(&self, criteria: &FilterCriteria) -> Result<(), ConfigError> {
        for (field, criterion) in criteria.iter() {
            let field_type = self.schema.field_type(field).ok_or_else(|| {
                ConfigError::UnknownField {
                    section: self.schema.section().to_string(),
                    field: field.to_string(),
                }
            })?;

            if !criterion.applies_to(field_type) {
                return Err(ConfigError::CriterionMismatch {
                    section: self.schema.section().to_string(),
                    field: field.to_string(),
                    field_type,
                    kind: criterion.kind_name(),
                });
            }
        }
        Ok(())
    }

    fn satisfies<R: Record>(&self, record: &R, needle: &str, criteria: &FilterCriteria) -> bool {
        let criteria_hold = criteria
            .iter()
            .all(|(field, criterion)| criterion.matches(record.field_value(field).as_ref()));
        if !criteria_hold {
            return false;
        }

        if needle.is_empty() {
            return true;
        }

        self.schema.searchable_fields().iter().any(|field| {
            record
                .field_value(field)
                .is_some_and(|value| value.contains_term(needle))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::criteria::Criterion;
    use crate::core::field::FieldValue;
    use crate::core::schema::FieldType;

    #[derive(Clone, Debug, PartialEq)]
    struct Parcel {
        id: String,
        label: String,
        weight: f64,
        express: bool,
    }

    impl Record for Parcel {
        fn section_name() -> &'static str {
            "parcels"
        }

        fn id(&self) -> &str {
            &self.id
        }

        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "id" => Some(FieldValue::Text(self.id.clone())),
                "label" => Some(FieldValue::Text(self.label.clone())),
                "weight" => Some(FieldValue::Float(self.weight)),
                "express" => Some(FieldValue::Flag(self.express)),
                _ => None,
            }
        }
    }

    fn engine() -> ListQueryEngine {
        let schema = SectionSchema::builder("parcels")
            .field("id", FieldType::Text)
            .field("label", FieldType::Text)
            .field("weight", FieldType::Number)
            .field("express", FieldType::Flag)
            .searchable("id")
            .searchable("label")
            .aggregate(Aggregation::Count { name: "total" })
            .aggregate(Aggregation::Sum {
                name: "total_weight",
                field: "weight",
            })
            .aggregate(Aggregation::Average {
                name: "avg_weight",
                field: "weight",
            })
            .aggregate(Aggregation::CountWhere {
                name: "express",
                field: "express",
                equals: FieldValue::Flag(true),
            })
            .build()
            .unwrap();
        ListQueryEngine::new(schema)
    }

    fn parcels() -> Vec<Parcel> {
        vec![
            Parcel {
                id: "P-1".into(),
                label: "Books".into(),
                weight: 2.5,
                express: false,
            },
            Parcel {
                id: "P-2".into(),
                label: "Glassware".into(),
                weight: 4.0,
                express: true,
            },
            Parcel {
                id: "P-3".into(),
                label: "More books".into(),
                weight: 3.5,
                express: true,
            },
        ]
    }

    #[test]
    fn test_empty_term_and_criteria_match_all() {
        let matched = engine()
            .filter(&parcels(), "", &FilterCriteria::new())
            .unwrap();
        assert_eq!(matched.len(), 3);
        assert_eq!(matched, parcels());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let matched = engine()
            .filter(&parcels(), "BOOKS", &FilterCriteria::new())
            .unwrap();
        let ids: Vec<&str> = matched.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["P-1", "P-3"]);
    }

    #[test]
    fn test_criteria_and_search_are_conjunctive() {
        let criteria = FilterCriteria::new().with("express", Criterion::is_flag(true));
        let matched = engine().filter(&parcels(), "books", &criteria).unwrap();
        let ids: Vec<&str> = matched.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["P-3"]);
    }

    #[test]
    fn test_no_match_is_valid_empty_result() {
        let matched = engine()
            .filter(&parcels(), "furniture", &FilterCriteria::new())
            .unwrap();
        assert!(matched.is_empty());
    }

    #[test]
    fn test_unknown_criterion_field_fails_fast() {
        let criteria = FilterCriteria::new().with("color", Criterion::equals("red"));
        let err = engine().filter(&parcels(), "", &criteria).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownField { .. }));
    }

    #[test]
    fn test_criterion_type_mismatch_fails_fast() {
        let criteria =
            FilterCriteria::new().with("label", Criterion::range(0.0, 1.0).unwrap());
        let err = engine().filter(&parcels(), "", &criteria).unwrap_err();
        assert!(matches!(err, ConfigError::CriterionMismatch { .. }));
    }

    #[test]
    fn test_full_domain_range_matches_all() {
        let criteria =
            FilterCriteria::new().with("weight", Criterion::range(0.0, f64::MAX).unwrap());
        let matched = engine().filter(&parcels(), "", &criteria).unwrap();
        assert_eq!(matched.len(), 3);
    }

    #[test]
    fn test_summarize() {
        let engine = engine();
        let matched = parcels();
        let summary = engine.summarize(&matched);

        assert_eq!(summary["total"], 3.0);
        assert_eq!(summary["total_weight"], 10.0);
        assert!((summary["avg_weight"] - 10.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary["express"], 2.0);
    }

    #[test]
    fn test_summarize_empty_set_yields_zero_average() {
        let summary = engine().summarize::<Parcel>(&[]);
        assert_eq!(summary["total"], 0.0);
        assert_eq!(summary["avg_weight"], 0.0);
    }

    #[test]
    fn test_query_composes_filter_and_paginate() {
        let view = engine()
            .query(
                &parcels(),
                "",
                &FilterCriteria::new(),
                PageRequest::new(1, 10).unwrap(),
            )
            .unwrap();
        assert_eq!(view.items.len(), 3);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.range_start, 1);
        assert_eq!(view.range_end, 3);
    }

    #[test]
    fn test_filtering_is_composable() {
        // Applying independent predicates in sequence equals applying them together
        let engine = engine();
        let records = parcels();

        let express = FilterCriteria::new().with("express", Criterion::is_flag(true));
        let heavy = FilterCriteria::new().with("weight", Criterion::range(3.0, 10.0).unwrap());
        let both = FilterCriteria::new()
            .with("express", Criterion::is_flag(true))
            .with("weight", Criterion::range(3.0, 10.0).unwrap());

        let sequential = engine
            .filter(&engine.filter(&records, "", &express).unwrap(), "", &heavy)
            .unwrap();
        let combined = engine.filter(&records, "", &both).unwrap();
        assert_eq!(sequential, combined);
    }
}
