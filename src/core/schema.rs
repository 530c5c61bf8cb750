//! Declarative per-section schemas
//!
//! Each of the six CRM sections supplies the engine with the same three
//! pieces of configuration: which fields exist and what type they carry,
//! which fields the free-text search box covers, and which aggregations
//! feed the summary cards above the table. The schema is plain data; the
//! engine interprets it.

use crate::core::error::ConfigError;
use crate::core::field::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The declared type of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    /// Free-form or enumerated text
    Text,
    /// Integer or floating-point number
    Number,
    /// Calendar date, possibly with a time component
    Date,
    /// Boolean marker
    Flag,
    /// Small list of strings (products on an order, stores carrying a product)
    TextList,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Flag => "flag",
            FieldType::TextList => "text-list",
        };
        write!(f, "{}", name)
    }
}

/// An aggregation computed over the matched set for a summary card
#[derive(Debug, Clone, PartialEq)]
pub enum Aggregation {
    /// Number of matched records
    Count { name: &'static str },
    /// Sum of a numeric field
    Sum {
        name: &'static str,
        field: &'static str,
    },
    /// Arithmetic mean of a numeric field; 0 over an empty set
    Average {
        name: &'static str,
        field: &'static str,
    },
    /// Number of matched records whose field equals a value
    CountWhere {
        name: &'static str,
        field: &'static str,
        equals: FieldValue,
    },
    /// Number of matched records whose field equals any of several values
    CountAnyOf {
        name: &'static str,
        field: &'static str,
        values: &'static [&'static str],
    },
    /// Sum of one numeric field divided by the sum of another; 0 when the
    /// denominator sums to zero (average order value = spent / orders)
    RatioOfSums {
        name: &'static str,
        numerator: &'static str,
        denominator: &'static str,
    },
}

impl Aggregation {
    /// The key under which this aggregation appears in the summary map
    pub fn name(&self) -> &'static str {
        match self {
            Aggregation::Count { name }
            | Aggregation::Sum { name, .. }
            | Aggregation::Average { name, .. }
            | Aggregation::CountWhere { name, .. }
            | Aggregation::CountAnyOf { name, .. }
            | Aggregation::RatioOfSums { name, .. } => name,
        }
    }
}

/// Schema describing one section's fields, search surface, and summaries
#[derive(Debug, Clone)]
pub struct SectionSchema {
    section: &'static str,
    fields: IndexMap<&'static str, FieldType>,
    searchable: Vec<&'static str>,
    aggregations: Vec<Aggregation>,
}

impl SectionSchema {
    /// Start building a schema for the named section
    pub fn builder(section: &'static str) -> SectionSchemaBuilder {
        SectionSchemaBuilder {
            section,
            fields: IndexMap::new(),
            searchable: Vec::new(),
            aggregations: Vec::new(),
            duplicate: None,
        }
    }

    /// The section name this schema describes
    pub fn section(&self) -> &'static str {
        self.section
    }

    /// Declared fields in declaration order
    pub fn fields(&self) -> &IndexMap<&'static str, FieldType> {
        &self.fields
    }

    /// The declared type of a field, if it exists
    pub fn field_type(&self, field: &str) -> Option<FieldType> {
        self.fields.get(field).copied()
    }

    /// Fields covered by free-text search
    pub fn searchable_fields(&self) -> &[&'static str] {
        &self.searchable
    }

    /// Aggregations for the section's summary cards
    pub fn aggregations(&self) -> &[Aggregation] {
        &self.aggregations
    }

    fn unknown_field(&self, field: &str) -> ConfigError {
        ConfigError::UnknownField {
            section: self.section.to_string(),
            field: field.to_string(),
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        for field in &self.searchable {
            match self.fields.get(field) {
                None => return Err(self.unknown_field(field)),
                Some(FieldType::Text) | Some(FieldType::TextList) => {}
                Some(_) => {
                    return Err(ConfigError::NonTextSearchField {
                        section: self.section.to_string(),
                        field: field.to_string(),
                    });
                }
            }
        }

        for aggregation in &self.aggregations {
            match aggregation {
                Aggregation::Count { .. } => {}
                Aggregation::Sum { name, field } | Aggregation::Average { name, field } => {
                    self.require_numeric(name, field)?;
                }
                Aggregation::CountWhere { field, .. } | Aggregation::CountAnyOf { field, .. } => {
                    if !self.fields.contains_key(field) {
                        return Err(self.unknown_field(field));
                    }
                }
                Aggregation::RatioOfSums {
                    name,
                    numerator,
                    denominator,
                } => {
                    self.require_numeric(name, numerator)?;
                    self.require_numeric(name, denominator)?;
                }
            }
        }

        Ok(self)
    }

    fn require_numeric(&self, name: &str, field: &str) -> Result<(), ConfigError> {
        match self.fields.get(field) {
            None => Err(self.unknown_field(field)),
            Some(FieldType::Number) => Ok(()),
            Some(field_type) => Err(ConfigError::NonNumericAggregation {
                name: name.to_string(),
                field: field.to_string(),
                field_type: *field_type,
            }),
        }
    }
}

/// Builder collecting a section's declarations before validation
pub struct SectionSchemaBuilder {
    section: &'static str,
    fields: IndexMap<&'static str, FieldType>,
    searchable: Vec<&'static str>,
    aggregations: Vec<Aggregation>,
    duplicate: Option<&'static str>,
}

impl SectionSchemaBuilder {
    /// Declare a field and its type
    pub fn field(mut self, name: &'static str, field_type: FieldType) -> Self {
        if self.fields.insert(name, field_type).is_some() && self.duplicate.is_none() {
            self.duplicate = Some(name);
        }
        self
    }

    /// Include a field in the free-text search surface
    pub fn searchable(mut self, name: &'static str) -> Self {
        self.searchable.push(name);
        self
    }

    /// Add a summary-card aggregation
    pub fn aggregate(mut self, aggregation: Aggregation) -> Self {
        self.aggregations.push(aggregation);
        self
    }

    /// Validate the declarations and produce the schema
    pub fn build(self) -> Result<SectionSchema, ConfigError> {
        if let Some(field) = self.duplicate {
            return Err(ConfigError::DuplicateField {
                section: self.section.to_string(),
                field: field.to_string(),
            });
        }

        SectionSchema {
            section: self.section,
            fields: self.fields,
            searchable: self.searchable,
            aggregations: self.aggregations,
        }
        .validate()
    }
}
