//! Record trait defining the core abstraction for all section data

use crate::core::field::FieldValue;

/// Base trait for all records the query engine operates on.
///
/// A record is an immutable value with a unique string identifier and a
/// fixed set of typed fields. Fields are exposed dynamically by name so a
/// single engine can evaluate criteria for every section; the per-section
/// schema declares which names exist and what type they carry.
///
/// Records have no relationships to one another beyond denormalized
/// display strings (a courier name embedded in an order, not a foreign
/// key), so there is no link layer here.
pub trait Record: Clone + Send + Sync + 'static {
    /// The section this record type belongs to (e.g. "clients", "orders")
    fn section_name() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> &str;

    /// Get the value of a specific field by name
    ///
    /// Returns `None` for field names the record does not carry. Fields
    /// that exist but hold no value (an undelivered order's delivery time)
    /// return `Some(FieldValue::Null)`.
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct TestRecord {
        id: String,
        name: String,
        amount: f64,
    }

    impl Record for TestRecord {
        fn section_name() -> &'static str {
            "test_records"
        }

        fn id(&self) -> &str {
            &self.id
        }

        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "id" => Some(FieldValue::Text(self.id.clone())),
                "name" => Some(FieldValue::Text(self.name.clone())),
                "amount" => Some(FieldValue::Float(self.amount)),
                _ => None,
            }
        }
    }

    #[test]
    fn test_field_access() {
        let record = TestRecord {
            id: "TST-001".to_string(),
            name: "Sample".to_string(),
            amount: 45.99,
        };

        assert_eq!(record.id(), "TST-001");
        assert_eq!(
            record.field_value("name"),
            Some(FieldValue::Text("Sample".to_string()))
        );
        assert_eq!(record.field_value("amount"), Some(FieldValue::Float(45.99)));
        assert_eq!(record.field_value("missing"), None);
        assert_eq!(TestRecord::section_name(), "test_records");
    }
}
