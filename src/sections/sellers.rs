//! Sellers section: supplier companies and their balances

use crate::core::{
    Aggregation, ConfigError, FieldType, FieldValue, ListQueryEngine, Record, SectionSchema,
};
use crate::sections::fixture_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Settlement standing of a supplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SellerStatus {
    Active,
    Overdue,
}

impl SellerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SellerStatus::Active => "active",
            SellerStatus::Overdue => "overdue",
        }
    }
}

/// A supplier company with outstanding debt and goods received
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub full_name: String,
    pub contact_person: String,
    pub phone: String,
    pub city: String,
    pub debt: f64,
    pub total_products_received: u32,
    pub last_activity: NaiveDate,
    pub status: SellerStatus,
}

impl Record for Seller {
    fn section_name() -> &'static str {
        "sellers"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "full_name" => Some(FieldValue::Text(self.full_name.clone())),
            "contact_person" => Some(FieldValue::Text(self.contact_person.clone())),
            "phone" => Some(FieldValue::Text(self.phone.clone())),
            "city" => Some(FieldValue::Text(self.city.clone())),
            "debt" => Some(FieldValue::Float(self.debt)),
            "total_products_received" => {
                Some(FieldValue::Integer(self.total_products_received as i64))
            }
            "last_activity" => Some(FieldValue::Date(self.last_activity)),
            "status" => Some(FieldValue::Text(self.status.as_str().to_string())),
            _ => None,
        }
    }
}

/// Schema for the sellers table and its summary cards
pub fn schema() -> Result<SectionSchema, ConfigError> {
    SectionSchema::builder("sellers")
        .field("id", FieldType::Text)
        .field("full_name", FieldType::Text)
        .field("contact_person", FieldType::Text)
        .field("phone", FieldType::Text)
        .field("city", FieldType::Text)
        .field("debt", FieldType::Number)
        .field("total_products_received", FieldType::Number)
        .field("last_activity", FieldType::Date)
        .field("status", FieldType::Text)
        .searchable("full_name")
        .searchable("contact_person")
        .searchable("city")
        .aggregate(Aggregation::Count {
            name: "total_sellers",
        })
        .aggregate(Aggregation::Sum {
            name: "total_debt",
            field: "debt",
        })
        .aggregate(Aggregation::CountWhere {
            name: "overdue_sellers",
            field: "status",
            equals: FieldValue::Text("overdue".to_string()),
        })
        .aggregate(Aggregation::Average {
            name: "average_products_received",
            field: "total_products_received",
        })
        .build()
}

/// Query engine configured for the sellers section
pub fn engine() -> Result<ListQueryEngine, ConfigError> {
    Ok(ListQueryEngine::new(schema()?))
}

/// The sample seller list seeded at application start
pub fn sample_sellers() -> Vec<Seller> {
    vec![
        Seller {
            id: "SEL-001".to_string(),
            full_name: "Premium Partners LLC".to_string(),
            contact_person: "John Smith".to_string(),
            phone: "+1-555-0301".to_string(),
            city: "New York".to_string(),
            debt: 2450.75,
            total_products_received: 1250,
            last_activity: fixture_date(2024, 1, 15),
            status: SellerStatus::Active,
        },
        Seller {
            id: "SEL-002".to_string(),
            full_name: "Quick Supply Co".to_string(),
            contact_person: "Sarah Johnson".to_string(),
            phone: "+1-555-0302".to_string(),
            city: "Los Angeles".to_string(),
            debt: 0.0,
            total_products_received: 890,
            last_activity: fixture_date(2024, 1, 14),
            status: SellerStatus::Active,
        },
        Seller {
            id: "SEL-003".to_string(),
            full_name: "Express Solutions Inc".to_string(),
            contact_person: "Mike Wilson".to_string(),
            phone: "+1-555-0303".to_string(),
            city: "Chicago".to_string(),
            debt: 1850.3,
            total_products_received: 650,
            last_activity: fixture_date(2024, 1, 13),
            status: SellerStatus::Active,
        },
        Seller {
            id: "SEL-004".to_string(),
            full_name: "Local Distributors".to_string(),
            contact_person: "Emma Davis".to_string(),
            phone: "+1-555-0304".to_string(),
            city: "Houston".to_string(),
            debt: 5200.0,
            total_products_received: 320,
            last_activity: fixture_date(2023, 12, 28),
            status: SellerStatus::Overdue,
        },
        Seller {
            id: "SEL-005".to_string(),
            full_name: "Metro Wholesale".to_string(),
            contact_person: "Alex Brown".to_string(),
            phone: "+1-555-0305".to_string(),
            city: "Phoenix".to_string(),
            debt: 750.5,
            total_products_received: 1100,
            last_activity: fixture_date(2024, 1, 15),
            status: SellerStatus::Active,
        },
        Seller {
            id: "SEL-006".to_string(),
            full_name: "Global Trade Partners".to_string(),
            contact_person: "Lisa Chen".to_string(),
            phone: "+1-555-0306".to_string(),
            city: "Philadelphia".to_string(),
            debt: 3100.25,
            total_products_received: 2200,
            last_activity: fixture_date(2024, 1, 12),
            status: SellerStatus::Active,
        },
    ]
}
