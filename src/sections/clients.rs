//! Clients section: customer records with order history

use crate::core::{
    Aggregation, ConfigError, FieldType, FieldValue, ListQueryEngine, Record, SectionSchema,
};
use crate::sections::fixture_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Client account standing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClientStatus {
    Active,
    Vip,
    Inactive,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Active => "active",
            ClientStatus::Vip => "vip",
            ClientStatus::Inactive => "inactive",
        }
    }
}

/// A customer with denormalized order history totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub full_name: String,
    pub phone: String,
    pub city: String,
    pub district: String,
    pub total_orders: u32,
    pub returned_orders: u32,
    pub last_order_date: NaiveDate,
    pub total_spent: f64,
    pub status: ClientStatus,
}

impl Record for Client {
    fn section_name() -> &'static str {
        "clients"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "full_name" => Some(FieldValue::Text(self.full_name.clone())),
            "phone" => Some(FieldValue::Text(self.phone.clone())),
            "city" => Some(FieldValue::Text(self.city.clone())),
            "district" => Some(FieldValue::Text(self.district.clone())),
            "total_orders" => Some(FieldValue::Integer(self.total_orders as i64)),
            "returned_orders" => Some(FieldValue::Integer(self.returned_orders as i64)),
            "last_order_date" => Some(FieldValue::Date(self.last_order_date)),
            "total_spent" => Some(FieldValue::Float(self.total_spent)),
            "status" => Some(FieldValue::Text(self.status.as_str().to_string())),
            _ => None,
        }
    }
}

impl Client {
    /// Share of this client's orders that came back, in percent
    pub fn return_rate(&self) -> f64 {
        if self.total_orders == 0 {
            0.0
        } else {
            self.returned_orders as f64 / self.total_orders as f64 * 100.0
        }
    }
}

/// Schema for the clients table and its summary cards
pub fn schema() -> Result<SectionSchema, ConfigError> {
    SectionSchema::builder("clients")
        .field("id", FieldType::Text)
        .field("full_name", FieldType::Text)
        .field("phone", FieldType::Text)
        .field("city", FieldType::Text)
        .field("district", FieldType::Text)
        .field("total_orders", FieldType::Number)
        .field("returned_orders", FieldType::Number)
        .field("last_order_date", FieldType::Date)
        .field("total_spent", FieldType::Number)
        .field("status", FieldType::Text)
        .searchable("full_name")
        .searchable("phone")
        .searchable("city")
        .searchable("district")
        .aggregate(Aggregation::Count {
            name: "total_clients",
        })
        .aggregate(Aggregation::CountWhere {
            name: "vip_clients",
            field: "status",
            equals: FieldValue::Text("vip".to_string()),
        })
        .aggregate(Aggregation::RatioOfSums {
            name: "average_order_value",
            numerator: "total_spent",
            denominator: "total_orders",
        })
        .aggregate(Aggregation::Sum {
            name: "total_returns",
            field: "returned_orders",
        })
        .build()
}

/// Query engine configured for the clients section
pub fn engine() -> Result<ListQueryEngine, ConfigError> {
    Ok(ListQueryEngine::new(schema()?))
}

/// The sample client list seeded at application start
pub fn sample_clients() -> Vec<Client> {
    vec![
        Client {
            id: "CLI-001".to_string(),
            full_name: "John Smith".to_string(),
            phone: "+1-555-0401".to_string(),
            city: "New York".to_string(),
            district: "Manhattan".to_string(),
            total_orders: 24,
            returned_orders: 2,
            last_order_date: fixture_date(2024, 1, 15),
            total_spent: 1250.5,
            status: ClientStatus::Active,
        },
        Client {
            id: "CLI-002".to_string(),
            full_name: "Sarah Wilson".to_string(),
            phone: "+1-555-0402".to_string(),
            city: "Los Angeles".to_string(),
            district: "Beverly Hills".to_string(),
            total_orders: 18,
            returned_orders: 0,
            last_order_date: fixture_date(2024, 1, 14),
            total_spent: 890.25,
            status: ClientStatus::Active,
        },
        Client {
            id: "CLI-003".to_string(),
            full_name: "Robert Brown".to_string(),
            phone: "+1-555-0403".to_string(),
            city: "Chicago".to_string(),
            district: "Downtown".to_string(),
            total_orders: 32,
            returned_orders: 1,
            last_order_date: fixture_date(2024, 1, 13),
            total_spent: 1680.75,
            status: ClientStatus::Vip,
        },
        Client {
            id: "CLI-004".to_string(),
            full_name: "Emily Davis".to_string(),
            phone: "+1-555-0404".to_string(),
            city: "Houston".to_string(),
            district: "Midtown".to_string(),
            total_orders: 5,
            returned_orders: 3,
            last_order_date: fixture_date(2023, 12, 20),
            total_spent: 245.0,
            status: ClientStatus::Inactive,
        },
        Client {
            id: "CLI-005".to_string(),
            full_name: "Michael Johnson".to_string(),
            phone: "+1-555-0405".to_string(),
            city: "Phoenix".to_string(),
            district: "Scottsdale".to_string(),
            total_orders: 41,
            returned_orders: 0,
            last_order_date: fixture_date(2024, 1, 15),
            total_spent: 2150.3,
            status: ClientStatus::Vip,
        },
        Client {
            id: "CLI-006".to_string(),
            full_name: "Lisa Anderson".to_string(),
            phone: "+1-555-0406".to_string(),
            city: "Philadelphia".to_string(),
            district: "Center City".to_string(),
            total_orders: 15,
            returned_orders: 4,
            last_order_date: fixture_date(2024, 1, 12),
            total_spent: 675.8,
            status: ClientStatus::Active,
        },
    ]
}
