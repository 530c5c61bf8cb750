//! Fargo section: out-of-city deliveries handed to the Fargo carrier

use crate::core::{
    Aggregation, ConfigError, FieldType, FieldValue, ListQueryEngine, Record, SectionSchema,
};
use crate::sections::fixture_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Delivery progress of an order inside the Fargo network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FargoStatus {
    Delivered,
    InTransit,
    Pending,
    Processing,
    ConnectionIssue,
    Returned,
}

impl FargoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FargoStatus::Delivered => "delivered",
            FargoStatus::InTransit => "in-transit",
            FargoStatus::Pending => "pending",
            FargoStatus::Processing => "processing",
            FargoStatus::ConnectionIssue => "connection-issue",
            FargoStatus::Returned => "returned",
        }
    }
}

/// An order shipped through the Fargo delivery system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FargoOrder {
    pub id: String,
    pub client_name: String,
    pub client_phone: String,
    pub payment_amount: f64,
    pub products: Vec<String>,
    pub status: FargoStatus,
    pub comments: String,
    pub order_date: NaiveDate,
    pub tracking_id: String,
}

impl Record for FargoOrder {
    fn section_name() -> &'static str {
        "fargo"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "client_name" => Some(FieldValue::Text(self.client_name.clone())),
            "client_phone" => Some(FieldValue::Text(self.client_phone.clone())),
            "payment_amount" => Some(FieldValue::Float(self.payment_amount)),
            "products" => Some(FieldValue::TextList(self.products.clone())),
            "status" => Some(FieldValue::Text(self.status.as_str().to_string())),
            "comments" => Some(FieldValue::Text(self.comments.clone())),
            "order_date" => Some(FieldValue::Date(self.order_date)),
            "tracking_id" => Some(FieldValue::Text(self.tracking_id.clone())),
            _ => None,
        }
    }
}

/// Schema for the Fargo orders table and its summary cards
pub fn schema() -> Result<SectionSchema, ConfigError> {
    SectionSchema::builder("fargo")
        .field("id", FieldType::Text)
        .field("client_name", FieldType::Text)
        .field("client_phone", FieldType::Text)
        .field("payment_amount", FieldType::Number)
        .field("products", FieldType::TextList)
        .field("status", FieldType::Text)
        .field("comments", FieldType::Text)
        .field("order_date", FieldType::Date)
        .field("tracking_id", FieldType::Text)
        .searchable("id")
        .searchable("client_name")
        .searchable("tracking_id")
        .aggregate(Aggregation::Count {
            name: "total_orders",
        })
        .aggregate(Aggregation::Sum {
            name: "total_amount",
            field: "payment_amount",
        })
        .aggregate(Aggregation::CountWhere {
            name: "returned_orders",
            field: "status",
            equals: FieldValue::Text("returned".to_string()),
        })
        .aggregate(Aggregation::CountWhere {
            name: "in_transit_orders",
            field: "status",
            equals: FieldValue::Text("in-transit".to_string()),
        })
        .build()
}

/// Query engine configured for the Fargo section
pub fn engine() -> Result<ListQueryEngine, ConfigError> {
    Ok(ListQueryEngine::new(schema()?))
}

/// The sample Fargo order list seeded at application start
pub fn sample_fargo_orders() -> Vec<FargoOrder> {
    vec![
        FargoOrder {
            id: "FRG-001".to_string(),
            client_name: "Alice Cooper".to_string(),
            client_phone: "+1-555-0123".to_string(),
            payment_amount: 45.99,
            products: vec!["Premium Package".to_string(), "Insurance Add-on".to_string()],
            status: FargoStatus::InTransit,
            comments: "In transit to branch point - ETA 2 hours".to_string(),
            order_date: fixture_date(2024, 1, 15),
            tracking_id: "FRG-TRK-001".to_string(),
        },
        FargoOrder {
            id: "FRG-002".to_string(),
            client_name: "Bob Martinez".to_string(),
            client_phone: "+1-555-0124".to_string(),
            payment_amount: 29.99,
            products: vec!["Standard Package".to_string()],
            status: FargoStatus::Delivered,
            comments: "Successfully delivered to client".to_string(),
            order_date: fixture_date(2024, 1, 15),
            tracking_id: "FRG-TRK-002".to_string(),
        },
        FargoOrder {
            id: "FRG-003".to_string(),
            client_name: "Carol White".to_string(),
            client_phone: "+1-555-0125".to_string(),
            payment_amount: 65.5,
            products: vec!["Express Package".to_string(), "Weekend Delivery".to_string()],
            status: FargoStatus::ConnectionIssue,
            comments: "Fargo not connected - Retrying connection".to_string(),
            order_date: fixture_date(2024, 1, 15),
            tracking_id: "FRG-TRK-003".to_string(),
        },
        FargoOrder {
            id: "FRG-004".to_string(),
            client_name: "David Kim".to_string(),
            client_phone: "+1-555-0126".to_string(),
            payment_amount: 39.99,
            products: vec!["Deluxe Package".to_string()],
            status: FargoStatus::Processing,
            comments: "Processing at Fargo facility".to_string(),
            order_date: fixture_date(2024, 1, 15),
            tracking_id: "FRG-TRK-004".to_string(),
        },
        FargoOrder {
            id: "FRG-005".to_string(),
            client_name: "Emma Johnson".to_string(),
            client_phone: "+1-555-0127".to_string(),
            payment_amount: 22.5,
            products: vec!["Economy Package".to_string()],
            status: FargoStatus::Returned,
            comments: "Address not found - Returned to sender".to_string(),
            order_date: fixture_date(2024, 1, 14),
            tracking_id: "FRG-TRK-005".to_string(),
        },
        FargoOrder {
            id: "FRG-006".to_string(),
            client_name: "Frank Wilson".to_string(),
            client_phone: "+1-555-0128".to_string(),
            payment_amount: 55.75,
            products: vec![
                "Business Priority".to_string(),
                "Signature Required".to_string(),
            ],
            status: FargoStatus::Pending,
            comments: "Awaiting pickup from Fargo hub".to_string(),
            order_date: fixture_date(2024, 1, 15),
            tracking_id: "FRG-TRK-006".to_string(),
        },
    ]
}
