//! Orders section: in-city deliveries with courier assignment

use crate::core::{
    Aggregation, ConfigError, FieldType, FieldValue, ListQueryEngine, Record, SectionSchema,
};
use crate::sections::fixture_datetime;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Delivery progress of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Delivered,
    OnTheWay,
    Pending,
    Processing,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Delivered => "delivered",
            OrderStatus::OnTheWay => "on-the-way",
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// How an order is paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentType {
    Card,
    Cash,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Card => "card",
            PaymentType::Cash => "cash",
        }
    }
}

/// A delivery order with denormalized client and courier names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub client_name: String,
    pub products: Vec<String>,
    pub payment_type: PaymentType,
    pub amount: f64,
    pub status: OrderStatus,
    pub courier_name: String,
    pub address: String,
    pub order_created: NaiveDateTime,
    pub delivered_time: Option<NaiveDateTime>,
}

impl Record for Order {
    fn section_name() -> &'static str {
        "orders"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "client_name" => Some(FieldValue::Text(self.client_name.clone())),
            "products" => Some(FieldValue::TextList(self.products.clone())),
            "payment_type" => Some(FieldValue::Text(self.payment_type.as_str().to_string())),
            "amount" => Some(FieldValue::Float(self.amount)),
            "status" => Some(FieldValue::Text(self.status.as_str().to_string())),
            "courier_name" => Some(FieldValue::Text(self.courier_name.clone())),
            "address" => Some(FieldValue::Text(self.address.clone())),
            "order_created" => Some(FieldValue::DateTime(self.order_created)),
            "delivered_time" => Some(
                self.delivered_time
                    .map(FieldValue::DateTime)
                    .unwrap_or(FieldValue::Null),
            ),
            _ => None,
        }
    }
}

/// Schema for the orders table and its summary cards
pub fn schema() -> Result<SectionSchema, ConfigError> {
    SectionSchema::builder("orders")
        .field("id", FieldType::Text)
        .field("client_name", FieldType::Text)
        .field("products", FieldType::TextList)
        .field("payment_type", FieldType::Text)
        .field("amount", FieldType::Number)
        .field("status", FieldType::Text)
        .field("courier_name", FieldType::Text)
        .field("address", FieldType::Text)
        .field("order_created", FieldType::Date)
        .field("delivered_time", FieldType::Date)
        .searchable("id")
        .searchable("client_name")
        .searchable("courier_name")
        .searchable("products")
        .aggregate(Aggregation::Count {
            name: "total_orders",
        })
        .aggregate(Aggregation::CountWhere {
            name: "delivered_orders",
            field: "status",
            equals: FieldValue::Text("delivered".to_string()),
        })
        .aggregate(Aggregation::CountAnyOf {
            name: "pending_orders",
            field: "status",
            values: &["pending", "processing"],
        })
        .aggregate(Aggregation::Sum {
            name: "total_revenue",
            field: "amount",
        })
        .build()
}

/// Query engine configured for the orders section
pub fn engine() -> Result<ListQueryEngine, ConfigError> {
    Ok(ListQueryEngine::new(schema()?))
}

/// The sample order list seeded at application start
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD-001".to_string(),
            client_name: "John Smith".to_string(),
            products: vec!["Premium Package".to_string(), "Insurance Add-on".to_string()],
            payment_type: PaymentType::Card,
            amount: 45.99,
            status: OrderStatus::Delivered,
            courier_name: "Mike Johnson".to_string(),
            address: "123 Main St, Manhattan, New York".to_string(),
            order_created: fixture_datetime(2024, 1, 15, 9, 30),
            delivered_time: Some(fixture_datetime(2024, 1, 15, 14, 45)),
        },
        Order {
            id: "ORD-002".to_string(),
            client_name: "Sarah Wilson".to_string(),
            products: vec!["Standard Package".to_string()],
            payment_type: PaymentType::Cash,
            amount: 29.99,
            status: OrderStatus::OnTheWay,
            courier_name: "Lisa Chen".to_string(),
            address: "456 Oak Ave, Beverly Hills, Los Angeles".to_string(),
            order_created: fixture_datetime(2024, 1, 15, 11, 15),
            delivered_time: None,
        },
        Order {
            id: "ORD-003".to_string(),
            client_name: "Robert Brown".to_string(),
            products: vec!["Express Package".to_string(), "Weekend Delivery".to_string()],
            payment_type: PaymentType::Card,
            amount: 65.5,
            status: OrderStatus::Processing,
            courier_name: "Not assigned".to_string(),
            address: "789 Pine St, Downtown, Chicago".to_string(),
            order_created: fixture_datetime(2024, 1, 15, 13, 20),
            delivered_time: None,
        },
        Order {
            id: "ORD-004".to_string(),
            client_name: "Emily Davis".to_string(),
            products: vec!["Economy Package".to_string()],
            payment_type: PaymentType::Cash,
            amount: 19.99,
            status: OrderStatus::Cancelled,
            courier_name: "N/A".to_string(),
            address: "321 Elm St, Midtown, Houston".to_string(),
            order_created: fixture_datetime(2024, 1, 14, 16, 45),
            delivered_time: None,
        },
        Order {
            id: "ORD-005".to_string(),
            client_name: "Michael Johnson".to_string(),
            products: vec![
                "Business Priority".to_string(),
                "Signature Required".to_string(),
            ],
            payment_type: PaymentType::Card,
            amount: 55.75,
            status: OrderStatus::Pending,
            courier_name: "Tom Wilson".to_string(),
            address: "654 Maple Dr, Scottsdale, Phoenix".to_string(),
            order_created: fixture_datetime(2024, 1, 15, 8, 0),
            delivered_time: None,
        },
        Order {
            id: "ORD-006".to_string(),
            client_name: "Lisa Anderson".to_string(),
            products: vec!["Standard Package".to_string(), "Insurance".to_string()],
            payment_type: PaymentType::Cash,
            amount: 35.25,
            status: OrderStatus::Delivered,
            courier_name: "Alex Rodriguez".to_string(),
            address: "987 Cedar Ln, Center City, Philadelphia".to_string(),
            order_created: fixture_datetime(2024, 1, 14, 10, 30),
            delivered_time: Some(fixture_datetime(2024, 1, 14, 15, 20)),
        },
    ]
}
