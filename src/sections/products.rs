//! Products section: delivery packages and combo offerings

use crate::core::{
    Aggregation, ConfigError, FieldType, FieldValue, ListQueryEngine, Record, SectionSchema,
};
use serde::{Deserialize, Serialize};

/// Stock level of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }
}

/// A sellable delivery package, possibly a combo of add-ons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub stock: u32,
    pub weekly_sold: u32,
    pub monthly_sold: u32,
    pub is_combo: bool,
    pub combo_items: Vec<String>,
    pub cost_price: f64,
    pub selling_price: f64,
    pub stores: Vec<String>,
    pub status: StockStatus,
}

impl Record for Product {
    fn section_name() -> &'static str {
        "products"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "name" => Some(FieldValue::Text(self.name.clone())),
            "stock" => Some(FieldValue::Integer(self.stock as i64)),
            "weekly_sold" => Some(FieldValue::Integer(self.weekly_sold as i64)),
            "monthly_sold" => Some(FieldValue::Integer(self.monthly_sold as i64)),
            "is_combo" => Some(FieldValue::Flag(self.is_combo)),
            "combo_items" => Some(FieldValue::TextList(self.combo_items.clone())),
            "cost_price" => Some(FieldValue::Float(self.cost_price)),
            "selling_price" => Some(FieldValue::Float(self.selling_price)),
            "stores" => Some(FieldValue::TextList(self.stores.clone())),
            "status" => Some(FieldValue::Text(self.status.as_str().to_string())),
            _ => None,
        }
    }
}

impl Product {
    /// Absolute profit per unit
    pub fn profit(&self) -> f64 {
        self.selling_price - self.cost_price
    }

    /// Profit as a percentage of the selling price
    pub fn margin_percent(&self) -> f64 {
        if self.selling_price == 0.0 {
            0.0
        } else {
            self.profit() / self.selling_price * 100.0
        }
    }
}

/// Schema for the products table and its summary cards
pub fn schema() -> Result<SectionSchema, ConfigError> {
    SectionSchema::builder("products")
        .field("id", FieldType::Text)
        .field("name", FieldType::Text)
        .field("stock", FieldType::Number)
        .field("weekly_sold", FieldType::Number)
        .field("monthly_sold", FieldType::Number)
        .field("is_combo", FieldType::Flag)
        .field("combo_items", FieldType::TextList)
        .field("cost_price", FieldType::Number)
        .field("selling_price", FieldType::Number)
        .field("stores", FieldType::TextList)
        .field("status", FieldType::Text)
        .searchable("name")
        .searchable("id")
        .aggregate(Aggregation::Count {
            name: "total_products",
        })
        .aggregate(Aggregation::CountWhere {
            name: "low_stock",
            field: "status",
            equals: FieldValue::Text("low-stock".to_string()),
        })
        .aggregate(Aggregation::CountWhere {
            name: "out_of_stock",
            field: "status",
            equals: FieldValue::Text("out-of-stock".to_string()),
        })
        .aggregate(Aggregation::CountWhere {
            name: "combo_products",
            field: "is_combo",
            equals: FieldValue::Flag(true),
        })
        .build()
}

/// Query engine configured for the products section
pub fn engine() -> Result<ListQueryEngine, ConfigError> {
    Ok(ListQueryEngine::new(schema()?))
}

/// The sample product list seeded at application start
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: "PROD-001".to_string(),
            name: "Premium Delivery Package".to_string(),
            stock: 150,
            weekly_sold: 45,
            monthly_sold: 180,
            is_combo: true,
            combo_items: vec![
                "Express Shipping".to_string(),
                "Insurance".to_string(),
                "Priority Handling".to_string(),
            ],
            cost_price: 15.5,
            selling_price: 29.99,
            stores: vec![
                "Downtown Store".to_string(),
                "Mall Branch".to_string(),
                "Online".to_string(),
            ],
            status: StockStatus::InStock,
        },
        Product {
            id: "PROD-002".to_string(),
            name: "Standard Delivery Package".to_string(),
            stock: 75,
            weekly_sold: 32,
            monthly_sold: 128,
            is_combo: false,
            combo_items: Vec::new(),
            cost_price: 8.25,
            selling_price: 19.99,
            stores: vec!["Downtown Store".to_string(), "Mall Branch".to_string()],
            status: StockStatus::LowStock,
        },
        Product {
            id: "PROD-003".to_string(),
            name: "Express Overnight Package".to_string(),
            stock: 0,
            weekly_sold: 0,
            monthly_sold: 15,
            is_combo: true,
            combo_items: vec![
                "Overnight Shipping".to_string(),
                "SMS Tracking".to_string(),
                "Insurance".to_string(),
            ],
            cost_price: 22.75,
            selling_price: 39.99,
            stores: vec!["Online".to_string()],
            status: StockStatus::OutOfStock,
        },
        Product {
            id: "PROD-004".to_string(),
            name: "Economy Delivery".to_string(),
            stock: 200,
            weekly_sold: 28,
            monthly_sold: 112,
            is_combo: false,
            combo_items: Vec::new(),
            cost_price: 6.5,
            selling_price: 14.99,
            stores: vec![
                "Downtown Store".to_string(),
                "Mall Branch".to_string(),
                "Warehouse".to_string(),
            ],
            status: StockStatus::InStock,
        },
        Product {
            id: "PROD-005".to_string(),
            name: "Business Priority Package".to_string(),
            stock: 25,
            weekly_sold: 18,
            monthly_sold: 72,
            is_combo: true,
            combo_items: vec![
                "Priority Handling".to_string(),
                "Business Hours Delivery".to_string(),
                "Signature Required".to_string(),
            ],
            cost_price: 28.0,
            selling_price: 49.99,
            stores: vec!["Downtown Store".to_string(), "Online".to_string()],
            status: StockStatus::LowStock,
        },
        Product {
            id: "PROD-006".to_string(),
            name: "Weekend Special Package".to_string(),
            stock: 88,
            weekly_sold: 22,
            monthly_sold: 88,
            is_combo: true,
            combo_items: vec![
                "Weekend Delivery".to_string(),
                "Flexible Time Slot".to_string(),
                "SMS Updates".to_string(),
            ],
            cost_price: 18.25,
            selling_price: 34.99,
            stores: vec!["Mall Branch".to_string(), "Online".to_string()],
            status: StockStatus::InStock,
        },
    ]
}
