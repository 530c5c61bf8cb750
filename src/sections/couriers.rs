//! Couriers section: delivery staff with shift and volume figures

use crate::core::{
    Aggregation, ConfigError, FieldType, FieldValue, ListQueryEngine, Record, SectionSchema,
};
use serde::{Deserialize, Serialize};

/// Whether a courier is on shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourierStatus {
    Working,
    NotWorking,
}

impl CourierStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourierStatus::Working => "working",
            CourierStatus::NotWorking => "not-working",
        }
    }
}

/// A courier with today's and aggregate delivery volumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Courier {
    pub id: String,
    pub full_name: String,
    pub status: CourierStatus,
    pub phone: String,
    pub email: String,
    pub account_balance: f64,
    pub work_schedule: String,
    pub location: String,
    pub today_delivered: u32,
    pub weekly_orders: u32,
    pub monthly_orders: u32,
    pub handed_to_clients_today: u32,
    pub handed_to_fargo_today: u32,
}

impl Record for Courier {
    fn section_name() -> &'static str {
        "couriers"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "full_name" => Some(FieldValue::Text(self.full_name.clone())),
            "status" => Some(FieldValue::Text(self.status.as_str().to_string())),
            "phone" => Some(FieldValue::Text(self.phone.clone())),
            "email" => Some(FieldValue::Text(self.email.clone())),
            "account_balance" => Some(FieldValue::Float(self.account_balance)),
            "work_schedule" => Some(FieldValue::Text(self.work_schedule.clone())),
            "location" => Some(FieldValue::Text(self.location.clone())),
            "today_delivered" => Some(FieldValue::Integer(self.today_delivered as i64)),
            "weekly_orders" => Some(FieldValue::Integer(self.weekly_orders as i64)),
            "monthly_orders" => Some(FieldValue::Integer(self.monthly_orders as i64)),
            "handed_to_clients_today" => {
                Some(FieldValue::Integer(self.handed_to_clients_today as i64))
            }
            "handed_to_fargo_today" => {
                Some(FieldValue::Integer(self.handed_to_fargo_today as i64))
            }
            _ => None,
        }
    }
}

/// Schema for the couriers table and its summary cards
pub fn schema() -> Result<SectionSchema, ConfigError> {
    SectionSchema::builder("couriers")
        .field("id", FieldType::Text)
        .field("full_name", FieldType::Text)
        .field("status", FieldType::Text)
        .field("phone", FieldType::Text)
        .field("email", FieldType::Text)
        .field("account_balance", FieldType::Number)
        .field("work_schedule", FieldType::Text)
        .field("location", FieldType::Text)
        .field("today_delivered", FieldType::Number)
        .field("weekly_orders", FieldType::Number)
        .field("monthly_orders", FieldType::Number)
        .field("handed_to_clients_today", FieldType::Number)
        .field("handed_to_fargo_today", FieldType::Number)
        .searchable("full_name")
        .searchable("email")
        .searchable("location")
        .aggregate(Aggregation::Count {
            name: "total_couriers",
        })
        .aggregate(Aggregation::CountWhere {
            name: "working_couriers",
            field: "status",
            equals: FieldValue::Text("working".to_string()),
        })
        .aggregate(Aggregation::Sum {
            name: "total_balance",
            field: "account_balance",
        })
        .aggregate(Aggregation::Sum {
            name: "todays_deliveries",
            field: "today_delivered",
        })
        .build()
}

/// Query engine configured for the couriers section
pub fn engine() -> Result<ListQueryEngine, ConfigError> {
    Ok(ListQueryEngine::new(schema()?))
}

/// The sample courier list seeded at application start
pub fn sample_couriers() -> Vec<Courier> {
    vec![
        Courier {
            id: "CUR-001".to_string(),
            full_name: "Michael Johnson".to_string(),
            status: CourierStatus::Working,
            phone: "+1-555-0201".to_string(),
            email: "mike.j@company.com".to_string(),
            account_balance: 450.75,
            work_schedule: "9:00 AM - 6:00 PM".to_string(),
            location: "Downtown District".to_string(),
            today_delivered: 8,
            weekly_orders: 45,
            monthly_orders: 180,
            handed_to_clients_today: 6,
            handed_to_fargo_today: 2,
        },
        Courier {
            id: "CUR-002".to_string(),
            full_name: "Lisa Chen".to_string(),
            status: CourierStatus::Working,
            phone: "+1-555-0202".to_string(),
            email: "lisa.c@company.com".to_string(),
            account_balance: 620.3,
            work_schedule: "8:00 AM - 5:00 PM".to_string(),
            location: "Uptown Area".to_string(),
            today_delivered: 12,
            weekly_orders: 52,
            monthly_orders: 208,
            handed_to_clients_today: 10,
            handed_to_fargo_today: 2,
        },
        Courier {
            id: "CUR-003".to_string(),
            full_name: "Thomas Wilson".to_string(),
            status: CourierStatus::NotWorking,
            phone: "+1-555-0203".to_string(),
            email: "tom.w@company.com".to_string(),
            account_balance: 125.5,
            work_schedule: "10:00 AM - 7:00 PM".to_string(),
            location: "Westside".to_string(),
            today_delivered: 0,
            weekly_orders: 28,
            monthly_orders: 112,
            handed_to_clients_today: 0,
            handed_to_fargo_today: 0,
        },
        Courier {
            id: "CUR-004".to_string(),
            full_name: "Sarah Davis".to_string(),
            status: CourierStatus::NotWorking,
            phone: "+1-555-0204".to_string(),
            email: "sarah.d@company.com".to_string(),
            account_balance: 0.0,
            work_schedule: "Off Today".to_string(),
            location: "Offline".to_string(),
            today_delivered: 0,
            weekly_orders: 0,
            monthly_orders: 85,
            handed_to_clients_today: 0,
            handed_to_fargo_today: 0,
        },
        Courier {
            id: "CUR-005".to_string(),
            full_name: "Alexander Rodriguez".to_string(),
            status: CourierStatus::Working,
            phone: "+1-555-0205".to_string(),
            email: "alex.r@company.com".to_string(),
            account_balance: 380.25,
            work_schedule: "7:00 AM - 4:00 PM".to_string(),
            location: "Southside".to_string(),
            today_delivered: 9,
            weekly_orders: 41,
            monthly_orders: 164,
            handed_to_clients_today: 7,
            handed_to_fargo_today: 2,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Criterion, FilterCriteria};

    #[test]
    fn test_summary_matches_dashboard_cards() {
        let engine = engine().unwrap();
        let summary = engine.summarize(&sample_couriers());

        assert_eq!(summary["total_couriers"], 5.0);
        assert_eq!(summary["working_couriers"], 3.0);
        assert!((summary["total_balance"] - 1576.8).abs() < 1e-9);
        assert_eq!(summary["todays_deliveries"], 29.0);
    }

    #[test]
    fn test_search_by_email_and_location() {
        let engine = engine().unwrap();

        let matched = engine
            .filter(&sample_couriers(), "lisa.c@", &FilterCriteria::new())
            .unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].full_name, "Lisa Chen");

        let matched = engine
            .filter(&sample_couriers(), "southside", &FilterCriteria::new())
            .unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "CUR-005");
    }

    #[test]
    fn test_monthly_orders_range_and_status() {
        let engine = engine().unwrap();
        let criteria = FilterCriteria::new()
            .with("status", Criterion::equals("working"))
            .with("monthly_orders", Criterion::range(170.0, 250.0).unwrap());
        let matched = engine.filter(&sample_couriers(), "", &criteria).unwrap();

        let ids: Vec<&str> = matched.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["CUR-001", "CUR-002"]);
    }
}
