//! Per-section pipeline checks: schema, search surface, export, loader

use delivery_ops::prelude::*;
use delivery_ops::sections::{clients, couriers, fargo, orders, products, sellers};
use std::time::Duration;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn every_section_schema_builds() {
    assert_eq!(clients::schema().unwrap().section(), "clients");
    assert_eq!(couriers::schema().unwrap().section(), "couriers");
    assert_eq!(orders::schema().unwrap().section(), "orders");
    assert_eq!(products::schema().unwrap().section(), "products");
    assert_eq!(sellers::schema().unwrap().section(), "sellers");
    assert_eq!(fargo::schema().unwrap().section(), "fargo");
}

#[test]
fn record_ids_are_unique_within_each_section() {
    fn assert_unique<R: Record>(records: &[R]) {
        let mut ids: Vec<&str> = records.iter().map(|r| r.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }

    assert_unique(&clients::sample_clients());
    assert_unique(&couriers::sample_couriers());
    assert_unique(&orders::sample_orders());
    assert_unique(&products::sample_products());
    assert_unique(&sellers::sample_sellers());
    assert_unique(&fargo::sample_fargo_orders());
}

#[test]
fn searchable_fields_resolve_on_every_record() {
    let engine = orders::engine().unwrap();
    for record in &orders::sample_orders() {
        for field in engine.schema().searchable_fields() {
            assert!(
                record.field_value(field).is_some(),
                "order {} missing searchable field {field}",
                record.id()
            );
        }
    }
}

#[test]
fn search_by_id_prefix_finds_each_record() {
    let engine = fargo::engine().unwrap();
    let records = fargo::sample_fargo_orders();

    for record in &records {
        let matched = engine
            .filter(&records, &record.id.to_lowercase(), &FilterCriteria::new())
            .unwrap();
        assert!(matched.iter().any(|m| m.id == record.id));
    }
}

#[test]
fn sample_phone_numbers_pass_format_validation() {
    let format = FieldFormat::Phone;
    for client in clients::sample_clients() {
        let value = FieldValue::Text(client.phone.clone());
        assert!(format.validate(&value), "bad phone on {}", client.id);
    }
}

#[test]
fn sample_courier_emails_pass_format_validation() {
    let format = FieldFormat::Email;
    for courier in couriers::sample_couriers() {
        let value = FieldValue::Text(courier.email.clone());
        assert!(format.validate(&value), "bad email on {}", courier.id);
    }
}

#[test]
fn csv_export_roundtrips_matched_clients() {
    init_tracing();
    let engine = clients::engine().unwrap();
    let criteria = FilterCriteria::new().with("status", Criterion::equals("vip"));
    let matched = engine
        .filter(&clients::sample_clients(), "", &criteria)
        .unwrap();

    let (headers, rows) = tabulate(engine.schema(), &matched);
    let bytes = CsvExporter.export(&headers, &rows).unwrap();
    let text = String::from_utf8(bytes).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3); // header + 2 vip clients
    assert!(lines[1].starts_with("CLI-003"));
    assert!(lines[2].starts_with("CLI-005"));
}

#[test]
fn page_window_covers_sample_navigation() {
    // 6 clients at 10 per page fit on a single page
    let engine = clients::engine().unwrap();
    let records = clients::sample_clients();
    let view = engine.paginate(&records, PageRequest::first(10).unwrap());
    assert_eq!(page_window(view.page, view.total_pages), vec![1]);

    assert_eq!(page_window(3, 5), vec![1, 2, 3, 4, 5]);
    assert_eq!(page_window(12, 30), vec![9, 10, 11, 12, 13, 14, 15]);
}

#[tokio::test(start_paused = true)]
async fn loader_from_config_delivers_latest_page() {
    init_tracing();
    let config = AppConfig::default();
    let loader = config.page_loader();
    assert_eq!(loader.delay(), Duration::from_millis(300));

    let engine = clients::engine().unwrap();
    let records = clients::sample_clients();
    let matched = engine.filter(&records, "", &FilterCriteria::new()).unwrap();

    let page_one = engine.paginate(&matched, PageRequest::new(1, 10).unwrap());
    let page_two = engine.paginate(&matched, PageRequest::new(2, 10).unwrap());

    let (stale, fresh) = tokio::join!(loader.deliver(page_one), loader.deliver(page_two));
    assert!(stale.is_none());
    assert_eq!(fresh.unwrap().page, 2);
}
