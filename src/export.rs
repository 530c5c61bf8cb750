//! Spreadsheet export collaborator
//!
//! The dashboard's "Export Excel" button hands the currently matched set to
//! an exporter. Real spreadsheet formats are out of scope; the shipped
//! implementations produce CSV bytes or merely log the intent, which is all
//! the original integration did.

use crate::core::{Record, SectionSchema};
use anyhow::Result;
use tracing::info;

/// Render matched records into header and row cells using the schema's
/// field table; columns appear in declaration order.
pub fn tabulate<R: Record>(schema: &SectionSchema, records: &[R]) -> (Vec<String>, Vec<Vec<String>>) {
    let headers: Vec<String> = schema.fields().keys().map(|f| f.to_string()).collect();
    let rows = records
        .iter()
        .map(|record| {
            schema
                .fields()
                .keys()
                .map(|field| {
                    record
                        .field_value(field)
                        .map(|v| v.to_string())
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect();
    (headers, rows)
}

/// Turns a matched record set into spreadsheet bytes
pub trait SpreadsheetExporter {
    /// Export the tabulated records, returning the file contents
    fn export(&self, headers: &[String], rows: &[Vec<String>]) -> Result<Vec<u8>>;
}

/// CSV exporter with standard quoting
#[derive(Debug, Clone, Default)]
pub struct CsvExporter;

impl SpreadsheetExporter for CsvExporter {
    fn export(&self, headers: &[String], rows: &[Vec<String>]) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        {
            let mut writer = csv::Writer::from_writer(&mut bytes);
            writer.write_record(headers)?;
            for row in rows {
                writer.write_record(row)?;
            }
            writer.flush()?;
        }
        info!(rows = rows.len(), bytes = bytes.len(), "exported records to CSV");
        Ok(bytes)
    }
}

/// Placeholder exporter that only records the intent, like the original
/// dashboard's console message
#[derive(Debug, Clone, Default)]
pub struct LoggingExporter;

impl SpreadsheetExporter for LoggingExporter {
    fn export(&self, _headers: &[String], rows: &[Vec<String>]) -> Result<Vec<u8>> {
        info!(rows = rows.len(), "export requested, no file produced");
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::clients;

    #[test]
    fn test_tabulate_follows_schema_order() {
        let schema = clients::schema().unwrap();
        let records = clients::sample_clients();
        let (headers, rows) = tabulate(&schema, &records);

        assert_eq!(headers[0], "id");
        assert_eq!(headers.last().map(String::as_str), Some("status"));
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0][0], "CLI-001");
        assert_eq!(rows[2][9], "vip");
    }

    #[test]
    fn test_csv_export_quotes_commas() {
        let headers = vec!["id".to_string(), "address".to_string()];
        let rows = vec![vec![
            "ORD-001".to_string(),
            "123 Main St, Manhattan, New York".to_string(),
        ]];

        let bytes = CsvExporter.export(&headers, &rows).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("id,address\n"));
        assert!(text.contains("\"123 Main St, Manhattan, New York\""));
    }

    #[test]
    fn test_logging_exporter_produces_no_file() {
        let bytes = LoggingExporter
            .export(&["id".to_string()], &[vec!["CLI-001".to_string()]])
            .unwrap();
        assert!(bytes.is_empty());
    }
}
