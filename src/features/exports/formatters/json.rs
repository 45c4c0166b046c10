use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::{AppError, Result};
use crate::features::exports::dtos::ExportRow;

/// Top-level shape of the JSON export document
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportDocument {
    pub exported_at: DateTime<Utc>,
    pub total_records: usize,
    pub opportunities: Vec<ExportDocumentRow>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportDocumentRow {
    pub title: String,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
    pub volunteer_count: i64,
}

impl From<&ExportRow> for ExportDocumentRow {
    fn from(row: &ExportRow) -> Self {
        Self {
            title: row.title.clone(),
            category: row.category.clone(),
            date: row.date,
            description: row.description.clone(),
            volunteer_count: row.volunteer_count,
        }
    }
}

/// Encode the row set as a JSON document with an export timestamp and
/// record count. Descriptions are emitted in full.
pub fn to_json(rows: &[ExportRow], exported_at: DateTime<Utc>) -> Result<Vec<u8>> {
    let document = ExportDocument {
        exported_at,
        total_records: rows.len(),
        opportunities: rows.iter().map(|r| r.into()).collect(),
    };

    serde_json::to_vec_pretty(&document)
        .map_err(|e| AppError::Internal(format!("JSON export serialization failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn rows(n: usize) -> Vec<ExportRow> {
        (0..n)
            .map(|i| ExportRow {
                title: format!("Opportunity {}", i),
                category: "Tutoring".to_string(),
                date: date("2024-01-05"),
                description: "desc".to_string(),
                volunteer_count: i as i64,
            })
            .collect()
    }

    #[test]
    fn test_round_trip_counts() {
        let input = rows(4);
        let bytes = to_json(&input, Utc::now()).unwrap();
        let document: ExportDocument = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(document.total_records, 4);
        assert_eq!(document.opportunities.len(), 4);
    }

    #[test]
    fn test_document_content() {
        let input = rows(1);
        let exported_at = Utc::now();
        let bytes = to_json(&input, exported_at).unwrap();
        let document: ExportDocument = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(document.exported_at, exported_at);
        let row = &document.opportunities[0];
        assert_eq!(row.title, "Opportunity 0");
        assert_eq!(row.category, "Tutoring");
        assert_eq!(row.date, date("2024-01-05"));
        assert_eq!(row.volunteer_count, 0);
    }

    #[test]
    fn test_date_serialized_as_iso_day() {
        let bytes = to_json(&rows(1), Utc::now()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["opportunities"][0]["date"], "2024-01-05");
    }

    #[test]
    fn test_description_not_truncated() {
        let mut input = rows(1);
        input[0].description = "x".repeat(150);
        let bytes = to_json(&input, Utc::now()).unwrap();
        let document: ExportDocument = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(document.opportunities[0].description.len(), 150);
    }
}
