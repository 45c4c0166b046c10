use crate::core::error::{AppError, Result};
use crate::features::exports::dtos::ExportRow;

const HEADER: [&str; 5] = [
    "Title",
    "Category",
    "Date",
    "Description",
    "Number of Volunteers",
];

/// Encode the row set as CSV: one header row, one row per opportunity,
/// dates as YYYY-MM-DD, descriptions in full. Quoting follows RFC 4180
/// (fields with delimiters, quotes, or line breaks are quoted, embedded
/// quotes doubled).
pub fn to_csv(rows: &[ExportRow]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(HEADER)
        .map_err(|e| AppError::Internal(format!("CSV header write failed: {}", e)))?;

    for row in rows {
        writer
            .write_record([
                row.title.as_str(),
                row.category.as_str(),
                &row.date.format("%Y-%m-%d").to_string(),
                row.description.as_str(),
                &row.volunteer_count.to_string(),
            ])
            .map_err(|e| AppError::Internal(format!("CSV row write failed: {}", e)))?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("CSV flush failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample_rows() -> Vec<ExportRow> {
        vec![
            ExportRow {
                title: "Math Tutoring".to_string(),
                category: "Tutoring".to_string(),
                date: date("2024-01-05"),
                description: "Help students with algebra".to_string(),
                volunteer_count: 2,
            },
            ExportRow {
                title: "Community Soccer Day".to_string(),
                category: "Sports".to_string(),
                date: date("2024-01-10"),
                description: "Referee youth matches".to_string(),
                volunteer_count: 0,
            },
        ]
    }

    #[test]
    fn test_header_row() {
        let bytes = to_csv(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text.lines().next().unwrap(),
            "Title,Category,Date,Description,Number of Volunteers"
        );
    }

    #[test]
    fn test_rows_in_order_with_counts() {
        let bytes = to_csv(&sample_rows()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "Math Tutoring,Tutoring,2024-01-05,Help students with algebra,2"
        );
        assert_eq!(
            lines[2],
            "Community Soccer Day,Sports,2024-01-10,Referee youth matches,0"
        );
    }

    #[test]
    fn test_description_emitted_in_full() {
        let mut rows = sample_rows();
        rows[0].description = "d".repeat(500);
        let bytes = to_csv(&rows).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains(&"d".repeat(500)));
    }

    #[test]
    fn test_fields_with_delimiters_are_quoted() {
        let rows = vec![ExportRow {
            title: "Cleanup, riverside".to_string(),
            category: "Other".to_string(),
            date: date("2024-02-01"),
            description: "Bring \"gloves\"\nand boots".to_string(),
            volunteer_count: 1,
        }];
        let bytes = to_csv(&rows).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\"Cleanup, riverside\""));
        assert!(text.contains("\"Bring \"\"gloves\"\"\nand boots\""));
    }
}
