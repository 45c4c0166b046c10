mod csv;
mod filename;
mod json;
mod pdf;

pub use csv::to_csv;
pub use filename::attachment_filename;
pub use json::{to_json, ExportDocument, ExportDocumentRow};
pub use pdf::PdfRenderer;

/// Cut a string to `limit` characters, marking the cut with an ellipsis.
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(limit).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(truncate_with_ellipsis("short", 80), "short");
    }

    #[test]
    fn test_exact_length_untouched() {
        let text = "x".repeat(80);
        assert_eq!(truncate_with_ellipsis(&text, 80), text);
    }

    #[test]
    fn test_long_text_cut_with_marker() {
        let text = "y".repeat(150);
        let cut = truncate_with_ellipsis(&text, 100);
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.ends_with("..."));
        assert_eq!(&cut[..100], &text[..100]);
    }

    #[test]
    fn test_multibyte_not_split() {
        let text = "é".repeat(90);
        let cut = truncate_with_ellipsis(&text, 80);
        assert_eq!(cut.chars().count(), 83);
    }
}
