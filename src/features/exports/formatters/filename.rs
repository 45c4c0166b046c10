use crate::shared::constants::DEFAULT_EXPORT_FILENAME;

/// Build the suggested attachment filename: fall back to the default base
/// when none (or a blank one) was given, and append the format extension
/// unless the base already carries it. The suffix check is case-sensitive.
///
/// The result goes inside a quoted `Content-Disposition` value, so quotes,
/// backslashes, and control characters are stripped from the base first; a
/// base that is empty after stripping falls back to the default.
pub fn attachment_filename(base: Option<&str>, extension: &str) -> String {
    let sanitized = base.map(sanitize_base);
    let base = sanitized
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_EXPORT_FILENAME);

    let suffix = format!(".{}", extension);
    if base.ends_with(&suffix) {
        base.to_string()
    } else {
        format!("{}{}", base, suffix)
    }
}

fn sanitize_base(base: &str) -> String {
    base.chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_appended() {
        assert_eq!(attachment_filename(Some("report"), "csv"), "report.csv");
        assert_eq!(attachment_filename(Some("report"), "pdf"), "report.pdf");
    }

    #[test]
    fn test_existing_extension_kept() {
        assert_eq!(attachment_filename(Some("report.csv"), "csv"), "report.csv");
        assert_eq!(
            attachment_filename(Some("report.json"), "json"),
            "report.json"
        );
    }

    #[test]
    fn test_suffix_check_is_case_sensitive() {
        assert_eq!(
            attachment_filename(Some("report.CSV"), "csv"),
            "report.CSV.csv"
        );
    }

    #[test]
    fn test_mismatched_extension_appended() {
        assert_eq!(
            attachment_filename(Some("report.csv"), "json"),
            "report.csv.json"
        );
    }

    #[test]
    fn test_quotes_and_control_characters_stripped() {
        assert_eq!(attachment_filename(Some("re\"port"), "csv"), "report.csv");
        assert_eq!(
            attachment_filename(Some("bad\r\nname"), "csv"),
            "badname.csv"
        );
        assert_eq!(
            attachment_filename(Some("back\\slash"), "json"),
            "backslash.json"
        );
    }

    #[test]
    fn test_base_empty_after_stripping_uses_default() {
        assert_eq!(
            attachment_filename(Some("\"\u{7}\""), "pdf"),
            "volunteer_opportunities.pdf"
        );
    }

    #[test]
    fn test_blank_or_missing_base_uses_default() {
        assert_eq!(
            attachment_filename(None, "csv"),
            "volunteer_opportunities.csv"
        );
        assert_eq!(
            attachment_filename(Some("   "), "json"),
            "volunteer_opportunities.json"
        );
    }
}
