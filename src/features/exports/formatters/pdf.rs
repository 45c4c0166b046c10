use std::path::Path;

use chrono::{DateTime, Utc};
use genpdf::elements::{Break, FrameCellDecorator, Paragraph, TableLayout};
use genpdf::{style, Element};

use crate::core::config::ExportConfig;
use crate::core::error::{AppError, Result};
use crate::features::exports::dtos::ExportRow;
use crate::features::exports::formatters::truncate_with_ellipsis;
use crate::shared::constants::PDF_DESCRIPTION_LIMIT;

/// PDF report renderer. Needs a TrueType font family on disk; the renderer
/// is constructed at startup and reports the capability as unavailable per
/// request when the fonts cannot be loaded.
pub struct PdfRenderer {
    font_dir: String,
    font_family: String,
}

impl PdfRenderer {
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            font_dir: config.pdf_font_dir.clone(),
            font_family: config.pdf_font_family.clone(),
        }
    }

    /// Cheap startup probe for the regular font file
    pub fn is_available(&self) -> bool {
        Path::new(&self.font_dir)
            .join(format!("{}-Regular.ttf", self.font_family))
            .exists()
    }

    /// Load the full font family, falling back to the regular face for all
    /// styles when only that file is present.
    fn load_fonts(&self) -> Result<genpdf::fonts::FontFamily<genpdf::fonts::FontData>> {
        match genpdf::fonts::from_files(&self.font_dir, &self.font_family, None) {
            Ok(family) => Ok(family),
            Err(full_err) => {
                tracing::warn!(
                    "Full font family load failed ({}), falling back to regular face",
                    full_err
                );
                let regular_path =
                    Path::new(&self.font_dir).join(format!("{}-Regular.ttf", self.font_family));
                let font_bytes = std::fs::read(&regular_path).map_err(|e| {
                    AppError::PdfUnavailable(format!(
                        "font family '{}' not found in {} ({})",
                        self.font_family, self.font_dir, e
                    ))
                })?;

                let face = |bytes: Vec<u8>| {
                    genpdf::fonts::FontData::new(bytes, None).map_err(|e| {
                        AppError::PdfUnavailable(format!("font data could not be loaded: {}", e))
                    })
                };

                Ok(genpdf::fonts::FontFamily {
                    regular: face(font_bytes.clone())?,
                    bold: face(font_bytes.clone())?,
                    italic: face(font_bytes.clone())?,
                    bold_italic: face(font_bytes)?,
                })
            }
        }
    }

    /// Render the report: title block, generation timestamp, one table row
    /// per opportunity (descriptions cut to 80 characters), and a summary
    /// line with the record and volunteer totals. The table flows across
    /// pages as needed.
    pub fn render(&self, rows: &[ExportRow], generated_at: DateTime<Utc>) -> Result<Vec<u8>> {
        let font_family = self.load_fonts()?;

        let mut doc = genpdf::Document::new(font_family);
        doc.set_title("Volunteer Opportunities Report");
        doc.set_minimal_conformance();

        let mut decorator = genpdf::SimplePageDecorator::new();
        decorator.set_margins(15);
        doc.set_page_decorator(decorator);

        doc.push(
            Paragraph::new("Volunteer Opportunities Report")
                .styled(style::Style::new().bold().with_font_size(18)),
        );
        doc.push(Paragraph::new(format!(
            "Generated: {}",
            generated_at.format("%Y-%m-%d %H:%M UTC")
        )));
        doc.push(Break::new(1.0));

        let mut table = TableLayout::new(vec![3, 2, 2, 1, 4]);
        table.set_cell_decorator(FrameCellDecorator::new(true, true, false));

        let header_style = style::Style::new().bold();
        table
            .row()
            .element(Paragraph::new("Title").styled(header_style).padded(1))
            .element(Paragraph::new("Category").styled(header_style).padded(1))
            .element(Paragraph::new("Date").styled(header_style).padded(1))
            .element(Paragraph::new("Volunteers").styled(header_style).padded(1))
            .element(Paragraph::new("Description").styled(header_style).padded(1))
            .push()
            .map_err(|e| AppError::PdfGeneration(format!("table header: {}", e)))?;

        for row in rows {
            table
                .row()
                .element(Paragraph::new(row.title.clone()).padded(1))
                .element(Paragraph::new(row.category.clone()).padded(1))
                .element(Paragraph::new(row.date.format("%Y-%m-%d").to_string()).padded(1))
                .element(Paragraph::new(row.volunteer_count.to_string()).padded(1))
                .element(
                    Paragraph::new(truncate_with_ellipsis(
                        &row.description,
                        PDF_DESCRIPTION_LIMIT,
                    ))
                    .padded(1),
                )
                .push()
                .map_err(|e| AppError::PdfGeneration(format!("table row: {}", e)))?;
        }

        doc.push(table);
        doc.push(Break::new(1.0));

        let total_volunteers: i64 = rows.iter().map(|r| r.volunteer_count).sum();
        doc.push(Paragraph::new(format!(
            "Total: {} opportunities, {} volunteers",
            rows.len(),
            total_volunteers
        )));

        let mut buf = Vec::new();
        doc.render(&mut buf)
            .map_err(|e| AppError::PdfGeneration(format!("render: {}", e)))?;

        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_fonts_renderer() -> PdfRenderer {
        PdfRenderer::new(&ExportConfig {
            pdf_font_dir: "/nonexistent/fonts".to_string(),
            pdf_font_family: "NoSuchFamily".to_string(),
        })
    }

    #[test]
    fn test_missing_fonts_reported_unavailable() {
        let renderer = missing_fonts_renderer();
        assert!(!renderer.is_available());

        let err = renderer.render(&[], Utc::now()).unwrap_err();
        assert!(matches!(err, AppError::PdfUnavailable(_)));
        assert!(err.to_string().contains("PDF export unavailable"));
    }
}
