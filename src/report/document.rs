use std::path::Path;

use chrono::NaiveDate;
use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::error::ReportError;

// A4 portrait, Courier 10pt
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const FONT_SIZE: f32 = 10.0;
const LINE_HEIGHT: f32 = 5.0;
pub(super) const MAX_CHARS: usize = 85;
pub(super) const LINES_PER_PAGE: usize = 53;

const INTRO: &str = "Here is your expense summary for the current month:";

/// Wrap `text` in a paginated PDF with a generation date header.
pub(crate) fn render_document(text: &str, date: NaiveDate) -> Result<Vec<u8>, ReportError> {
    let lines = document_lines(text, date);
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Expense Report",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Courier)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;

    let mut first = Some((first_page, first_layer));
    let mut pages = 0;
    for (i, chunk) in lines.chunks(LINES_PER_PAGE).enumerate() {
        let (page, layer) = first.take().unwrap_or_else(|| {
            doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), format!("Layer {}", i + 1))
        });
        let canvas = doc.get_page(page).get_layer(layer);
        for (row, line) in chunk.iter().enumerate() {
            let y = PAGE_HEIGHT - MARGIN - LINE_HEIGHT * (row as f32 + 1.0);
            canvas.use_text(line.as_str(), FONT_SIZE, Mm(MARGIN), Mm(y), &font);
        }
        pages += 1;
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| ReportError::Pdf(e.to_string()))?;
    tracing::debug!(lines = lines.len(), pages, bytes = bytes.len(), "rendered report document");
    Ok(bytes)
}

/// Render and write the document to `path`.
pub(crate) fn write_document(path: &Path, text: &str, date: NaiveDate) -> Result<(), ReportError> {
    let bytes = render_document(text, date)?;
    std::fs::write(path, bytes).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote report document");
    Ok(())
}

/// Lines exactly as they will be laid out: header, intro, blank line, then
/// the body with unencodable characters dropped and long lines wrapped.
pub(super) fn document_lines(text: &str, date: NaiveDate) -> Vec<String> {
    let mut lines = vec![
        format!("Generated on: {}", date.format("%Y-%m-%d")),
        INTRO.to_string(),
        String::new(),
    ];
    for raw in text.lines() {
        let line = to_single_byte(raw);
        let line = line.trim_end();
        if line.is_empty() {
            lines.push(String::new());
            continue;
        }
        let chars: Vec<char> = line.chars().collect();
        lines.extend(chars.chunks(MAX_CHARS).map(|c| c.iter().collect::<String>()));
    }
    lines
}

/// Keep printable characters the built-in fonts can encode (Latin-1).
pub(super) fn to_single_byte(s: &str) -> String {
    s.chars()
        .filter(|&c| (c as u32) <= 0xFF && !c.is_control())
        .collect()
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
