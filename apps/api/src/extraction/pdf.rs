use std::panic;

use crate::errors::AppError;

/// Extract text from PDF bytes.
///
/// `pdf-extract` can panic on malformed documents; a panic is reported as an
/// extraction failure instead of unwinding into the worker.
pub fn extract_text(data: &[u8]) -> Result<String, AppError> {
    let text = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(data))
        .map_err(|_| AppError::Extraction("PDF parser failed on malformed document".to_string()))?
        .map_err(|e| AppError::Extraction(format!("invalid PDF: {e}")))?;
    Ok(clean_pdf_text(&text))
}

/// Drops blank lines, trims each line and strips NUL / BOM artifacts.
fn clean_pdf_text(text: &str) -> String {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .replace('\u{0}', "")
        .replace('\u{FEFF}', "")
}
