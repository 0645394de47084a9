use crate::errors::AppError;

/// Decode a plain-text upload. Only UTF-8 is accepted; a leading BOM is dropped.
pub fn extract_text(data: &[u8]) -> Result<String, AppError> {
    let text = std::str::from_utf8(data)
        .map_err(|e| AppError::Extraction(format!("text file is not valid UTF-8: {e}")))?;
    Ok(text.trim_start_matches('\u{FEFF}').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_text_passes_through() {
        assert_eq!(extract_text("Zoë Müller".as_bytes()).unwrap(), "Zoë Müller");
    }

    #[test]
    fn test_bom_is_stripped() {
        assert_eq!(extract_text(b"\xEF\xBB\xBFhello").unwrap(), "hello");
    }

    #[test]
    fn test_invalid_utf8_is_extraction_error() {
        assert!(matches!(
            extract_text(&[0xff, 0xfe, 0x00]),
            Err(AppError::Extraction(_))
        ));
    }
}
