//! Text Extractor: turns an uploaded resume file into plain text.

mod docx;
mod pdf;
mod text;

use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;

/// Resume formats we can read, decided from the uploaded file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
    Txt,
}

impl FileKind {
    pub fn from_file_name(file_name: &str) -> Result<Self, AppError> {
        let extension = std::path::Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "pdf" => Ok(FileKind::Pdf),
            "docx" => Ok(FileKind::Docx),
            "txt" => Ok(FileKind::Txt),
            _ => Err(AppError::UnsupportedFileType(file_name.to_string())),
        }
    }
}

/// Extracts text from raw file bytes. CPU-bound; call from a blocking context.
pub fn extract_text(kind: FileKind, data: &[u8]) -> Result<String, AppError> {
    let text = match kind {
        FileKind::Pdf => pdf::extract_text(data)?,
        FileKind::Docx => docx::extract_text(data)?,
        FileKind::Txt => text::extract_text(data)?,
    };

    if text.trim().is_empty() {
        return Err(AppError::EmptyExtractedText);
    }
    Ok(text)
}

/// Extracts text from an uploaded file on the blocking thread pool.
pub async fn extract_upload(file_name: &str, data: Bytes) -> Result<String, AppError> {
    let kind = FileKind::from_file_name(file_name)?;
    let text = tokio::task::spawn_blocking(move || extract_text(kind, &data))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Text extraction task failed: {e}")))??;

    info!("Extracted {} chars from {} ({:?})", text.len(), file_name, kind);
    Ok(text)
}
