use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use crate::errors::AppError;

/// Extract text from DOCX bytes, one line per non-empty paragraph.
pub fn extract_text(data: &[u8]) -> Result<String, AppError> {
    let docx = read_docx(data).map_err(|e| AppError::Extraction(format!("invalid DOCX: {e}")))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(
                para.children
                    .iter()
                    .filter_map(|pc| match pc {
                        ParagraphChild::Run(run) => Some(
                            run.children
                                .iter()
                                .filter_map(|rc| match rc {
                                    RunChild::Text(t) => Some(t.text.as_str()),
                                    _ => None,
                                })
                                .collect::<String>(),
                        ),
                        _ => None,
                    })
                    .collect::<String>(),
            ),
            _ => None,
        })
        .filter(|text| !text.trim().is_empty())
        .collect();

    Ok(paragraphs.join("\n"))
}
