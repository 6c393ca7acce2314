//! Statement document text extraction (digital PDFs only, no OCR).

use thiserror::Error;
use tracing::debug;

/// The PDF header may be preceded by junk, but only within the first KiB.
const HEADER_WINDOW: usize = 1024;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("document is empty")]
    Empty,
    #[error("not a PDF document")]
    NotPdf,
    #[error("could not extract text from PDF: {0}")]
    Pdf(String),
}

/// Extract the full text of a statement PDF, pages joined by newlines.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    if bytes.is_empty() {
        return Err(ExtractError::Empty);
    }
    if !looks_like_pdf(bytes) {
        return Err(ExtractError::NotPdf);
    }

    let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))?;
    debug!(bytes = bytes.len(), chars = text.len(), "extracted statement text");
    Ok(text)
}

fn looks_like_pdf(bytes: &[u8]) -> bool {
    let window = &bytes[..bytes.len().min(HEADER_WINDOW)];
    window.windows(5).any(|w| w == b"%PDF-")
}
