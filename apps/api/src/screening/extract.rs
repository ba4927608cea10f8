//! Text extraction boundary — turns uploaded resume bytes into plain text.
//!
//! The ranking pipeline only ever sees "text or nothing": a file that yields
//! an error or no text is reported per file and the run continues without it.

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::AppError;

/// The text extractor trait. Implement this to swap extraction backends
/// without touching the screening pipeline or handlers.
///
/// Carried in `AppState` as `Arc<dyn TextExtractor>`.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, filename: &str, bytes: Bytes) -> Result<String, AppError>;
}

/// PDF-backed extractor. Best-effort linear text extraction only; page
/// structure and layout are not preserved.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, filename: &str, bytes: Bytes) -> Result<String, AppError> {
        let filename = filename.to_string();
        // pdf-extract is CPU-bound; keep it off the async reactor.
        let text =
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
                .await
                .map_err(|e| {
                    AppError::Internal(anyhow::anyhow!("extraction task failed: {e}"))
                })?
                .map_err(|e| AppError::Extraction(format!("{filename}: {e}")))?;

        Ok(text.trim().to_string())
    }
}
