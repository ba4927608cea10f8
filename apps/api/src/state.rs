use std::sync::Arc;

use crate::config::Config;
use crate::screening::extract::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The service is stateless across requests: every screening run rebuilds its
/// term space from scratch, so the only shared data is read-only.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable text extractor. Default: PdfTextExtractor. Swapped for an
    /// in-memory fake in handler tests.
    pub extractor: Arc<dyn TextExtractor>,
}
