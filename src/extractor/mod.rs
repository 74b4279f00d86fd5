//! Extraction client: screenshots in, typed store reports out.
//!
//! The external AI service is modeled as the [`ExtractionClient`]
//! capability so the transformation core can be tested without a network.

pub mod gemini;
pub mod prompt;
pub mod types;

pub use gemini::GeminiClient;
pub use types::{DailyRecord, StoreName, StoreReport, WeeklyTotal};

use crate::error::Result;

/// One screenshot ready for upload.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub mime_type: String,
    /// Base64-encoded image bytes.
    pub data: String,
}

/// Contract with the external extraction service.
///
/// All-or-nothing per invocation: partial results are never returned, any
/// transport or shape failure surfaces as a single descriptive error.
pub trait ExtractionClient {
    fn extract(
        &self,
        images: &[ImagePayload],
    ) -> impl std::future::Future<Output = Result<Vec<StoreReport>>>;
}
