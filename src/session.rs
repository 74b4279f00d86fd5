//! Orchestrator session state.
//!
//! Owns the per-run state (selected files, extracted reports, processing
//! flag, error message) and sequences encode -> extract. The aggregation and
//! output adapters are pure functions over the stored reports.

use crate::extractor::{ExtractionClient, StoreReport};
use crate::scanner::{self, ImageInfo};

#[derive(Debug, Default)]
pub struct Session {
    files: Vec<ImageInfo>,
    reports: Vec<StoreReport>,
    processing: bool,
    error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a new batch of screenshots. Previous results and errors are
    /// discarded.
    pub fn set_files(&mut self, files: Vec<ImageInfo>) {
        self.files = files;
        self.reports.clear();
        self.error = None;
    }

    pub fn files(&self) -> &[ImageInfo] {
        &self.files
    }

    pub fn reports(&self) -> &[StoreReport] {
        &self.reports
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Run one extraction pass. Returns true when reports were produced.
    ///
    /// With zero files selected this is a user error: it is reported inline
    /// and no call is made (the processing flag is never raised). Encoding
    /// failures abort the batch before the network call. Any failure is
    /// terminal for the run but not for the session; the caller may adjust
    /// the input and retry.
    pub async fn extract<C: ExtractionClient>(&mut self, client: &C) -> bool {
        if self.files.is_empty() {
            self.error = Some("no screenshots selected, upload images first".into());
            return false;
        }

        self.processing = true;
        self.error = None;
        self.reports.clear();

        let outcome = match scanner::encode_images(&self.files) {
            Ok(payloads) => client.extract(&payloads).await,
            Err(e) => Err(e),
        };

        self.processing = false;

        match outcome {
            Ok(reports) => {
                self.reports = reports;
                true
            }
            Err(e) => {
                self.error = Some(e.to_string());
                false
            }
        }
    }
}
