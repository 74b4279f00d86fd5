//! skello-extract: AI extraction of Skello weekly reports.
//!
//! Pipeline: scan screenshots -> Gemini structured extraction -> pivot
//! aggregation -> results table / CSV export.

pub mod aggregator;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod report;
pub mod scanner;
pub mod session;
