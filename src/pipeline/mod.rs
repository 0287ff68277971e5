//! End-to-end invocation: fetch → aggregate → summarize → envelope

pub mod analyzer;
pub mod envelope;

pub use analyzer::SalesAnalyzer;
pub use envelope::{AnalysisReport, ResponseEnvelope};
