pub mod analysis;
pub mod aws;
pub mod commands;
pub mod config;
pub mod error;
pub mod handler;
pub mod logging;
pub mod pipeline;
pub mod storage;
pub mod summary;

pub use config::Config;
pub use error::AppError;
pub use pipeline::{ResponseEnvelope, SalesAnalyzer};
