use thiserror::Error;

/// Errors raised while reading or aggregating the sales CSV
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("input is not valid UTF-8: {0}")]
    Encoding(String),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("missing value for column '{column}' on line {line}")]
    MissingField { line: u64, column: String },

    #[error("invalid amount '{value}' on line {line}")]
    InvalidAmount { line: u64, value: String },

    #[error("amount '{value}' on line {line} is out of range")]
    AmountOutOfRange { line: u64, value: String },

    #[error("sales total overflows on line {line}")]
    SumOverflow { line: u64 },

    #[error("malformed CSV on line {line}: {message}")]
    Malformed { line: u64, message: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Object not found: {bucket}/{key}")]
    NotFound { bucket: String, key: String },

    #[error("Failed to read object {bucket}/{key}: {message}")]
    Access {
        bucket: String,
        key: String,
        message: String,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Model invocation failed: {0}")]
    Model(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON serialization failed: {}", err))
    }
}
