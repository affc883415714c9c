use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("CSV data format error: {0}")]
    CsvDataFormatError(String),

    #[error("Unknown transform '{0}'")]
    UnknownTransform(String),

    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("Invalid Jalali date: {0}")]
    InvalidJalaliDate(String),

    #[error("Invalid date pattern: {0}")]
    InvalidPattern(String),

    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Process exit status for the command line tool (sysexits.h values).
    pub fn exit_code(&self) -> u8 {
        tracing::debug!("Mapping EngineError to exit code: {:?}", self);
        match self {
            EngineError::ConfigError(_) | EngineError::JsonError { .. } => 78,
            EngineError::IoError { .. } => 74,
            EngineError::CsvSystemError { .. } | EngineError::CsvDataFormatError(_) => 65,
            EngineError::UnknownTransform(_) | EngineError::InvalidPattern(_) => 64,
            EngineError::InvalidAmount(_) | EngineError::InvalidJalaliDate(_) => 65,
            EngineError::AnyhowError(_) => 70,
        }
    }
}
