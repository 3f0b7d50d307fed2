//! Error types for ledgerview-core
//!
//! Errors carry a machine-readable code, a severity and optional
//! suggestions. The HTTP layer never forwards these details to clients;
//! they go to the log through [`ErrorLogger`].

use crate::query::QueryError;
use ledgerview_parser::{LoadError, ParseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Ledger file does not exist
    FileNotFound,
    /// Ledger file exists but could not be read
    IoError,
    /// Ledger content is malformed
    ParseError,
    /// Request parameters are invalid
    InvalidQuery,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::FileNotFound => write!(f, "FILE_NOT_FOUND"),
            ErrorCode::IoError => write!(f, "IO_ERROR"),
            ErrorCode::ParseError => write!(f, "PARSE_ERROR"),
            ErrorCode::InvalidQuery => write!(f, "INVALID_QUERY"),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Caller mistake, service is fine
    Warning,
    /// Request failed
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

/// Detailed error information for logs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    /// Source file (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Line number (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,
}

impl ErrorDetails {
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            suggestions: vec![],
            file: None,
            line: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }

    pub fn with_file(mut self, file: String) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_line(mut self, line: u64) -> Self {
        self.line = Some(line);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, " ({}:{})", file, line)?,
            (Some(file), None) => write!(f, " ({})", file)?,
            (None, Some(line)) => write!(f, " (line {})", line)?,
            (None, None) => {}
        }
        for suggestion in &self.suggestions {
            write!(f, "\n  - {}", suggestion)?;
        }
        Ok(())
    }
}

/// Main error type for ledgerview-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("IO error reading {path}: {message}")]
    IoError { path: String, message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String, line: Option<u64> },

    #[error(transparent)]
    InvalidQuery(#[from] QueryError),
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::FileNotFound { .. } => ErrorCode::FileNotFound,
            CoreError::IoError { .. } => ErrorCode::IoError,
            CoreError::ParseError { .. } => ErrorCode::ParseError,
            CoreError::InvalidQuery(_) => ErrorCode::InvalidQuery,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::InvalidQuery(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::FileNotFound { path } => {
                details = details.with_file(path.clone());
                details = details.with_suggestion(
                    "Check data.path and data.file in the configuration.".to_string()
                );
            }
            CoreError::IoError { path, .. } => {
                details = details.with_file(path.clone());
                details = details.with_suggestion(
                    "Ensure the file is readable and UTF-8 encoded.".to_string()
                );
            }
            CoreError::ParseError { line, .. } => {
                if let Some(line) = line {
                    details = details.with_line(*line);
                }
                details = details.with_suggestion(
                    "The header must name date_time, trans_no, credit, debit and detail.".to_string()
                );
                details = details.with_suggestion(
                    "Every row needs as many fields as the header.".to_string()
                );
            }
            CoreError::InvalidQuery(_) => {
                details = details.with_suggestion(
                    "sortColumn is one of date_time, trans_no, credit, debit, detail; sortDirection is asc or desc.".to_string()
                );
            }
        }

        details
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl From<ParseError> for CoreError {
    fn from(error: ParseError) -> Self {
        let line = match &error {
            ParseError::MalformedRow { line, .. } => Some(*line),
            ParseError::MissingColumn { .. } => None,
        };
        CoreError::ParseError { message: error.to_string(), line }
    }
}

impl From<LoadError> for CoreError {
    fn from(error: LoadError) -> Self {
        let not_found = error.is_not_found();
        match error {
            LoadError::Unreadable { path, .. } if not_found => CoreError::FileNotFound { path },
            LoadError::Unreadable { path, source } => CoreError::IoError {
                path,
                message: source.to_string(),
            },
            LoadError::Parse(parse) => parse.into(),
        }
    }
}

/// What was being attempted when an error occurred
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Operation being performed
    pub operation: String,
    /// Additional context data
    pub data: serde_json::Value,
}

impl ErrorContext {
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            data: serde_json::json!({}),
        }
    }

    pub fn with_data(mut self, key: &str, value: serde_json::Value) -> Self {
        self.data[key] = value;
        self
    }
}

/// Error logger trait
pub trait ErrorLogger {
    /// Log an error
    fn log_error(&self, error: &CoreError, context: &ErrorContext);
}

/// Default error logger using log crate
#[derive(Default)]
pub struct DefaultErrorLogger;

impl ErrorLogger for DefaultErrorLogger {
    fn log_error(&self, error: &CoreError, context: &ErrorContext) {
        match error.severity() {
            ErrorSeverity::Warning => log::warn!(
                target: "ledgerview::error",
                "{} - Operation: {} - Context: {}",
                error.to_details(),
                context.operation,
                context.data
            ),
            ErrorSeverity::Error => log::error!(
                target: "ledgerview::error",
                "{} - Operation: {} - Context: {}",
                error.to_details(),
                context.operation,
                context.data
            ),
        }
    }
}

// ==================== Tests ====================
