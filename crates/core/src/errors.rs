use thiserror::Error;

/// Unified error type for the entire expense-tracker-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Storage / File ──────────────────────────────────────────────
    #[error("Invalid file format: {0}")]
    InvalidFileFormat(String),

    #[error("Unsupported file version: {0}")]
    UnsupportedVersion(u16),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Expense validation failed: {0}")]
    ValidationError(String),

    #[error("Expense not found: {0}")]
    ExpenseNotFound(String),

    #[error("Invalid month name: {0}")]
    InvalidMonth(String),

    #[error("Total of expenses is too large to represent")]
    AmountOverflow,
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<tempfile::PersistError> for CoreError {
    fn from(e: tempfile::PersistError) -> Self {
        CoreError::FileIO(e.error.to_string())
    }
}
