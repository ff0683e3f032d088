use std::path::PathBuf;

/// Default data file, resolved against the working directory.
pub const DEFAULT_DATA_FILE: &str = "expense_tracker.json";

/// Default prefix printed in front of every amount.
pub const DEFAULT_CURRENCY: &str = "Rs";

/// Runtime configuration handed to the tracker at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the whole expense collection is persisted.
    pub data_file: PathBuf,

    /// Currency prefix used when formatting amounts for display (e.g. "Rs", "$").
    pub currency: String,
}

impl Config {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            ..Self::default()
        }
    }

    /// Replace the display currency prefix.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}
