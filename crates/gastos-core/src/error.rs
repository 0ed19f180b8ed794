//! Error types for the gastos-core library.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the gastos library.
#[derive(Error, Debug)]
pub enum GastosError {
    /// Receipt extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Command parsing error.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// The recognition service failed or returned garbage.
    #[error("recognition error: {0}")]
    Recognition(String),

    /// The expense store rejected a read or write.
    #[error("store error: {0}")]
    Store(String),

    /// The spreadsheet mirror rejected an append.
    #[error("mirror error: {0}")]
    Mirror(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while turning recognized receipt text into an expense.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The recognition service produced no usable text.
    #[error("no text recognized")]
    NoText,

    /// No decimal amount token anywhere in the text.
    #[error("no amount found in receipt text")]
    AmountNotFound,

    /// An amount was found or supplied but is not a positive value.
    #[error("invalid amount: {0}")]
    InvalidAmount(Decimal),
}

/// Errors raised while parsing a typed command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// `gastei` without a parseable amount or a description.
    #[error("usage: gastei <amount> <description>")]
    RegisterUsage,

    /// A month/year pair that is missing, non-numeric or out of range.
    #[error("usage: {0} <month> <year>")]
    PeriodUsage(&'static str),

    /// `/cat` without a category name.
    #[error("usage: /cat <category> [<month> <year>]")]
    CategoryUsage,
}

/// Result type for the gastos library.
pub type Result<T> = std::result::Result<T, GastosError>;
