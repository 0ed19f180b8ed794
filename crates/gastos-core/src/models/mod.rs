//! Data models for the gastos core.

pub mod category;
pub mod config;
pub mod expense;

pub use category::{Category, categorize};
pub use config::{BotConfig, ExtractionConfig};
pub use expense::{Expense, collapse_whitespace, format_amount};
