//! Core library for the gastos expense bot.
//!
//! This crate provides:
//! - Receipt text interpretation (normalization, date/amount/merchant
//!   extraction, assembly into a validated expense record)
//! - Keyword-based expense categorization
//! - Typed command routing (`gastei`, `/total`, `/listar`, `/categorias`,
//!   `/cat`, `/ajuda`)
//! - The message-handling boundary and the collaborator traits it talks to
//!   (recognition service, expense store, spreadsheet mirror)

pub mod api;
pub mod commands;
pub mod error;
pub mod handler;
pub mod models;
pub mod receipt;

pub use api::{ExpenseStore, MemoryMirror, MemoryStore, QueryFilter, RecognitionService, SheetMirror};
pub use commands::{Command, Period};
pub use error::{CommandError, ExtractionError, GastosError, Result};
pub use handler::MessageHandler;
pub use models::{BotConfig, Category, Expense, ExtractionConfig, categorize};
pub use receipt::{ReceiptParser, normalize};
