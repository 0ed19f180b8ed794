//! The expense record and its assembly rules.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;
use crate::models::category::{Category, categorize};

/// A single registered expense.
///
/// Constructed through [`Expense::assemble`] (from receipt extraction or a
/// typed command) and immutable afterwards; listing and reporting go through
/// read-only store queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Positive currency value, two decimal places.
    pub amount: Decimal,

    /// Merchant or item label; non-empty, trimmed, single-spaced.
    pub description: String,

    /// Calendar date of the expense.
    pub date: NaiveDate,

    /// Month component of `date`, denormalized for range queries.
    pub month: u32,

    /// Year component of `date`, denormalized for range queries.
    pub year: i32,

    /// Category derived from the description at assembly time.
    pub category: Category,
}

impl Expense {
    /// Combine extracted fields into a validated expense.
    ///
    /// `date_text` is whatever the date heuristics produced: a `DD/MM/YYYY`
    /// receipt token (taken verbatim, so possibly not a real calendar date)
    /// or an ISO date. Anything that does not parse falls back to `today`,
    /// keeping assembly total in the date dimension. A non-positive amount
    /// is the one hard failure: no record is produced.
    pub fn assemble(
        amount: Decimal,
        description: &str,
        date_text: &str,
        today: NaiveDate,
    ) -> Result<Self, ExtractionError> {
        if amount <= Decimal::ZERO {
            return Err(ExtractionError::InvalidAmount(amount));
        }

        let description = collapse_whitespace(description);
        let date = parse_date(date_text).unwrap_or(today);

        Ok(Self {
            amount,
            description: description.clone(),
            date,
            month: date.month(),
            year: date.year(),
            category: categorize(&description),
        })
    }

    /// The row appended to the spreadsheet mirror:
    /// `[date, amount, description, month, year, category]`.
    pub fn sheet_row(&self) -> [String; 6] {
        [
            self.date.to_string(),
            format_amount(self.amount),
            self.description.clone(),
            self.month.to_string(),
            self.year.to_string(),
            self.category.as_str().to_string(),
        ]
    }
}

/// Parse a date in either receipt (`DD/MM/YYYY`) or ISO (`YYYY-MM-DD`) form.
fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(text, "%Y-%m-%d"))
        .ok()
}

/// Trim and collapse runs of whitespace into single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render an amount with exactly two decimal places, dot-separated.
pub fn format_amount(amount: Decimal) -> String {
    let mut amount = amount.round_dp(2);
    amount.rescale(2);
    amount.to_string()
}
