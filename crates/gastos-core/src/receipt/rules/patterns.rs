//! Common regex patterns for receipt text extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Receipt date token (Brazilian format: 26/02/2026)
    pub static ref DATE_DDMMYYYY: Regex = Regex::new(
        r"\b\d{2}/\d{2}/\d{4}\b"
    ).unwrap();

    // Decimal amount with exactly two fraction digits, comma or dot
    pub static ref AMOUNT: Regex = Regex::new(
        r"\b(\d+)[,.](\d{2})\b"
    ).unwrap();

    // Labeled grand total: "Total", optional colon/dash, then an amount
    pub static ref LABELED_TOTAL: Regex = Regex::new(
        r"(?i)\btotal\b[\s:\-]*(\d+[,.]\d{2})\b"
    ).unwrap();

    // Leading numeric OCR artifact on the merchant line ("110 BURGER HOUSE")
    pub static ref LEADING_ARTIFACT: Regex = Regex::new(
        r"^\d+\s+"
    ).unwrap();
}
