//! Receipt interpretation pipeline: recognized text in, expense out.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::expense::Expense;

use super::rules::{AmountExtractor, FieldExtractor, MerchantExtractor, extract_date};

/// Rule-based receipt parser.
///
/// Runs the three field extractors over the recognized text and assembles
/// the result into an [`Expense`]. Date and merchant always resolve to a
/// usable value; a missing amount is the one hard failure, because an
/// expense without an amount is meaningless.
pub struct ReceiptParser {
    config: ExtractionConfig,
}

impl ReceiptParser {
    /// Create a parser with default extraction settings.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Override the description used when no merchant line qualifies.
    pub fn with_fallback_description(mut self, description: impl Into<String>) -> Self {
        self.config.fallback_description = description.into();
        self
    }

    /// Override how many leading lines are scanned for the merchant name.
    pub fn with_merchant_scan_lines(mut self, lines: usize) -> Self {
        self.config.merchant_scan_lines = lines;
        self
    }

    /// Parse recognized receipt text into an expense.
    ///
    /// `today` is the processing date, used when the receipt carries no
    /// usable date of its own.
    pub fn parse(&self, text: &str, today: NaiveDate) -> Result<Expense, ExtractionError> {
        if text.trim().is_empty() {
            return Err(ExtractionError::NoText);
        }

        debug!("parsing receipt text ({} chars)", text.len());

        let amount = AmountExtractor::new()
            .extract(text)
            .ok_or(ExtractionError::AmountNotFound)?;

        let date_text = extract_date(text, today);

        let merchant = MerchantExtractor::from_config(&self.config)
            .extract(text)
            .unwrap_or_else(|| self.config.fallback_description.clone());

        let expense = Expense::assemble(amount, &merchant, &date_text, today)?;

        info!(
            "extracted expense: {} / {} / {} ({})",
            expense.date, expense.amount, expense.description, expense.category
        );

        Ok(expense)
    }
}

impl Default for ReceiptParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::Category;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 26).unwrap()
    }

    #[test]
    fn test_parse_full_receipt() {
        let text = "110 BURGER HOUSE\nDATA: 26/02/2026\nMESA 4\nTOTAL 45,90";
        let expense = ReceiptParser::new().parse(text, today()).unwrap();

        assert_eq!(expense.description, "BURGER HOUSE");
        assert_eq!(expense.amount, Decimal::from_str("45.90").unwrap());
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2026, 2, 26).unwrap());
        assert_eq!(expense.month, 2);
        assert_eq!(expense.year, 2026);
        assert_eq!(expense.category, Category::Food);
    }

    #[test]
    fn test_parse_without_labeled_total_takes_last_amount() {
        let text = "MERCADO CENTRAL\nitem 12,00\nitem 3,50\n45,90";
        let expense = ReceiptParser::new().parse(text, today()).unwrap();

        assert_eq!(expense.amount, Decimal::from_str("45.90").unwrap());
        assert_eq!(expense.category, Category::Supermarket);
    }

    #[test]
    fn test_parse_without_date_uses_today() {
        let text = "FARMACIA CENTRAL\nTOTAL 19,99";
        let expense = ReceiptParser::new().parse(text, today()).unwrap();

        assert_eq!(expense.date, today());
        assert_eq!(expense.category, Category::Health);
    }

    #[test]
    fn test_parse_without_merchant_uses_fallback() {
        let text = "data 26/02/2026\ntotal 45,90";
        let expense = ReceiptParser::new().parse(text, today()).unwrap();

        assert_eq!(expense.description, "Compra");
        assert_eq!(expense.category, Category::Other);
    }

    #[test]
    fn test_parse_custom_fallback() {
        let parser = ReceiptParser::new().with_fallback_description("Despesa");
        let expense = parser.parse("total 45,90", today()).unwrap();

        assert_eq!(expense.description, "Despesa");
    }

    #[test]
    fn test_parse_no_amount_fails() {
        let err = ReceiptParser::new()
            .parse("CUPOM FISCAL\nsem valores", today())
            .unwrap_err();
        assert_eq!(err, ExtractionError::AmountNotFound);
    }

    #[test]
    fn test_parse_empty_text_fails() {
        assert_eq!(
            ReceiptParser::new().parse("", today()).unwrap_err(),
            ExtractionError::NoText
        );
        assert_eq!(
            ReceiptParser::new().parse("  \n ", today()).unwrap_err(),
            ExtractionError::NoText
        );
    }
}
