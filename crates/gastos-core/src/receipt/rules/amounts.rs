//! Amount extraction for receipt text.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::FieldExtractor;
use super::patterns::{AMOUNT, LABELED_TOTAL};

/// Amount field extractor.
///
/// Heuristics, first match wins:
/// 1. a labeled total ("Total: 45,90", "TOTAL 45.90", "total - 45,90");
/// 2. the *last* bare two-fraction-digit decimal in the text, since
///    receipts place the grand total at the bottom.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = Decimal;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        if let Some(caps) = LABELED_TOTAL.captures(text) {
            if let Some(amount) = parse_decimal_amount(&caps[1]) {
                return Some(amount);
            }
        }

        self.extract_all(text).into_iter().last()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        AMOUNT
            .captures_iter(text)
            .filter_map(|caps| {
                let amount_str = format!("{}.{}", &caps[1], &caps[2]);
                Decimal::from_str(&amount_str).ok()
            })
            .collect()
    }
}

/// Parse a decimal amount accepting either comma or dot as the separator
/// ("45,90", "45.90", "50").
pub fn parse_decimal_amount(s: &str) -> Option<Decimal> {
    let normalized = s.trim().replace(',', ".");
    Decimal::from_str(&normalized).ok()
}

/// Format an amount in Brazilian style (1.234,56).
pub fn format_brl_amount(amount: Decimal) -> String {
    let mut amount = amount.round_dp(2);
    amount.rescale(2);
    let s = amount.to_string();
    let (integer_part, decimal_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));

    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(*c);
    }

    format!("{},{}", formatted, decimal_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_labeled_total_comma_separator() {
        let extractor = AmountExtractor::new();
        assert_eq!(extractor.extract("Total: 45,90"), Some(dec("45.90")));
        assert_eq!(extractor.extract("TOTAL 45.90"), Some(dec("45.90")));
        assert_eq!(extractor.extract("total - 45,90"), Some(dec("45.90")));
    }

    #[test]
    fn test_labeled_total_beats_later_amounts() {
        let extractor = AmountExtractor::new();
        let text = "Total: 45,90\ntroco 100,00";
        assert_eq!(extractor.extract(text), Some(dec("45.90")));
    }

    #[test]
    fn test_subtotal_is_not_a_labeled_total() {
        let extractor = AmountExtractor::new();
        // "SUBTOTAL" must not satisfy the "Total" label; the last bare
        // amount wins instead.
        let text = "SUBTOTAL 12,00\n45,90";
        assert_eq!(extractor.extract(text), Some(dec("45.90")));
    }

    #[test]
    fn test_last_bare_amount_wins() {
        let extractor = AmountExtractor::new();
        let text = "item 12.00\nitem 3.50\nvalor 45.90";
        assert_eq!(extractor.extract(text), Some(dec("45.90")));
    }

    #[test]
    fn test_no_amount_anywhere() {
        let extractor = AmountExtractor::new();
        assert_eq!(extractor.extract("CUPOM FISCAL sem valores"), None);
        assert_eq!(extractor.extract(""), None);
    }

    #[test]
    fn test_extract_all_in_order() {
        let extractor = AmountExtractor::new();
        let amounts = extractor.extract_all("12,00 e 3.50 e 45,90");
        assert_eq!(amounts, vec![dec("12.00"), dec("3.50"), dec("45.90")]);
    }

    #[test]
    fn test_three_fraction_digits_is_not_an_amount() {
        let extractor = AmountExtractor::new();
        assert_eq!(extractor.extract_all("cod 45,901"), Vec::<Decimal>::new());
    }

    #[test]
    fn test_parse_decimal_amount() {
        assert_eq!(parse_decimal_amount("45,90"), Some(dec("45.90")));
        assert_eq!(parse_decimal_amount("45.90"), Some(dec("45.90")));
        assert_eq!(parse_decimal_amount("50"), Some(dec("50")));
        assert_eq!(parse_decimal_amount("abc"), None);
        assert_eq!(parse_decimal_amount(""), None);
    }

    #[test]
    fn test_format_brl_amount() {
        assert_eq!(format_brl_amount(dec("45.9")), "45,90");
        assert_eq!(format_brl_amount(dec("1234.56")), "1.234,56");
        assert_eq!(format_brl_amount(dec("50")), "50,00");
    }
}
