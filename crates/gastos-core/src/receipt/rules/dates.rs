//! Date extraction for receipt text.

use chrono::NaiveDate;

use super::FieldExtractor;
use super::patterns::DATE_DDMMYYYY;

/// Date field extractor.
///
/// Finds `DD/MM/YYYY` tokens and passes them through verbatim; no calendar
/// validation happens here (the assembler deals with impossible dates).
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        DATE_DDMMYYYY.find(text).map(|m| m.as_str().to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        DATE_DDMMYYYY
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Extract the receipt date, falling back to `today` in ISO form.
///
/// Always returns a usable date string.
pub fn extract_date(text: &str, today: NaiveDate) -> String {
    DateExtractor::new()
        .extract(text)
        .unwrap_or_else(|| today.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 26).unwrap()
    }

    #[test]
    fn test_extract_date_token_verbatim() {
        let text = "BURGER HOUSE\nDATA: 26/02/2026 HORA 12:30\nTOTAL 45,90";
        assert_eq!(extract_date(text, today()), "26/02/2026");
    }

    #[test]
    fn test_extract_first_of_multiple_dates() {
        let extractor = DateExtractor::new();
        let text = "emissao 01/02/2026 vencimento 10/03/2026";
        assert_eq!(extractor.extract(text), Some("01/02/2026".to_string()));
        assert_eq!(extractor.extract_all(text).len(), 2);
    }

    #[test]
    fn test_no_calendar_validation() {
        // Whatever substring matched is passed through untouched.
        assert_eq!(extract_date("data 99/99/2026", today()), "99/99/2026");
    }

    #[test]
    fn test_fallback_to_today_iso() {
        assert_eq!(extract_date("no dates here", today()), "2026-02-26");
        assert_eq!(extract_date("", today()), "2026-02-26");
    }
}
