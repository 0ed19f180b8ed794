//! Merchant name extraction from the top of a receipt.

use crate::models::config::ExtractionConfig;
use crate::models::expense::collapse_whitespace;
use crate::receipt::normalizer::normalize;

use super::FieldExtractor;
use super::patterns::LEADING_ARTIFACT;

/// Merchant/description field extractor.
///
/// Receipts print the merchant name near the top in upper case, often with a
/// stray leading number misread by the OCR ("110 BURGER HOUSE"). The
/// heuristic scans the first few normalized lines and takes the first one
/// that looks like a shouted name rather than boilerplate.
pub struct MerchantExtractor {
    scan_lines: usize,
    min_len: usize,
    blocklist: Vec<String>,
}

impl MerchantExtractor {
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            scan_lines: config.merchant_scan_lines,
            min_len: config.merchant_min_len,
            blocklist: config
                .merchant_blocklist
                .iter()
                .map(|b| b.to_lowercase())
                .collect(),
        }
    }

    /// A line qualifies when it is entirely upper-case, longer than the
    /// minimum, and free of boilerplate blocklist substrings.
    fn qualifies(&self, line: &str) -> bool {
        let lowered = line.to_lowercase();
        line == line.to_uppercase()
            && line.chars().count() > self.min_len
            && !self.blocklist.iter().any(|b| lowered.contains(b))
    }

    /// Strip one leading numeric OCR artifact, then tidy whitespace.
    fn post_process(line: &str) -> String {
        let stripped = LEADING_ARTIFACT.replace(line, "");
        collapse_whitespace(&stripped)
    }
}

impl Default for MerchantExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for MerchantExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        normalize(text)
            .into_iter()
            .take(self.scan_lines)
            .find(|line| self.qualifies(line))
            .map(|line| Self::post_process(&line))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        normalize(text)
            .into_iter()
            .take(self.scan_lines)
            .filter(|line| self.qualifies(line))
            .map(|line| Self::post_process(&line))
            .collect()
    }
}
