//! Rule-based field extractors for receipt text.

pub mod amounts;
pub mod dates;
pub mod merchant;
pub mod patterns;

pub use amounts::{AmountExtractor, format_brl_amount, parse_decimal_amount};
pub use dates::{DateExtractor, extract_date};
pub use merchant::MerchantExtractor;

/// Trait for field extractors.
///
/// Each extractor operates on the full recognized text and applies its
/// heuristics in a fixed order; the first one that produces a value wins.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
