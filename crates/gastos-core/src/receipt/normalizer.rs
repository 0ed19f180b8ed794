//! Normalization of raw recognized text into candidate lines.

/// Split recognized text into trimmed, non-empty lines, preserving order.
///
/// Receipts list the merchant near the top, so order matters downstream.
/// Total function: empty or whitespace-only input yields an empty vec,
/// which the extractors treat as "nothing extractable".
pub fn normalize(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_trims_and_drops_empty_lines() {
        let text = "  BURGER HOUSE  \n\n   \nDATA: 26/02/2026\nTOTAL 45,90\n";
        assert_eq!(
            normalize(text),
            vec!["BURGER HOUSE", "DATA: 26/02/2026", "TOTAL 45,90"]
        );
    }

    #[test]
    fn test_normalize_preserves_order() {
        let lines = normalize("a\nb\nc");
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \n \t \n").is_empty());
    }
}
