//! Configuration structures for the bot core.

use serde::{Deserialize, Serialize};

/// Main configuration for the gastos pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Receipt extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Receipt extraction tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// How many leading lines to scan for the merchant name.
    pub merchant_scan_lines: usize,

    /// Minimum length for a line to qualify as the merchant name.
    pub merchant_min_len: usize,

    /// Substrings that disqualify a line from being the merchant name
    /// (receipt boilerplate), compared case-insensitively.
    pub merchant_blocklist: Vec<String>,

    /// Description used when no merchant line qualifies.
    pub fallback_description: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            merchant_scan_lines: 6,
            merchant_min_len: 5,
            merchant_blocklist: ["conferencia", "data", "hora", "mesa"]
                .into_iter()
                .map(String::from)
                .collect(),
            fallback_description: "Compra".to_string(),
        }
    }
}

impl BotConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_blocklist() {
        let config = ExtractionConfig::default();
        assert_eq!(config.merchant_scan_lines, 6);
        assert_eq!(config.merchant_min_len, 5);
        assert!(config.merchant_blocklist.iter().any(|b| b == "mesa"));
        assert_eq!(config.fallback_description, "Compra");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: BotConfig =
            serde_json::from_str(r#"{"extraction": {"merchant_scan_lines": 8}}"#).unwrap();
        assert_eq!(config.extraction.merchant_scan_lines, 8);
        assert_eq!(config.extraction.merchant_min_len, 5);
    }
}
