//! Expense categories and keyword-based categorization.

use serde::{Deserialize, Serialize};

/// Closed set of expense categories.
///
/// Labels are Brazilian Portuguese because that is the language the bot
/// speaks to its users; the variant names follow Rust convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Restaurants, bakeries, delivery apps (Alimentação).
    Food,
    /// Supermarkets and grocery chains (Mercado).
    Supermarket,
    /// Fuel, ride-hailing, parking (Transporte).
    Transport,
    /// Pharmacies, clinics, hospitals (Saúde).
    Health,
    /// Malls, stores, entertainment (Lazer).
    Leisure,
    /// Everything else (Outros).
    Other,
}

impl Category {
    /// User-facing label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Alimentação",
            Category::Supermarket => "Mercado",
            Category::Transport => "Transporte",
            Category::Health => "Saúde",
            Category::Leisure => "Lazer",
            Category::Other => "Outros",
        }
    }

    /// Alternative names accepted when users refer to a category, e.g. in
    /// `/cat <category>`. Earlier revisions of the bot stored drifting
    /// category names ("Alimentação", "Restaurante", "Food"), so each
    /// category answers to all of them.
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Category::Food => &["alimentação", "alimentacao", "restaurante", "comida", "food"],
            Category::Supermarket => &["mercado", "supermercado", "market", "groceries"],
            Category::Transport => &["transporte", "combustível", "combustivel", "transport"],
            Category::Health => &["saúde", "saude", "health"],
            Category::Leisure => &["lazer", "compras", "shopping", "leisure"],
            Category::Other => &["outros", "outro", "other"],
        }
    }

    /// Case-insensitive match against the label and its aliases.
    pub fn matches(&self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        self.as_str().to_lowercase() == needle || self.aliases().contains(&needle.as_str())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword groups checked in priority order. The first group containing a
/// matching keyword wins, so "mercearia do restaurante" is Food, not
/// Supermarket.
const KEYWORD_GROUPS: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &[
            "restaurante",
            "lanchonete",
            "pizzaria",
            "padaria",
            "burger",
            "hamburgueria",
            "churrascaria",
            "sushi",
            "ifood",
            "cafeteria",
            "cafe",
            "café",
            "pastelaria",
            "sorveteria",
        ],
    ),
    (
        Category::Supermarket,
        &[
            "supermercado",
            "mercado",
            "mercearia",
            "atacadao",
            "atacadão",
            "carrefour",
            "assai",
            "assaí",
            "hortifruti",
            "sacolao",
            "sacolão",
        ],
    ),
    (
        Category::Transport,
        &[
            "posto",
            "gasolina",
            "combustivel",
            "combustível",
            "etanol",
            "uber",
            "taxi",
            "táxi",
            "estacionamento",
            "pedagio",
            "pedágio",
            "ipiranga",
            "petrobras",
            "shell",
        ],
    ),
    (
        Category::Health,
        &[
            "farmacia",
            "farmácia",
            "drogaria",
            "drogasil",
            "clinica",
            "clínica",
            "hospital",
            "laboratorio",
            "laboratório",
            "dentista",
        ],
    ),
    (
        Category::Leisure,
        &[
            "shopping",
            "cinema",
            "teatro",
            "livraria",
            "loja",
            "magazine",
            "americanas",
            "renner",
            "riachuelo",
        ],
    ),
];

/// Map a free-text merchant description to a category.
///
/// Pure function of the input: lowercases the description and walks the
/// keyword groups in priority order; no match means [`Category::Other`].
pub fn categorize(description: &str) -> Category {
    let haystack = description.to_lowercase();
    if haystack.trim().is_empty() {
        return Category::Other;
    }

    for (category, keywords) in KEYWORD_GROUPS {
        if keywords.iter().any(|k| haystack.contains(k)) {
            return *category;
        }
    }

    Category::Other
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_categorize_single_group() {
        assert_eq!(categorize("PIZZARIA DO ZE"), Category::Food);
        assert_eq!(categorize("Supermercado Bom Preço"), Category::Supermarket);
        assert_eq!(categorize("POSTO IPIRANGA"), Category::Transport);
        assert_eq!(categorize("Drogaria São Paulo"), Category::Health);
        assert_eq!(categorize("SHOPPING CENTER NORTE"), Category::Leisure);
    }

    #[test]
    fn test_categorize_priority_first_group_wins() {
        // Matches both a Food keyword and a Supermarket keyword.
        assert_eq!(categorize("restaurante do mercado"), Category::Food);
    }

    #[test]
    fn test_categorize_default_other() {
        assert_eq!(categorize("conserto de bicicleta"), Category::Other);
        assert_eq!(categorize(""), Category::Other);
        assert_eq!(categorize("   "), Category::Other);
    }

    #[test]
    fn test_categorize_case_insensitive() {
        assert_eq!(categorize("MERCADO"), Category::Supermarket);
        assert_eq!(categorize("mercado"), Category::Supermarket);
    }

    #[test]
    fn test_matches_label_and_aliases() {
        assert!(Category::Food.matches("Alimentação"));
        assert!(Category::Food.matches("alimentacao"));
        assert!(Category::Food.matches("RESTAURANTE"));
        assert!(Category::Supermarket.matches("mercado"));
        assert!(!Category::Food.matches("mercado"));
        assert!(!Category::Other.matches(""));
    }
}
