use crate::domain::recipe::entities::SubstituteOption;

pub const NO_KNOWN_SUBSTITUTE: &str = "No known substitute";

fn option(name: &str, ratio: f64, notes: &str) -> SubstituteOption {
    SubstituteOption {
        name: name.to_string(),
        ratio,
        notes: Some(notes.to_string()),
    }
}

/// Built-in, recipe-independent substitutions for common Indian ingredients,
/// keyed by lowercase ingredient name. Unknown ingredients get a single
/// placeholder entry.
pub fn generic_substitutes(ingredient_name: &str) -> Vec<SubstituteOption> {
    match ingredient_name.to_lowercase().as_str() {
        // Dairy
        "paneer" => vec![option("Tofu", 1.0, "Different texture but works well")],
        "ghee" => vec![
            option("Vegetable Oil", 1.0, "Neutral flavor"),
            option("Butter", 1.0, "Similar richness"),
        ],
        "fresh cream" => vec![
            option("Malai", 1.0, "Similar texture"),
            option("Coconut Milk", 1.5, "Dairy-free option"),
        ],
        "yogurt" => vec![
            option("Buttermilk", 1.0, "Similar tanginess"),
            option("Lemon Juice", 0.5, "Use with milk"),
        ],

        // Lentils
        "toor dal" => vec![
            option("Masoor Dal", 1.0, "Similar cooking time"),
            option("Moong Dal", 1.0, "Lighter flavor"),
        ],
        "chana dal" => vec![option("Yellow Split Peas", 1.0, "Similar texture")],

        // Spices
        "garam masala" => vec![option("Curry Powder", 1.0, "Different flavor profile")],
        "cumin seeds" => vec![option("Cumin Powder", 0.5, "Use half quantity")],

        // Vegetables
        "tomato" => vec![
            option("Tomato Puree", 0.5, "Use half quantity"),
            option("Tamarind Paste", 0.3, "For acidity"),
        ],
        "onion" => vec![
            option("Onion Powder", 0.1, "Use 1/10th quantity"),
            option("Shallots", 1.5, "Similar flavor"),
        ],
        "ginger" => vec![option("Ginger Powder", 0.2, "Use 1/5th quantity")],
        "garlic" => vec![option("Garlic Powder", 0.1, "Use 1/10th quantity")],

        _ => vec![option(
            NO_KNOWN_SUBSTITUTE,
            1.0,
            "Consider omitting or finding alternative recipe",
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let subs = generic_substitutes("Paneer");
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].name, "Tofu");
    }

    #[test]
    fn unknown_ingredient_gets_placeholder() {
        let subs = generic_substitutes("saffron");
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].name, NO_KNOWN_SUBSTITUTE);
        assert_eq!(subs[0].ratio, 1.0);
    }

    #[test]
    fn ratios_are_strictly_positive() {
        for name in [
            "paneer",
            "ghee",
            "fresh cream",
            "yogurt",
            "toor dal",
            "chana dal",
            "garam masala",
            "cumin seeds",
            "tomato",
            "onion",
            "ginger",
            "garlic",
            "unknown",
        ] {
            for sub in generic_substitutes(name) {
                assert!(sub.ratio > 0.0, "ratio for {} must be positive", sub.name);
            }
        }
    }
}
