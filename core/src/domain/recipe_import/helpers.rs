use regex::Regex;
use std::sync::OnceLock;

use crate::domain::recipe::entities::Difficulty;
use crate::domain::recipe_import::entities::FoodType;

/// Keywords that veto the upstream vegetarian flag when they appear inside
/// any ingredient name.
pub const NON_VEG_KEYWORDS: [&str; 11] = [
    "chicken", "mutton", "fish", "egg", "beef", "pork", "lamb", "shrimp", "prawn", "tuna",
    "salmon",
];

/// Vegetarian only when the source marks it vegetarian AND no ingredient name
/// contains a non-veg keyword.
pub fn classify_food_type(marked_vegetarian: bool, ingredient_names: &[String]) -> FoodType {
    let joined = ingredient_names
        .iter()
        .map(|n| n.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    let has_non_veg_keyword = NON_VEG_KEYWORDS.iter().any(|word| joined.contains(word));

    if marked_vegetarian && !has_non_veg_keyword {
        FoodType::Vegetarian
    } else {
        FoodType::NonVegetarian
    }
}

/// Difficulty heuristic from total preparation time in minutes.
pub fn difficulty_from_prep_time(minutes: u32) -> Difficulty {
    if minutes > 45 {
        Difficulty::Hard
    } else if minutes > 25 {
        Difficulty::Medium
    } else {
        Difficulty::Easy
    }
}

fn html_tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid html tag pattern"))
}

/// Upstream summaries arrive as HTML fragments; keep only the text.
pub fn strip_html_tags(input: &str) -> String {
    html_tag_pattern().replace_all(input, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vegetarian_flag_alone_is_not_enough() {
        let ingredients = vec!["rice".to_string(), "Chicken Stock".to_string()];
        assert_eq!(
            classify_food_type(true, &ingredients),
            FoodType::NonVegetarian
        );
    }

    #[test]
    fn vegetarian_without_keywords_passes() {
        let ingredients = vec!["rice".to_string(), "paneer".to_string()];
        assert_eq!(classify_food_type(true, &ingredients), FoodType::Vegetarian);
    }

    #[test]
    fn unmarked_recipes_are_non_vegetarian() {
        assert_eq!(classify_food_type(false, &[]), FoodType::NonVegetarian);
    }

    #[test]
    fn difficulty_thresholds() {
        assert_eq!(difficulty_from_prep_time(15), Difficulty::Easy);
        assert_eq!(difficulty_from_prep_time(25), Difficulty::Easy);
        assert_eq!(difficulty_from_prep_time(26), Difficulty::Medium);
        assert_eq!(difficulty_from_prep_time(45), Difficulty::Medium);
        assert_eq!(difficulty_from_prep_time(46), Difficulty::Hard);
    }

    #[test]
    fn strips_html_from_summaries() {
        let summary = "A <b>very</b> tasty <a href=\"#\">dish</a>.";
        assert_eq!(strip_html_tags(summary), "A very tasty dish.");
    }
}
