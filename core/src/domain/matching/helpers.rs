use std::collections::{HashMap, HashSet};

use crate::domain::{
    common::entities::app_errors::CoreError,
    inventory::entities::InventoryItem,
    matching::{
        entities::{
            CategorizedRecipes, IngredientMatch, IngredientServing, LimitingIngredient,
            RecipeMatch, RecipeServing, ServingResult, SubstituteResult, SubstitutionSuggestion,
        },
        substitutions::generic_substitutes,
        units::conversion_rate,
    },
    recipe::entities::{Recipe, SubstituteOption},
};

/// How many servings the recipe can produce from the current inventory, and
/// which ingredients cap that number.
///
/// Reads both arguments only; quantities are converted into the ingredient's
/// required unit where the fixed conversion table defines a rate.
pub fn compute_max_servings(
    recipe: &Recipe,
    inventory: &[InventoryItem],
) -> Result<ServingResult, CoreError> {
    let inventory_map: HashMap<String, &InventoryItem> = inventory
        .iter()
        .map(|item| (item.name.to_lowercase(), item))
        .collect();

    let mut details = Vec::with_capacity(recipe.ingredients.len());
    let mut limiting_ingredients = Vec::new();

    for requirement in &recipe.ingredients {
        let stocked = inventory_map
            .get(&requirement.ingredient_name.to_lowercase())
            .copied()
            .filter(|item| item.current_quantity > 0.0);

        let Some(item) = stocked else {
            details.push(IngredientServing {
                ingredient: requirement.ingredient_name.clone(),
                serves_possible: 0,
            });
            limiting_ingredients.push(LimitingIngredient {
                ingredient: requirement.ingredient_name.clone(),
                required: requirement.quantity,
                available: 0.0,
                unit: requirement.unit,
                message: "Not available in inventory".to_string(),
            });
            continue;
        };

        if requirement.quantity <= 0.0 {
            return Err(CoreError::Precondition(format!(
                "ingredient '{}' requires a non-positive quantity",
                requirement.ingredient_name
            )));
        }

        let mut available = item.current_quantity;
        if item.unit != requirement.unit {
            match conversion_rate(item.unit, requirement.unit) {
                Some(rate) => available *= rate,
                None => {
                    tracing::warn!(
                        ingredient = %requirement.ingredient_name,
                        stocked_unit = %item.unit,
                        required_unit = %requirement.unit,
                        "no conversion between units, comparing quantities as-is"
                    );
                }
            }
        }

        let serves_possible = (available / requirement.quantity).floor() as u32;
        details.push(IngredientServing {
            ingredient: requirement.ingredient_name.clone(),
            serves_possible,
        });

        if serves_possible == 0 {
            limiting_ingredients.push(LimitingIngredient {
                ingredient: requirement.ingredient_name.clone(),
                required: requirement.quantity,
                available,
                unit: requirement.unit,
                message: "Insufficient quantity".to_string(),
            });
        }
    }

    let max_serving = details
        .iter()
        .map(|d| d.serves_possible)
        .min()
        .unwrap_or(0);

    Ok(ServingResult {
        max_serving,
        can_make: max_serving > 0,
        limiting_ingredients: if max_serving == 0 {
            limiting_ingredients
        } else {
            Vec::new()
        },
        details,
    })
}

/// Substitution suggestions for every ingredient absent from the inventory.
/// Presence is name equality only; quantities are deliberately not checked.
pub fn resolve_substitutes(recipe: &Recipe, inventory: &[InventoryItem]) -> SubstituteResult {
    let inventory_names: HashSet<String> =
        inventory.iter().map(|item| item.name.to_lowercase()).collect();

    let mut missing_ingredients = Vec::new();
    let mut substitution_suggestions = Vec::new();

    for requirement in &recipe.ingredients {
        if inventory_names.contains(&requirement.ingredient_name.to_lowercase()) {
            continue;
        }

        missing_ingredients.push(requirement.clone());

        let predefined = recipe.possible_substitutes.iter().find(|rule| {
            rule.original.to_lowercase() == requirement.ingredient_name.to_lowercase()
        });

        let (candidates, is_generic) = match predefined {
            Some(rule) => (rule.substitutes.clone(), false),
            None => (generic_substitutes(&requirement.ingredient_name), true),
        };

        let available: Vec<SubstituteOption> = candidates
            .iter()
            .filter(|sub| inventory_names.contains(&sub.name.to_lowercase()))
            .cloned()
            .collect();
        let has_available_substitute = !available.is_empty();

        substitution_suggestions.push(SubstitutionSuggestion {
            missing_ingredient: requirement.ingredient_name.clone(),
            required_quantity: requirement.quantity,
            unit: requirement.unit,
            available_substitutes: if has_available_substitute {
                available
            } else {
                candidates
            },
            has_available_substitute,
            is_generic,
        });
    }

    SubstituteResult {
        can_make_with_substitutes: substitution_suggestions
            .iter()
            .all(|s| s.has_available_substitute),
        total_missing: missing_ingredients.len(),
        missing_ingredients,
        substitution_suggestions,
    }
}

/// Partition recipes into priority buckets, first match wins:
/// makeable now, makeable with stocked substitutes, missing at most two
/// ingredients, everything else.
pub fn categorize_recipes(
    recipes: &[Recipe],
    inventory: &[InventoryItem],
) -> Result<CategorizedRecipes, CoreError> {
    let mut results = CategorizedRecipes::default();

    for recipe in recipes {
        let serving_info = compute_max_servings(recipe, inventory)?;
        let substitute_info = resolve_substitutes(recipe, inventory);

        let matched = RecipeMatch {
            recipe: recipe.clone(),
            serving_info,
            substitute_info,
        };

        if matched.serving_info.can_make {
            results.can_make_now.push(matched);
        } else if matched.substitute_info.can_make_with_substitutes {
            results.can_make_with_substitutes.push(matched);
        } else if matched.substitute_info.total_missing <= 2 {
            results.missing_one_or_two.push(matched);
        } else {
            results.cannot_make.push(matched);
        }
    }

    results
        .can_make_now
        .sort_by(|a, b| b.serving_info.max_serving.cmp(&a.serving_info.max_serving));
    results
        .can_make_with_substitutes
        .sort_by_key(|m| m.substitute_info.total_missing);
    results
        .missing_one_or_two
        .sort_by_key(|m| m.substitute_info.total_missing);
    // cannot_make keeps its original relative order

    Ok(results)
}

/// Serving capacity for every recipe, best first.
pub fn rank_recipes_by_serving(
    recipes: &[Recipe],
    inventory: &[InventoryItem],
) -> Result<Vec<RecipeServing>, CoreError> {
    let mut rankings = Vec::with_capacity(recipes.len());

    for recipe in recipes {
        let serving_info = compute_max_servings(recipe, inventory)?;
        rankings.push(RecipeServing {
            recipe: recipe.clone(),
            serving_info,
        });
    }

    rankings.sort_by(|a, b| b.serving_info.max_serving.cmp(&a.serving_info.max_serving));

    Ok(rankings)
}

/// Recipes that use any of the named ingredients, most matches first. Used to
/// steer at-risk stock into the meal plan.
pub fn find_recipes_by_ingredients(
    recipes: &[Recipe],
    ingredient_names: &[String],
) -> Vec<IngredientMatch> {
    let mut matches = Vec::new();

    for recipe in recipes {
        let recipe_ingredients: HashSet<String> = recipe
            .ingredients
            .iter()
            .map(|i| i.ingredient_name.to_lowercase())
            .collect();

        let matching_ingredients: Vec<String> = ingredient_names
            .iter()
            .filter(|name| recipe_ingredients.contains(&name.to_lowercase()))
            .cloned()
            .collect();

        if !matching_ingredients.is_empty() {
            matches.push(IngredientMatch {
                recipe: recipe.clone(),
                match_count: matching_ingredients.len(),
                matching_ingredients,
            });
        }
    }

    matches.sort_by(|a, b| b.match_count.cmp(&a.match_count));

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::entities::units::MeasurementUnit;
    use crate::domain::inventory::entities::{InventoryItemConfig, ItemCategory};
    use crate::domain::matching::substitutions::NO_KNOWN_SUBSTITUTE;
    use crate::domain::recipe::entities::{
        Difficulty, IngredientRequirement, RecipeCategory, RecipeConfig, SubstitutionRule,
    };

    fn stock(name: &str, quantity: f64, unit: MeasurementUnit) -> InventoryItem {
        InventoryItem::new(InventoryItemConfig {
            name: name.to_string(),
            category: ItemCategory::Other,
            current_quantity: quantity,
            unit,
            threshold: 0.0,
            perishable: false,
        })
    }

    fn requires(name: &str, quantity: f64, unit: MeasurementUnit) -> IngredientRequirement {
        IngredientRequirement {
            ingredient_name: name.to_string(),
            quantity,
            unit,
        }
    }

    fn recipe(name: &str, ingredients: Vec<IngredientRequirement>) -> Recipe {
        Recipe::new(RecipeConfig {
            name: name.to_string(),
            description: String::new(),
            category: RecipeCategory::MainCourse,
            cuisine: "Indian".to_string(),
            ingredients,
            steps: vec!["Cook".to_string()],
            serves: 4,
            preparation_time: 30,
            difficulty: Difficulty::Medium,
            possible_substitutes: Vec::new(),
            image_url: None,
            tags: Vec::new(),
        })
    }

    #[test]
    fn missing_ingredient_is_limiting_with_zero_servings() {
        let r = recipe(
            "Plain Rice",
            vec![
                requires("Rice", 200.0, MeasurementUnit::G),
                requires("Salt", 5.0, MeasurementUnit::G),
            ],
        );
        let inventory = vec![
            stock("Rice", 1000.0, MeasurementUnit::G),
            stock("Salt", 0.0, MeasurementUnit::G),
        ];

        let result = compute_max_servings(&r, &inventory).unwrap();
        assert_eq!(result.max_serving, 0);
        assert!(!result.can_make);
        assert_eq!(result.limiting_ingredients.len(), 1);
        assert_eq!(result.limiting_ingredients[0].ingredient, "Salt");
        assert_eq!(result.limiting_ingredients[0].available, 0.0);
        assert_eq!(
            result.limiting_ingredients[0].message,
            "Not available in inventory"
        );
    }

    #[test]
    fn converts_stocked_unit_into_required_unit() {
        let r = recipe("Onion Fry", vec![requires("Onion", 100.0, MeasurementUnit::G)]);
        let inventory = vec![stock("Onion", 1.0, MeasurementUnit::Kg)];

        let result = compute_max_servings(&r, &inventory).unwrap();
        assert_eq!(result.max_serving, 10);
        assert!(result.can_make);
        assert!(result.limiting_ingredients.is_empty());
    }

    #[test]
    fn unconvertible_units_fall_back_to_raw_quantities() {
        // pieces vs g has no conversion entry; the stocked number is compared
        // as-is against the required number
        let r = recipe("Aloo", vec![requires("Potato", 2.0, MeasurementUnit::G)]);
        let inventory = vec![stock("Potato", 6.0, MeasurementUnit::Pieces)];

        let result = compute_max_servings(&r, &inventory).unwrap();
        assert_eq!(result.max_serving, 3);
    }

    #[test]
    fn insufficient_quantity_is_limiting() {
        let r = recipe("Kheer", vec![requires("Milk", 500.0, MeasurementUnit::Ml)]);
        let inventory = vec![stock("Milk", 300.0, MeasurementUnit::Ml)];

        let result = compute_max_servings(&r, &inventory).unwrap();
        assert_eq!(result.max_serving, 0);
        assert_eq!(result.limiting_ingredients.len(), 1);
        assert_eq!(result.limiting_ingredients[0].message, "Insufficient quantity");
        assert_eq!(result.limiting_ingredients[0].available, 300.0);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let r = recipe("Dal", vec![requires("toor dal", 100.0, MeasurementUnit::G)]);
        let inventory = vec![stock("Toor Dal", 800.0, MeasurementUnit::G)];

        let result = compute_max_servings(&r, &inventory).unwrap();
        assert_eq!(result.max_serving, 8);
    }

    #[test]
    fn every_absent_ingredient_appears_as_limiting() {
        let r = recipe(
            "Poha",
            vec![
                requires("Flattened Rice", 200.0, MeasurementUnit::G),
                requires("Peanuts", 50.0, MeasurementUnit::G),
            ],
        );

        let result = compute_max_servings(&r, &[]).unwrap();
        assert_eq!(result.max_serving, 0);
        assert!(!result.can_make);
        assert_eq!(result.limiting_ingredients.len(), 2);
        assert!(result.details.iter().all(|d| d.serves_possible == 0));
    }

    #[test]
    fn empty_ingredient_list_yields_zero_servings() {
        let r = recipe("Empty", Vec::new());

        let result = compute_max_servings(&r, &[]).unwrap();
        assert_eq!(result.max_serving, 0);
        assert!(!result.can_make);
        assert!(result.details.is_empty());
    }

    #[test]
    fn zero_required_quantity_is_a_guarded_precondition() {
        let r = recipe("Broken", vec![requires("Salt", 0.0, MeasurementUnit::G)]);
        let inventory = vec![stock("Salt", 100.0, MeasurementUnit::G)];

        let result = compute_max_servings(&r, &inventory);
        assert!(matches!(result, Err(CoreError::Precondition(_))));
    }

    #[test]
    fn details_preserve_recipe_order() {
        let r = recipe(
            "Chai",
            vec![
                requires("Milk", 100.0, MeasurementUnit::Ml),
                requires("Tea Leaves", 2.0, MeasurementUnit::Tsp),
                requires("Sugar", 2.0, MeasurementUnit::Tsp),
            ],
        );
        let inventory = vec![
            stock("Sugar", 100.0, MeasurementUnit::Tsp),
            stock("Milk", 1000.0, MeasurementUnit::Ml),
            stock("Tea Leaves", 10.0, MeasurementUnit::Tsp),
        ];

        let result = compute_max_servings(&r, &inventory).unwrap();
        let order: Vec<&str> = result.details.iter().map(|d| d.ingredient.as_str()).collect();
        assert_eq!(order, vec!["Milk", "Tea Leaves", "Sugar"]);
        assert_eq!(result.max_serving, 5);
    }

    #[test]
    fn no_missing_ingredients_is_vacuously_substitutable() {
        let r = recipe("Dal", vec![requires("Toor Dal", 100.0, MeasurementUnit::G)]);
        // presence only; the zero quantity does not matter here
        let inventory = vec![stock("Toor Dal", 0.0, MeasurementUnit::G)];

        let result = resolve_substitutes(&r, &inventory);
        assert_eq!(result.total_missing, 0);
        assert!(result.missing_ingredients.is_empty());
        assert!(result.can_make_with_substitutes);
        assert!(result.substitution_suggestions.is_empty());
    }

    #[test]
    fn recipe_substitutes_take_precedence_over_generic_ones() {
        let mut r = recipe("Dosa", vec![requires("Urad Dal", 50.0, MeasurementUnit::G)]);
        r.possible_substitutes = vec![SubstitutionRule {
            original: "Urad Dal".to_string(),
            substitutes: vec![SubstituteOption {
                name: "Chana Dal".to_string(),
                ratio: 1.0,
                notes: Some("Slightly different texture".to_string()),
            }],
        }];
        let inventory = vec![stock("Chana Dal", 500.0, MeasurementUnit::G)];

        let result = resolve_substitutes(&r, &inventory);
        assert_eq!(result.total_missing, 1);
        assert!(result.can_make_with_substitutes);

        let suggestion = &result.substitution_suggestions[0];
        assert!(!suggestion.is_generic);
        assert!(suggestion.has_available_substitute);
        assert_eq!(suggestion.available_substitutes.len(), 1);
        assert_eq!(suggestion.available_substitutes[0].name, "Chana Dal");
    }

    #[test]
    fn unavailable_substitutes_fall_back_to_full_list() {
        let mut r = recipe("Dosa", vec![requires("Urad Dal", 50.0, MeasurementUnit::G)]);
        r.possible_substitutes = vec![SubstitutionRule {
            original: "Urad Dal".to_string(),
            substitutes: vec![
                SubstituteOption {
                    name: "Chana Dal".to_string(),
                    ratio: 1.0,
                    notes: None,
                },
                SubstituteOption {
                    name: "Moong Dal".to_string(),
                    ratio: 1.0,
                    notes: None,
                },
            ],
        }];

        let result = resolve_substitutes(&r, &[]);
        let suggestion = &result.substitution_suggestions[0];
        assert!(!suggestion.has_available_substitute);
        // informational fallback: the full unfiltered list
        assert_eq!(suggestion.available_substitutes.len(), 2);
        assert!(!result.can_make_with_substitutes);
    }

    #[test]
    fn generic_table_is_consulted_when_recipe_has_no_rule() {
        let r = recipe("Palak Paneer", vec![requires("Paneer", 200.0, MeasurementUnit::G)]);
        let inventory = vec![stock("Tofu", 400.0, MeasurementUnit::G)];

        let result = resolve_substitutes(&r, &inventory);
        let suggestion = &result.substitution_suggestions[0];
        assert!(suggestion.is_generic);
        assert!(suggestion.has_available_substitute);
        assert_eq!(suggestion.available_substitutes[0].name, "Tofu");
        assert!(result.can_make_with_substitutes);
    }

    #[test]
    fn unknown_ingredient_gets_placeholder_suggestion() {
        let r = recipe("Exotic", vec![requires("Saffron", 1.0, MeasurementUnit::Pinch)]);

        let result = resolve_substitutes(&r, &[]);
        let suggestion = &result.substitution_suggestions[0];
        assert!(suggestion.is_generic);
        assert!(!suggestion.has_available_substitute);
        assert_eq!(suggestion.available_substitutes.len(), 1);
        assert_eq!(suggestion.available_substitutes[0].name, NO_KNOWN_SUBSTITUTE);
    }

    #[test]
    fn total_missing_matches_missing_ingredient_count() {
        let r = recipe(
            "Curry",
            vec![
                requires("Onion", 2.0, MeasurementUnit::Pieces),
                requires("Tomato", 3.0, MeasurementUnit::Pieces),
                requires("Salt", 1.0, MeasurementUnit::Tsp),
            ],
        );
        let inventory = vec![stock("Salt", 100.0, MeasurementUnit::Tsp)];

        let result = resolve_substitutes(&r, &inventory);
        assert_eq!(result.total_missing, result.missing_ingredients.len());
        assert_eq!(result.total_missing, 2);
        assert_eq!(result.substitution_suggestions.len(), 2);
    }

    #[test]
    fn buckets_partition_the_input() {
        let makeable = recipe("Makeable", vec![requires("Rice", 100.0, MeasurementUnit::G)]);
        let substitutable = recipe(
            "Substitutable",
            vec![requires("Paneer", 200.0, MeasurementUnit::G)],
        );
        let nearly = recipe(
            "Nearly",
            vec![
                requires("Saffron", 1.0, MeasurementUnit::Pinch),
                requires("Rose Water", 5.0, MeasurementUnit::Ml),
            ],
        );
        let hopeless = recipe(
            "Hopeless",
            vec![
                requires("Saffron", 1.0, MeasurementUnit::Pinch),
                requires("Rose Water", 5.0, MeasurementUnit::Ml),
                requires("Edible Silver", 1.0, MeasurementUnit::Pieces),
            ],
        );
        let recipes = vec![
            makeable.clone(),
            substitutable.clone(),
            nearly.clone(),
            hopeless.clone(),
        ];
        let inventory = vec![
            stock("Rice", 1000.0, MeasurementUnit::G),
            stock("Tofu", 400.0, MeasurementUnit::G),
        ];

        let results = categorize_recipes(&recipes, &inventory).unwrap();
        assert_eq!(results.can_make_now.len(), 1);
        assert_eq!(results.can_make_with_substitutes.len(), 1);
        assert_eq!(results.missing_one_or_two.len(), 1);
        assert_eq!(results.cannot_make.len(), 1);

        let total = results.can_make_now.len()
            + results.can_make_with_substitutes.len()
            + results.missing_one_or_two.len()
            + results.cannot_make.len();
        assert_eq!(total, recipes.len());

        assert_eq!(results.can_make_now[0].recipe.name, "Makeable");
        assert_eq!(results.can_make_with_substitutes[0].recipe.name, "Substitutable");
        assert_eq!(results.missing_one_or_two[0].recipe.name, "Nearly");
        assert_eq!(results.cannot_make[0].recipe.name, "Hopeless");
    }

    #[test]
    fn can_make_now_is_sorted_by_serving_capacity() {
        let small = recipe("Small Batch", vec![requires("Rice", 500.0, MeasurementUnit::G)]);
        let large = recipe("Large Batch", vec![requires("Rice", 100.0, MeasurementUnit::G)]);
        let inventory = vec![stock("Rice", 1000.0, MeasurementUnit::G)];

        let results = categorize_recipes(&[small, large], &inventory).unwrap();
        let servings: Vec<u32> = results
            .can_make_now
            .iter()
            .map(|m| m.serving_info.max_serving)
            .collect();
        assert_eq!(servings, vec![10, 2]);
    }

    #[test]
    fn substitute_buckets_are_sorted_by_missing_count() {
        let two_missing = recipe(
            "Two Missing",
            vec![
                requires("Saffron", 1.0, MeasurementUnit::Pinch),
                requires("Rose Water", 5.0, MeasurementUnit::Ml),
            ],
        );
        let one_missing = recipe(
            "One Missing",
            vec![requires("Saffron", 1.0, MeasurementUnit::Pinch)],
        );

        let results = categorize_recipes(&[two_missing, one_missing], &[]).unwrap();
        let missing: Vec<usize> = results
            .missing_one_or_two
            .iter()
            .map(|m| m.substitute_info.total_missing)
            .collect();
        assert_eq!(missing, vec![1, 2]);
    }

    #[test]
    fn ranking_sorts_descending_by_max_serving() {
        let a = recipe("A", vec![requires("Rice", 250.0, MeasurementUnit::G)]);
        let b = recipe("B", vec![requires("Rice", 100.0, MeasurementUnit::G)]);
        let c = recipe("C", vec![requires("Milk", 100.0, MeasurementUnit::Ml)]);
        let inventory = vec![stock("Rice", 1000.0, MeasurementUnit::G)];

        let rankings = rank_recipes_by_serving(&[a, b, c], &inventory).unwrap();
        let servings: Vec<u32> = rankings.iter().map(|r| r.serving_info.max_serving).collect();
        assert_eq!(servings, vec![10, 4, 0]);
    }

    #[test]
    fn finds_recipes_using_named_ingredients() {
        let dal = recipe(
            "Dal Tadka",
            vec![
                requires("Toor Dal", 200.0, MeasurementUnit::G),
                requires("Onion", 1.0, MeasurementUnit::Pieces),
                requires("Tomato", 2.0, MeasurementUnit::Pieces),
            ],
        );
        let rice = recipe("Jeera Rice", vec![requires("Rice", 200.0, MeasurementUnit::G)]);

        let names = vec!["onion".to_string(), "Tomato".to_string()];
        let matches = find_recipes_by_ingredients(&[dal, rice], &names);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].recipe.name, "Dal Tadka");
        assert_eq!(matches[0].match_count, 2);
        assert_eq!(
            matches[0].matching_ingredients,
            vec!["onion".to_string(), "Tomato".to_string()]
        );
    }
}
