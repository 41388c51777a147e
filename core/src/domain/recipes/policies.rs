use crate::domain::recipes::entities::RecipeCandidate;

/// How an excluded term is matched against a recipe ingredient name. The
/// substring strategy is intentionally permissive: excluding "nut" rejects
/// "walnut oil" and "peanut butter". Serving an unsafe recipe is a worse
/// failure than hiding a safe one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchStrategy {
    #[default]
    Substring,
    Exact,
}

impl MatchStrategy {
    /// Both arguments must already be lower-cased.
    pub fn matches(&self, ingredient_name: &str, excluded_term: &str) -> bool {
        match self {
            MatchStrategy::Substring => ingredient_name.contains(excluded_term),
            MatchStrategy::Exact => ingredient_name == excluded_term,
        }
    }
}

/// True when any excluded term matches any of the recipe's ingredient names.
/// A recipe without an ingredient list cannot be evaluated and passes.
pub fn recipe_is_excluded(
    recipe: &RecipeCandidate,
    excluded_lower: &[String],
    strategy: MatchStrategy,
) -> bool {
    recipe.ingredients.iter().any(|ingredient| {
        let name = ingredient.name.to_lowercase();
        excluded_lower
            .iter()
            .any(|excluded| strategy.matches(&name, excluded))
    })
}

/// Drops recipes matching any excluded term, preserving input order.
pub fn filter_excluded(
    recipes: Vec<RecipeCandidate>,
    exclude: &[String],
    strategy: MatchStrategy,
) -> Vec<RecipeCandidate> {
    let excluded_lower: Vec<String> = exclude.iter().map(|e| e.to_lowercase()).collect();

    recipes
        .into_iter()
        .filter(|recipe| !recipe_is_excluded(recipe, &excluded_lower, strategy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipes::entities::RecipeIngredient;

    fn recipe(id: i64, ingredient_names: &[&str]) -> RecipeCandidate {
        RecipeCandidate {
            id,
            title: format!("recipe {id}"),
            image: None,
            ready_in_minutes: Some(30),
            servings: Some(2),
            ingredients: ingredient_names
                .iter()
                .map(|name| RecipeIngredient {
                    name: (*name).to_string(),
                    original: format!("1 cup {name}"),
                })
                .collect(),
            nutrients: vec![],
        }
    }

    #[test]
    fn substring_match_rejects_compound_ingredients() {
        let recipes = vec![
            recipe(1, &["chicken breast", "walnut oil"]),
            recipe(2, &["chicken breast", "olive oil"]),
        ];

        let kept = filter_excluded(recipes, &["nut".to_string()], MatchStrategy::Substring);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 2);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let recipes = vec![recipe(1, &["Peanut Butter"])];

        let kept = filter_excluded(recipes, &["NUT".to_string()], MatchStrategy::Substring);

        assert!(kept.is_empty());
    }

    #[test]
    fn recipe_without_ingredients_passes() {
        let recipes = vec![recipe(1, &[])];

        let kept = filter_excluded(recipes, &["nut".to_string()], MatchStrategy::Substring);

        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn exact_strategy_keeps_compound_ingredients() {
        let recipes = vec![recipe(1, &["walnut oil"]), recipe(2, &["nut"])];

        let kept = filter_excluded(recipes, &["nut".to_string()], MatchStrategy::Exact);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 1);
    }

    #[test]
    fn upstream_order_is_preserved() {
        let recipes = vec![recipe(3, &["rice"]), recipe(1, &["beef"]), recipe(2, &["tofu"])];

        let kept = filter_excluded(recipes, &[], MatchStrategy::Substring);

        let ids: Vec<i64> = kept.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
