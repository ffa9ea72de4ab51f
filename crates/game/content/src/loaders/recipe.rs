//! Recipe book loader.

use std::path::Path;

use frontier_core::Recipe;

use crate::loaders::{LoadResult, ensure_unique_ids, read_file};

/// Loader for crafting recipes from RON files.
///
/// RON format: `Vec<Recipe>`, kept in display order.
pub struct RecipeLoader;

impl RecipeLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Recipe>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Recipe>> {
        let recipes: Vec<Recipe> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse recipe book RON: {}", e))?;

        ensure_unique_ids("recipe", recipes.iter().map(Recipe::id))?;
        for recipe in &recipes {
            if recipe.ingredients().is_empty() {
                anyhow::bail!("Recipe '{}' has no ingredients", recipe.id());
            }
            if recipe.ingredients().iter().any(|ingredient| ingredient.count == 0) {
                anyhow::bail!("Recipe '{}' lists an ingredient with count 0", recipe.id());
            }
        }
        Ok(recipes)
    }
}
