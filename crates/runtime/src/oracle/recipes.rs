//! [`frontier_core::RecipeOracle`] over the loaded recipe book.
use frontier_core::{Recipe, RecipeOracle};

/// Recipes in display order.
#[derive(Default)]
pub struct RecipeOracleImpl {
    recipes: Vec<Recipe>,
}

impl RecipeOracleImpl {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }
}

impl RecipeOracle for RecipeOracleImpl {
    fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}
