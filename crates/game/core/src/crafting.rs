//! Crafting: recipes turn inventory ingredients into a new item.

use crate::actor::Player;
use crate::env::{ItemOracle, RecipeOracle};
use crate::error::{ErrorKind, GameError};
use crate::item::humanize_id;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ingredient {
    pub item: String,
    pub count: u32,
}

impl Ingredient {
    pub fn new(item: impl Into<String>, count: u32) -> Self {
        Self {
            item: item.into(),
            count,
        }
    }
}

/// A recipe is identified by the item it produces.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recipe {
    output: String,
    ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(output: impl Into<String>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            output: output.into(),
            ingredients,
        }
    }

    pub fn id(&self) -> &str {
        &self.output
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CraftError {
    #[error("Unknown recipe '{recipe_id}'.")]
    UnknownRecipe { recipe_id: String },

    #[error("Unknown item '{item_id}'.")]
    UnknownItem { item_id: String },

    #[error("Not enough materials to craft {}.", humanize_id(.recipe_id))]
    MissingIngredients {
        recipe_id: String,
        missing: Vec<Ingredient>,
    },
}

impl GameError for CraftError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownRecipe { .. } | Self::UnknownItem { .. } => ErrorKind::UnknownIdentifier,
            Self::MissingIngredients { .. } => ErrorKind::PreconditionNotMet,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownRecipe { .. } => "CRAFT_UNKNOWN_RECIPE",
            Self::UnknownItem { .. } => "CRAFT_UNKNOWN_ITEM",
            Self::MissingIngredients { .. } => "CRAFT_MISSING_INGREDIENTS",
        }
    }
}

/// Crafts `recipe_id` from the player's inventory.
///
/// Everything is validated before the inventory is touched, so a failed craft
/// leaves it unchanged.
pub fn craft(
    player: &mut Player,
    recipe_id: &str,
    recipes: &dyn RecipeOracle,
    items: &dyn ItemOracle,
) -> Result<String, CraftError> {
    let recipe = recipes
        .recipe(recipe_id)
        .ok_or_else(|| CraftError::UnknownRecipe {
            recipe_id: recipe_id.to_string(),
        })?;
    let product = items
        .create(recipe.output())
        .ok_or_else(|| CraftError::UnknownItem {
            item_id: recipe.output().to_string(),
        })?;

    let missing: Vec<Ingredient> = recipe
        .ingredients()
        .iter()
        .filter_map(|ingredient| {
            let owned = player.inventory().count(&ingredient.item);
            (owned < ingredient.count)
                .then(|| Ingredient::new(ingredient.item.clone(), ingredient.count - owned))
        })
        .collect();
    if !missing.is_empty() {
        return Err(CraftError::MissingIngredients {
            recipe_id: recipe_id.to_string(),
            missing,
        });
    }

    for ingredient in recipe.ingredients() {
        player
            .inventory_mut()
            .remove_many(&ingredient.item, ingredient.count);
    }
    let message = format!("Crafted {}.", product.name());
    tracing::debug!("Crafted '{}'", recipe_id);
    player.add_item(product);
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::geometry::Position;
    use crate::testing::{TestItems, TestRecipes};

    fn player_with(items: &[&str]) -> Player {
        let mut player = Player::new(Position::ORIGIN, &GameConfig::default());
        for id in items {
            player.add_item(TestItems.create(id).unwrap());
        }
        player
    }

    #[test]
    fn crafting_consumes_ingredients() {
        let mut player = player_with(&["herb", "iron_ore", "herb", "herb"]);
        let message = craft(&mut player, "health_potion", &TestRecipes::new(), &TestItems).unwrap();

        assert_eq!(message, "Crafted Health Potion.");
        assert_eq!(player.inventory().ids(), vec!["iron_ore", "health_potion"]);
    }

    #[test]
    fn missing_ingredients_leave_inventory_alone() {
        let mut player = player_with(&["herb", "herb"]);
        let err = craft(&mut player, "mana_potion", &TestRecipes::new(), &TestItems).unwrap_err();

        assert_eq!(
            err,
            CraftError::MissingIngredients {
                recipe_id: "mana_potion".into(),
                missing: vec![Ingredient::new("iron_ore", 1)],
            }
        );
        assert_eq!(err.to_string(), "Not enough materials to craft mana potion.");
        assert_eq!(player.inventory().count("herb"), 2);
    }

    #[test]
    fn unknown_recipe() {
        let mut player = player_with(&[]);
        let err = craft(&mut player, "iron_sword", &TestRecipes::new(), &TestItems).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownIdentifier);
    }
}
