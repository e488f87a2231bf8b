// src/catalog.rs

//! Recipe catalog, pantry and preference data
//!
//! A catalog is an explicit ordered collection of recipes. Each recipe
//! requires composite ingredients, so a recipe's output can appear in
//! another recipe's requirement list. Validation rejects duplicate
//! definitions, requirements on undefined recipes, and cycles in the
//! recipe-to-recipe dependency graph.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::ingredient::{CompositeIngredient, Ingredient, RecipeName};

/// A recipe and the composite ingredients it requires
///
/// Requirement order is preserved but has no effect on evaluation. There
/// is no optional-ingredient or quantity modeling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: RecipeName,
    pub required: Vec<CompositeIngredient>,
}

impl Recipe {
    pub fn new(name: RecipeName, required: Vec<CompositeIngredient>) -> Self {
        Self { name, required }
    }

    /// Recipe names this recipe consumes as ingredients
    pub fn recipe_deps(&self) -> impl Iterator<Item = RecipeName> + '_ {
        self.required.iter().filter_map(|c| c.as_recipe())
    }
}

/// One person's desired recipe
///
/// Person names are free-form and not required to be unique; several
/// people may prefer the same recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preference {
    pub person: String,
    pub prefers: RecipeName,
}

impl Preference {
    pub fn new(person: impl Into<String>, prefers: RecipeName) -> Self {
        Self {
            person: person.into(),
            prefers,
        }
    }
}

/// An ordered collection of recipes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from a list of recipes
    ///
    /// Does not validate; call [`Catalog::validate`] before resolving.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Add a recipe to the catalog
    pub fn add_recipe(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
    }

    /// Recipes in declaration order
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Look up a recipe by name
    pub fn get(&self, name: RecipeName) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    /// Number of recipes in the catalog
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Check the catalog is well-formed
    ///
    /// Rejects duplicate recipe names, requirements on recipes the catalog
    /// does not define, and cycles in the recipe dependency graph. A cyclic
    /// catalog would leave every recipe on the cycle forever unsatisfiable,
    /// which is always a data error rather than an intent.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for recipe in &self.recipes {
            if !seen.insert(recipe.name) {
                return Err(Error::DuplicateRecipe {
                    name: recipe.name.to_string(),
                });
            }
        }

        // Requirements on recipe outputs must reference defined recipes
        for recipe in &self.recipes {
            for dep in recipe.recipe_deps() {
                if !seen.contains(&dep) {
                    return Err(Error::UnknownRecipe {
                        name: dep.to_string(),
                    });
                }
            }
        }

        if let Some(cycle) = self.detect_cycle() {
            return Err(Error::CyclicDependency {
                cycle: cycle.iter().map(|n| n.to_string()).collect(),
            });
        }

        Ok(())
    }

    /// Find a cycle in the recipe dependency graph, if any
    ///
    /// Edges run from a recipe to the recipes whose output it consumes.
    /// Returns the recipes on the cycle in traversal order.
    fn detect_cycle(&self) -> Option<Vec<RecipeName>> {
        let edges: HashMap<RecipeName, Vec<RecipeName>> = self
            .recipes
            .iter()
            .map(|r| (r.name, r.recipe_deps().collect()))
            .collect();

        let mut visited = HashSet::new();
        let mut rec_stack = HashSet::new();
        let mut cycle = Vec::new();

        for recipe in &self.recipes {
            if !visited.contains(&recipe.name)
                && Self::dfs_cycle_detect(
                    &edges,
                    recipe.name,
                    &mut visited,
                    &mut rec_stack,
                    &mut cycle,
                )
            {
                cycle.reverse();
                return Some(cycle);
            }
        }

        None
    }

    /// DFS helper for cycle detection
    fn dfs_cycle_detect(
        edges: &HashMap<RecipeName, Vec<RecipeName>>,
        name: RecipeName,
        visited: &mut HashSet<RecipeName>,
        rec_stack: &mut HashSet<RecipeName>,
        cycle: &mut Vec<RecipeName>,
    ) -> bool {
        visited.insert(name);
        rec_stack.insert(name);

        if let Some(deps) = edges.get(&name) {
            for &dep in deps {
                if !visited.contains(&dep) {
                    if Self::dfs_cycle_detect(edges, dep, visited, rec_stack, cycle) {
                        cycle.push(name);
                        return true;
                    }
                } else if rec_stack.contains(&dep) {
                    cycle.push(dep);
                    cycle.push(name);
                    return true;
                }
            }
        }

        rec_stack.remove(&name);
        false
    }

    /// The builtin demo catalog
    ///
    /// Pasta is itself an ingredient of the other pasta dishes, and is only
    /// obtainable when its own requirements are on hand.
    pub fn builtin() -> Self {
        use CompositeIngredient::{Made, Raw};
        use Ingredient::*;
        use RecipeName::*;

        Self::from_recipes(vec![
            Recipe::new(RedPasta, vec![Made(Pasta), Raw(Tomato), Raw(Salt)]),
            Recipe::new(CheesePasta, vec![Made(Pasta), Raw(Cheese), Raw(Butter)]),
            Recipe::new(ButterPasta, vec![Raw(Butter)]),
            Recipe::new(Pasta, vec![Raw(Flour), Raw(Egg), Raw(Water)]),
        ])
    }
}

/// The builtin example pantry: what we have on hand
pub fn builtin_pantry() -> Vec<Ingredient> {
    use Ingredient::*;
    vec![Salt, Butter, Water, Flour, Egg, Cheese]
}

/// The builtin party guest list and what each person wants
pub fn builtin_preferences() -> Vec<Preference> {
    use RecipeName::*;
    vec![
        Preference::new("Sally", CheesePasta),
        Preference::new("Boron", ButterPasta),
        Preference::new("Fati", Pasta),
        Preference::new("Chang", RedPasta),
        Preference::new("James", RedPasta),
        Preference::new("Martin", RedPasta),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use CompositeIngredient::{Made, Raw};

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 4);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_builtin_lookup() {
        let catalog = Catalog::builtin();
        let pasta = catalog.get(RecipeName::Pasta).unwrap();
        assert_eq!(
            pasta.required,
            vec![
                Raw(Ingredient::Flour),
                Raw(Ingredient::Egg),
                Raw(Ingredient::Water)
            ]
        );
        assert!(catalog.get(RecipeName::RedPasta).is_some());
    }

    #[test]
    fn test_duplicate_recipe_rejected() {
        let catalog = Catalog::from_recipes(vec![
            Recipe::new(RecipeName::Pasta, vec![Raw(Ingredient::Flour)]),
            Recipe::new(RecipeName::Pasta, vec![Raw(Ingredient::Egg)]),
        ]);
        assert_eq!(
            catalog.validate().unwrap_err(),
            Error::DuplicateRecipe {
                name: "pasta".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_recipe_reference_rejected() {
        // red_pasta consumes pasta's output, but pasta is not defined
        let catalog = Catalog::from_recipes(vec![Recipe::new(
            RecipeName::RedPasta,
            vec![Made(RecipeName::Pasta), Raw(Ingredient::Tomato)],
        )]);
        assert_eq!(
            catalog.validate().unwrap_err(),
            Error::UnknownRecipe {
                name: "pasta".to_string()
            }
        );
    }

    #[test]
    fn test_cycle_rejected() {
        // red_pasta -> cheese_pasta -> red_pasta
        let mut catalog = Catalog::new();
        catalog.add_recipe(Recipe::new(
            RecipeName::RedPasta,
            vec![Made(RecipeName::CheesePasta)],
        ));
        catalog.add_recipe(Recipe::new(
            RecipeName::CheesePasta,
            vec![Made(RecipeName::RedPasta)],
        ));
        match catalog.validate().unwrap_err() {
            Error::CyclicDependency { cycle } => {
                assert!(cycle.contains(&"red_pasta".to_string()));
                assert!(cycle.contains(&"cheese_pasta".to_string()));
            }
            other => panic!("Expected CyclicDependency, got {other:?}"),
        }
    }

    #[test]
    fn test_self_cycle_rejected() {
        let catalog = Catalog::from_recipes(vec![Recipe::new(
            RecipeName::Pasta,
            vec![Made(RecipeName::Pasta)],
        )]);
        assert!(matches!(
            catalog.validate().unwrap_err(),
            Error::CyclicDependency { .. }
        ));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        assert!(Catalog::new().validate().is_ok());
    }
}
