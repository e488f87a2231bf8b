// src/resolver.rs

//! Ingredient closure resolver
//!
//! Expands a raw ingredient set into its closure: every recipe whose
//! requirements are already obtainable contributes its own output to the
//! set, which can in turn satisfy further recipes. The closure grows
//! monotonically, so iterating to a fixed point terminates after at most
//! one pass per recipe in the catalog.

use std::collections::HashSet;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::ingredient::{CompositeIngredient, Ingredient, RecipeName};

/// Closure resolver over a validated catalog
pub struct Resolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> Resolver<'a> {
    /// Create a resolver, validating the catalog first
    pub fn new(catalog: &'a Catalog) -> Result<Self> {
        catalog.validate()?;
        Ok(Self { catalog })
    }

    /// Create a resolver over a catalog known to be valid (for testing)
    pub fn with_catalog(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Compute the closure of obtainable ingredients
    ///
    /// Seeds the set with the on-hand raw ingredients, then repeatedly
    /// admits any recipe whose entire requirement list is in the set,
    /// until a pass adds nothing. A done-set skips recipes already
    /// admitted, so each recipe is tested at most once per pass and
    /// admitted exactly once.
    pub fn closure(&self, on_hand: &[Ingredient]) -> HashSet<CompositeIngredient> {
        let mut obtainable: HashSet<CompositeIngredient> =
            on_hand.iter().map(|&i| CompositeIngredient::Raw(i)).collect();
        let mut admitted: HashSet<RecipeName> = HashSet::new();

        loop {
            let mut grew = false;

            for recipe in self.catalog.recipes() {
                if admitted.contains(&recipe.name) {
                    continue;
                }
                if recipe.required.iter().all(|req| obtainable.contains(req)) {
                    debug!(recipe = %recipe.name, "ingredient closure admits recipe output");
                    obtainable.insert(CompositeIngredient::Made(recipe.name));
                    admitted.insert(recipe.name);
                    grew = true;
                }
            }

            if !grew {
                break;
            }
        }

        obtainable
    }
}
