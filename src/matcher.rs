// src/matcher.rs

//! Recipe matcher
//!
//! Cross-references a closed ingredient set against the catalog to find
//! which recipes are possible, then against the preference list to find
//! who is left without their desired dish.

use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

use crate::catalog::{Catalog, Preference};
use crate::error::Result;
use crate::ingredient::{CompositeIngredient, Ingredient, RecipeName};
use crate::resolver::Resolver;

/// Result of one evaluation pass
///
/// Recomputed from scratch each run; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Recipes whose entire requirement list is in the closed set
    pub possible: HashSet<RecipeName>,
    /// Preferences whose desired recipe is not possible, in input order
    pub unsatisfied: Vec<Preference>,
}

impl MatchResult {
    /// Whether a given recipe can be made
    pub fn can_make(&self, name: RecipeName) -> bool {
        self.possible.contains(&name)
    }

    /// Whether every preference is satisfied
    pub fn everyone_satisfied(&self) -> bool {
        self.unsatisfied.is_empty()
    }
}

/// Determine possible recipes and unsatisfied preferences
///
/// A recipe is possible iff every required entry is a member of the closed
/// set; a recipe with no requirements is trivially possible. Preferences
/// keep their input order in the unsatisfied list; sorting is left to
/// display time.
pub fn match_recipes(
    catalog: &Catalog,
    closed: &HashSet<CompositeIngredient>,
    preferences: &[Preference],
) -> MatchResult {
    let mut possible = HashSet::new();

    for recipe in catalog.recipes() {
        if recipe.required.iter().all(|req| closed.contains(req)) {
            possible.insert(recipe.name);
        }
    }
    debug!(possible = possible.len(), "recipe matching complete");

    let unsatisfied = preferences
        .iter()
        .filter(|p| !possible.contains(&p.prefers))
        .cloned()
        .collect();

    MatchResult {
        possible,
        unsatisfied,
    }
}

/// Full evaluation pipeline: validate, close, match
///
/// Plain sequential data flow; each stage takes the previous stage's
/// output and returns a new value.
pub fn evaluate(
    catalog: &Catalog,
    on_hand: &[Ingredient],
    preferences: &[Preference],
) -> Result<MatchResult> {
    let resolver = Resolver::new(catalog)?;
    let closed = resolver.closure(on_hand);
    Ok(match_recipes(catalog, &closed, preferences))
}
