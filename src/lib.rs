// src/lib.rs

//! Pantry — recipe satisfiability evaluator
//!
//! Given a catalog of recipes (whose required ingredients may themselves be
//! the outputs of other recipes) and a set of raw ingredients on hand,
//! computes the closure of obtainable ingredients, the recipes that become
//! makeable, and which declared preferences go unsatisfied.
//!
//! # Architecture
//!
//! - Catalog: explicit ordered recipe collection, validated up front
//!   (duplicates, unknown references, dependency cycles)
//! - Resolver: monotone fixed-point closure over the validated catalog
//! - Matcher: membership tests against the closed set, preference
//!   cross-reference
//! - Report: sorted two-section console output, text or JSON
//!
//! The whole evaluation is a pure function of its inputs; nothing is
//! persisted and re-running with identical inputs is idempotent.

pub mod catalog;
mod error;
pub mod ingredient;
pub mod matcher;
pub mod report;
pub mod resolver;

pub use catalog::{Catalog, Preference, Recipe, builtin_pantry, builtin_preferences};
pub use error::{Error, Result};
pub use ingredient::{CompositeIngredient, Ingredient, RecipeName};
pub use matcher::{MatchResult, evaluate, match_recipes};
pub use resolver::Resolver;
