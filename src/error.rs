// src/error.rs

//! Error types for catalog validation and name parsing
//!
//! The builtin catalog and pantry never produce errors; these cover
//! user-supplied ingredient names and programmatically built catalogs.

use thiserror::Error;

/// Errors that can occur while validating a catalog or parsing names
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Ingredient name outside the known set
    #[error("Unknown ingredient '{name}'")]
    UnknownIngredient { name: String },

    /// Recipe name outside the known set, or a requirement on a recipe
    /// the catalog does not define
    #[error("Unknown recipe '{name}'")]
    UnknownRecipe { name: String },

    /// The catalog defines the same recipe twice
    #[error("Recipe '{name}' is defined more than once")]
    DuplicateRecipe { name: String },

    /// Recipe requirements form a cycle, so closure would never add
    /// any recipe on it
    #[error("Cyclic recipe dependency: {}", cycle.join(" -> "))]
    CyclicDependency { cycle: Vec<String> },
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
