// src/ingredient.rs

//! Ingredient and recipe name types
//!
//! Both name sets are closed: raw ingredients are atomic materials, and a
//! recipe name doubles as the name of the composite ingredient that recipe
//! produces. `CompositeIngredient` is the union of the two, which is what
//! recipe requirement lists are written in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::Error;

/// An atomic raw material, present or absent in a pantry
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Ingredient {
    Salt,
    Butter,
    Water,
    Flour,
    Egg,
    Cheese,
    Tomato,
}

impl Ingredient {
    /// Parse a user-supplied name, mapping failure to `UnknownIngredient`
    pub fn parse(name: &str) -> crate::Result<Self> {
        Self::from_str(name).map_err(|_| Error::UnknownIngredient {
            name: name.to_string(),
        })
    }
}

/// Name of a recipe; also names the composite ingredient it produces
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RecipeName {
    RedPasta,
    CheesePasta,
    ButterPasta,
    Pasta,
}

impl RecipeName {
    /// Parse a user-supplied name, mapping failure to `UnknownRecipe`
    pub fn parse(name: &str) -> crate::Result<Self> {
        Self::from_str(name).map_err(|_| Error::UnknownRecipe {
            name: name.to_string(),
        })
    }
}

/// Either a raw ingredient or the output of another recipe
///
/// Requirement lists are written in this type, which is what lets one
/// recipe's output (pasta) feed another recipe's input (red_pasta).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(untagged)]
pub enum CompositeIngredient {
    Raw(Ingredient),
    Made(RecipeName),
}

impl CompositeIngredient {
    /// The recipe name, if this requirement is a recipe output
    pub fn as_recipe(&self) -> Option<RecipeName> {
        match self {
            CompositeIngredient::Made(name) => Some(*name),
            CompositeIngredient::Raw(_) => None,
        }
    }
}

impl fmt::Display for CompositeIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositeIngredient::Raw(i) => write!(f, "{i}"),
            CompositeIngredient::Made(r) => write!(f, "{r}"),
        }
    }
}

impl From<Ingredient> for CompositeIngredient {
    fn from(i: Ingredient) -> Self {
        CompositeIngredient::Raw(i)
    }
}

impl From<RecipeName> for CompositeIngredient {
    fn from(r: RecipeName) -> Self {
        CompositeIngredient::Made(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_round_trip() {
        assert_eq!(Ingredient::Flour.to_string(), "flour");
        assert_eq!(Ingredient::parse("flour").unwrap(), Ingredient::Flour);
    }

    #[test]
    fn test_recipe_name_round_trip() {
        assert_eq!(RecipeName::RedPasta.to_string(), "red_pasta");
        assert_eq!(RecipeName::parse("red_pasta").unwrap(), RecipeName::RedPasta);
    }

    #[test]
    fn test_unknown_ingredient() {
        let err = Ingredient::parse("saffron").unwrap_err();
        assert_eq!(
            err,
            Error::UnknownIngredient {
                name: "saffron".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_recipe() {
        let err = RecipeName::parse("lasagna").unwrap_err();
        assert_eq!(
            err,
            Error::UnknownRecipe {
                name: "lasagna".to_string()
            }
        );
    }

    #[test]
    fn test_composite_display() {
        let raw: CompositeIngredient = Ingredient::Tomato.into();
        let made: CompositeIngredient = RecipeName::Pasta.into();
        assert_eq!(raw.to_string(), "tomato");
        assert_eq!(made.to_string(), "pasta");
        assert_eq!(made.as_recipe(), Some(RecipeName::Pasta));
        assert_eq!(raw.as_recipe(), None);
    }
}
