// src/commands.rs
//! Command handlers for the pantry CLI

use anyhow::Result;
use pantry::catalog::{Catalog, builtin_pantry, builtin_preferences};
use pantry::ingredient::Ingredient;
use pantry::matcher::evaluate;
use pantry::report;
use tracing::info;

/// Evaluate a pantry against the builtin catalog and preferences
pub fn plan(have: Option<Vec<String>>, label: &str, json: bool) -> Result<()> {
    let on_hand = match have {
        Some(names) => parse_ingredients(&names)?,
        None => builtin_pantry(),
    };
    info!(ingredients = on_hand.len(), "evaluating pantry");

    let catalog = Catalog::builtin();
    let result = evaluate(&catalog, &on_hand, &builtin_preferences())?;

    if json {
        println!("{}", report::render_json(label, &result));
    } else {
        print!("{}", report::render(label, &result));
    }
    Ok(())
}

/// List the builtin catalog sorted by recipe name
pub fn catalog() -> Result<()> {
    let catalog = Catalog::builtin();

    let mut recipes: Vec<_> = catalog.recipes().iter().collect();
    recipes.sort_by_key(|r| r.name.to_string());

    for recipe in recipes {
        let required = recipe
            .required
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!("{}: {}", recipe.name, required);
    }
    Ok(())
}

/// Parse comma-separated ingredient names, rejecting unknown ones
fn parse_ingredients(names: &[String]) -> Result<Vec<Ingredient>> {
    names
        .iter()
        .map(|name| Ok(Ingredient::parse(name.trim())?))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ingredients_trims_and_parses() {
        let names = vec!["salt".to_string(), " butter ".to_string()];
        let parsed = parse_ingredients(&names).unwrap();
        assert_eq!(parsed, vec![Ingredient::Salt, Ingredient::Butter]);
    }

    #[test]
    fn test_parse_ingredients_rejects_unknown() {
        let names = vec!["salt".to_string(), "saffron".to_string()];
        assert!(parse_ingredients(&names).is_err());
    }
}
