// src/report.rs

//! Console report rendering
//!
//! Two labeled sections, both sorted at display time only: recipe names
//! ascending, unsatisfied people by person name. The "unstatisfied"
//! spelling is the historical output label and is kept as-is.

use serde::Serialize;

use crate::catalog::Preference;
use crate::ingredient::RecipeName;
use crate::matcher::MatchResult;

/// Render the two-section text report
pub fn render(label: &str, result: &MatchResult) -> String {
    let (possible, unsatisfied) = sorted_views(result);

    let recipes = possible
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let people = unsatisfied
        .iter()
        .map(|p| format!("{} (prefers {})", p.person, p.prefers))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "--- {label} ---\n\
         What can we make: {recipes}\n\
         People left unstatisfied: {people}\n\
         ---------\n"
    )
}

/// Render the report as pretty-printed JSON, same sort order as the text
pub fn render_json(label: &str, result: &MatchResult) -> String {
    #[derive(Serialize)]
    struct Report<'a> {
        label: &'a str,
        possible: Vec<RecipeName>,
        unsatisfied: Vec<&'a Preference>,
    }

    let (possible, unsatisfied) = sorted_views(result);
    let report = Report {
        label,
        possible,
        unsatisfied,
    };

    // Serialization of these types cannot fail
    serde_json::to_string_pretty(&report).unwrap_or_default()
}

/// Sort recipe names ascending and preferences by person name
fn sorted_views(result: &MatchResult) -> (Vec<RecipeName>, Vec<&Preference>) {
    let mut possible: Vec<RecipeName> = result.possible.iter().copied().collect();
    possible.sort_by_key(|name| name.to_string());

    let mut unsatisfied: Vec<&Preference> = result.unsatisfied.iter().collect();
    unsatisfied.sort_by(|a, b| a.person.cmp(&b.person));

    (possible, unsatisfied)
}
