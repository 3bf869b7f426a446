mod comment;
pub(crate) mod grammar;
mod tokenizer;

use log::debug;

use crate::model::{Component, Metadata, Recipe, Step};

/// Parses a complete recipe source into a structured document.
///
/// Parsing is total: it never fails for any input. Comments are stripped
/// first, then each line becomes either a metadata entry or a step; lines
/// that are blank after stripping are dropped. Every entity found in a step
/// is also appended to the recipe's flattened lists, in encounter order.
pub fn parse(source: &str) -> Recipe {
    let stripped = comment::strip(source);

    let mut metadata: Vec<Metadata> = Vec::new();
    let mut steps: Vec<Step> = Vec::new();
    let mut ingredients = Vec::new();
    let mut cookware = Vec::new();
    let mut timers = Vec::new();

    for line in stripped.split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        if let Some(entry) = grammar::metadata_line(line) {
            metadata.push(entry);
            continue;
        }
        let components = tokenizer::tokenize(line);
        for component in &components {
            match component {
                Component::Ingredient(ingredient) => ingredients.push(ingredient.clone()),
                Component::Cookware(item) => cookware.push(item.clone()),
                Component::Timer(timer) => timers.push(timer.clone()),
                Component::Text(_) => {}
            }
        }
        steps.push(Step {
            components,
            raw: line.to_string(),
        });
    }

    debug!(
        "parsed {} metadata entries, {} steps, {} ingredients, {} cookware, {} timers",
        metadata.len(),
        steps.len(),
        ingredients.len(),
        cookware.len(),
        timers.len()
    );

    Recipe {
        raw: source.to_string(),
        metadata,
        steps,
        ingredients,
        cookware,
        timers,
    }
}
