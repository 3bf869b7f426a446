use log::debug;
use std::env;
use std::fs;

use cooklang_parser::parse;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the recipe file from command-line arguments
    let args: Vec<String> = env::args().collect();
    let path = args
        .get(1)
        .ok_or("Please provide a recipe file as an argument")?;

    let source = fs::read_to_string(path)?;
    let recipe = parse(&source);
    debug!(
        "{}: {} steps, {} ingredients",
        path,
        recipe.steps.len(),
        recipe.ingredients.len()
    );

    println!("{}", serde_json::to_string_pretty(&recipe)?);

    Ok(())
}
