//! A parser for the [Cooklang](https://cooklang.org) recipe markup language.
//!
//! Recipes are plain text with inline markup: `@` introduces an ingredient,
//! `#` cookware, `~` a timer, and `>>` a metadata line. Parsing never fails;
//! anything that does not match a grammar stays literal text.
//!
//! ```
//! let recipe = cooklang_parser::parse("Crack the @eggs{3} into a #bowl and whisk.");
//!
//! assert_eq!(recipe.ingredients.len(), 1);
//! assert_eq!(recipe.ingredients[0].name, "eggs");
//! assert_eq!(recipe.cookware[0].name, "bowl");
//! ```

pub mod error;
pub mod model;
pub mod parser;
pub mod quantity;

pub use crate::error::ParseError;
pub use crate::model::{Amount, Component, Cookware, Ingredient, Metadata, Recipe, Step, Timer};
pub use crate::parser::parse;
