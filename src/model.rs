use serde::Serialize;

use crate::error::ParseError;
use crate::parser::grammar;

/// An amount attached to an ingredient or timer.
///
/// Either the original text parsed as a number (a plain float or a single
/// `a/b` fraction), or a free-form amount kept exactly as written. A
/// defaulted amount is `Numeric { text: "1", value: 1.0 }`, distinct from a
/// non-numeric literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Amount {
    Numeric { text: String, value: f64 },
    Literal { text: String },
}

impl Amount {
    /// The amount as written in the source (or its default).
    pub fn text(&self) -> &str {
        match self {
            Amount::Numeric { text, .. } => text,
            Amount::Literal { text } => text,
        }
    }

    /// The numeric value, when the amount parsed as a number. Check this
    /// before doing arithmetic with an amount.
    pub fn value(&self) -> Option<f64> {
        match self {
            Amount::Numeric { value, .. } => Some(*value),
            Amount::Literal { .. } => None,
        }
    }

    pub(crate) fn parse(text: &str) -> Self {
        match crate::quantity::parse_number(text) {
            Some(value) => Amount::Numeric {
                text: text.to_string(),
                value,
            },
            None => Amount::Literal {
                text: text.to_string(),
            },
        }
    }

    /// The default amount for entities written without one.
    pub(crate) fn one() -> Self {
        Amount::Numeric {
            text: "1".to_string(),
            value: 1.0,
        }
    }
}

/// An ingredient pulled out of a step, e.g. `@flour{125%g}` or `@salt`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: Amount,
    pub unit: String,
    /// Exact source substring the ingredient was parsed from
    pub raw: String,
}

impl Ingredient {
    /// Parses an ingredient directly from text containing one.
    ///
    /// Fails if the text does not match the ingredient grammar. Document
    /// parsing never takes this path; it only constructs entities after
    /// confirming a match.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        grammar::find_ingredient(text)
            .map(|(_, ingredient)| ingredient)
            .ok_or_else(|| ParseError::Ingredient(text.to_string()))
    }
}

/// A piece of cookware, e.g. `#bowl` or `#cast iron skillet{}`.
///
/// Cookware carries no unit and its quantity is conceptually fixed at 1; a
/// braced body is consumed into `raw` but otherwise ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cookware {
    pub name: String,
    pub raw: String,
}

impl Cookware {
    /// Parses cookware directly from text containing some.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        grammar::find_cookware(text)
            .map(|(_, cookware)| cookware)
            .ok_or_else(|| ParseError::Cookware(text.to_string()))
    }
}

/// A timer, e.g. `~{30%seconds}` or `~prep{1/4%hour}`.
///
/// An empty name means the timer is anonymous. `seconds` is derived from the
/// amount and unit once at construction and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timer {
    pub name: String,
    pub amount: Amount,
    pub unit: String,
    pub seconds: f64,
    pub raw: String,
}

impl Timer {
    /// Parses a timer directly from text containing one.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        grammar::find_timer(text)
            .map(|(_, timer)| timer)
            .ok_or_else(|| ParseError::Timer(text.to_string()))
    }
}

/// A metadata entry from a `>> key: value` line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub key: String,
    pub value: String,
    pub raw: String,
}

impl Metadata {
    /// Parses a metadata entry from a full line.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        grammar::metadata_line(line).ok_or_else(|| ParseError::Metadata(line.to_string()))
    }
}

/// One element of a step: literal text or a parsed entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Component {
    Text(String),
    Ingredient(Ingredient),
    Cookware(Cookware),
    Timer(Timer),
}

impl Component {
    /// The source text this component covers: the text itself for a text
    /// span, the entity's `raw` otherwise.
    pub fn raw_text(&self) -> &str {
        match self {
            Component::Text(text) => text,
            Component::Ingredient(ingredient) => &ingredient.raw,
            Component::Cookware(cookware) => &cookware.raw,
            Component::Timer(timer) => &timer.raw,
        }
    }
}

/// A single recipe step: an ordered sequence of components covering one line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub components: Vec<Component>,
    /// Full line text, after comment stripping
    pub raw: String,
}

impl Step {
    /// Reassembles the original line from the components. Always equal to
    /// `raw`.
    pub fn reconstruct(&self) -> String {
        self.components.iter().map(Component::raw_text).collect()
    }
}

/// A parsed recipe document.
///
/// Steps hold their components in source order; `ingredients`, `cookware`
/// and `timers` are flattened views of every entity encountered across all
/// steps, in first-appearance order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    /// Complete original source, before comment stripping
    pub raw: String,
    pub metadata: Vec<Metadata>,
    pub steps: Vec<Step>,
    pub ingredients: Vec<Ingredient>,
    pub cookware: Vec<Cookware>,
    pub timers: Vec<Timer>,
}

impl Recipe {
    /// Total cook time in seconds: the sum of every timer's seconds.
    pub fn total_time(&self) -> u64 {
        self.timers.iter().map(|timer| timer.seconds).sum::<f64>() as u64
    }
}
