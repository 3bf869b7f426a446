//! Regex grammars for the four kinds of markup in a recipe line.
//!
//! Ingredients and cookware come in two surface forms: braced
//! (`@name{amount%unit}`, possibly with an empty body) where the name may
//! contain spaces, and bare (`@word`) where the name is a single run of
//! non-whitespace, non-marker characters. Timers always take the braced
//! form and may be anonymous. Metadata matches a whole `>> key: value`
//! line.

use regex::{Captures, Regex};
use std::ops::Range;
use std::sync::LazyLock;

use crate::model::{Amount, Cookware, Ingredient, Metadata, Timer};
use crate::quantity;

static INGREDIENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(?:([^@#~{}]+?)\{([^}]*)\}|([^@#~\s]+))").unwrap());

static COOKWARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(?:([^@#~{}]+?)\{([^}]*)\}|([^@#~\s]+))").unwrap());

static TIMER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~([^@#~{}]*)\{([0-9]+(?:[/.][0-9]+)?)%([^}]+)\}").unwrap());

static METADATA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^>>\s*(.*?):\s*(.*)$").unwrap());

/// A marker only starts an entity at the beginning of the scanned span or
/// after a non-word character. This keeps `user@host` from parsing as an
/// ingredient named `host`.
fn at_word_start(text: &str, index: usize) -> bool {
    text[..index]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric() && c != '_')
}

/// Splits a brace body on `%` into an amount and a unit. An empty amount
/// defaults to 1; segments past the second are ignored.
fn split_brace_body(body: &str) -> (Amount, String) {
    let mut segments = body.split('%');
    let amount_text = segments.next().unwrap_or("").trim();
    let unit = segments.next().unwrap_or("").trim().to_string();
    let amount = if amount_text.is_empty() {
        Amount::one()
    } else {
        Amount::parse(amount_text)
    };
    (amount, unit)
}

/// Name from either the braced (group 1) or bare (group 3) alternative.
fn matched_name(caps: &Captures) -> String {
    caps.get(1)
        .or_else(|| caps.get(3))
        .map_or(String::new(), |m| m.as_str().trim().to_string())
}

/// Finds the first ingredient in `text`, returning its span and value.
pub(crate) fn find_ingredient(text: &str) -> Option<(Range<usize>, Ingredient)> {
    for caps in INGREDIENT.captures_iter(text) {
        let matched = caps.get(0).unwrap();
        if !at_word_start(text, matched.start()) {
            continue;
        }
        let (amount, unit) = match caps.get(2) {
            Some(body) => split_brace_body(body.as_str()),
            None => (Amount::one(), String::new()),
        };
        let ingredient = Ingredient {
            name: matched_name(&caps),
            amount,
            unit,
            raw: matched.as_str().to_string(),
        };
        return Some((matched.range(), ingredient));
    }
    None
}

/// Finds the first piece of cookware in `text`. A brace body is consumed
/// into `raw` but carries no fields.
pub(crate) fn find_cookware(text: &str) -> Option<(Range<usize>, Cookware)> {
    for caps in COOKWARE.captures_iter(text) {
        let matched = caps.get(0).unwrap();
        if !at_word_start(text, matched.start()) {
            continue;
        }
        let cookware = Cookware {
            name: matched_name(&caps),
            raw: matched.as_str().to_string(),
        };
        return Some((matched.range(), cookware));
    }
    None
}

/// Finds the first timer in `text`. Seconds are computed here, once.
pub(crate) fn find_timer(text: &str) -> Option<(Range<usize>, Timer)> {
    for caps in TIMER.captures_iter(text) {
        let matched = caps.get(0).unwrap();
        if !at_word_start(text, matched.start()) {
            continue;
        }
        let amount = Amount::parse(caps[2].trim());
        let unit = caps[3].trim().to_string();
        let seconds = quantity::to_seconds(amount.value().unwrap_or(0.0), &unit);
        let timer = Timer {
            name: caps[1].trim().to_string(),
            amount,
            unit,
            seconds,
            raw: matched.as_str().to_string(),
        };
        return Some((matched.range(), timer));
    }
    None
}

/// Matches a full `>> key: value` line. Key and value are trimmed.
pub(crate) fn metadata_line(line: &str) -> Option<Metadata> {
    METADATA.captures(line).map(|caps| Metadata {
        key: caps[1].trim().to_string(),
        value: caps[2].trim().to_string(),
        raw: caps[0].to_string(),
    })
}
