use crate::model::Component;
use crate::parser::grammar;

/// Recursively decomposes one line (or sub-span) into ordered components.
///
/// Grammars are tried in fixed priority order: ingredient, then cookware,
/// then timer. An ingredient matching anywhere in the span is extracted
/// before cookware or timers are even searched for; the text to either side
/// of the match is tokenized recursively. A span matching no grammar is a
/// single text component. Every recursive call sees a strictly shorter
/// span, so the recursion terminates.
pub(crate) fn tokenize(text: &str) -> Vec<Component> {
    let found = grammar::find_ingredient(text)
        .map(|(range, ingredient)| (range, Component::Ingredient(ingredient)))
        .or_else(|| {
            grammar::find_cookware(text)
                .map(|(range, cookware)| (range, Component::Cookware(cookware)))
        })
        .or_else(|| {
            grammar::find_timer(text).map(|(range, timer)| (range, Component::Timer(timer)))
        });

    match found {
        Some((range, component)) => {
            let mut components = Vec::new();
            if range.start > 0 {
                components.extend(tokenize(&text[..range.start]));
            }
            components.push(component);
            if range.end < text.len() {
                components.extend(tokenize(&text[range.end..]));
            }
            components
        }
        None => vec![Component::Text(text.to_string())],
    }
}
