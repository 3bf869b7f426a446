//! Runs the declarative fixture corpus: each case pairs a source text with
//! the expected structure of the parsed document.

use std::collections::BTreeMap;

use serde::Deserialize;

use cooklang_parser::{parse, Component};

const CORPUS: &str = include_str!("fixtures/canonical.json");

#[derive(Debug, Deserialize)]
struct Fixture {
    source: String,
    #[serde(default)]
    metadata: Vec<ExpectedMetadata>,
    steps: Vec<Vec<ExpectedComponent>>,
    #[serde(default)]
    total_time: u64,
}

#[derive(Debug, Deserialize)]
struct ExpectedMetadata {
    key: String,
    value: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ExpectedComponent {
    Text {
        value: String,
    },
    Ingredient {
        name: String,
        quantity: ExpectedQuantity,
        units: String,
    },
    Cookware {
        name: String,
    },
    Timer {
        name: String,
        quantity: f64,
        units: String,
        seconds: f64,
    },
}

/// A numeric quantity, or the literal text of a non-numeric one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExpectedQuantity {
    Number(f64),
    Text(String),
}

fn check_component(case: &str, expected: &ExpectedComponent, actual: &Component) {
    match (expected, actual) {
        (ExpectedComponent::Text { value }, Component::Text(text)) => {
            assert_eq!(text, value, "{case}: text span mismatch");
        }
        (
            ExpectedComponent::Ingredient {
                name,
                quantity,
                units,
            },
            Component::Ingredient(ingredient),
        ) => {
            assert_eq!(&ingredient.name, name, "{case}: ingredient name");
            assert_eq!(&ingredient.unit, units, "{case}: ingredient unit");
            match quantity {
                ExpectedQuantity::Number(value) => {
                    assert_eq!(
                        ingredient.amount.value(),
                        Some(*value),
                        "{case}: ingredient quantity"
                    );
                }
                ExpectedQuantity::Text(text) => {
                    assert_eq!(ingredient.amount.value(), None, "{case}: quantity not numeric");
                    assert_eq!(ingredient.amount.text(), text, "{case}: amount text");
                }
            }
        }
        (ExpectedComponent::Cookware { name }, Component::Cookware(cookware)) => {
            assert_eq!(&cookware.name, name, "{case}: cookware name");
        }
        (
            ExpectedComponent::Timer {
                name,
                quantity,
                units,
                seconds,
            },
            Component::Timer(timer),
        ) => {
            assert_eq!(&timer.name, name, "{case}: timer name");
            assert_eq!(timer.amount.value(), Some(*quantity), "{case}: timer quantity");
            assert_eq!(&timer.unit, units, "{case}: timer unit");
            assert_eq!(&timer.seconds, seconds, "{case}: timer seconds");
        }
        (expected, actual) => {
            panic!("{case}: expected {expected:?}, parsed {actual:?}");
        }
    }
}

#[test]
fn canonical_corpus_passes() {
    let corpus: BTreeMap<String, Fixture> =
        serde_json::from_str(CORPUS).expect("fixture corpus is valid JSON");
    assert!(!corpus.is_empty());

    for (case, fixture) in &corpus {
        let recipe = parse(&fixture.source);

        assert_eq!(
            recipe.metadata.len(),
            fixture.metadata.len(),
            "{case}: metadata count"
        );
        for (expected, actual) in fixture.metadata.iter().zip(&recipe.metadata) {
            assert_eq!(actual.key, expected.key, "{case}: metadata key");
            assert_eq!(actual.value, expected.value, "{case}: metadata value");
        }

        assert_eq!(recipe.steps.len(), fixture.steps.len(), "{case}: step count");
        for (step_index, (expected_step, step)) in
            fixture.steps.iter().zip(&recipe.steps).enumerate()
        {
            assert_eq!(
                step.components.len(),
                expected_step.len(),
                "{case}: component count in step {step_index}"
            );
            for (expected, actual) in expected_step.iter().zip(&step.components) {
                check_component(case, expected, actual);
            }
        }

        assert_eq!(recipe.total_time(), fixture.total_time, "{case}: total time");
    }
}
