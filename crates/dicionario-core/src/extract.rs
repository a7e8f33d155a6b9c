use scraper::{ElementRef, Html};

use crate::diagnostic::{Diagnostic, SHAPE_DRIFT_MIN_LEN};
use crate::markers::{self, Marker};
use crate::model::{Definition, DictionaryEntry, Expression};
use crate::references;

/// Footer block that reuses the expression marker for related words
pub const RELATED_WORDS_LABEL: &str = "Palabras relacionadas:";

/// Way of pulling definitions out of an expression block
pub type ExpressionStrategy = for<'a> fn(ElementRef<'a>) -> Vec<Definition>;

/// Tried in order; the first strategy returning definitions wins
pub const EXPRESSION_STRATEGIES: &[ExpressionStrategy] =
    &[nested_sense_definitions, subentry_definitions];

/// Entry extracted from one fragment, with any signals raised on the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub entry: DictionaryEntry,
    pub diagnostics: Vec<Diagnostic>,
}

impl Extraction {
    pub fn has_shape_drift(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::ShapeDrift { .. }))
    }
}

/// Build a [`DictionaryEntry`] from an entry's markup.
///
/// Never fails: missing structure degrades to absent fields and empty lists.
pub fn extract(fragment: &str, fallback_title: &str) -> Extraction {
    let document = Html::parse_fragment(fragment);
    let root = document.root_element();
    let mut diagnostics = Vec::new();

    let mut entry = DictionaryEntry::new(fallback_title.trim());

    match markers::find_first(root, Marker::PrimaryEntry) {
        Some(primary) => {
            if let Some(headword) = markers::marker_text(primary, Marker::Headword) {
                entry.word = headword;
            }
            entry.part_of_speech = markers::marker_text(primary, Marker::PartOfSpeech);
            entry.definitions = markers::children(primary, Marker::Sense)
                .filter_map(extract_sense)
                .collect();
        }
        None => {
            tracing::debug!(word = %entry.word, "No primary entry block in fragment");
            diagnostics.push(Diagnostic::MissingPrimaryBlock);
        }
    }

    entry.expressions = markers::find_all(root, Marker::ExpressionBlock)
        .filter_map(extract_expression)
        .collect();

    let fragment_len = fragment.trim().chars().count();
    if entry.is_empty() && fragment_len >= SHAPE_DRIFT_MIN_LEN {
        diagnostics.push(Diagnostic::ShapeDrift { fragment_len });
    }

    Extraction { entry, diagnostics }
}

/// Apply the sense rule to one sense node; `None` when it has no definition
pub fn extract_sense(sense: ElementRef<'_>) -> Option<Definition> {
    let Some(definition) = markers::marker_text(sense, Marker::DefinitionText) else {
        tracing::debug!("Dropping sense without definition text");
        return None;
    };

    let number = markers::find_first(sense, Marker::SenseNumber).and_then(|el| {
        let text = markers::text_of(el);
        let label = text.trim_end_matches('.').trim();
        (!label.is_empty()).then(|| label.to_string())
    });

    let examples = markers::find_all(sense, Marker::ExampleText)
        .map(markers::text_of)
        .filter(|example| !example.is_empty())
        .collect();

    Some(Definition {
        sense: number,
        definition,
        examples,
        references: references::first_reference(sense),
    })
}

fn extract_expression(block: ElementRef<'_>) -> Option<Expression> {
    let text = markers::marker_text(block, Marker::ExpressionText)?;
    if text.starts_with(RELATED_WORDS_LABEL) {
        return None;
    }

    let definitions = EXPRESSION_STRATEGIES
        .iter()
        .map(|strategy| strategy(block))
        .find(|definitions| !definitions.is_empty());

    match definitions {
        Some(definitions) => Some(Expression {
            expression: text,
            definitions,
        }),
        None => {
            tracing::debug!(expression = %text, "Dropping expression without definitions");
            None
        }
    }
}

/// Senses nested anywhere inside the expression block
pub fn nested_sense_definitions(block: ElementRef<'_>) -> Vec<Definition> {
    markers::find_all(block, Marker::Sense)
        .filter_map(extract_sense)
        .collect()
}

/// Definition containers sitting directly under a nested sub-entry.
///
/// Each definition carries every sibling example container of its sub-entry,
/// in document order. Containers nested deeper are not siblings and are ignored.
pub fn subentry_definitions(block: ElementRef<'_>) -> Vec<Definition> {
    let mut definitions = Vec::new();

    for subentry in markers::find_all(block, Marker::SubEntry) {
        let examples: Vec<String> = markers::children(subentry, Marker::ExampleBlock)
            .map(|example| {
                markers::marker_text(example, Marker::ExampleText)
                    .unwrap_or_else(|| markers::text_of(example))
            })
            .filter(|example| !example.is_empty())
            .collect();

        for child in markers::children(subentry, Marker::DefinitionBlock) {
            let text = markers::marker_text(child, Marker::DefinitionText)
                .unwrap_or_else(|| markers::text_of(child));
            if text.is_empty() {
                tracing::debug!("Dropping empty sub-entry definition");
                continue;
            }
            definitions.push(Definition {
                examples: examples.clone(),
                ..Definition::new(text)
            });
        }
    }

    definitions
}
