//! Plain-text rendering of entries for tool results.

use std::fmt::Write;

use crate::model::{Definition, DictionaryEntry};

/// Message returned when the dictionary has no entry for `word`
pub fn not_found_message(word: &str) -> String {
    format!("No results for \"{word}\" in the dictionary.")
}

/// Render an entry as text, preserving the order of every list
pub fn format_entry(entry: &DictionaryEntry) -> String {
    let mut out = String::new();

    out.push_str(&entry.word);
    if let Some(pos) = &entry.part_of_speech {
        let _ = write!(out, " ({pos})");
    }
    out.push('\n');

    if entry.is_empty() {
        let _ = write!(
            out,
            "\nThe entry for \"{}\" exists but no definitions could be read from it.\n",
            entry.word
        );
        return out;
    }

    if !entry.definitions.is_empty() {
        out.push_str("\nDefinitions:\n");
        for definition in &entry.definitions {
            write_definition(&mut out, definition, "");
        }
    }

    if !entry.expressions.is_empty() {
        out.push_str("\nExpressions:\n");
        for expression in &entry.expressions {
            let _ = writeln!(out, "* {}", expression.expression);
            for definition in &expression.definitions {
                write_definition(&mut out, definition, "  ");
            }
        }
    }

    out
}

fn write_definition(out: &mut String, definition: &Definition, indent: &str) {
    let marker = match &definition.sense {
        Some(sense) => format!("{sense}."),
        None => "-".to_string(),
    };
    let _ = writeln!(out, "{indent}{marker} {}", definition.definition);

    let nested = format!("{indent}   ");
    for example in &definition.examples {
        let _ = writeln!(out, "{nested}Example: {example}");
    }
    if let Some(reference) = &definition.references {
        let _ = writeln!(
            out,
            "{nested}{}: {}",
            reference.kind.heading(),
            reference.words.join(", ")
        );
    }
}
