use serde::{Deserialize, Serialize};

/// Structured result of a single dictionary lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    /// Canonical headword
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    /// Top-level senses, in document order
    #[serde(default)]
    pub definitions: Vec<Definition>,
    /// Idiomatic expressions, in document order
    #[serde(default)]
    pub expressions: Vec<Expression>,
}

impl DictionaryEntry {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            part_of_speech: None,
            definitions: Vec::new(),
            expressions: Vec::new(),
        }
    }

    /// The word exists upstream but nothing could be extracted from it
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty() && self.expressions.is_empty()
    }
}

/// One numbered or unnumbered sense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Sense ordinal, e.g. "1" (trailing period stripped)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sense: Option<String>,
    pub definition: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Reference>,
}

impl Definition {
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            sense: None,
            definition: definition.into(),
            examples: Vec::new(),
            references: None,
        }
    }
}

/// Idiomatic phrase with its own senses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expression {
    pub expression: String,
    pub definitions: Vec<Definition>,
}

/// Cross-reference attached to a sense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "type")]
    pub kind: ReferenceKind,
    pub words: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferenceKind {
    Synonym,
    See,
    Compare,
}

impl ReferenceKind {
    /// Upstream labels, in classification priority order
    pub const ALL: [ReferenceKind; 3] = [
        ReferenceKind::Synonym,
        ReferenceKind::See,
        ReferenceKind::Compare,
    ];

    /// Literal label the upstream markup uses for this kind
    pub fn label(&self) -> &'static str {
        match self {
            ReferenceKind::Synonym => "SINÓNIMO",
            ReferenceKind::See => "VÉXASE",
            ReferenceKind::Compare => "CONFRÓNTESE",
        }
    }

    /// Heading used when rendering the entry as text
    pub fn heading(&self) -> &'static str {
        match self {
            ReferenceKind::Synonym => "Synonyms",
            ReferenceKind::See => "See also",
            ReferenceKind::Compare => "Compare",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_without_senses_is_empty() {
        let entry = DictionaryEntry::new("casa");
        assert!(entry.is_empty());
        assert_eq!(entry.word, "casa");
        assert!(entry.part_of_speech.is_none());
    }

    #[test]
    fn test_reference_serializes_with_type_tag() {
        let reference = Reference {
            kind: ReferenceKind::Synonym,
            words: vec!["edificio".to_string()],
        };
        let json = serde_json::to_value(&reference).unwrap();
        assert_eq!(json["type"], "SYNONYM");
        assert_eq!(json["words"][0], "edificio");
    }

    #[test]
    fn test_entry_omits_absent_fields() {
        let mut entry = DictionaryEntry::new("casa");
        entry.definitions.push(Definition::new("Edificio para vivir"));
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("partOfSpeech").is_none());
        assert!(json["definitions"][0].get("sense").is_none());
        assert!(json["definitions"][0].get("references").is_none());
    }
}
