use scraper::ElementRef;
use unicode_normalization::UnicodeNormalization;

use crate::markers::{self, Marker};
use crate::model::{Reference, ReferenceKind};

/// Collect every classifiable cross-reference block below `node`.
///
/// Blocks whose label cannot be classified, or that carry no linked words,
/// are dropped.
pub fn classify_references(node: ElementRef<'_>) -> Vec<Reference> {
    markers::find_all(node, Marker::ReferencesBlock)
        .filter_map(|block| {
            let Some(kind) = classify_block(block) else {
                tracing::debug!("Dropping unclassified reference block");
                return None;
            };

            let words: Vec<String> = markers::find_all(block, Marker::ReferenceWord)
                .map(markers::text_of)
                .filter(|word| !word.is_empty())
                .collect();

            if words.is_empty() {
                tracing::debug!(?kind, "Dropping reference block without words");
                return None;
            }

            Some(Reference { kind, words })
        })
        .collect()
}

/// First classifiable reference below `node`
pub fn first_reference(node: ElementRef<'_>) -> Option<Reference> {
    classify_references(node).into_iter().next()
}

fn classify_block(block: ElementRef<'_>) -> Option<ReferenceKind> {
    let label = normalize_label(&markers::text_without_links(block));
    if let Some(kind) = kind_from_prefix(&label) {
        return Some(kind);
    }

    let type_text = markers::find_first(block, Marker::ReferenceType)
        .map(|el| normalize_label(&markers::text_of(el)))?;
    kind_from_substring(&type_text)
}

/// Classify a label by the literal label it starts with
pub fn kind_from_prefix(label: &str) -> Option<ReferenceKind> {
    ReferenceKind::ALL
        .into_iter()
        .find(|kind| label.starts_with(kind.label()))
}

/// Classify a label by the literal label it contains anywhere
pub fn kind_from_substring(label: &str) -> Option<ReferenceKind> {
    ReferenceKind::ALL
        .into_iter()
        .find(|kind| label.contains(kind.label()))
}

// Upstream may ship decomposed accents ("O" + U+0301)
fn normalize_label(text: &str) -> String {
    text.trim().nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn references_in(html: &str) -> Vec<Reference> {
        let doc = Html::parse_fragment(html);
        classify_references(doc.root_element())
    }

    #[test]
    fn test_prefix_classification() {
        assert_eq!(kind_from_prefix("SINÓNIMOS:"), Some(ReferenceKind::Synonym));
        assert_eq!(kind_from_prefix("SINÓNIMO:"), Some(ReferenceKind::Synonym));
        assert_eq!(kind_from_prefix("VÉXASE"), Some(ReferenceKind::See));
        assert_eq!(kind_from_prefix("CONFRÓNTESE"), Some(ReferenceKind::Compare));
        assert_eq!(kind_from_prefix("véxase"), None);
        assert_eq!(kind_from_prefix("Ver tamén VÉXASE"), None);
    }

    #[test]
    fn test_substring_classification_follows_priority() {
        assert_eq!(kind_from_substring("(CONFRÓNTESE / VÉXASE)"), Some(ReferenceKind::See));
        assert_eq!(kind_from_substring("VÉXASE, SINÓNIMO"), Some(ReferenceKind::Synonym));
        assert_eq!(kind_from_substring("(confróntese)"), None);
    }

    #[test]
    fn test_synonym_block_collects_linked_words() {
        let refs = references_in(
            r#"<div class="References">SINÓNIMOS: <a class="References__Word">edificio</a>,
               <a class="References__Word">construción</a></div>"#,
        );
        assert_eq!(
            refs,
            vec![Reference {
                kind: ReferenceKind::Synonym,
                words: vec!["edificio".to_string(), "construción".to_string()],
            }]
        );
    }

    #[test]
    fn test_link_text_does_not_affect_label() {
        // The label is empty once links are removed, so the word cannot classify it
        let refs = references_in(
            r#"<div class="References"><a class="References__Word">VÉXASE</a></div>"#,
        );
        assert!(refs.is_empty());
    }

    #[test]
    fn test_falls_back_to_type_marker() {
        let refs = references_in(
            r#"<div class="References"><span>→</span>
               <span class="References__Type">(CONFRÓNTESE)</span>
               <a class="References__Word">fogar</a></div>"#,
        );
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].kind, ReferenceKind::Compare);
        assert_eq!(refs[0].words, vec!["fogar"]);
    }

    #[test]
    fn test_decomposed_accents_classify() {
        let refs = references_in(
            "<div class=\"References\">SINO\u{301}NIMOS: <a class=\"References__Word\">lar</a></div>",
        );
        assert_eq!(refs[0].kind, ReferenceKind::Synonym);
    }

    #[test]
    fn test_unclassified_and_wordless_blocks_dropped() {
        let refs = references_in(
            r#"<div class="References">OUTROS: <a class="References__Word">x</a></div>
               <div class="References">VÉXASE</div>
               <div class="References">VÉXASE <a class="References__Word">vivenda</a></div>"#,
        );
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].kind, ReferenceKind::See);
        assert_eq!(refs[0].words, vec!["vivenda"]);
    }
}
