//! Structural markers carried by the upstream entry markup.
//!
//! Every class name the extractor depends on lives in [`Marker::class`], so a
//! renamed class upstream is a one-line change here.

use scraper::ElementRef;
use scraper::node::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    PrimaryEntry,
    Headword,
    PartOfSpeech,
    Sense,
    SenseNumber,
    DefinitionText,
    DefinitionBlock,
    ExampleText,
    ExampleBlock,
    ExpressionBlock,
    ExpressionText,
    SubEntry,
    ReferencesBlock,
    ReferenceType,
    ReferenceWord,
}

impl Marker {
    pub fn class(&self) -> &'static str {
        match self {
            Marker::PrimaryEntry => "Lemma",
            Marker::Headword => "Lemma__LemmaSign",
            Marker::PartOfSpeech => "Subentry__Part_of_speech",
            Marker::Sense => "Sense",
            Marker::SenseNumber => "Sense__SenseNumber",
            Marker::DefinitionText => "Definition__Definition",
            Marker::DefinitionBlock => "Definition",
            Marker::ExampleText => "Example__Example",
            Marker::ExampleBlock => "Example",
            Marker::ExpressionBlock => "Fraseoloxia",
            Marker::ExpressionText => "Fraseoloxia__Expression",
            Marker::SubEntry => "Subentry",
            Marker::ReferencesBlock => "References",
            Marker::ReferenceType => "References__Type",
            Marker::ReferenceWord => "References__Word",
        }
    }

    /// Element the marker must sit on, if it is restricted to one
    fn tag(&self) -> Option<&'static str> {
        match self {
            Marker::ReferenceWord => Some("a"),
            _ => None,
        }
    }

    pub fn matches(&self, element: &ElementRef<'_>) -> bool {
        let value = element.value();
        if let Some(tag) = self.tag() {
            if !value.name().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        value.classes().any(|class| class == self.class())
    }
}

/// All elements strictly below `root`, in document order
pub fn descendants<'a>(root: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    root.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// Elements strictly below `root` carrying `marker`, in document order
pub fn find_all<'a>(root: ElementRef<'a>, marker: Marker) -> impl Iterator<Item = ElementRef<'a>> {
    descendants(root).filter(move |el| marker.matches(el))
}

/// First element strictly below `root` carrying `marker`
pub fn find_first<'a>(root: ElementRef<'a>, marker: Marker) -> Option<ElementRef<'a>> {
    find_all(root, marker).next()
}

/// Direct element children of `parent` carrying `marker`
pub fn children<'a>(parent: ElementRef<'a>, marker: Marker) -> impl Iterator<Item = ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |el| marker.matches(el))
}

/// Text content of `element` with whitespace runs collapsed and ends trimmed
pub fn text_of(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Trimmed text of the first `marker` element below `root`, if non-empty
pub fn marker_text(root: ElementRef<'_>, marker: Marker) -> Option<String> {
    find_first(root, marker)
        .map(text_of)
        .filter(|text| !text.is_empty())
}

/// Text content of `element` ignoring anything inside `<a>` elements
pub fn text_without_links(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    push_text_without_links(element, &mut raw);
    collapse_whitespace(&raw)
}

fn push_text_without_links(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if el.name().eq_ignore_ascii_case("a") => {}
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    push_text_without_links(child, out);
                }
            }
            _ => {}
        }
    }
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
