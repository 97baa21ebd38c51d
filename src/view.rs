// SPDX-License-Identifier: MPL-2.0
//! The surface translations are written into.
//!
//! [`TranslatableView`] abstracts the parts of a document the language manager
//! touches: the root language and direction attributes, the title, the
//! elements carrying a translation marker and the language-toggle control.
//! [`Page`] is a plain in-memory implementation.

use crate::i18n::Direction;

/// Id of the optional language-toggle control.
pub const LANGUAGE_TOGGLE_ID: &str = "language-toggle";

/// Decides which property of an element receives its translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementKind {
    /// `<input type="text">`: translation goes to the placeholder.
    TextInput,
    /// `<input type="submit">`: translation goes to the value.
    SubmitInput,
    Button,
    Link,
    #[default]
    Other,
}

impl ElementKind {
    /// Classifies an element from its tag name and, for inputs, its `type`.
    pub fn from_tag(tag: &str, input_type: Option<&str>) -> Self {
        if tag.eq_ignore_ascii_case("input") {
            match input_type {
                Some(t) if t.eq_ignore_ascii_case("text") => return ElementKind::TextInput,
                Some(t) if t.eq_ignore_ascii_case("submit") => return ElementKind::SubmitInput,
                _ => {}
            }
        }
        if tag.eq_ignore_ascii_case("button") {
            ElementKind::Button
        } else if tag.eq_ignore_ascii_case("a") {
            ElementKind::Link
        } else {
            ElementKind::Other
        }
    }
}

pub trait TranslatableElement {
    fn kind(&self) -> ElementKind;

    /// Value of the translation marker, if the element carries one.
    fn translation_key(&self) -> Option<&str>;

    fn set_text(&mut self, text: &str);

    fn set_placeholder(&mut self, text: &str);

    fn set_value(&mut self, text: &str);
}

pub trait TranslatableView {
    type Element: TranslatableElement;

    /// Sets the root `lang` attribute.
    fn set_language(&mut self, code: &str);

    /// Sets the root `dir` attribute.
    fn set_direction(&mut self, direction: Direction);

    fn set_title(&mut self, title: &str);

    /// Key from the title marker, if an element carries one.
    fn title_key(&self) -> Option<String>;

    /// Every element carrying a translation marker, in document order.
    fn marked_elements(&mut self) -> Vec<&mut Self::Element>;

    /// The element with id [`LANGUAGE_TOGGLE_ID`], if present.
    fn language_toggle(&mut self) -> Option<&mut Self::Element>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub id: Option<String>,
    pub kind: ElementKind,
    pub translate_key: Option<String>,
    pub text: String,
    pub placeholder: Option<String>,
    pub value: Option<String>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.translate_key = Some(key.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

impl TranslatableElement for Element {
    fn kind(&self) -> ElementKind {
        self.kind
    }

    fn translation_key(&self) -> Option<&str> {
        self.translate_key.as_deref()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_placeholder(&mut self, text: &str) {
        self.placeholder = Some(text.to_string());
    }

    fn set_value(&mut self, text: &str) {
        self.value = Some(text.to_string());
    }
}

/// In-memory document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub lang: Option<String>,
    pub dir: Option<Direction>,
    pub title: String,
    pub title_key: Option<String>,
    elements: Vec<Element>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title_key(mut self, key: impl Into<String>) -> Self {
        self.title_key = Some(key.into());
        self
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.id.as_deref() == Some(id))
    }
}

impl TranslatableView for Page {
    type Element = Element;

    fn set_language(&mut self, code: &str) {
        self.lang = Some(code.to_string());
    }

    fn set_direction(&mut self, direction: Direction) {
        self.dir = Some(direction);
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn title_key(&self) -> Option<String> {
        self.title_key.clone()
    }

    fn marked_elements(&mut self) -> Vec<&mut Element> {
        self.elements
            .iter_mut()
            .filter(|el| el.translate_key.is_some())
            .collect()
    }

    fn language_toggle(&mut self) -> Option<&mut Element> {
        self.elements
            .iter_mut()
            .find(|el| el.id.as_deref() == Some(LANGUAGE_TOGGLE_ID))
    }
}
