// SPDX-License-Identifier: MPL-2.0
//! The language manager: active locale, persistence and view translation.
//!
//! A [`LanguageManager`] is an explicit context object. Several may coexist
//! over one shared [`Catalog`], each with its own [`PreferenceStore`].

use crate::config::PreferenceStore;
use crate::i18n::{Catalog, Direction, Locale};
use crate::reason::{self, Reason, HIGHLIGHT_SEPARATOR};
use crate::view::{ElementKind, TranslatableElement, TranslatableView};
use std::rc::Rc;

pub struct LanguageManager {
    catalog: Rc<Catalog>,
    store: Box<dyn PreferenceStore>,
    current: Locale,
}

impl LanguageManager {
    /// Reads the persisted preference; unset or unknown codes mean English.
    pub fn new(catalog: Rc<Catalog>, store: Box<dyn PreferenceStore>) -> Self {
        let current = store
            .load()
            .map(|code| Locale::from_code_or_default(&code))
            .unwrap_or_default();
        Self {
            catalog,
            store,
            current,
        }
    }

    pub fn current(&self) -> Locale {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.current.direction()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Applies the persisted (or default) language to a ready view.
    pub fn initialize<V: TranslatableView>(&mut self, view: &mut V) {
        let code = self.current.code();
        self.set_language(code, view);
    }

    /// Switches to `code` (English if unknown), persists it and re-renders `view`.
    pub fn set_language<V: TranslatableView>(&mut self, code: &str, view: &mut V) -> Locale {
        let locale = self.select(code);
        self.apply(view);
        locale
    }

    /// Switches to `code` (English if unknown) and persists it, without
    /// touching any view.
    pub fn select(&mut self, code: &str) -> Locale {
        let locale = Locale::from_code_or_default(code);
        if locale.code() != code {
            tracing::debug!(requested = code, "unknown locale, using {}", locale);
        }
        self.current = locale;
        if let Err(err) = self.store.store(locale.code()) {
            tracing::warn!("failed to persist language preference: {err}");
        }
        locale
    }

    /// Writes the active language, direction and translations into `view`.
    pub fn apply<V: TranslatableView>(&self, view: &mut V) {
        view.set_language(self.current.code());
        view.set_direction(self.direction());
        self.translate_page(view);
        self.update_language_toggle(view);
    }

    /// Switches between English and Arabic.
    pub fn toggle<V: TranslatableView>(&mut self, view: &mut V) -> Locale {
        let next = self.current.other();
        self.set_language(next.code(), view)
    }

    /// Translates every marked element and the page title. Returns the number
    /// of elements written.
    pub fn translate_page<V: TranslatableView>(&self, view: &mut V) -> usize {
        let mut updated = 0;
        for element in view.marked_elements() {
            let Some(key) = element.translation_key() else {
                continue;
            };
            let translation = self.translate(key);
            if translation.is_empty() {
                continue;
            }
            match element.kind() {
                ElementKind::TextInput => element.set_placeholder(&translation),
                ElementKind::SubmitInput => element.set_value(&translation),
                ElementKind::Button | ElementKind::Link | ElementKind::Other => {
                    element.set_text(&translation)
                }
            }
            updated += 1;
        }

        if let Some(title_key) = view.title_key().filter(|key| !key.is_empty()) {
            let title = self.translate(&title_key);
            view.set_title(&title);
        }

        tracing::debug!(locale = %self.current, updated, "translated page");
        updated
    }

    /// Looks up `key` in the active language, returning `key` itself on a miss.
    pub fn translate(&self, key: &str) -> String {
        self.translate_with(key, &[])
    }

    /// Like [`translate`](Self::translate), filling `{ $name }` placeholders
    /// from `params`.
    pub fn translate_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        self.catalog
            .lookup(self.current, key, params)
            .unwrap_or_else(|| key.to_string())
    }

    /// Localizes backend reason text. English text is returned untouched.
    pub fn translate_reason(&self, text: &str) -> String {
        if self.current == Locale::En {
            return text.to_string();
        }
        reason::rewrite(text, |key, params| self.translate_with(key, params))
    }

    pub fn localize_reason(&self, reason: &Reason) -> String {
        reason.render(|key, params| self.translate_with(key, params))
    }

    /// Localizes each highlight of a backend reason on its own and joins them
    /// back together.
    pub fn localize_reasons(&self, text: &str) -> String {
        Reason::split(text)
            .iter()
            .map(|reason| self.localize_reason(reason))
            .collect::<Vec<_>>()
            .join(HIGHLIGHT_SEPARATOR)
    }

    /// Labels the toggle with the language it switches to.
    fn update_language_toggle<V: TranslatableView>(&self, view: &mut V) {
        let label_key = match self.current {
            Locale::En => "arabic",
            Locale::Ar => "english",
        };
        let label = self.translate(label_key);
        if let Some(toggle) = view.language_toggle() {
            toggle.set_text(&label);
        }
    }
}
