// SPDX-License-Identifier: MPL-2.0
use super::Locale;
use crate::error::{Error, Result};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use fluent_syntax::ast;
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

struct LocaleTable {
    bundle: FluentBundle<FluentResource>,
    keys: Vec<String>,
}

/// Immutable translation table for every supported locale.
pub struct Catalog {
    tables: HashMap<Locale, LocaleTable>,
}

impl Catalog {
    /// Loads the `<code>.ftl` files embedded in the binary. Every supported
    /// locale must be present.
    pub fn embedded() -> Result<Self> {
        let mut sources = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename.strip_suffix(".ftl").and_then(Locale::from_code) else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                sources.push((locale, String::from_utf8_lossy(content.data.as_ref()).into_owned()));
            }
        }

        for locale in Locale::ALL {
            if !sources.iter().any(|(loaded, _)| *loaded == locale) {
                return Err(Error::Resource(format!("missing translations for {}", locale)));
            }
        }

        Self::from_owned_sources(sources)
    }

    /// Builds a catalog from Fluent sources, one per locale.
    pub fn from_sources(sources: &[(Locale, &str)]) -> Result<Self> {
        Self::from_owned_sources(
            sources
                .iter()
                .map(|(locale, source)| (*locale, source.to_string()))
                .collect(),
        )
    }

    fn from_owned_sources(sources: Vec<(Locale, String)>) -> Result<Self> {
        let mut tables = HashMap::new();
        for (locale, source) in sources {
            let (bundle, keys) = build_bundle(locale, source)?;
            tables.insert(locale, LocaleTable { bundle, keys });
        }
        Ok(Self { tables })
    }

    pub fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self.tables.keys().copied().collect();
        locales.sort();
        locales
    }

    /// Message ids defined for `locale`, in file order.
    pub fn keys(&self, locale: Locale) -> Vec<String> {
        self.tables
            .get(&locale)
            .map(|table| table.keys.clone())
            .unwrap_or_default()
    }

    /// Resolves `key` in `locale`.
    ///
    /// `key` is split on `.`: the first segment names a message, an optional
    /// second segment names one of its attributes. Any missing segment, a
    /// deeper path, or an empty result yields `None`. Placeholders are filled
    /// from `params`; a placeholder without a matching param is rendered
    /// literally as `{name}`.
    pub fn lookup(&self, locale: Locale, key: &str, params: &[(&str, &str)]) -> Option<String> {
        let bundle = &self.tables.get(&locale)?.bundle;

        let mut segments = key.split('.');
        let message = bundle.get_message(segments.next()?)?;
        let pattern = match segments.next() {
            None => message.value()?,
            Some(attribute) => message.get_attribute(attribute)?.value(),
        };
        if segments.next().is_some() {
            return None;
        }

        let mut args = FluentArgs::new();
        for (name, value) in params {
            args.set(*name, *value);
        }
        let mut variables = Vec::new();
        pattern_variables(pattern, &mut variables);
        for name in variables {
            if args.get(name).is_none() {
                args.set(name, format!("{{{name}}}"));
            }
        }

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, Some(&args), &mut errors);
        if !errors.is_empty() {
            tracing::debug!(key, locale = %locale, ?errors, "formatting errors");
        }
        if value.is_empty() {
            None
        } else {
            Some(value.into_owned())
        }
    }
}

fn build_bundle(locale: Locale, source: String) -> Result<(FluentBundle<FluentResource>, Vec<String>)> {
    let resource = FluentResource::try_new(source)
        .map_err(|(_, errors)| Error::Resource(format!("{}: {:?}", locale, errors)))?;
    let keys = resource
        .entries()
        .filter_map(|entry| match entry {
            ast::Entry::Message(message) => Some(message.id.name.to_string()),
            _ => None,
        })
        .collect();
    let mut bundle = FluentBundle::new(vec![locale.language_id()]);
    // Substituted values are plain text; no bidi isolation marks around them.
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| Error::Resource(format!("{}: {:?}", locale, errors)))?;
    Ok((bundle, keys))
}

/// Collects the `$name` variables referenced anywhere in `pattern`.
fn pattern_variables<'p>(pattern: &ast::Pattern<&'p str>, names: &mut Vec<&'p str>) {
    for element in &pattern.elements {
        if let ast::PatternElement::Placeable { expression } = element {
            expression_variables(expression, names);
        }
    }
}

fn expression_variables<'p>(expression: &ast::Expression<&'p str>, names: &mut Vec<&'p str>) {
    match expression {
        ast::Expression::Inline(inline) => inline_variables(inline, names),
        ast::Expression::Select { selector, variants } => {
            inline_variables(selector, names);
            for variant in variants {
                pattern_variables(&variant.value, names);
            }
        }
    }
}

fn inline_variables<'p>(inline: &ast::InlineExpression<&'p str>, names: &mut Vec<&'p str>) {
    match inline {
        ast::InlineExpression::VariableReference { id } => {
            if !names.contains(&id.name) {
                names.push(id.name);
            }
        }
        ast::InlineExpression::Placeable { expression } => expression_variables(expression, names),
        _ => {}
    }
}
