// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bilingual text toggling.
//!
//! Translations live inline in the markup: every translatable element
//! carries one `data-<code>` attribute per supported [`Language`]. The
//! [`LanguageSwitcher`] rewrites their text and keeps the selector controls'
//! active marker in sync with the current language.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::backend::{Document, Element};
use crate::config::PageConfig;
use crate::error::SetupError;
use crate::trace::Tracer;

/// A supported page language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// Simplified Chinese, the primary locale.
    #[default]
    Zh,
    /// English.
    En,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Self; 2] = [Self::Zh, Self::En];

    /// Short code used in attribute names and control ids.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    /// Value written to the document's `lang` attribute.
    #[must_use]
    pub const fn locale(self) -> &'static str {
        match self {
            Self::Zh => "zh-CN",
            Self::En => "en",
        }
    }

    /// Attribute holding this language's text on a translatable element.
    #[must_use]
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Zh => "data-zh",
            Self::En => "data-en",
        }
    }

    /// Parses an exact language code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Selector matching elements that carry text for every supported language.
#[must_use]
pub fn translatable_selector() -> String {
    Language::ALL
        .iter()
        .map(|lang| format!("[{}]", lang.attribute()))
        .collect()
}

/// Elements governed by a [`LanguageSwitcher`].
#[derive(Clone, Debug)]
pub struct LanguageParts<E> {
    /// One selector control per language, in [`Language::ALL`] order.
    pub selectors: Vec<(Language, E)>,
    /// Every control sharing the language-control class.
    pub controls: Vec<E>,
    /// Elements carrying per-language text.
    pub translatables: Vec<E>,
    /// The document element, whose `lang` attribute tracks the language.
    pub root: Option<E>,
}

impl<E: Element> LanguageParts<E> {
    /// Collects the language controls and translatable elements.
    ///
    /// Fails if any per-language selector control is missing.
    pub fn discover<D>(doc: &D, config: &PageConfig) -> Result<Self, SetupError>
    where
        D: Document<Element = E>,
    {
        let prefix = config.selectors.language_control_id_prefix;
        let mut selectors = Vec::with_capacity(Language::ALL.len());
        for lang in Language::ALL {
            let id = format!("{prefix}{}", lang.code());
            let el = doc
                .element_by_id(&id)
                .ok_or_else(|| SetupError::MissingElement {
                    role: "language control",
                    selector: format!("#{id}"),
                })?;
            selectors.push((lang, el));
        }
        Ok(Self {
            selectors,
            controls: doc.query_all(config.selectors.language_controls),
            translatables: doc.query_all(&translatable_selector()),
            root: doc.root(),
        })
    }
}

/// Tracks the active language and renders it into the document.
#[derive(Debug)]
pub struct LanguageSwitcher<E> {
    current: Language,
    parts: LanguageParts<E>,
    active_class: &'static str,
    tracer: Tracer,
}

impl<E: Element> LanguageSwitcher<E> {
    /// Creates a switcher and immediately applies `default`.
    #[must_use]
    pub fn new(
        parts: LanguageParts<E>,
        default: Language,
        active_class: &'static str,
        tracer: Tracer,
    ) -> Self {
        let mut switcher = Self {
            current: default,
            parts,
            active_class,
            tracer,
        };
        switcher.switch_language(default);
        switcher
    }

    /// Returns the active language.
    #[must_use]
    pub fn current(&self) -> Language {
        self.current
    }

    /// Returns the per-language selector controls.
    pub fn selectors(&self) -> impl Iterator<Item = (Language, &E)> {
        self.parts.selectors.iter().map(|(lang, el)| (*lang, el))
    }

    /// Makes `language` active.
    ///
    /// Exactly one selector control carries the active marker afterwards,
    /// the one whose language matches. Every translatable element is
    /// re-rendered and the document `lang` attribute is updated.
    pub fn switch_language(&mut self, language: Language) {
        self.current = language;

        let active = self.active_class;
        for control in &self.parts.controls {
            control.remove_class(active);
        }
        for (lang, control) in &self.parts.selectors {
            if *lang == language {
                control.add_class(active);
            } else {
                control.remove_class(active);
            }
        }

        let updated = self.update_content();

        if let Some(root) = &self.parts.root {
            root.set_attribute("lang", language.locale());
        }
        self.tracer.language(language, updated);
    }

    /// Rewrites every translatable element with its text for the active
    /// language, returning how many were rewritten.
    ///
    /// Elements with no text (or empty text) for the language are left
    /// unchanged.
    pub fn update_content(&self) -> usize {
        let attr = self.current.attribute();
        let mut updated = 0;
        for el in &self.parts.translatables {
            if let Some(text) = el.attribute(attr).filter(|t| !t.is_empty()) {
                el.set_text(&text);
                updated += 1;
            }
        }
        updated
    }
}
