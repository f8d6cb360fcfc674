// SPDX-License-Identifier: MPL-2.0
//! Bilingual document nodes.
//!
//! Every piece of reader-visible text is a [`Node`]: a block or inline element
//! that may carry the same text in both languages. Switching the language
//! rewrites eligible nodes in place; nodes without a usable payload for the
//! requested language are left untouched.

use crate::i18n::Locale;
use serde::Deserialize;

/// The element kinds a node can render as. All but `Container` are
/// leaf-content kinds: their text is replaced wholesale on a language switch
/// even when they have children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Paragraph,
    ListItem,
    Span,
    Container,
}

impl NodeKind {
    pub fn is_leaf_content(self) -> bool {
        !matches!(self, NodeKind::Container)
    }
}

/// The paired text payloads of a translatable node. A node is only eligible
/// for rewriting when both payloads are present; the Spanish text doubles as
/// the authored content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocaleText {
    pub es: String,
    #[serde(default)]
    pub en: Option<String>,
}

impl LocaleText {
    pub fn new(es: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            es: es.into(),
            en: Some(en.into()),
        }
    }

    pub fn untranslated(es: impl Into<String>) -> Self {
        Self {
            es: es.into(),
            en: None,
        }
    }

    /// Returns the payload for `locale`, or `None` when the node is not
    /// eligible: the pair is incomplete or the requested text is empty.
    pub fn payload(&self, locale: Locale) -> Option<&str> {
        let en = self.en.as_deref()?;
        let text = match locale {
            Locale::Es => self.es.as_str(),
            Locale::En => en,
        };
        (!text.is_empty()).then_some(text)
    }
}

/// One document element: rendered text plus the bilingual pair it was built
/// from, and any child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub text: Option<LocaleText>,
    /// The text currently shown. Starts as the authored Spanish payload.
    pub rendered: String,
    pub children: Vec<Node>,
}

impl Node {
    /// A translatable node. The authored Spanish text is rendered initially.
    pub fn bilingual(kind: NodeKind, text: LocaleText) -> Self {
        let rendered = text.es.clone();
        Self {
            kind,
            text: Some(text),
            rendered,
            children: Vec::new(),
        }
    }

    /// A node whose text never changes with the language.
    pub fn fixed(kind: NodeKind, rendered: impl Into<String>) -> Self {
        Self {
            kind,
            text: None,
            rendered: rendered.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Rewrites this node and its subtree for `locale`.
    ///
    /// A node with a usable payload is rewritten when it is a leaf-content
    /// kind or has no children; the rewrite replaces the whole subtree.
    /// A container with children keeps its structure and the switch recurses
    /// into the children instead.
    pub fn apply_locale(&mut self, locale: Locale) {
        if let Some(text) = &self.text {
            if let Some(payload) = text.payload(locale) {
                if self.kind.is_leaf_content() || self.children.is_empty() {
                    self.rendered = payload.to_string();
                    self.children.clear();
                    return;
                }
            }
        }
        for child in &mut self.children {
            child.apply_locale(locale);
        }
    }
}
