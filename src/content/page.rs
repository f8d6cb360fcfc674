// SPDX-License-Identifier: MPL-2.0
//! The typed content tree of the brief.
//!
//! The page is a fixed vertical arrangement: hero, the card sections, the
//! FAQ, and the footer. Every reader-visible text field is a [`Node`], so a
//! language switch is a single walk over the tree.

use super::document::Node;
use crate::i18n::Locale;
use serde::Deserialize;

/// Stable identifiers for the blocks a link can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Hero,
    Risks,
    Solution,
    Credentials,
    Market,
    Faq,
}

/// Selects a card's accent styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardCategory {
    Risk,
    Solution,
    Credential,
    MarketFeature,
}

/// An in-page link: nav entries, hero actions, and footer links all share
/// this shape. A link without a target renders but does nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub label: Node,
    pub target: Option<SectionId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub brand: Node,
    pub window_title: Node,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    pub title: Node,
    pub subtitle: Node,
    pub primary_action: Link,
    pub secondary_action: Link,
}

/// The animated market-size figure. Mid-animation it renders as
/// `prefix + floor(value) + suffix`; on completion as the exact final text.
#[derive(Debug, Clone, PartialEq)]
pub struct StatBlock {
    pub prefix: String,
    pub value: u32,
    pub suffix: String,
    pub label: Node,
}

impl StatBlock {
    /// The text shown once the counter has finished.
    pub fn final_text(&self) -> String {
        format!("{}{}{}", self.prefix, self.value, self.suffix)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub category: CardCategory,
    pub title: Node,
    pub body: Node,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub title: Node,
    pub intro: Option<Node>,
    pub cards: Vec<Card>,
    pub stat: Option<StatBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaqEntry {
    pub question: Node,
    pub answer: Node,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaqBlock {
    pub title: Node,
    pub entries: Vec<FaqEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Footer {
    pub tagline: Node,
    pub links: Vec<Link>,
    pub copyright: Node,
}

/// The whole brief, plus its currently displayed language.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub lang: Locale,
    pub meta: PageMeta,
    pub nav_links: Vec<Link>,
    pub hero: Hero,
    pub sections: Vec<Section>,
    pub faq: FaqBlock,
    pub footer: Footer,
}

impl Page {
    /// Rewrites every translatable node for `locale` and records it as the
    /// page's displayed language.
    pub fn switch_locale(&mut self, locale: Locale) {
        self.lang = locale;
        self.for_each_node_mut(&mut |node| node.apply_locale(locale));
    }

    /// Visits every text node on the page, in display order.
    pub fn for_each_node_mut(&mut self, f: &mut impl FnMut(&mut Node)) {
        f(&mut self.meta.brand);
        f(&mut self.meta.window_title);
        for link in &mut self.nav_links {
            f(&mut link.label);
        }
        f(&mut self.hero.title);
        f(&mut self.hero.subtitle);
        f(&mut self.hero.primary_action.label);
        f(&mut self.hero.secondary_action.label);
        for section in &mut self.sections {
            f(&mut section.title);
            if let Some(intro) = &mut section.intro {
                f(intro);
            }
            for card in &mut section.cards {
                f(&mut card.title);
                f(&mut card.body);
            }
            if let Some(stat) = &mut section.stat {
                f(&mut stat.label);
            }
        }
        f(&mut self.faq.title);
        for entry in &mut self.faq.entries {
            f(&mut entry.question);
            f(&mut entry.answer);
        }
        f(&mut self.footer.tagline);
        for link in &mut self.footer.links {
            f(&mut link.label);
        }
        f(&mut self.footer.copyright);
    }

    pub fn window_title(&self) -> &str {
        &self.meta.window_title.rendered
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Total number of animated cards, across all sections in display order.
    pub fn card_count(&self) -> usize {
        self.sections.iter().map(|section| section.cards.len()).sum()
    }

    pub fn has_nav_links(&self) -> bool {
        !self.nav_links.is_empty()
    }

    /// The stat block and the section it sits in, if the page has one.
    pub fn stat(&self) -> Option<(SectionId, &StatBlock)> {
        self.sections
            .iter()
            .find_map(|section| section.stat.as_ref().map(|stat| (section.id, stat)))
    }
}

/// Shared fixture for tests across the crate.
#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::content::document::{LocaleText, NodeKind};

    pub(crate) fn text_node(kind: NodeKind, es: &str, en: &str) -> Node {
        Node::bilingual(kind, LocaleText::new(es, en))
    }

    pub(crate) fn sample_page() -> Page {
        Page {
            lang: Locale::Es,
            meta: PageMeta {
                brand: Node::fixed(NodeKind::Span, "CBHDC"),
                window_title: text_node(NodeKind::Span, "Cumplimiento", "Compliance"),
            },
            nav_links: vec![Link {
                label: text_node(NodeKind::Span, "Riesgos", "Risks"),
                target: Some(SectionId::Risks),
            }],
            hero: Hero {
                title: text_node(NodeKind::Heading1, "Título", "Title"),
                subtitle: text_node(NodeKind::Paragraph, "Subtítulo", "Subtitle"),
                primary_action: Link {
                    label: text_node(NodeKind::Span, "Evaluar", "Assess"),
                    target: Some(SectionId::Solution),
                },
                secondary_action: Link {
                    label: text_node(NodeKind::Span, "Saber más", "Learn more"),
                    target: None,
                },
            },
            sections: vec![
                Section {
                    id: SectionId::Risks,
                    title: text_node(NodeKind::Heading2, "Riesgos", "Risks"),
                    intro: Some(text_node(NodeKind::Paragraph, "Intro", "Intro")),
                    cards: vec![
                        Card {
                            category: CardCategory::Risk,
                            title: text_node(NodeKind::Heading3, "Multas", "Fines"),
                            body: text_node(NodeKind::Paragraph, "Cuerpo", "Body"),
                        },
                        Card {
                            category: CardCategory::Risk,
                            title: text_node(NodeKind::Heading3, "Bloqueos", "Blocks"),
                            body: text_node(NodeKind::Paragraph, "Cuerpo", "Body"),
                        },
                    ],
                    stat: None,
                },
                Section {
                    id: SectionId::Market,
                    title: text_node(NodeKind::Heading2, "Mercado", "Market"),
                    intro: None,
                    cards: vec![Card {
                        category: CardCategory::MarketFeature,
                        title: text_node(NodeKind::Heading3, "Crecimiento", "Growth"),
                        body: text_node(NodeKind::Paragraph, "Cuerpo", "Body"),
                    }],
                    stat: Some(StatBlock {
                        prefix: "$".to_string(),
                        value: 70,
                        suffix: "M".to_string(),
                        label: text_node(NodeKind::Paragraph, "Mercado anual", "Annual market"),
                    }),
                },
            ],
            faq: FaqBlock {
                title: text_node(NodeKind::Heading2, "Preguntas", "Questions"),
                entries: vec![FaqEntry {
                    question: text_node(NodeKind::Span, "¿Cómo?", "How?"),
                    answer: text_node(NodeKind::Paragraph, "Así", "Like this"),
                }],
            },
            footer: Footer {
                tagline: text_node(NodeKind::Paragraph, "Lema", "Tagline"),
                links: vec![Link {
                    label: text_node(NodeKind::Span, "Aviso legal", "Legal notice"),
                    target: None,
                }],
                copyright: Node::fixed(NodeKind::Span, "© 2024 CBHDC"),
            },
        }
    }
}
