// SPDX-License-Identifier: MPL-2.0
//! Parses the embedded bilingual page description into the typed tree.
//!
//! The asset is TOML authored by the content team; it ships inside the
//! binary, so a parse failure is a packaging defect and surfaces as
//! [`Error::Content`] instead of being tolerated.

use super::document::{LocaleText, Node, NodeKind};
use super::page::{
    Card, CardCategory, FaqBlock, FaqEntry, Footer, Hero, Link, Page, PageMeta, Section,
    SectionId, StatBlock,
};
use crate::error::{Error, Result};
use crate::i18n::Locale;
use rust_embed::RustEmbed;
use serde::Deserialize;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Asset;

const PAGE_FILE: &str = "page.toml";

/// Loads the embedded page description.
pub fn load() -> Result<Page> {
    let file = Asset::get(PAGE_FILE)
        .ok_or_else(|| Error::Content(format!("missing embedded asset: {}", PAGE_FILE)))?;
    let content = std::str::from_utf8(file.data.as_ref())
        .map_err(|err| Error::Content(format!("{}: {}", PAGE_FILE, err)))?;
    parse(content)
}

/// Parses a page description from TOML text.
pub fn parse(content: &str) -> Result<Page> {
    let raw: RawPage = toml::from_str(content).map_err(|err| Error::Content(err.to_string()))?;
    Ok(build_page(raw))
}

// Raw mirror of the TOML schema. Element kinds are not authored; they follow
// from where a text pair sits in the page.

#[derive(Debug, Deserialize)]
struct RawPage {
    meta: RawMeta,
    #[serde(default, rename = "nav")]
    nav_links: Vec<RawLink>,
    hero: RawHero,
    #[serde(default, rename = "section")]
    sections: Vec<RawSection>,
    faq: RawFaq,
    footer: RawFooter,
}

#[derive(Debug, Deserialize)]
struct RawMeta {
    brand: String,
    window_title: LocaleText,
}

#[derive(Debug, Deserialize)]
struct RawLink {
    label: LocaleText,
    #[serde(default)]
    target: Option<SectionId>,
}

#[derive(Debug, Deserialize)]
struct RawHero {
    title: LocaleText,
    subtitle: LocaleText,
    primary_action: RawLink,
    secondary_action: RawLink,
}

#[derive(Debug, Deserialize)]
struct RawSection {
    id: SectionId,
    title: LocaleText,
    #[serde(default)]
    intro: Option<LocaleText>,
    #[serde(default, rename = "card")]
    cards: Vec<RawCard>,
    #[serde(default)]
    stat: Option<RawStat>,
}

#[derive(Debug, Deserialize)]
struct RawCard {
    category: CardCategory,
    title: LocaleText,
    body: LocaleText,
}

#[derive(Debug, Deserialize)]
struct RawStat {
    prefix: String,
    value: u32,
    suffix: String,
    label: LocaleText,
}

#[derive(Debug, Deserialize)]
struct RawFaq {
    title: LocaleText,
    #[serde(default, rename = "entry")]
    entries: Vec<RawFaqEntry>,
}

#[derive(Debug, Deserialize)]
struct RawFaqEntry {
    question: LocaleText,
    answer: RawAnswer,
}

/// An answer is one paragraph or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAnswer {
    One(LocaleText),
    Many(Vec<LocaleText>),
}

#[derive(Debug, Deserialize)]
struct RawFooter {
    tagline: LocaleText,
    #[serde(default, rename = "link")]
    links: Vec<RawLink>,
    copyright: LocaleText,
}

fn build_page(raw: RawPage) -> Page {
    Page {
        lang: Locale::DEFAULT,
        meta: PageMeta {
            brand: Node::fixed(NodeKind::Span, raw.meta.brand),
            window_title: Node::bilingual(NodeKind::Span, raw.meta.window_title),
        },
        nav_links: raw.nav_links.into_iter().map(build_link).collect(),
        hero: Hero {
            title: Node::bilingual(NodeKind::Heading1, raw.hero.title),
            subtitle: Node::bilingual(NodeKind::Paragraph, raw.hero.subtitle),
            primary_action: build_link(raw.hero.primary_action),
            secondary_action: build_link(raw.hero.secondary_action),
        },
        sections: raw.sections.into_iter().map(build_section).collect(),
        faq: FaqBlock {
            title: Node::bilingual(NodeKind::Heading2, raw.faq.title),
            entries: raw.faq.entries.into_iter().map(build_faq_entry).collect(),
        },
        footer: Footer {
            tagline: Node::bilingual(NodeKind::Paragraph, raw.footer.tagline),
            links: raw.footer.links.into_iter().map(build_link).collect(),
            copyright: Node::bilingual(NodeKind::Paragraph, raw.footer.copyright),
        },
    }
}

fn build_link(raw: RawLink) -> Link {
    Link {
        label: Node::bilingual(NodeKind::Span, raw.label),
        target: raw.target,
    }
}

fn build_section(raw: RawSection) -> Section {
    Section {
        id: raw.id,
        title: Node::bilingual(NodeKind::Heading2, raw.title),
        intro: raw
            .intro
            .map(|text| Node::bilingual(NodeKind::Paragraph, text)),
        cards: raw.cards.into_iter().map(build_card).collect(),
        stat: raw.stat.map(|stat| StatBlock {
            prefix: stat.prefix,
            value: stat.value,
            suffix: stat.suffix,
            label: Node::bilingual(NodeKind::Paragraph, stat.label),
        }),
    }
}

fn build_card(raw: RawCard) -> Card {
    Card {
        category: raw.category,
        title: Node::bilingual(NodeKind::Heading3, raw.title),
        body: Node::bilingual(NodeKind::Paragraph, raw.body),
    }
}

fn build_faq_entry(raw: RawFaqEntry) -> FaqEntry {
    let answer = match raw.answer {
        RawAnswer::One(text) => Node::bilingual(NodeKind::Paragraph, text),
        RawAnswer::Many(paragraphs) => Node::fixed(NodeKind::Container, "").with_children(
            paragraphs
                .into_iter()
                .map(|text| Node::bilingual(NodeKind::Paragraph, text))
                .collect(),
        ),
    };
    FaqEntry {
        question: Node::bilingual(NodeKind::Span, raw.question),
        answer,
    }
}
