// SPDX-License-Identifier: MPL-2.0
//! The bilingual content of the brief: the node model, the typed page tree,
//! and the embedded-asset loader.

pub mod document;
pub mod loader;
pub mod page;

pub use document::{LocaleText, Node, NodeKind};
pub use page::{
    Card, CardCategory, FaqBlock, FaqEntry, Footer, Hero, Link, Page, PageMeta, Section,
    SectionId, StatBlock,
};
