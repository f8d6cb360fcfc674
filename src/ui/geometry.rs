// SPDX-License-Identifier: MPL-2.0
//! Vertical layout model of the page.
//!
//! Scroll targets, reveal triggers, and the stat trigger are all questions
//! about where blocks sit relative to the scroll viewport. The view lays
//! blocks out from the sizing tokens, so the same arithmetic here answers
//! those questions without touching any widget state, and tests can drive it
//! with synthetic window sizes and offsets.

use crate::content::{Page, SectionId};
use crate::ui::design_tokens::{motion, sizing};
use iced::Size;

/// A vertical block: its top edge in page coordinates and its height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub height: f32,
}

impl Span {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Fraction of this span lying inside `[view_top, view_bottom]`.
    pub fn visible_fraction(&self, view_top: f32, view_bottom: f32) -> f32 {
        if self.height <= 0.0 || view_bottom <= view_top {
            return 0.0;
        }
        let overlap = self.bottom().min(view_bottom) - self.top.max(view_top);
        (overlap / self.height).clamp(0.0, 1.0)
    }
}

/// One animated card's place on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardGeometry {
    pub section: SectionId,
    /// Position within its section's grid; drives the reveal stagger.
    pub ordinal: usize,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
struct SectionSpan {
    id: SectionId,
    span: Span,
}

/// The computed layout for one window size and FAQ expansion state.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    window: Size,
    hero: Span,
    sections: Vec<SectionSpan>,
    cards: Vec<CardGeometry>,
    stat: Option<Span>,
    faq: Span,
    footer: Span,
    total_height: f32,
}

impl PageGeometry {
    /// Lays the page out top to bottom. The hero always fills one window
    /// height; everything below follows from the sizing tokens and the card
    /// counts, with the grid collapsing to one column under the breakpoint.
    pub fn compute(page: &Page, window: Size, expanded_faq: Option<usize>) -> Self {
        let columns = if window.width < sizing::MOBILE_BREAKPOINT {
            sizing::GRID_COLUMNS_NARROW
        } else {
            sizing::GRID_COLUMNS_WIDE
        };

        let hero = Span {
            top: 0.0,
            height: window.height,
        };
        let mut cursor = hero.height;

        let mut sections = Vec::with_capacity(page.sections.len());
        let mut cards = Vec::with_capacity(page.card_count());
        let mut stat = None;

        for section in &page.sections {
            let section_top = cursor;
            let cards_top = section_top + sizing::SECTION_PADDING_Y + sizing::SECTION_TITLE_BLOCK;
            let rows = section.cards.len().div_ceil(columns);

            for (ordinal, _) in section.cards.iter().enumerate() {
                let row = ordinal / columns;
                cards.push(CardGeometry {
                    section: section.id,
                    ordinal,
                    span: Span {
                        top: cards_top + row as f32 * (sizing::CARD_HEIGHT + sizing::CARD_GAP),
                        height: sizing::CARD_HEIGHT,
                    },
                });
            }

            let mut body_height = rows as f32 * sizing::CARD_HEIGHT
                + rows.saturating_sub(1) as f32 * sizing::CARD_GAP;

            if section.stat.is_some() {
                let stat_top = cards_top + body_height + sizing::CARD_GAP;
                stat = Some(Span {
                    top: stat_top,
                    height: sizing::STAT_BLOCK_HEIGHT,
                });
                body_height += sizing::CARD_GAP + sizing::STAT_BLOCK_HEIGHT;
            }

            let height =
                2.0 * sizing::SECTION_PADDING_Y + sizing::SECTION_TITLE_BLOCK + body_height;
            sections.push(SectionSpan {
                id: section.id,
                span: Span {
                    top: section_top,
                    height,
                },
            });
            cursor += height;
        }

        let entries = page.faq.entries.len();
        let mut faq_height = 2.0 * sizing::SECTION_PADDING_Y
            + sizing::SECTION_TITLE_BLOCK
            + entries as f32 * sizing::FAQ_QUESTION_HEIGHT
            + entries.saturating_sub(1) as f32 * sizing::FAQ_GAP;
        if expanded_faq.is_some_and(|index| index < entries) {
            faq_height += sizing::FAQ_ANSWER_HEIGHT;
        }
        let faq = Span {
            top: cursor,
            height: faq_height,
        };
        cursor += faq_height;

        let footer = Span {
            top: cursor,
            height: sizing::FOOTER_HEIGHT,
        };
        cursor += footer.height;

        Self {
            window,
            hero,
            sections,
            cards,
            stat,
            faq,
            footer,
            total_height: cursor,
        }
    }

    pub fn window(&self) -> Size {
        self.window
    }

    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f32 {
        (self.total_height - self.window.height).max(0.0)
    }

    fn block_span(&self, id: SectionId) -> Option<Span> {
        match id {
            SectionId::Hero => Some(self.hero),
            SectionId::Faq => Some(self.faq),
            _ => self
                .sections
                .iter()
                .find(|section| section.id == id)
                .map(|section| section.span),
        }
    }

    /// Scroll offset that puts `id` just below the navbar, or `None` when the
    /// page has no such block. Clamped to the reachable scroll range.
    pub fn anchor_target(&self, id: SectionId) -> Option<f32> {
        let span = self.block_span(id)?;
        let target = span.top - sizing::NAVBAR_HEIGHT - motion::ANCHOR_GAP;
        Some(target.clamp(0.0, self.max_scroll()))
    }

    /// Animated cards in display order. Indices into this slice are the
    /// card identities used by the reveal states.
    pub fn cards(&self) -> &[CardGeometry] {
        &self.cards
    }

    /// Whether card `index` has scrolled far enough into view to reveal.
    /// The viewport is inset at the bottom so cards start their entrance
    /// before reaching the very edge of the screen.
    pub fn card_revealable(&self, index: usize, scroll_offset: f32) -> bool {
        let Some(card) = self.cards.get(index) else {
            return false;
        };
        let view_top = scroll_offset;
        let view_bottom = scroll_offset + self.window.height - motion::REVEAL_VIEWPORT_MARGIN;
        card.span.visible_fraction(view_top, view_bottom) >= motion::REVEAL_VISIBLE_FRACTION
    }

    /// Whether the stat block is visible enough to start the counter. No
    /// viewport inset here; the figure should be well on screen.
    pub fn stat_triggered(&self, scroll_offset: f32) -> bool {
        let Some(stat) = self.stat else {
            return false;
        };
        let view_bottom = scroll_offset + self.window.height;
        stat.visible_fraction(scroll_offset, view_bottom) >= motion::STAT_VISIBLE_FRACTION
    }

    pub fn stat_span(&self) -> Option<Span> {
        self.stat
    }

    pub fn hero_span(&self) -> Span {
        self.hero
    }

    pub fn footer_span(&self) -> Span {
        self.footer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::document::{LocaleText, Node, NodeKind};
    use crate::content::{
        Card, CardCategory, FaqBlock, FaqEntry, Footer, Hero, Link, Page, PageMeta, Section,
        StatBlock,
    };
    use crate::i18n::Locale;

    fn text(es: &str) -> Node {
        Node::bilingual(NodeKind::Paragraph, LocaleText::new(es, es))
    }

    fn card() -> Card {
        Card {
            category: CardCategory::Risk,
            title: text("t"),
            body: text("b"),
        }
    }

    fn page_with(risk_cards: usize, faq_entries: usize) -> Page {
        Page {
            lang: Locale::Es,
            meta: PageMeta {
                brand: Node::fixed(NodeKind::Span, "CBHDC"),
                window_title: text("t"),
            },
            nav_links: vec![Link {
                label: text("Riesgos"),
                target: Some(SectionId::Risks),
            }],
            hero: Hero {
                title: text("h"),
                subtitle: text("s"),
                primary_action: Link {
                    label: text("a"),
                    target: Some(SectionId::Risks),
                },
                secondary_action: Link {
                    label: text("b"),
                    target: None,
                },
            },
            sections: vec![
                Section {
                    id: SectionId::Risks,
                    title: text("r"),
                    intro: None,
                    cards: (0..risk_cards).map(|_| card()).collect(),
                    stat: None,
                },
                Section {
                    id: SectionId::Market,
                    title: text("m"),
                    intro: None,
                    cards: vec![card()],
                    stat: Some(StatBlock {
                        prefix: "$".into(),
                        value: 70,
                        suffix: "M".into(),
                        label: text("l"),
                    }),
                },
            ],
            faq: FaqBlock {
                title: text("f"),
                entries: (0..faq_entries)
                    .map(|_| FaqEntry {
                        question: text("q"),
                        answer: text("a"),
                    })
                    .collect(),
            },
            footer: Footer {
                tagline: text("t"),
                links: vec![],
                copyright: Node::fixed(NodeKind::Span, "c"),
            },
        }
    }

    const WIDE: Size = Size {
        width: 1280.0,
        height: 800.0,
    };
    const NARROW: Size = Size {
        width: 600.0,
        height: 800.0,
    };

    #[test]
    fn hero_fills_one_window_height() {
        let geometry = PageGeometry::compute(&page_with(3, 2), WIDE, None);
        assert_eq!(geometry.hero_span().top, 0.0);
        assert_eq!(geometry.hero_span().height, 800.0);
        assert_eq!(geometry.anchor_target(SectionId::Hero), Some(0.0));
    }

    #[test]
    fn anchor_target_sits_below_navbar() {
        let geometry = PageGeometry::compute(&page_with(3, 2), WIDE, None);
        let target = geometry.anchor_target(SectionId::Risks).unwrap();
        // Risks starts right after the hero.
        assert_eq!(
            target,
            800.0 - sizing::NAVBAR_HEIGHT - motion::ANCHOR_GAP
        );
    }

    #[test]
    fn anchor_target_for_absent_section_is_none() {
        let geometry = PageGeometry::compute(&page_with(3, 2), WIDE, None);
        assert_eq!(geometry.anchor_target(SectionId::Credentials), None);
    }

    #[test]
    fn anchor_target_is_clamped_to_reachable_range() {
        let geometry = PageGeometry::compute(&page_with(3, 2), WIDE, None);
        let target = geometry.anchor_target(SectionId::Faq).unwrap();
        assert!(target <= geometry.max_scroll());
    }

    #[test]
    fn narrow_window_stacks_cards_in_one_column() {
        let wide = PageGeometry::compute(&page_with(3, 2), WIDE, None);
        let narrow = PageGeometry::compute(&page_with(3, 2), NARROW, None);

        // Three cards: one row of three vs three rows of one.
        assert!(narrow.total_height() > wide.total_height());
        let wide_tops: Vec<f32> = wide.cards()[..3].iter().map(|c| c.span.top).collect();
        assert_eq!(wide_tops[0], wide_tops[1]);
        assert_eq!(wide_tops[1], wide_tops[2]);
        let narrow_tops: Vec<f32> = narrow.cards()[..3].iter().map(|c| c.span.top).collect();
        assert!(narrow_tops[0] < narrow_tops[1]);
        assert!(narrow_tops[1] < narrow_tops[2]);
    }

    #[test]
    fn card_ordinals_restart_per_section() {
        let geometry = PageGeometry::compute(&page_with(3, 2), WIDE, None);
        let ordinals: Vec<usize> = geometry.cards().iter().map(|c| c.ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 0]);
        assert_eq!(geometry.cards()[3].section, SectionId::Market);
    }

    #[test]
    fn expanding_a_faq_item_pushes_the_footer_down() {
        let collapsed = PageGeometry::compute(&page_with(3, 2), WIDE, None);
        let expanded = PageGeometry::compute(&page_with(3, 2), WIDE, Some(1));

        assert_eq!(
            expanded.footer_span().top,
            collapsed.footer_span().top + sizing::FAQ_ANSWER_HEIGHT
        );
    }

    #[test]
    fn out_of_range_expansion_changes_nothing() {
        let collapsed = PageGeometry::compute(&page_with(3, 2), WIDE, None);
        let bogus = PageGeometry::compute(&page_with(3, 2), WIDE, Some(9));
        assert_eq!(collapsed.footer_span(), bogus.footer_span());
    }

    #[test]
    fn visible_fraction_is_zero_outside_the_viewport() {
        let span = Span {
            top: 1000.0,
            height: 200.0,
        };
        assert_eq!(span.visible_fraction(0.0, 800.0), 0.0);
        assert_eq!(span.visible_fraction(1300.0, 2000.0), 0.0);
    }

    #[test]
    fn visible_fraction_is_one_when_fully_inside() {
        let span = Span {
            top: 100.0,
            height: 200.0,
        };
        assert_eq!(span.visible_fraction(0.0, 800.0), 1.0);
    }

    #[test]
    fn visible_fraction_is_partial_at_the_edge() {
        let span = Span {
            top: 700.0,
            height: 200.0,
        };
        // Half the card pokes above the 800 line.
        assert!((span.visible_fraction(0.0, 800.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn reveal_honors_the_bottom_viewport_margin() {
        let geometry = PageGeometry::compute(&page_with(3, 2), WIDE, None);
        let card_top = geometry.cards()[0].span.top;

        // Scrolled so the card's top is exactly at the bottom edge of the
        // window: inside the raw viewport, but not the inset one.
        let at_edge = card_top - WIDE.height + 1.0;
        assert!(!geometry.card_revealable(0, at_edge));

        // A margin's worth further and the card clears the inset viewport.
        let past_margin =
            card_top - WIDE.height + motion::REVEAL_VIEWPORT_MARGIN + sizing::CARD_HEIGHT * 0.2;
        assert!(geometry.card_revealable(0, past_margin));
    }

    #[test]
    fn reveal_ignores_unknown_card_indices() {
        let geometry = PageGeometry::compute(&page_with(3, 2), WIDE, None);
        assert!(!geometry.card_revealable(99, 0.0));
    }

    #[test]
    fn stat_triggers_at_half_visibility() {
        let geometry = PageGeometry::compute(&page_with(3, 2), WIDE, None);
        let stat = geometry.stat_span().unwrap();

        // Stat entirely below the viewport: no trigger.
        assert!(!geometry.stat_triggered(stat.top - WIDE.height - 10.0));

        // Scrolled so 60% of the stat is on screen: triggered.
        let offset = stat.top + stat.height * 0.6 - WIDE.height;
        assert!(geometry.stat_triggered(offset));

        // Only 40% on screen: not yet.
        let offset = stat.top + stat.height * 0.4 - WIDE.height;
        assert!(!geometry.stat_triggered(offset));
    }

    #[test]
    fn stat_trigger_without_stat_block_is_inert() {
        let mut page = page_with(3, 2);
        page.sections[1].stat = None;
        let geometry = PageGeometry::compute(&page, WIDE, None);
        assert!(!geometry.stat_triggered(0.0));
        assert!(geometry.stat_span().is_none());
    }

    #[test]
    fn max_scroll_never_goes_negative() {
        let tall_window = Size {
            width: 1280.0,
            height: 100_000.0,
        };
        let geometry = PageGeometry::compute(&page_with(1, 1), tall_window, None);
        assert_eq!(geometry.max_scroll(), 0.0);
    }
}
