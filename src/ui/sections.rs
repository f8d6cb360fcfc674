// SPDX-License-Identifier: MPL-2.0
//! Card sections of the brief: risks, solution, credentials and market.
//!
//! Sections are static content; the motion they carry comes entirely from
//! state computed elsewhere. Cards render at the opacity and rise of their
//! reveal state, and the market statistic renders whatever text the counter
//! currently dictates. Block heights mirror the page geometry exactly, so
//! the scroll math and the pixels never disagree.

use crate::content::{Card, Page, Section, StatBlock};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::state::{RevealSet, RevealState, StatCounter};
use crate::ui::styles;
use iced::widget::{container, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Background, Color, Element, Length, Theme,
};

/// Contextual data needed to render the card sections.
pub struct ViewContext<'a> {
    pub page: &'a Page,
    pub reveals: &'a RevealSet,
    pub counter: &'a StatCounter,
    /// Cards per grid row, already resolved from the window width.
    pub columns: usize,
}

/// Render every card section in display order.
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let mut column = Column::new().width(Length::Fill);
    let mut next_card = 0;

    for (position, section) in ctx.page.sections.iter().enumerate() {
        let banded = position % 2 == 1;
        column = column.push(build_section(&ctx, section, banded, next_card));
        next_card += section.cards.len();
    }

    column.into()
}

fn build_section<'a, M: 'a>(
    ctx: &ViewContext<'a>,
    section: &'a Section,
    banded: bool,
    first_card: usize,
) -> Element<'a, M> {
    let mut body = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(build_title_block(section));

    body = body.push(build_card_grid(ctx, section, first_card));

    if let Some(stat) = &section.stat {
        body = body.push(Space::with_height(Length::Fixed(sizing::CARD_GAP)));
        body = body.push(build_stat(stat, ctx.counter));
    }

    let style = if banded {
        styles::container::band
    } else {
        styles::container::page
    };

    Container::new(
        Container::new(body)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding([sizing::SECTION_PADDING_Y, spacing::LG])
    .style(style)
    .into()
}

/// Title and optional intro, inside a fixed-height block.
fn build_title_block<'a, M: 'a>(section: &'a Section) -> Element<'a, M> {
    let mut block = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(
            Text::new(section.title.rendered.as_str())
                .size(typography::TITLE_LG)
                .color(palette::WHITE)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        );

    if let Some(intro) = &section.intro {
        block = block.push(
            Text::new(intro.rendered.as_str())
                .size(typography::BODY)
                .color(Color {
                    a: opacity::TEXT_MUTED,
                    ..palette::WHITE
                })
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        );
    }

    Container::new(block)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SECTION_TITLE_BLOCK))
        .align_y(Vertical::Center)
        .into()
}

/// Cards laid out in rows, each at its own reveal opacity.
fn build_card_grid<'a, M: 'a>(
    ctx: &ViewContext<'a>,
    section: &'a Section,
    first_card: usize,
) -> Element<'a, M> {
    let columns = ctx.columns.max(1);
    let mut grid = Column::new().spacing(sizing::CARD_GAP).width(Length::Fill);

    for (row_index, row_cards) in section.cards.chunks(columns).enumerate() {
        let mut row = Row::new().spacing(sizing::CARD_GAP).width(Length::Fill);

        for (cell, card) in row_cards.iter().enumerate() {
            let flat_index = first_card + row_index * columns + cell;
            row = row.push(build_card(card, ctx.reveals.card(flat_index)));
        }

        // Pad partial rows so every card keeps the same cell width.
        for _ in row_cards.len()..columns {
            row = row.push(Space::with_width(Length::FillPortion(1)));
        }

        grid = grid.push(row);
    }

    grid.into()
}

fn build_card<'a, M: 'a>(card: &'a Card, reveal: RevealState) -> Element<'a, M> {
    let alpha = reveal.opacity();
    let rise = reveal.rise();

    let title = Text::new(card.title.rendered.as_str())
        .size(typography::TITLE_SM)
        .color(Color {
            a: alpha,
            ..palette::GOLD_400
        });

    let body = Text::new(card.body.rendered.as_str())
        .size(typography::BODY)
        .color(Color {
            a: opacity::TEXT_MUTED * alpha,
            ..palette::WHITE
        });

    let content = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(title)
            .push(body),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::CARD_HEIGHT - rise))
    .padding(spacing::LG)
    .style(revealing_card(alpha));

    // The card grows upward into its slot as the rise shrinks.
    Container::new(content)
        .width(Length::FillPortion(1))
        .height(Length::Fixed(sizing::CARD_HEIGHT))
        .align_y(Vertical::Bottom)
        .into()
}

/// Card surface with every paint channel scaled by the reveal opacity.
fn revealing_card(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let mut style = styles::container::card(theme);
        if let Some(Background::Color(color)) = style.background {
            style.background = Some(Background::Color(Color {
                a: color.a * alpha,
                ..color
            }));
        }
        style.border.color.a *= alpha;
        style.shadow.color.a *= alpha;
        style
    }
}

fn build_stat<'a, M: 'a>(stat: &'a StatBlock, counter: &StatCounter) -> Element<'a, M> {
    let figure = Text::new(counter.display_text(stat))
        .size(typography::STAT)
        .color(palette::GOLD_500);

    let label = Text::new(stat.label.rendered.as_str())
        .size(typography::BODY_LG)
        .color(palette::GRAY_100);

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(figure)
            .push(label),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::STAT_BLOCK_HEIGHT))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::stat_block)
    .into()
}
