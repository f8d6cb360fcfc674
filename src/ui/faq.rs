// SPDX-License-Identifier: MPL-2.0
//! FAQ accordion section.
//!
//! Questions render as full-width disclosure buttons; at most one answer
//! panel is open at a time. Expanding an entry changes the page height, so
//! the parent is told whenever the expansion actually moved.

use crate::content::{FaqEntry, Node, Page};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::state::FaqAccordion;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Space, Text},
    Color, Element, Length,
};

/// Contextual data needed to render the FAQ section.
pub struct ViewContext<'a> {
    pub page: &'a Page,
    pub accordion: &'a FaqAccordion,
}

/// Messages emitted by the FAQ section.
#[derive(Debug, Clone)]
pub enum Message {
    QuestionPressed(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The expansion changed, so block positions below the FAQ moved.
    LayoutChanged,
}

/// Process a FAQ message and return the corresponding event.
pub fn update(message: Message, accordion: &mut FaqAccordion) -> Event {
    match message {
        Message::QuestionPressed(index) => {
            let before = accordion.expanded();
            accordion.activate(index);
            if accordion.expanded() == before {
                Event::None
            } else {
                Event::LayoutChanged
            }
        }
    }
}

/// Render the FAQ section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut entries = Column::new().spacing(sizing::FAQ_GAP).width(Length::Fill);

    for (index, entry) in ctx.page.faq.entries.iter().enumerate() {
        entries = entries.push(build_entry(ctx.accordion, index, entry));
    }

    let body = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(build_title_block(&ctx.page.faq.title))
        .push(entries);

    Container::new(
        Container::new(body)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding([sizing::SECTION_PADDING_Y, spacing::LG])
    .style(styles::container::page)
    .into()
}

fn build_title_block<'a>(title: &'a Node) -> Element<'a, Message> {
    Container::new(
        Text::new(title.rendered.as_str())
            .size(typography::TITLE_LG)
            .color(palette::WHITE)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::SECTION_TITLE_BLOCK))
    .align_y(Vertical::Center)
    .into()
}

/// One question button, plus its answer panel while expanded.
fn build_entry<'a>(
    accordion: &FaqAccordion,
    index: usize,
    entry: &'a FaqEntry,
) -> Element<'a, Message> {
    // The indicator renders the same disclosure state assistive surfaces
    // read for this entry.
    let indicator = Text::new(if accordion.aria_expanded(index) {
        "▼"
    } else {
        "▶"
    })
    .size(typography::BODY)
    .color(palette::GOLD_400);

    let question = button(
        Row::new()
            .height(Length::Fill)
            .align_y(Vertical::Center)
            .push(
                Text::new(entry.question.rendered.as_str())
                    .size(typography::TITLE_SM)
                    .color(palette::WHITE),
            )
            .push(Space::with_width(Length::Fill))
            .push(indicator),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::FAQ_QUESTION_HEIGHT))
    .padding([0.0, spacing::MD])
    .style(styles::button::faq_question)
    .on_press(Message::QuestionPressed(index));

    let mut item = Column::new().width(Length::Fill).push(question);

    if accordion.is_expanded(index) {
        item = item.push(
            Container::new(build_answer(&entry.answer))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::FAQ_ANSWER_HEIGHT))
                .padding(spacing::MD)
                .style(styles::container::faq_answer),
        );
    }

    item.into()
}

/// Answers are a single paragraph or a container of paragraphs.
fn build_answer<'a>(answer: &'a Node) -> Element<'a, Message> {
    let muted = Color {
        a: opacity::TEXT_MUTED,
        ..palette::WHITE
    };

    if answer.children.is_empty() {
        return Text::new(answer.rendered.as_str())
            .size(typography::BODY)
            .color(muted)
            .into();
    }

    let mut paragraphs = Column::new().spacing(spacing::SM);
    for child in &answer.children {
        paragraphs = paragraphs.push(
            Text::new(child.rendered.as_str())
                .size(typography::BODY)
                .color(muted),
        );
    }
    paragraphs.into()
}
