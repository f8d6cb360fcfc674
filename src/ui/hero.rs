// SPDX-License-Identifier: MPL-2.0
//! Full-height hero block with the parallax backdrop.
//!
//! The hero fills one window height. Its decorative backdrop is drawn on a
//! canvas and displaced by the parallax shift fed in from the scroll state,
//! so the shapes drift slower than the copy while the hero leaves the view.

use crate::content::{Link, Page, SectionId};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, canvas, Column, Container, Row, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    mouse, Color, Element, Length, Point, Rectangle, Theme,
};

/// Contextual data needed to render the hero.
pub struct ViewContext<'a> {
    pub page: &'a Page,
    /// Rendered height of the hero, one window height.
    pub height: f32,
    /// Vertical displacement of the backdrop shapes.
    pub parallax_shift: f32,
}

/// Messages emitted by the hero.
#[derive(Debug, Clone)]
pub enum Message {
    /// A call-to-action was activated; `None` marks an inert link.
    ActionPressed(Option<SectionId>),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(SectionId),
}

/// Process a hero message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::ActionPressed(Some(section)) => Event::Navigate(section),
        Message::ActionPressed(None) => Event::None,
    }
}

/// Decorative backdrop shapes, drawn behind the hero copy.
#[derive(Debug, Clone, Copy)]
struct Backdrop {
    shift: f32,
}

impl<Message> canvas::Program<Message> for Backdrop {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let anchor = Point::new(
            bounds.width * 0.76,
            bounds.height * 0.4 + self.shift,
        );
        let reach = bounds.width.min(bounds.height);

        let glow = canvas::Path::circle(anchor, reach * 0.34);
        frame.fill(
            &glow,
            Color {
                a: 0.12,
                ..palette::GOLD_500
            },
        );

        let ring = canvas::Path::circle(anchor, reach * 0.42);
        frame.stroke(
            &ring,
            canvas::Stroke::default()
                .with_color(Color {
                    a: 0.45,
                    ..palette::GOLD_400
                })
                .with_width(2.0),
        );

        let core = canvas::Path::circle(
            Point::new(anchor.x - reach * 0.18, anchor.y + reach * 0.12),
            reach * 0.1,
        );
        frame.fill(&core, palette::NAVY_700);

        vec![frame.into_geometry()]
    }
}

/// Render the hero block.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let backdrop = canvas::Canvas::new(Backdrop {
        shift: ctx.parallax_shift,
    })
    .width(Length::Fill)
    .height(Length::Fill);

    let hero = &ctx.page.hero;

    let title = Text::new(hero.title.rendered.as_str())
        .size(typography::DISPLAY)
        .color(palette::WHITE);

    let subtitle = Text::new(hero.subtitle.rendered.as_str())
        .size(typography::BODY_LG)
        .color(Color {
            a: opacity::TEXT_MUTED,
            ..palette::WHITE
        });

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(build_action(&hero.primary_action, styles::button::primary))
        .push(build_action(&hero.secondary_action, styles::button::secondary));

    let copy = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(title)
        .push(subtitle)
        .push(actions);

    let layers = Stack::new()
        .push(backdrop)
        .push(
            Container::new(copy)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding([0.0, spacing::XL])
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fixed(ctx.height))
        .style(styles::container::page)
        .into()
}

fn build_action<'a>(
    link: &'a Link,
    style: fn(&Theme, button::Status) -> button::Style,
) -> Element<'a, Message> {
    button(
        Text::new(link.label.rendered.as_str())
            .size(typography::BODY_LG)
            .align_x(Horizontal::Center),
    )
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding([spacing::XS, spacing::LG])
    .style(style)
    .on_press(Message::ActionPressed(link.target))
    .into()
}
