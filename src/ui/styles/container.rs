// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page root surface behind every section.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NAVY_900)),
        ..Default::default()
    }
}

/// Alternate section band, one shade lighter than the page root.
pub fn band(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NAVY_800)),
        ..Default::default()
    }
}

/// Navigation bar surface.
///
/// At rest the bar is slightly translucent over the hero; once the page has
/// scrolled past the styler threshold it turns solid and casts a shadow.
pub fn navbar(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let base = palette::NAVY_900;
        if scrolled {
            container::Style {
                background: Some(Background::Color(base)),
                shadow: shadow::MD,
                ..Default::default()
            }
        } else {
            container::Style {
                background: Some(Background::Color(Color {
                    a: opacity::SURFACE,
                    ..base
                })),
                ..Default::default()
            }
        }
    }
}

/// Full-height drawer behind the compact-layout nav links.
pub fn drawer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::DRAWER,
            ..palette::NAVY_900
        })),
        ..Default::default()
    }
}

/// Content card for risks, solutions, credentials and market features.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NAVY_800)),
        border: Border {
            color: palette::NAVY_600,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Gold-rimmed block around the animated market statistic.
pub fn stat_block(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NAVY_800)),
        border: Border {
            color: palette::GOLD_500,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Body panel of an expanded FAQ entry.
pub fn faq_answer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NAVY_700)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Footer band at the bottom of the page.
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NAVY_800)),
        ..Default::default()
    }
}
