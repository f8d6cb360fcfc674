// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Style pour bouton primaire (action principale).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::GOLD_500)),
            text_color: palette::NAVY_900,
            border: Border {
                color: palette::GOLD_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::GOLD_400)),
            text_color: palette::NAVY_900,
            border: Border {
                color: palette::GOLD_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Outlined secondary action, drawn on dark section backgrounds.
pub fn secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let (text_color, border_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (palette::GOLD_400, palette::GOLD_400)
        }
        _ => (WHITE, WHITE),
    };

    button::Style {
        background: None,
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Bare text button used for navbar and drawer links.
pub fn nav_link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GOLD_400,
        _ => palette::GRAY_100,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for the selected segment of the language toggle.
pub fn selected(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::GOLD_500)),
        text_color: palette::NAVY_900,
        border: Border {
            color: palette::GOLD_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for the unselected segment of the language toggle.
pub fn unselected(_theme: &Theme, status: button::Status) -> button::Style {
    let (text_color, border_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (palette::GOLD_400, palette::GOLD_400)
        }
        _ => (palette::GRAY_100, palette::GRAY_400),
    };

    button::Style {
        background: None,
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Full-width FAQ question row.
pub fn faq_question(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::NAVY_700,
        _ => palette::NAVY_800,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Hamburger toggle; the active (open-drawer) form stays gold.
pub fn hamburger(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = if active || matches!(status, button::Status::Hovered) {
            palette::GOLD_400
        } else {
            WHITE
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
