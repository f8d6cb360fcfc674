// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_brief::ui::design_tokens::{motion, palette, sizing, spacing};
    use iced_brief::ui::styles::{button, container};

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        // Smoke-test all button styles compile and are callable
        let _ = button::primary(&theme, iced::widget::button::Status::Active);
        let _ = button::secondary(&theme, iced::widget::button::Status::Hovered);
        let _ = button::nav_link(&theme, iced::widget::button::Status::Active);
        let _ = button::faq_question(&theme, iced::widget::button::Status::Active);
        let _ = button::hamburger(true)(&theme, iced::widget::button::Status::Active);
    }

    #[test]
    fn all_container_styles_compile() {
        let theme = Theme::Dark;

        let _ = container::page(&theme);
        let _ = container::band(&theme);
        let _ = container::navbar(false)(&theme);
        let _ = container::navbar(true)(&theme);
        let _ = container::drawer(&theme);
        let _ = container::card(&theme);
        let _ = container::stat_block(&theme);
        let _ = container::faq_answer(&theme);
        let _ = container::footer(&theme);
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::NAVY_900;
        let _ = palette::GOLD_400;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Sizing
        let _ = sizing::NAVBAR_HEIGHT;

        // Motion
        let _ = motion::TICK_INTERVAL;
    }

    #[test]
    fn navbar_style_changes_past_the_threshold() {
        let theme = Theme::Dark;

        let at_top = container::navbar(false)(&theme);
        let scrolled = container::navbar(true)(&theme);

        // The scrolled bar picks up a shadow and a more opaque background.
        assert_ne!(at_top.shadow.blur_radius, scrolled.shadow.blur_radius);
    }
}
