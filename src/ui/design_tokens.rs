// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component and layout sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Motion**: Animation thresholds and durations

## Examples

```
use iced_brief::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create the drawer overlay color
let drawer_bg = Color {
    a: opacity::DRAWER,
    ..palette::NAVY_900
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.58, 0.63);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.77, 0.8);
    pub const GRAY_100: Color = Color::from_rgb(0.87, 0.88, 0.9);

    // Brand navy scale (page background is the darkest step)
    pub const NAVY_900: Color = Color::from_rgb(0.039, 0.086, 0.157); // #0a1628
    pub const NAVY_800: Color = Color::from_rgb(0.055, 0.115, 0.2);
    pub const NAVY_700: Color = Color::from_rgb(0.078, 0.15, 0.25);
    pub const NAVY_600: Color = Color::from_rgb(0.12, 0.2, 0.31);
    pub const NAVY_500: Color = Color::from_rgb(0.17, 0.26, 0.38);

    // Brand gold scale
    pub const GOLD_600: Color = Color::from_rgb(0.62, 0.44, 0.03);
    pub const GOLD_500: Color = Color::from_rgb(0.722, 0.525, 0.043); // #b8860b
    pub const GOLD_400: Color = Color::from_rgb(0.83, 0.63, 0.13);
    pub const GOLD_300: Color = Color::from_rgb(0.9, 0.73, 0.28);

    // Semantic colors (card category accents)
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Navbar surface once the page has scrolled past the threshold
    pub const SURFACE: f32 = 0.95;

    /// Full-screen compact-nav drawer
    pub const DRAWER: f32 = 0.98;

    /// Muted body text against the navy background
    pub const TEXT_MUTED: f32 = 0.72;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Fixed navigation bar height
    pub const NAVBAR_HEIGHT: f32 = 64.0;

    /// Window width below which the nav collapses into the drawer
    pub const MOBILE_BREAKPOINT: f32 = 768.0;

    /// Readable column width for section content
    pub const CONTENT_MAX_WIDTH: f32 = 1100.0;

    /// Card grid columns on either side of the breakpoint
    pub const GRID_COLUMNS_WIDE: usize = 3;
    pub const GRID_COLUMNS_NARROW: usize = 1;

    // Fixed block heights. Scroll targets and reveal triggers are computed
    // from these, so the view must lay blocks out with the same values.
    pub const SECTION_PADDING_Y: f32 = 72.0;
    pub const SECTION_TITLE_BLOCK: f32 = 120.0;
    pub const CARD_HEIGHT: f32 = 200.0;
    pub const CARD_GAP: f32 = 24.0;
    pub const STAT_BLOCK_HEIGHT: f32 = 170.0;
    pub const FAQ_QUESTION_HEIGHT: f32 = 56.0;
    pub const FAQ_ANSWER_HEIGHT: f32 = 130.0;
    pub const FAQ_GAP: f32 = 12.0;
    pub const FOOTER_HEIGHT: f32 = 230.0;

    // Interactive element sizes
    pub const BUTTON_HEIGHT: f32 = 44.0;
    pub const LANG_BADGE_WIDTH: f32 = 34.0;
    pub const HAMBURGER_SIZE: f32 = 40.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale following Material Design 3 type scale principles.

    /// Display - hero headline
    pub const DISPLAY: f32 = 46.0;

    /// Stat figure in the market section
    pub const STAT: f32 = 56.0;

    /// Large title - section headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - brand mark, card headings
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - FAQ questions
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - hero subtitle, section intros
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - card text, answers
    pub const BODY: f32 = 14.0;

    /// Caption - footer links, badges
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - card outlines, separators
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - card accent edge, toggle outline
    pub const WIDTH_MD: f32 = 2.0;

    /// Heavy accent - left edge of category cards
    pub const WIDTH_LG: f32 = 3.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    //! Every scroll and animation constant lives here; the state machines
    //! take these as their only numeric inputs.

    use std::time::Duration;

    /// Shared animation tick cadence.
    pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

    /// Scroll offset past which the navbar renders its solid style.
    pub const NAV_SCROLL_THRESHOLD: f32 = 100.0;

    /// Gap kept between the navbar and a scrolled-to section top.
    pub const ANCHOR_GAP: f32 = 20.0;

    /// Eased duration of a programmatic scroll to a section.
    pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(450);

    /// A reported offset further than this from the tween's expected position
    /// counts as the reader scrolling by hand, which cancels the tween.
    pub const SCROLL_CANCEL_DEVIATION: f32 = 1.0;

    /// Hero backdrop moves at this fraction of the scroll offset.
    pub const PARALLAX_FACTOR: f32 = 0.3;

    /// Bottom inset subtracted from the viewport when testing card reveals.
    pub const REVEAL_VIEWPORT_MARGIN: f32 = 100.0;

    /// Fraction of a card that must be visible to trigger its reveal.
    pub const REVEAL_VISIBLE_FRACTION: f32 = 0.1;

    /// Per-card delay step within a section's grid.
    pub const REVEAL_STAGGER_STEP: Duration = Duration::from_millis(100);

    /// Card fade-in duration once its delay has elapsed.
    pub const REVEAL_FADE: Duration = Duration::from_millis(600);

    /// Cards rise by this distance while fading in.
    pub const REVEAL_RISE_DISTANCE: f32 = 30.0;

    /// Fraction of the stat block that must be visible to start the counter.
    pub const STAT_VISIBLE_FRACTION: f32 = 0.5;

    /// Counter run time from zero to the final figure.
    pub const COUNTER_DURATION: Duration = Duration::from_millis(1500);

    /// Counter advances once per this interval, mirroring the tick cadence.
    pub const COUNTER_STEP: Duration = Duration::from_millis(16);

    /// Compact drawer fade duration.
    pub const DRAWER_FADE: Duration = Duration::from_millis(300);
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);
    assert!(opacity::DRAWER > opacity::SURFACE);

    // Sizing validation
    assert!(sizing::NAVBAR_HEIGHT > 0.0);
    assert!(sizing::MOBILE_BREAKPOINT > sizing::NAVBAR_HEIGHT);
    assert!(sizing::GRID_COLUMNS_WIDE > sizing::GRID_COLUMNS_NARROW);
    assert!(sizing::CARD_HEIGHT > 0.0 && sizing::CARD_GAP > 0.0);
    assert!(sizing::FAQ_ANSWER_HEIGHT > sizing::FAQ_QUESTION_HEIGHT);

    // Typography validation
    assert!(typography::STAT > typography::DISPLAY);
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_LG > border::WIDTH_MD);
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Motion validation
    assert!(motion::NAV_SCROLL_THRESHOLD > 0.0);
    assert!(motion::PARALLAX_FACTOR > 0.0 && motion::PARALLAX_FACTOR < 1.0);
    assert!(motion::REVEAL_VISIBLE_FRACTION > 0.0 && motion::REVEAL_VISIBLE_FRACTION < 1.0);
    assert!(motion::STAT_VISIBLE_FRACTION > motion::REVEAL_VISIBLE_FRACTION);
    assert!(motion::COUNTER_DURATION.as_millis() > motion::COUNTER_STEP.as_millis());
    assert!(motion::TICK_INTERVAL.as_millis() > 0);

    // Color validation
    assert!(palette::GOLD_500.r >= 0.0 && palette::GOLD_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn counter_runs_a_whole_number_of_steps_past_target() {
        let steps = motion::COUNTER_DURATION.as_millis() / motion::COUNTER_STEP.as_millis();
        assert!(steps > 0);
    }

    #[test]
    fn brand_colors_match_authored_values() {
        // #0a1628 and #b8860b
        assert!((palette::NAVY_900.r - 10.0 / 255.0).abs() < 0.005);
        assert!((palette::NAVY_900.g - 22.0 / 255.0).abs() < 0.005);
        assert!((palette::NAVY_900.b - 40.0 / 255.0).abs() < 0.005);
        assert!((palette::GOLD_500.r - 184.0 / 255.0).abs() < 0.005);
        assert!((palette::GOLD_500.g - 134.0 / 255.0).abs() < 0.005);
        assert!((palette::GOLD_500.b - 11.0 / 255.0).abs() < 0.005);
    }
}
