//! # Theme Configuration
//!
//! Centralized colour configuration for the subscription calendar. There are
//! two palettes, dark and light, selected by `ThemeMode`.
//!
//! ## Usage
//! ```rust
//! use crate::ui::components::theme::Theme;
//!
//! let theme = Theme::for_mode(state.theme);
//! let color = theme.ring.stroke;
//! ```

use egui::Color32;
use shared::ThemeMode;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background and layout colors
    pub layout: LayoutColors,
    /// Text and typography colors
    pub typography: TypographyColors,
    /// Calendar-specific colors
    pub calendar: CalendarColors,
    /// Spend ring colors
    pub ring: RingColors,
    /// Theme toggle button
    pub toggle: ToggleColors,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    /// Wallpaper fill and its 40px grid lines
    pub wallpaper_base: Color32,
    pub wallpaper_grid: Color32,
    /// Card behind header and body
    pub card_background: Color32,
    pub card_border: Color32,
    /// Details panel and tooltip surfaces
    pub panel_background: Color32,
    pub tooltip_background: Color32,
    /// Semi-transparent backdrop behind the tooltip
    pub backdrop: Color32,
    /// Drawer surface on narrow windows
    pub drawer_background: Color32,
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub heading: Color32,
}

/// Calendar-specific colors
#[derive(Debug, Clone)]
pub struct CalendarColors {
    /// Weekday header pill
    pub header_background: Color32,
    pub header_text: Color32,
    /// Day cell
    pub day_background: Color32,
    pub day_hover_background: Color32,
    pub day_text: Color32,
    /// Outline of the day whose tooltip is open
    pub selected_border: Color32,
}

/// Spend ring colors
#[derive(Debug, Clone)]
pub struct RingColors {
    pub stroke: Color32,
    pub label_background: Color32,
    pub list_item_background: Color32,
}

#[derive(Debug, Clone)]
pub struct ToggleColors {
    pub icon: Color32,
}

pub const DARK_THEME: Theme = Theme {
    layout: LayoutColors {
        wallpaper_base: Color32::from_rgb(24, 24, 27),
        wallpaper_grid: Color32::from_rgb(39, 39, 42),
        card_background: Color32::from_rgba_premultiplied(20, 20, 20, 200),
        card_border: Color32::from_rgb(60, 60, 60),
        panel_background: Color32::from_rgba_premultiplied(0, 0, 0, 77),
        tooltip_background: Color32::from_rgb(75, 85, 99),
        backdrop: Color32::from_rgba_premultiplied(0, 0, 0, 90),
        drawer_background: Color32::from_rgb(87, 87, 87),
    },
    typography: TypographyColors {
        primary: Color32::WHITE,
        secondary: Color32::from_rgb(156, 163, 175),
        heading: Color32::WHITE,
    },
    calendar: CalendarColors {
        header_background: Color32::from_rgb(107, 114, 128),
        header_text: Color32::from_rgb(156, 163, 175),
        // #1c1c1c day cells
        day_background: Color32::from_rgb(28, 28, 28),
        day_hover_background: Color32::from_rgb(44, 44, 44),
        day_text: Color32::from_rgb(243, 244, 246),
        selected_border: Color32::from_rgb(245, 210, 105),
    },
    ring: RingColors {
        stroke: Color32::WHITE,
        label_background: Color32::from_rgb(28, 28, 28),
        list_item_background: Color32::from_rgba_premultiplied(20, 20, 22, 26),
    },
    toggle: ToggleColors {
        // Sun
        icon: Color32::from_rgb(245, 210, 105),
    },
};

pub const LIGHT_THEME: Theme = Theme {
    layout: LayoutColors {
        wallpaper_base: Color32::from_rgb(243, 244, 246),
        wallpaper_grid: Color32::from_rgb(229, 231, 235),
        card_background: Color32::from_rgba_premultiplied(200, 200, 200, 220),
        card_border: Color32::from_rgb(200, 200, 200),
        panel_background: Color32::from_rgba_premultiplied(62, 62, 62, 77),
        tooltip_background: Color32::from_rgb(209, 213, 219),
        backdrop: Color32::from_rgba_premultiplied(0, 0, 0, 40),
        drawer_background: Color32::from_rgb(209, 213, 219),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(31, 41, 55),
        secondary: Color32::from_rgb(75, 85, 99),
        heading: Color32::from_rgb(31, 41, 55),
    },
    calendar: CalendarColors {
        header_background: Color32::from_rgb(55, 65, 81),
        header_text: Color32::from_rgb(156, 163, 175),
        day_background: Color32::from_rgb(229, 231, 235),
        day_hover_background: Color32::from_rgb(243, 244, 246),
        day_text: Color32::from_rgb(31, 41, 55),
        selected_border: Color32::from_rgb(79, 109, 245),
    },
    ring: RingColors {
        stroke: Color32::BLACK,
        label_background: Color32::from_rgb(229, 231, 235),
        list_item_background: Color32::from_rgba_premultiplied(11, 12, 14, 26),
    },
    toggle: ToggleColors {
        // Moon
        icon: Color32::BLACK,
    },
};

impl Theme {
    /// Palette for a theme mode
    pub fn for_mode(mode: ThemeMode) -> &'static Theme {
        match mode {
            ThemeMode::Dark => &DARK_THEME,
            ThemeMode::Light => &LIGHT_THEME,
        }
    }

    /// Glyph shown on the theme toggle: the sun switches to light, the moon back to dark
    pub fn toggle_glyph(mode: ThemeMode) -> &'static str {
        match mode {
            ThemeMode::Dark => "☀",
            ThemeMode::Light => "🌙",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_stroke_follows_mode() {
        assert_eq!(Theme::for_mode(ThemeMode::Dark).ring.stroke, Color32::WHITE);
        assert_eq!(Theme::for_mode(ThemeMode::Light).ring.stroke, Color32::BLACK);
    }
}
