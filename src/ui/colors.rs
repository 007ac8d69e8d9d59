//! Theme and color palette definitions for the terminal UI.

use ratatui::style::{Color, palette::tailwind};
use strum::{Display, EnumIter, EnumString};

/// Color palette derived from the current theme.
#[derive(Clone, Debug)]
pub struct Colors {
    pub buffer_bg: Color,
    pub row_header_bg: Color,
    pub selected_row_fg: Color,
    pub error: Color,
    pub header_text: Color,
    pub text: Color,
    pub border_color: Color,
    pub light_gray: Color,
    pub gray: Color,
    pub input_editing: Color,
    pub success: Color,
}

impl Colors {
    /// Creates a color palette from the given tailwind palette, falling back
    /// to basic colors if true color is not supported.
    pub fn new(color: &tailwind::Palette, true_color_enabled: bool) -> Self {
        let basic_colors = Self {
            buffer_bg: Color::Black,
            row_header_bg: color.c900,
            selected_row_fg: color.c400,
            error: Color::Red,
            header_text: color.c400,
            text: Color::White,
            border_color: color.c400,
            light_gray: Color::Gray,
            gray: Color::DarkGray,
            input_editing: Color::LightYellow,
            success: Color::LightGreen,
        };

        let tw_colors = Self {
            buffer_bg: tailwind::SLATE.c950,
            row_header_bg: color.c900,
            selected_row_fg: color.c400,
            error: tailwind::RED.c600,
            header_text: color.c600,
            text: tailwind::SLATE.c200,
            border_color: color.c400,
            light_gray: tailwind::SLATE.c500,
            gray: tailwind::SLATE.c800,
            input_editing: tailwind::AMBER.c600,
            success: tailwind::GREEN.c500,
        };

        if true_color_enabled {
            tw_colors
        } else {
            basic_colors
        }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Colors::new(Theme::default().to_palette(true), true)
    }
}

/// Available color themes for the application.
#[derive(
    Debug,
    Default,
    Eq,
    PartialEq,
    Copy,
    Clone,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Theme {
    Blue,
    Emerald,
    Indigo,
    Red,
    #[default]
    Teal,
}

// Fallback palettes for terminals without true color support.
const BASIC_BLUE_PALLETE: tailwind::Palette = basic_palette(Color::LightBlue, Color::Blue);
const BASIC_RED_PALLETE: tailwind::Palette = basic_palette(Color::LightRed, Color::Red);
const BASIC_GREEN_PALLETE: tailwind::Palette = basic_palette(Color::LightGreen, Color::Green);
const BASIC_MAGENTA_PALLETE: tailwind::Palette = basic_palette(Color::LightMagenta, Color::Magenta);
const BASIC_CYAN_PALLETE: tailwind::Palette = basic_palette(Color::LightCyan, Color::Cyan);

const fn basic_palette(light: Color, dark: Color) -> tailwind::Palette {
    tailwind::Palette {
        c50: light,
        c100: light,
        c200: light,
        c300: light,
        c400: light,
        c500: dark,
        c600: dark,
        c700: dark,
        c800: dark,
        c900: dark,
        c950: dark,
    }
}

impl Theme {
    /// Parses a theme from its string name, defaulting to Teal.
    pub fn from_string(value: &str) -> Theme {
        value.parse().unwrap_or_else(|_| {
            log::warn!("unknown theme {value:?}, using {}", Theme::default());
            Theme::default()
        })
    }

    /// Returns the tailwind palette for this theme, using basic colors if
    /// true color is not supported.
    pub fn to_palette(
        self,
        true_color_enabled: bool,
    ) -> &'static tailwind::Palette {
        if true_color_enabled {
            match self {
                Theme::Blue => &tailwind::BLUE,
                Theme::Emerald => &tailwind::EMERALD,
                Theme::Indigo => &tailwind::INDIGO,
                Theme::Red => &tailwind::RED,
                Theme::Teal => &tailwind::TEAL,
            }
        } else {
            match self {
                Theme::Blue => &BASIC_BLUE_PALLETE,
                Theme::Red => &BASIC_RED_PALLETE,
                Theme::Indigo => &BASIC_MAGENTA_PALLETE,
                Theme::Emerald => &BASIC_GREEN_PALLETE,
                Theme::Teal => &BASIC_CYAN_PALLETE,
            }
        }
    }
}

#[cfg(test)]
#[path = "./colors_tests.rs"]
mod tests;
