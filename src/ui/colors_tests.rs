use strum::IntoEnumIterator;

use super::*;

#[test]
fn test_theme_round_trips_through_name() {
    for theme in Theme::iter() {
        assert_eq!(Theme::from_string(&theme.to_string()), theme);
    }
}

#[test]
fn test_unknown_theme_defaults_to_teal() {
    assert_eq!(Theme::from_string("Chartreuse"), Theme::Teal);
}

#[test]
fn test_basic_colors_without_true_color() {
    let colors = Colors::new(Theme::Teal.to_palette(false), false);
    assert_eq!(colors.buffer_bg, Color::Black);
    assert_eq!(colors.border_color, Color::LightCyan);
}

#[test]
fn test_true_colors() {
    let colors = Colors::new(Theme::Teal.to_palette(true), true);
    assert_eq!(colors.buffer_bg, tailwind::SLATE.c950);
    assert_eq!(colors.border_color, tailwind::TEAL.c400);
}
