use super::*;

#[test]
fn parse_color_accepts_names_and_hex() {
    assert_eq!(parse_color("Cyan"), Some(Color::Indexed(6)));
    assert_eq!(parse_color(" dark_gray "), Some(Color::Indexed(8)));
    assert_eq!(parse_color("#0A0B0C"), Some(Color::Rgb(0x0A, 0x0B, 0x0C)));
    assert_eq!(parse_color("#12"), None);
    assert_eq!(parse_color("chartreuse"), None);
    assert_eq!(parse_color(""), None);
}

#[test]
fn apply_settings_skips_unknown_values() {
    let settings = ThemeSettings {
        accent_fg: Some("#FF0000".to_string()),
        connector_fg: Some("not-a-colour".to_string()),
        ..ThemeSettings::default()
    };
    let mut theme = UiTheme::default();
    theme.apply_settings(&settings);

    assert_eq!(theme.accent_fg, Color::Rgb(0xFF, 0, 0));
    assert_eq!(theme.connector_fg, Color::Indexed(8));
}

#[test]
fn ansi16_maps_rgb_to_nearest_basic_colour() {
    let mut theme = UiTheme {
        accent_fg: Color::Rgb(250, 5, 5),
        connector_fg: Color::Indexed(244),
        ..UiTheme::default()
    };
    theme.apply_color_support(TerminalColorSupport::Ansi16);

    assert_eq!(theme.accent_fg, Color::Indexed(9));
    assert!(matches!(theme.connector_fg, Color::Indexed(i) if i <= 15));
    assert_eq!(theme.palette_bg, Color::Reset);
}

#[test]
fn ansi256_keeps_indexed_colours() {
    let mut theme = UiTheme::default();
    theme.apply_color_support(TerminalColorSupport::Ansi256);
    assert_eq!(theme.focus_border, Color::Indexed(6));
}
