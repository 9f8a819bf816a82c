use iced::{Color, Theme};

/// Color roles used by the storefront widgets.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) accent: Color,
    pub(crate) success: Color,
    pub(crate) danger: Color,
    pub(crate) border: Color,
}

const LIGHT_PALETTE: Palette = Palette {
    background: Color::from_rgb(0.98, 0.97, 0.96),
    surface: Color::from_rgb(1.0, 1.0, 1.0),
    foreground: Color::from_rgb(0.13, 0.13, 0.14),
    dim_foreground: Color::from_rgb(0.45, 0.45, 0.47),
    accent: Color::from_rgb(0.15, 0.27, 0.55),
    success: Color::from_rgb(0.13, 0.55, 0.30),
    danger: Color::from_rgb(0.75, 0.18, 0.18),
    border: Color::from_rgb(0.85, 0.84, 0.83),
};

/// Application theme wrapping the active palette.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AppTheme {
    palette: Palette,
}

impl AppTheme {
    pub(crate) fn palette(&self) -> &Palette {
        &self.palette
    }
}

/// Owns the active theme and derives the iced theme from it.
#[derive(Debug)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self {
            current: AppTheme {
                palette: LIGHT_PALETTE,
            },
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        let palette = self.current.palette;
        Theme::custom(
            String::from("vetra"),
            iced::theme::Palette {
                background: palette.background,
                text: palette.foreground,
                primary: palette.accent,
                success: palette.success,
                danger: palette.danger,
                ..Theme::Light.palette()
            },
        )
    }
}

/// Read-only theme handle threaded through widget props.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Parse a `#rrggbb` swatch into a color.
pub(crate) fn color_from_hex(hex: &str) -> Option<Color> {
    let raw = hex.strip_prefix('#')?;
    if raw.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&raw[0..2], 16).ok()?;
    let g = u8::from_str_radix(&raw[2..4], 16).ok()?;
    let b = u8::from_str_radix(&raw[4..6], 16).ok()?;
    Some(Color::from_rgb8(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::color_from_hex;

    #[test]
    fn given_valid_hex_when_parsing_then_channels_match() {
        let color = color_from_hex("#FF8000").expect("hex should parse");

        assert!((color.r - 1.0).abs() < f32::EPSILON);
        assert!(color.g > 0.49 && color.g < 0.52);
        assert!(color.b.abs() < f32::EPSILON);
    }

    #[test]
    fn given_malformed_hex_when_parsing_then_none_is_returned() {
        assert!(color_from_hex("FF8000").is_none());
        assert!(color_from_hex("#FF80").is_none());
        assert!(color_from_hex("#GGGGGG").is_none());
    }
}
