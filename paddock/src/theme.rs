use iced::theme::Palette;
use iced::widget::container;
use iced::{Border, Color, Theme, border};

/// Resolved colors of the shell chrome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ShellPalette {
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) overlay: Color,
    pub(crate) border: Color,
    pub(crate) foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) accent: Color,
    pub(crate) danger: Color,
    pub(crate) success: Color,
    pub(crate) warning: Color,
    pub(crate) backdrop: Color,
}

impl Default for ShellPalette {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0x16, 0x18, 0x22),
            surface: Color::from_rgb8(0x0F, 0x11, 0x15),
            overlay: Color::from_rgb8(0x23, 0x25, 0x30),
            border: Color::from_rgb8(0x2E, 0x32, 0x3F),
            foreground: Color::from_rgb8(0xC0, 0xC5, 0xCE),
            dim_foreground: Color::from_rgb8(0x6B, 0x72, 0x80),
            accent: Color::from_rgb8(0x4F, 0xA6, 0xED),
            danger: Color::from_rgb8(0xE0, 0x6C, 0x75),
            success: Color::from_rgb8(0x98, 0xC3, 0x79),
            warning: Color::from_rgb8(0xE5, 0xC0, 0x7B),
            backdrop: Color::from_rgba8(0x00, 0x00, 0x00, 0.45),
        }
    }
}

/// Application theme shared by every widget and component.
#[derive(Debug, Clone, Default)]
pub(crate) struct AppTheme {
    palette: ShellPalette,
}

impl AppTheme {
    pub(crate) fn palette(&self) -> &ShellPalette {
        &self.palette
    }

    /// Build the iced theme used for built-in widget defaults.
    pub(crate) fn iced_theme(&self) -> Theme {
        let palette = &self.palette;
        Theme::custom(
            "paddock",
            Palette {
                background: palette.background,
                text: palette.foreground,
                primary: palette.accent,
                success: palette.success,
                warning: palette.warning,
                danger: palette.danger,
            },
        )
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Return a styled container closure for popup surfaces (menus, panels).
pub(crate) fn popup_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&Theme) -> container::Style + 'static {
    let palette = *theme.theme.palette();
    move |_theme: &Theme| container::Style {
        background: Some(palette.overlay.into()),
        text_color: Some(palette.foreground),
        border: Border {
            width: 1.0,
            color: palette.border,
            radius: border::Radius::new(6.0),
        },
        ..Default::default()
    }
}

/// Return a styled container closure for flat chrome bands.
pub(crate) fn surface_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&Theme) -> container::Style + 'static {
    let palette = *theme.theme.palette();
    move |_theme: &Theme| container::Style {
        background: Some(palette.surface.into()),
        text_color: Some(palette.foreground),
        ..Default::default()
    }
}
