use iced::widget::button::Status as ButtonStatus;
use iced::widget::{Space, button, container, row, text};
use iced::{Border, Element, Length, alignment, border};

use crate::theme::{ShellPalette, ThemeProps};

const NAV_ITEM_HEIGHT: f32 = 40.0;
const NAV_ITEM_RADIUS: f32 = 6.0;
const NAV_GLYPH_SIZE: f32 = 16.0;
const NAV_GLYPH_WIDTH: f32 = 24.0;
const NAV_LABEL_SIZE: f32 = 14.0;
const NAV_BADGE_SIZE: f32 = 11.0;
const NAV_HORIZONTAL_PADDING: f32 = 12.0;

/// UI events emitted by a sidebar navigation entry.
#[derive(Debug, Clone)]
pub(crate) enum NavItemEvent {
    Pressed,
}

/// Props for rendering a sidebar navigation entry.
///
/// A minimized sidebar passes no label and the entry collapses to its glyph.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavItemProps<'a> {
    pub(crate) glyph: &'a str,
    pub(crate) label: Option<&'a str>,
    pub(crate) badge: Option<usize>,
    pub(crate) active: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render one navigation entry of the sidebar.
pub(crate) fn view<'a>(props: NavItemProps<'a>) -> Element<'a, NavItemEvent> {
    let palette = *props.theme.theme.palette();
    let active = props.active;

    let glyph = text(props.glyph)
        .size(NAV_GLYPH_SIZE)
        .width(Length::Fixed(NAV_GLYPH_WIDTH))
        .align_x(alignment::Horizontal::Center);

    let content: Element<'a, NavItemEvent> = match props.label {
        Some(label) => {
            let mut content = row![
                glyph,
                text(label).size(NAV_LABEL_SIZE),
                Space::new().width(Length::Fill),
            ]
            .spacing(10)
            .align_y(alignment::Vertical::Center);

            if let Some(count) = props.badge.filter(|count| *count > 0) {
                content = content.push(
                    container(
                        text(count.to_string())
                            .size(NAV_BADGE_SIZE)
                            .color(palette.background),
                    )
                    .padding([1.0, 6.0])
                    .style(move |_| container::Style {
                        background: Some(palette.danger.into()),
                        border: border::rounded(8.0),
                        ..Default::default()
                    }),
                );
            }

            content.into()
        },
        None => container(glyph)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into(),
    };

    button(
        container(content)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center),
    )
    .padding([0.0, NAV_HORIZONTAL_PADDING])
    .width(Length::Fill)
    .height(Length::Fixed(NAV_ITEM_HEIGHT))
    .style(move |_, status| nav_item_style(&palette, status, active))
    .on_press(NavItemEvent::Pressed)
    .into()
}

fn nav_item_style(
    palette: &ShellPalette,
    status: ButtonStatus,
    active: bool,
) -> button::Style {
    let background = match (active, status) {
        (true, _) => Some(palette.accent.scale_alpha(0.18).into()),
        (false, ButtonStatus::Hovered | ButtonStatus::Pressed) => {
            Some(palette.overlay.into())
        },
        _ => None,
    };

    button::Style {
        background,
        text_color: if active {
            palette.accent
        } else {
            palette.foreground
        },
        border: Border {
            radius: border::Radius::new(NAV_ITEM_RADIUS),
            ..Default::default()
        },
        ..Default::default()
    }
}
