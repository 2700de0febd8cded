use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, container, stack, text};
use iced::{Border, Element, Length, alignment, border};

use crate::theme::{ShellPalette, ThemeProps};

const ICON_BUTTON_RADIUS: f32 = 6.0;
const BADGE_FONT_SIZE: f32 = 10.0;
const BADGE_HEIGHT: f32 = 16.0;
const BADGE_MAX_COUNT: usize = 99;

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Props for rendering a square glyph button with an optional count badge.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) glyph: &'a str,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) glyph_size: f32,
    /// Highlight while the overlay it controls is open.
    pub(crate) active: bool,
    pub(crate) badge: Option<usize>,
}

/// Render a square icon button used for top bar triggers.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = *props.theme.theme.palette();
    let active = props.active;

    let glyph = container(text(props.glyph).size(props.glyph_size))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let trigger = button(glyph)
        .on_press(IconButtonEvent::Pressed)
        .padding(0.0)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, status| icon_button_style(&palette, status, active));

    let Some(label) = badge_label(props.badge) else {
        return trigger.into();
    };

    let badge = container(
        text(label).size(BADGE_FONT_SIZE).color(palette.background),
    )
    .padding([0.0, 4.0])
    .height(Length::Fixed(BADGE_HEIGHT))
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        background: Some(palette.danger.into()),
        border: border::rounded(BADGE_HEIGHT / 2.0),
        ..Default::default()
    });

    let badge_layer = container(badge)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top);

    stack![trigger, badge_layer].into()
}

/// Badge text for a count; zero shows no badge.
fn badge_label(count: Option<usize>) -> Option<String> {
    match count {
        None | Some(0) => None,
        Some(count) if count > BADGE_MAX_COUNT => {
            Some(format!("{BADGE_MAX_COUNT}+"))
        },
        Some(count) => Some(count.to_string()),
    }
}

fn icon_button_style(
    palette: &ShellPalette,
    status: ButtonStatus,
    active: bool,
) -> button::Style {
    let highlighted = active
        || matches!(status, ButtonStatus::Hovered | ButtonStatus::Pressed);

    button::Style {
        background: highlighted.then(|| palette.overlay.into()),
        text_color: if highlighted {
            palette.accent
        } else {
            palette.foreground
        },
        border: Border {
            radius: border::Radius::new(ICON_BUTTON_RADIUS),
            ..Default::default()
        },
        ..Default::default()
    }
}
