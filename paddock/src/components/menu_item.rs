use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, text};
use iced::{Element, Length, alignment};

use crate::layout::MENU_ITEM_HEIGHT;
use crate::theme::{ShellPalette, ThemeProps};

const MENU_ITEM_FONT_SIZE: f32 = 13.0;
const MENU_ITEM_HORIZONTAL_PADDING: f32 = 10.0;
const MENU_ITEM_VERTICAL_PADDING: f32 = 1.0;

/// UI events emitted by a menu item.
#[derive(Debug, Clone)]
pub(crate) enum MenuItemEvent {
    Pressed,
}

/// Props for rendering a menu item.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuItemProps<'a> {
    pub(crate) label: &'a str,
    pub(crate) theme: ThemeProps<'a>,
    /// Render the label in the danger color (e.g. "Sign out").
    pub(crate) danger: bool,
}

/// Render a single menu row used in dropdown menus.
pub(crate) fn view<'a>(props: MenuItemProps<'a>) -> Element<'a, MenuItemEvent> {
    let palette = *props.theme.theme.palette();
    let danger = props.danger;

    let label = text(props.label)
        .size(MENU_ITEM_FONT_SIZE)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Center);

    button(label)
        .padding([MENU_ITEM_VERTICAL_PADDING, MENU_ITEM_HORIZONTAL_PADDING])
        .width(Length::Fill)
        .height(Length::Fixed(MENU_ITEM_HEIGHT))
        .style(move |_, status| menu_button_style(&palette, status, danger))
        .on_press(MenuItemEvent::Pressed)
        .into()
}

fn menu_button_style(
    palette: &ShellPalette,
    status: ButtonStatus,
    danger: bool,
) -> button::Style {
    let hovered =
        matches!(status, ButtonStatus::Hovered | ButtonStatus::Pressed);

    let background = if hovered {
        Some(palette.accent.into())
    } else {
        Some(palette.overlay.into())
    };

    let text_color = match (hovered, danger) {
        (true, _) => palette.background,
        (false, true) => palette.danger,
        (false, false) => palette.foreground,
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}
