use iced::widget::{Space, row, text};
use iced::{Element, Length, alignment};

use super::event::TopBarIntent;
use super::model::TopBarViewModel;
use crate::components::icon_button::{self, IconButtonEvent, IconButtonProps};
use crate::layout::{TOP_BAR_SPACING, TRIGGER_SIZE};
use crate::theme::ThemeProps;

const TITLE_SIZE: f32 = 18.0;
const TRIGGER_GLYPH_SIZE: f32 = 18.0;

/// Props for rendering the leading part of the top bar.
#[derive(Debug, Clone)]
pub(crate) struct TopBarProps<'a> {
    pub(crate) vm: TopBarViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    /// Highlight the sidebar trigger while the overlay sidebar is open.
    pub(crate) sidebar_open: bool,
    /// Highlight the bell while the notification panel is open.
    pub(crate) notifications_open: bool,
}

/// Render the sidebar trigger, the page title and the notification bell.
///
/// The profile badge is appended by the app after this row.
pub(crate) fn view<'a>(props: TopBarProps<'a>) -> Element<'a, TopBarIntent> {
    let sidebar_trigger = icon_button::view(IconButtonProps {
        glyph: "☰",
        theme: props.theme,
        size: TRIGGER_SIZE,
        glyph_size: TRIGGER_GLYPH_SIZE,
        active: props.sidebar_open,
        badge: None,
    })
    .map(|event| match event {
        IconButtonEvent::Pressed => TopBarIntent::SidebarTriggerPressed,
    });

    let bell = icon_button::view(IconButtonProps {
        glyph: "🔔",
        theme: props.theme,
        size: TRIGGER_SIZE,
        glyph_size: TRIGGER_GLYPH_SIZE,
        active: props.notifications_open,
        badge: Some(props.vm.unread_count),
    })
    .map(|event| match event {
        IconButtonEvent::Pressed => TopBarIntent::NotificationsTriggerPressed,
    });

    let title = text(props.vm.title)
        .size(TITLE_SIZE)
        .wrapping(text::Wrapping::None);

    row![sidebar_trigger, title, Space::new().width(Length::Fill), bell]
        .spacing(TOP_BAR_SPACING)
        .width(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .into()
}
