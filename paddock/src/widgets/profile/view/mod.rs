use iced::widget::{Column, button, column, container, row, text};
use iced::{Element, Length, Theme, alignment, border};

use super::event::ProfileIntent;
use super::model::{ProfileMenuAction, ProfileViewModel};
use crate::components::menu_item::{self, MenuItemEvent, MenuItemProps};
use crate::layout::{
    MENU_PADDING, PROFILE_MENU_WIDTH, PROFILE_TRIGGER_WIDTH, TRIGGER_SIZE,
};
use crate::theme::{ThemeProps, popup_style};

const AVATAR_SIZE: f32 = 32.0;
const AVATAR_FONT_SIZE: f32 = 13.0;
const NAME_SIZE: f32 = 13.0;
const CAPTION_SIZE: f32 = 11.0;

/// Props for the profile badge views.
#[derive(Debug, Clone)]
pub(crate) struct ProfileViewProps<'a> {
    pub(crate) vm: ProfileViewModel,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the badge trigger shown at the end of the top bar.
pub(crate) fn view(
    props: ProfileViewProps<'_>,
) -> Element<'_, ProfileIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.palette();
    let badge = props.vm.badge;
    let menu_open = props.vm.menu_open;

    let avatar = container(text(badge.avatar).size(AVATAR_FONT_SIZE))
        .width(Length::Fixed(AVATAR_SIZE))
        .height(Length::Fixed(AVATAR_SIZE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(palette.accent.into()),
            text_color: Some(palette.background),
            border: border::rounded(AVATAR_SIZE / 2.0),
            ..Default::default()
        });

    let mut labels = Column::new()
        .width(Length::Fill)
        .push(text(badge.name).size(NAME_SIZE).wrapping(text::Wrapping::None));
    if let Some(caption) = badge.caption {
        labels = labels.push(
            text(caption)
                .size(CAPTION_SIZE)
                .color(palette.dim_foreground)
                .wrapping(text::Wrapping::None),
        );
    }

    let content = row![avatar, labels, text("▾").size(NAME_SIZE)]
        .spacing(8)
        .align_y(alignment::Vertical::Center);

    button(container(content).clip(true))
        .on_press(ProfileIntent::ToggleMenu)
        .padding([4.0, 6.0])
        .width(Length::Fixed(PROFILE_TRIGGER_WIDTH))
        .height(Length::Fixed(TRIGGER_SIZE))
        .style(move |_, status| button::Style {
            background: (menu_open
                || matches!(
                    status,
                    button::Status::Hovered | button::Status::Pressed
                ))
            .then(|| palette.overlay.into()),
            text_color: palette.foreground,
            border: border::rounded(6.0),
            ..Default::default()
        })
        .into()
}

/// Render the dropdown surface listing the profile actions.
pub(crate) fn menu_view(
    props: ProfileViewProps<'_>,
) -> Element<'_, ProfileIntent, Theme, iced::Renderer> {
    let theme = props.theme;
    let items = ProfileMenuAction::ALL.into_iter().map(|action| {
        menu_item::view(MenuItemProps {
            label: action.label(),
            theme,
            danger: action.is_destructive(),
        })
        .map(move |event| match event {
            MenuItemEvent::Pressed => ProfileIntent::MenuAction(action),
        })
    });

    container(column(items).width(Length::Fill))
        .padding(MENU_PADDING)
        .width(Length::Fixed(PROFILE_MENU_WIDTH))
        .style(popup_style(theme))
        .into()
}
