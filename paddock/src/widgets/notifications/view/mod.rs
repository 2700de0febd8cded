use chrono::{DateTime, Utc};
use iced::widget::{
    Column, Space, button, column, container, mouse_area, row, scrollable,
    stack, text,
};
use iced::{Element, Length, Padding, Size, Theme, alignment};

use super::event::NotificationsIntent;
use super::model::{
    Notification, NotificationTab, NotificationsViewModel, RowMenuViewModel,
    relative_time,
};
use crate::components::menu_item::{self, MenuItemEvent, MenuItemProps};
use crate::layout::{
    MENU_PADDING, NOTIFICATION_ROW_HEIGHT, PANEL_HEADER_HEIGHT,
    PANEL_TABS_HEIGHT, ROW_ACTION_SIZE, ROW_MENU_WIDTH, ROW_PADDING,
};
use crate::theme::{ThemeProps, popup_style};

const TITLE_SIZE: f32 = 15.0;
const ROW_TITLE_SIZE: f32 = 13.0;
const ROW_DETAIL_SIZE: f32 = 12.0;
const ROW_TIME_SIZE: f32 = 11.0;
const UNREAD_DOT_SIZE: f32 = 8.0;
const TAB_FONT_SIZE: f32 = 13.0;

/// Props for the notification panel view.
#[derive(Debug, Clone)]
pub(crate) struct NotificationsViewProps<'a> {
    pub(crate) vm: NotificationsViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    /// Panel surface size resolved by the layout frame.
    pub(crate) panel: Size,
    /// Reference time for relative timestamps.
    pub(crate) now: DateTime<Utc>,
}

/// Render the open notification panel with its row menu layer.
pub(crate) fn view(
    props: NotificationsViewProps<'_>,
) -> Element<'_, NotificationsIntent, Theme, iced::Renderer> {
    let NotificationsViewProps {
        vm,
        theme,
        panel,
        now,
    } = props;

    let body: Element<'_, NotificationsIntent> = if vm.show_spinner {
        placeholder("Loading notifications…", theme)
    } else if vm.items.is_empty() {
        placeholder(empty_label(vm.tab), theme)
    } else {
        let rows = vm.items.into_iter().fold(Column::new(), |rows, item| {
            rows.push(notification_row(item, now, theme))
        });
        scrollable(rows)
            .on_scroll(|viewport| NotificationsIntent::ListScrolled {
                offset_y: viewport.absolute_offset().y,
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    };

    let content = column![
        header(vm.unread_count, theme),
        tabs(vm.tab, theme),
        body
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    let mut layers = stack![content]
        .width(Length::Fixed(panel.width))
        .height(Length::Fixed(panel.height));

    if let Some(menu) = vm.row_menu {
        layers = layers.push(row_menu(menu, theme));
    }

    container(layers)
        .width(Length::Fixed(panel.width))
        .height(Length::Fixed(panel.height))
        .clip(true)
        .style(popup_style(theme))
        .into()
}

fn header<'a>(
    unread_count: usize,
    theme: ThemeProps<'a>,
) -> Element<'a, NotificationsIntent> {
    let palette = *theme.theme.palette();

    let mark_all = button(text("Mark all as read").size(12))
        .padding([4.0, 8.0])
        .on_press_maybe(
            (unread_count > 0).then_some(NotificationsIntent::MarkAllRead),
        )
        .style(move |_, status| button::Style {
            background: None,
            text_color: match status {
                button::Status::Disabled => palette.dim_foreground,
                button::Status::Hovered | button::Status::Pressed => {
                    palette.foreground
                },
                button::Status::Active => palette.accent,
            },
            ..Default::default()
        });

    let close = button(text("✕").size(12))
        .padding([4.0, 8.0])
        .on_press(NotificationsIntent::Close)
        .style(move |_, status| button::Style {
            background: None,
            text_color: match status {
                button::Status::Hovered | button::Status::Pressed => {
                    palette.foreground
                },
                _ => palette.dim_foreground,
            },
            ..Default::default()
        });

    container(
        row![
            text("Notifications").size(TITLE_SIZE),
            Space::new().width(Length::Fill),
            mark_all,
            close
        ]
        .align_y(alignment::Vertical::Center),
    )
    .padding([0.0, ROW_PADDING])
    .width(Length::Fill)
    .height(Length::Fixed(PANEL_HEADER_HEIGHT))
    .align_y(alignment::Vertical::Center)
    .into()
}

fn tabs<'a>(
    active: NotificationTab,
    theme: ThemeProps<'a>,
) -> Element<'a, NotificationsIntent> {
    let palette = *theme.theme.palette();

    let buttons = NotificationTab::ALL.into_iter().map(|tab| -> Element<'a, _> {
        let selected = tab == active;
        button(text(tab.label()).size(TAB_FONT_SIZE))
            .padding([4.0, 10.0])
            .on_press(NotificationsIntent::SetTab(tab))
            .style(move |_, status| button::Style {
                background: (selected
                    || matches!(status, button::Status::Hovered))
                .then(|| palette.surface.into()),
                text_color: if selected {
                    palette.accent
                } else {
                    palette.dim_foreground
                },
                border: iced::border::rounded(4.0),
                ..Default::default()
            })
            .into()
    });

    container(row(buttons).spacing(4).align_y(alignment::Vertical::Center))
        .padding([0.0, ROW_PADDING])
        .width(Length::Fill)
        .height(Length::Fixed(PANEL_TABS_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .into()
}

fn notification_row<'a>(
    item: &'a Notification,
    now: DateTime<Utc>,
    theme: ThemeProps<'a>,
) -> Element<'a, NotificationsIntent> {
    let palette = *theme.theme.palette();
    let unread = item.unread;

    let dot = container(Space::new())
        .width(Length::Fixed(UNREAD_DOT_SIZE))
        .height(Length::Fixed(UNREAD_DOT_SIZE))
        .style(move |_| container::Style {
            background: unread.then(|| palette.accent.into()),
            border: iced::border::rounded(UNREAD_DOT_SIZE / 2.0),
            ..Default::default()
        });

    let mut details = Column::new()
        .spacing(2)
        .width(Length::Fill)
        .push(text(item.title.as_str()).size(ROW_TITLE_SIZE));
    if let Some(description) = &item.description {
        details = details.push(
            text(description.as_str())
                .size(ROW_DETAIL_SIZE)
                .color(palette.dim_foreground)
                .wrapping(text::Wrapping::None),
        );
    }
    details = details.push(
        text(relative_time(item.created_at, now))
            .size(ROW_TIME_SIZE)
            .color(palette.dim_foreground),
    );

    // Pressing an unread row marks it read.
    let details: Element<'a, NotificationsIntent> = if unread {
        mouse_area(details)
            .on_press(NotificationsIntent::MarkRead {
                id: item.id.clone(),
            })
            .into()
    } else {
        details.into()
    };

    let action = button(
        container(text("⋯"))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .padding(0)
    .width(Length::Fixed(ROW_ACTION_SIZE))
    .height(Length::Fixed(ROW_ACTION_SIZE))
    .on_press(NotificationsIntent::ToggleRowMenu {
        id: item.id.clone(),
    })
    .style(move |_, status| button::Style {
        background: matches!(
            status,
            button::Status::Hovered | button::Status::Pressed
        )
        .then(|| palette.surface.into()),
        text_color: palette.foreground,
        border: iced::border::rounded(4.0),
        ..Default::default()
    });

    container(
        row![dot, details, action]
            .spacing(10)
            .align_y(alignment::Vertical::Center),
    )
    .padding([0.0, ROW_PADDING])
    .width(Length::Fill)
    .height(Length::Fixed(NOTIFICATION_ROW_HEIGHT))
    .align_y(alignment::Vertical::Center)
    .into()
}

fn row_menu<'a>(
    menu: RowMenuViewModel,
    theme: ThemeProps<'a>,
) -> Element<'a, NotificationsIntent> {
    let id = menu.id;
    let items = menu.actions.into_iter().map(|action| {
        let id = id.clone();
        menu_item::view(MenuItemProps {
            label: action.label(),
            theme,
            danger: false,
        })
        .map(move |event| match event {
            MenuItemEvent::Pressed => NotificationsIntent::RowMenuAction {
                id: id.clone(),
                action,
            },
        })
    });

    let surface = container(Column::with_children(items).width(Length::Fill))
        .padding(MENU_PADDING)
        .width(Length::Fixed(ROW_MENU_WIDTH))
        .style(popup_style(theme));

    container(surface)
        .padding(Padding {
            top: menu.position.y,
            left: menu.position.x,
            ..Padding::ZERO
        })
        .into()
}

fn placeholder<'a>(
    label: &'a str,
    theme: ThemeProps<'a>,
) -> Element<'a, NotificationsIntent> {
    container(
        text(label)
            .size(ROW_TITLE_SIZE)
            .color(theme.theme.palette().dim_foreground),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn empty_label(tab: NotificationTab) -> &'static str {
    match tab {
        NotificationTab::All => "You're all caught up",
        NotificationTab::Read => "No read notifications",
        NotificationTab::Unread => "No unread notifications",
    }
}
