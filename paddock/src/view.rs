use chrono::Utc;
use iced::widget::{button, column, container, row, scrollable, stack, text};
use iced::{Element, Length, Padding, Rectangle, Theme, alignment};

use super::{App, AppEvent, Shell};
use crate::components::backdrop::{self, BackdropEvent, BackdropProps};
use crate::layout::{
    self, FrameGeometry, TOP_BAR_HEIGHT, TOP_BAR_PADDING, TOP_BAR_SPACING,
};
use crate::theme::{ThemeProps, surface_style};
use crate::widgets::notifications::view::{
    self as notifications_view, NotificationsViewProps,
};
use crate::widgets::profile::ProfileMenuAction;
use crate::widgets::profile::view::{self as profile_view, ProfileViewProps};
use crate::widgets::sidebar::view::{self as sidebar_view, SidebarViewProps};
use crate::widgets::sidebar::{SidebarIntent, SidebarRenderMode};
use crate::widgets::top_bar::view::{self as top_bar_view, TopBarProps};

const PAGE_PADDING: f32 = 24.0;
const PAGE_SPACING: f32 = 12.0;
const PAGE_TITLE_SIZE: f32 = 24.0;
const SIGN_IN_TITLE_SIZE: f32 = 28.0;
const SIGN_IN_SPACING: f32 = 16.0;

/// Render the root view: the shell when signed in, the sign-in screen
/// otherwise.
pub(crate) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = ThemeProps::new(&app.theme);
    let palette = *app.theme.palette();

    let content = match &app.shell {
        Some(shell) => shell_view(app, shell, theme),
        None => signed_out_view(app, theme),
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(palette.background.into()),
            text_color: Some(palette.foreground),
            ..Default::default()
        })
        .into()
}

fn shell_view<'a>(
    app: &'a App,
    shell: &'a Shell,
    theme: ThemeProps<'a>,
) -> Element<'a, AppEvent> {
    let window = app.window_size;
    let sidebar_layout = shell.sidebar.layout();
    let frame = layout::frame(sidebar_layout, window);

    let main = column![top_bar(shell, theme), page(shell, &frame)]
        .width(Length::Fill)
        .height(Length::Fill);

    let base: Element<'a, AppEvent> = match frame.sidebar {
        Some(_) if frame.sidebar_mode == SidebarRenderMode::Inline => {
            let rail = container(sidebar(shell, theme))
                .width(Length::Fixed(frame.content_offset))
                .height(Length::Fill);
            row![rail, main].height(Length::Fill).into()
        },
        _ => main.into(),
    };

    let mut layers = vec![base];

    if let (Some(shade), Some(surface)) = (frame.backdrop, frame.sidebar) {
        let backdrop = backdrop::view(BackdropProps { theme }).map(|event| {
            match event {
                BackdropEvent::Pressed => {
                    AppEvent::sidebar_intent(SidebarIntent::BackdropPressed)
                },
            }
        });
        layers.push(positioned(backdrop, shade));
        layers.push(positioned(sidebar(shell, theme), surface));
    }

    if shell.notifications.is_open() {
        let panel = layout::notification_panel_rect(window);
        let surface = notifications_view::view(NotificationsViewProps {
            vm: shell.notifications.vm(),
            theme,
            panel: panel.size(),
            now: Utc::now(),
        })
        .map(AppEvent::notifications_intent);
        layers.push(positioned(surface, panel));
    }

    let profile = shell.profile.vm();
    if profile.menu_open {
        let menu = profile_view::menu_view(ProfileViewProps {
            vm: profile,
            theme,
        })
        .map(AppEvent::profile_intent);
        let rect =
            layout::profile_menu_rect(window, ProfileMenuAction::ALL.len());
        layers.push(positioned(menu, rect));
    }

    stack(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn top_bar<'a>(
    shell: &'a Shell,
    theme: ThemeProps<'a>,
) -> Element<'a, AppEvent> {
    let leading = top_bar_view::view(TopBarProps {
        vm: shell.top_bar.vm(),
        theme,
        sidebar_open: shell.sidebar.layout().is_overlay_open(),
        notifications_open: shell.notifications.is_open(),
    })
    .map(AppEvent::top_bar_intent);

    let badge = profile_view::view(ProfileViewProps {
        vm: shell.profile.vm(),
        theme,
    })
    .map(AppEvent::profile_intent);

    container(
        row![leading, badge]
            .spacing(TOP_BAR_SPACING)
            .align_y(alignment::Vertical::Center),
    )
    .padding([0.0, TOP_BAR_PADDING])
    .width(Length::Fill)
    .height(Length::Fixed(TOP_BAR_HEIGHT))
    .align_y(alignment::Vertical::Center)
    .style(surface_style(theme))
    .into()
}

fn sidebar<'a>(
    shell: &'a Shell,
    theme: ThemeProps<'a>,
) -> Element<'a, AppEvent> {
    sidebar_view::view(SidebarViewProps {
        vm: shell.sidebar.vm(),
        theme,
    })
    .map(AppEvent::sidebar_intent)
}

/// Page area for the active navigation item. Scrolling is suppressed
/// while the overlay sidebar is open.
fn page<'a>(shell: &'a Shell, frame: &FrameGeometry) -> Element<'a, AppEvent> {
    let item = shell.sidebar.active_item();
    let unread = shell.notifications.unread_count();

    let body = column![
        text(item.label()).size(PAGE_TITLE_SIZE),
        text(format!("{unread} unread notifications")),
    ]
    .spacing(PAGE_SPACING)
    .padding(PAGE_PADDING)
    .width(Length::Fill);

    let height = Length::Fixed(frame.content.height);
    if frame.scroll_locked {
        container(body)
            .width(Length::Fill)
            .height(height)
            .clip(true)
            .into()
    } else {
        scrollable(body).width(Length::Fill).height(height).into()
    }
}

fn signed_out_view<'a>(
    app: &'a App,
    theme: ThemeProps<'a>,
) -> Element<'a, AppEvent> {
    let palette = *theme.theme.palette();
    let can_sign_in = app.config.token.is_some() && app.sources.is_some();

    let hint = if app.sources.is_none() {
        "The backend client could not be initialized."
    } else if app.config.token.is_none() {
        "Set PADDOCK_API_TOKEN or api_token in shell.json to sign in."
    } else {
        "Signed out."
    };

    let sign_in = button(text("Sign in"))
        .on_press_maybe(can_sign_in.then_some(AppEvent::SignIn));

    let content = column![
        text("Paddock").size(SIGN_IN_TITLE_SIZE),
        text(hint).color(palette.dim_foreground),
        sign_in,
    ]
    .spacing(SIGN_IN_SPACING)
    .align_x(alignment::Horizontal::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Place `content` at `rect` inside a full-window layer.
///
/// Plain containers do not capture pointer input, so the uncovered part of
/// the layer lets clicks through to the layers below.
fn positioned<'a>(
    content: Element<'a, AppEvent>,
    rect: Rectangle,
) -> Element<'a, AppEvent> {
    let surface = container(content)
        .width(Length::Fixed(rect.width))
        .height(Length::Fixed(rect.height));

    container(surface)
        .padding(Padding {
            top: rect.y,
            left: rect.x,
            ..Padding::ZERO
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
