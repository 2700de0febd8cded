use iced::widget::{
    Column, Space, button, column, container, row, scrollable, text,
};
use iced::{Element, Length, Theme, alignment};

use super::event::SidebarIntent;
use super::model::{Density, NavItem, SidebarRenderMode, SidebarViewModel};
use crate::components::nav_item::{self, NavItemEvent, NavItemProps};
use crate::theme::{ShellPalette, ThemeProps};

const SIDEBAR_PADDING: f32 = 12.0;
const SIDEBAR_SPACING: f32 = 4.0;
const CAPTION_SIZE: f32 = 11.0;
const FOOTER_BUTTON_HEIGHT: f32 = 32.0;

/// Props for the sidebar view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewProps<'a> {
    pub(crate) vm: SidebarViewModel,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the sidebar surface. Placement in the frame is composed by the app.
pub(crate) fn view(
    props: SidebarViewProps<'_>,
) -> Element<'_, SidebarIntent, Theme, iced::Renderer> {
    let vm = props.vm;
    let palette = *props.theme.theme.palette();
    let labels = vm.shows_labels();
    let captions = vm.shows_captions();

    let mut entries =
        Column::new().spacing(SIDEBAR_SPACING).width(Length::Fill);

    if captions {
        entries = entries.push(
            text("NAVIGATION")
                .size(CAPTION_SIZE)
                .color(palette.dim_foreground),
        );
    }

    for item in NavItem::ALL {
        let badge = (captions && item == NavItem::Notifications)
            .then_some(vm.notification_badge);
        let entry = nav_item::view(NavItemProps {
            glyph: item.glyph(),
            label: labels.then(|| item.label()),
            badge,
            active: vm.active_item == item,
            theme: props.theme,
        })
        .map(move |event| match event {
            NavItemEvent::Pressed => SidebarIntent::SelectItem(item),
        });
        entries = entries.push(entry);
    }

    let list = scrollable(entries).width(Length::Fill).height(Length::Fill);

    let mut content = column![list].width(Length::Fill).height(Length::Fill);
    let footer = match vm.layout.render_mode() {
        SidebarRenderMode::Inline => density_toggle(vm, props.theme),
        SidebarRenderMode::Overlay => close_button(props.theme),
    };
    content = content.push(footer);

    container(content)
        .padding(SIDEBAR_PADDING)
        .width(Length::Fixed(vm.layout.panel_width()))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(palette.surface.into()),
            text_color: Some(palette.foreground),
            border: iced::Border {
                width: 1.0,
                color: palette.border,
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Footer control hiding the overlay sidebar.
fn close_button<'a>(
    theme: ThemeProps<'a>,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let palette = *theme.theme.palette();

    button(
        row![text("✕"), text("Close").size(13)]
            .spacing(10)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(SidebarIntent::ToggleOpen)
    .width(Length::Fill)
    .height(Length::Fixed(FOOTER_BUTTON_HEIGHT))
    .style(move |_, status| footer_style(&palette, status))
    .into()
}

/// Footer control switching between expanded and minimized density.
fn density_toggle<'a>(
    vm: SidebarViewModel,
    theme: ThemeProps<'a>,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let palette = *theme.theme.palette();
    let (glyph, label) = match vm.layout.density {
        Density::Expanded => ("«", "Collapse"),
        Density::Minimized => ("»", "Expand"),
    };

    let content: Element<'a, SidebarIntent> = if vm.shows_labels() {
        row![
            text(glyph),
            text(label).size(13),
            Space::new().width(Length::Fill)
        ]
        .spacing(10)
        .align_y(alignment::Vertical::Center)
        .into()
    } else {
        container(text(glyph))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into()
    };

    button(content)
        .on_press(SidebarIntent::ToggleDensity)
        .width(Length::Fill)
        .height(Length::Fixed(FOOTER_BUTTON_HEIGHT))
        .style(move |_, status| footer_style(&palette, status))
        .into()
}

fn footer_style(
    palette: &ShellPalette,
    status: button::Status,
) -> button::Style {
    button::Style {
        background: matches!(
            status,
            button::Status::Hovered | button::Status::Pressed
        )
        .then(|| palette.overlay.into()),
        text_color: palette.dim_foreground,
        ..Default::default()
    }
}
