use iced::widget::{Space, container, mouse_area, opaque};
use iced::{Element, Length};

use crate::theme::ThemeProps;

/// UI events emitted by the overlay backdrop.
#[derive(Debug, Clone)]
pub(crate) enum BackdropEvent {
    Pressed,
}

/// Props for rendering the dimmed backdrop behind an overlay sidebar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BackdropProps<'a> {
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a full-size dimmed layer that swallows input below it.
pub(crate) fn view<'a>(props: BackdropProps<'a>) -> Element<'a, BackdropEvent> {
    let color = props.theme.theme.palette().backdrop;

    let shade = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(color.into()),
            ..Default::default()
        });

    opaque(mouse_area(shade).on_press(BackdropEvent::Pressed))
}
