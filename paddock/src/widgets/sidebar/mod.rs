mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{SidebarEffect, SidebarEvent, SidebarIntent};
use iced::Task;
#[cfg(test)]
pub(crate) use model::Density;
use model::SidebarViewModel;
pub(crate) use model::{NavItem, Presence, SidebarLayout, SidebarRenderMode};
pub(crate) use reducer::SidebarCtx;
use state::SidebarState;

use crate::breakpoint::{
    BreakpointSubscription, MID_WIDTH_RANGE, ViewportMode, ViewportSubscriber,
};

/// Sidebar widget owning its private state and its mid-width
/// breakpoint subscription.
pub(crate) struct SidebarWidget {
    state: SidebarState,
    _mid_width: BreakpointSubscription,
}

impl SidebarWidget {
    /// Mount the sidebar for the current viewport mode.
    ///
    /// The mid-width subscription is acquired here and released when the
    /// widget is dropped. Its initial publication is reduced before this
    /// returns.
    pub(crate) fn mount(
        mode: ViewportMode,
        viewport: &dyn ViewportSubscriber<SidebarIntent>,
        ctx: &SidebarCtx<'_>,
    ) -> (Self, Task<SidebarEvent>) {
        let (subscription, initial) = viewport
            .subscribe_range(MID_WIDTH_RANGE, SidebarIntent::MidWidthChanged);
        let mut widget = Self {
            state: SidebarState::new(mode),
            _mid_width: subscription,
        };
        let task = widget.reduce(initial, ctx);
        (widget, task)
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: SidebarIntent,
        ctx: &SidebarCtx<'_>,
    ) -> Task<SidebarEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> SidebarViewModel {
        SidebarViewModel {
            layout: self.state.layout(),
            active_item: self.state.active_item(),
            mid_width: self.state.mid_width(),
            notification_badge: self.state.notification_badge(),
        }
    }

    /// Return the snapshot consumed by the layout frame.
    pub(crate) fn layout(&self) -> SidebarLayout {
        self.state.layout()
    }

    pub(crate) fn active_item(&self) -> NavItem {
        self.state.active_item()
    }
}
