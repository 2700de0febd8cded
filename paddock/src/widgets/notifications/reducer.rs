use std::sync::Arc;

use iced::{Rectangle, Size, Task};
use paddock_api::NotificationSource;

use super::event::{
    NotificationsEffect, NotificationsEvent, NotificationsIntent,
};
use super::model::{Notification, RowMenuAction, filter_items};
use super::state::{NotificationsState, RowMenuState};
use crate::dismiss::{Boundary, OverlayRegistrar};
use crate::generation::FetchGenerations;
use crate::geometry::offset_by;
use crate::layout;

const SCROLL_EPSILON: f32 = 0.5;

/// Read-only context for notification panel reduction.
pub(crate) struct NotificationsCtx<'a> {
    pub(crate) overlays: &'a dyn OverlayRegistrar<NotificationsIntent>,
    pub(crate) window: Size,
    pub(crate) source: &'a Arc<dyn NotificationSource>,
    pub(crate) generations: &'a FetchGenerations,
}

/// Reduce a notification panel intent into state updates and effects.
pub(crate) fn reduce(
    state: &mut NotificationsState,
    event: NotificationsIntent,
    ctx: &NotificationsCtx<'_>,
) -> Task<NotificationsEvent> {
    let unread_before = state.unread_count();

    let task = match event {
        NotificationsIntent::TogglePanel => {
            if state.is_open() {
                state.close();
                Task::none()
            } else {
                open(state, ctx)
            }
        },
        NotificationsIntent::Open => {
            if state.is_open() {
                Task::none()
            } else {
                open(state, ctx)
            }
        },
        NotificationsIntent::Close
        | NotificationsIntent::DismissPanel
        | NotificationsIntent::DismissAll => {
            state.close();
            Task::none()
        },
        NotificationsIntent::SetTab(tab) => {
            state.set_tab(tab);
            Task::none()
        },
        NotificationsIntent::Loaded { generation, result } => {
            if state.is_current(generation) {
                if let Err(err) = &result {
                    log::warn!("notification fetch failed: {err}");
                }
                state.apply_loaded(result);
            } else {
                log::debug!("discarding stale notification fetch {generation}");
            }
            Task::none()
        },
        NotificationsIntent::MarkRead { id } => mark_read(state, ctx, id),
        NotificationsIntent::MarkAllRead => {
            let ids = state.mark_all_read();
            Task::batch(
                ids.into_iter().map(|id| mark_read_task(ctx.source, id)),
            )
        },
        NotificationsIntent::MarkReadFinished { id, result } => {
            // The optimistic flip stays in place either way.
            if let Err(err) = result {
                log::warn!("mark-read for notification {id} failed: {err}");
            }
            Task::none()
        },
        NotificationsIntent::ToggleRowMenu { id } => {
            let same_row = state.row_menu().is_some_and(|menu| menu.id == id);
            state.set_row_menu(None);
            if !same_row {
                open_row_menu(state, ctx, id);
            }
            Task::none()
        },
        NotificationsIntent::DismissRowMenu { id } => {
            if state.row_menu().is_some_and(|menu| menu.id == id) {
                state.set_row_menu(None);
            }
            Task::none()
        },
        NotificationsIntent::RowMenuAction { id, action } => {
            state.set_row_menu(None);
            match action {
                RowMenuAction::MarkRead => mark_read(state, ctx, id),
                RowMenuAction::CopyText => copy_text(state, &id),
            }
        },
        NotificationsIntent::ListScrolled { offset_y } => {
            if (offset_y - state.scroll_offset()).abs() > SCROLL_EPSILON {
                state.set_scroll_offset(offset_y);
                state.set_row_menu(None);
            }
            Task::none()
        },
        NotificationsIntent::Relayout => Task::none(),
    };

    sync_overlays(state, ctx);

    let unread_after = state.unread_count();
    if unread_after == unread_before {
        task
    } else {
        Task::batch([
            task,
            Task::done(NotificationsEvent::Effect(
                NotificationsEffect::UnreadCountChanged(unread_after),
            )),
        ])
    }
}

fn open(
    state: &mut NotificationsState,
    ctx: &NotificationsCtx<'_>,
) -> Task<NotificationsEvent> {
    let generation = ctx.generations.next();
    state.open(generation);
    let source = Arc::clone(ctx.source);

    Task::perform(
        async move {
            source
                .list()
                .await
                .map(|records| {
                    records.into_iter().map(Notification::from).collect()
                })
                .map_err(|err| err.to_string())
        },
        move |result| {
            NotificationsEvent::Intent(NotificationsIntent::Loaded {
                generation,
                result,
            })
        },
    )
}

fn mark_read(
    state: &mut NotificationsState,
    ctx: &NotificationsCtx<'_>,
    id: String,
) -> Task<NotificationsEvent> {
    if state.mark_read(&id) {
        mark_read_task(ctx.source, id)
    } else {
        Task::none()
    }
}

/// Fire-and-forget mark-read call against the data source.
fn mark_read_task(
    source: &Arc<dyn NotificationSource>,
    id: String,
) -> Task<NotificationsEvent> {
    let source = Arc::clone(source);
    let request_id = id.clone();

    Task::perform(
        async move {
            source
                .mark_read(&request_id)
                .await
                .map_err(|err| err.to_string())
        },
        move |result| {
            NotificationsEvent::Intent(NotificationsIntent::MarkReadFinished {
                id,
                result,
            })
        },
    )
}

fn copy_text(
    state: &NotificationsState,
    id: &str,
) -> Task<NotificationsEvent> {
    match state.items().iter().find(|item| item.id == id) {
        Some(item) => iced::clipboard::write(item.clipboard_text()),
        None => Task::none(),
    }
}

fn open_row_menu(
    state: &mut NotificationsState,
    ctx: &NotificationsCtx<'_>,
    id: String,
) {
    let Some((rect, boundary)) = row_menu_geometry(state, &id, ctx.window)
    else {
        return;
    };
    let handle = ctx.overlays.register_overlay(
        boundary,
        NotificationsIntent::DismissRowMenu { id: id.clone() },
    );
    state.set_row_menu(Some(RowMenuState { id, rect, handle }));
}

/// Keep the panel and row menu registrations in step with the state.
fn sync_overlays(state: &mut NotificationsState, ctx: &NotificationsCtx<'_>) {
    if !state.is_open() {
        state.set_panel_overlay(None);
        state.set_row_menu(None);
        return;
    }

    let panel = layout::notification_panel_rect(ctx.window);
    let boundary = Boundary::new(panel)
        .with(layout::notifications_trigger_rect(ctx.window));
    match state.panel_overlay() {
        Some(handle) => handle.set_boundary(boundary),
        None => {
            let handle = ctx
                .overlays
                .register_overlay(boundary, NotificationsIntent::DismissPanel);
            state.set_panel_overlay(Some(handle));
        },
    }

    let Some(id) = state.row_menu().map(|menu| menu.id.clone()) else {
        return;
    };
    match row_menu_geometry(state, &id, ctx.window) {
        Some((rect, boundary)) => {
            if let Some(menu) = state.row_menu_mut() {
                menu.rect = rect;
                menu.handle.set_boundary(boundary);
            }
        },
        None => state.set_row_menu(None),
    }
}

/// Locate the menu of row `id` in the filtered list. Returns the menu
/// rectangle relative to the panel and the absolute dismissal boundary.
fn row_menu_geometry(
    state: &NotificationsState,
    id: &str,
    window: Size,
) -> Option<(Rectangle, Boundary)> {
    let visible = filter_items(state.items(), state.tab());
    let (index, item) = visible
        .iter()
        .enumerate()
        .find(|(_, item)| item.id == id)?;

    let panel = layout::notification_panel_rect(window);
    let actions = RowMenuAction::for_row(item.unread);
    let rect = layout::row_menu_rect(
        panel.size(),
        index,
        state.scroll_offset(),
        actions.len(),
    );
    let trigger = layout::row_action_rect(index, state.scroll_offset());
    let boundary = Boundary::new(offset_by(rect, panel))
        .with(offset_by(trigger, panel));

    Some((rect, boundary))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use iced::{Point, Size};
    use paddock_api::{ApiError, NotificationRecord, NotificationSource};

    use super::NotificationsCtx;
    use crate::dismiss::Dismisser;
    use crate::generation::FetchGenerations;
    use crate::geometry::offset_by;
    use crate::layout;
    use crate::widgets::notifications::model::{
        Notification, NotificationTab, RowMenuAction,
    };
    use crate::widgets::notifications::{
        NotificationsIntent, NotificationsWidget,
    };

    const WINDOW: Size = Size::new(1600.0, 900.0);

    struct FailingSource;

    #[async_trait]
    impl NotificationSource for FailingSource {
        async fn list(&self) -> Result<Vec<NotificationRecord>, ApiError> {
            Err(ApiError::NoSession)
        }

        async fn mark_read(&self, _id: &str) -> Result<(), ApiError> {
            Err(ApiError::NoSession)
        }
    }

    struct Harness {
        widget: NotificationsWidget,
        dismisser: Dismisser<NotificationsIntent>,
        source: Arc<dyn NotificationSource>,
        generations: FetchGenerations,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                widget: NotificationsWidget::new(),
                dismisser: Dismisser::new(),
                source: Arc::new(FailingSource),
                generations: FetchGenerations::new(),
            }
        }

        fn reduce(&mut self, intent: NotificationsIntent) {
            let ctx = NotificationsCtx {
                overlays: &self.dismisser,
                window: WINDOW,
                source: &self.source,
                generations: &self.generations,
            };
            let _task = self.widget.reduce(intent, &ctx);
        }

        /// Open the panel and complete its fetch with `items`.
        fn open_with(&mut self, items: Vec<Notification>) {
            self.reduce(NotificationsIntent::Open);
            let generation = self.widget.generation();
            self.reduce(NotificationsIntent::Loaded {
                generation,
                result: Ok(items),
            });
        }

        fn ids(&self) -> Vec<String> {
            self.widget
                .vm()
                .items
                .iter()
                .map(|item| item.id.clone())
                .collect()
        }
    }

    fn item(id: &str, unread: bool) -> Notification {
        Notification {
            id: id.to_string(),
            title: format!("title {id}"),
            description: Some(String::from("details")),
            created_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
            unread,
        }
    }

    fn sample() -> Vec<Notification> {
        vec![
            item("a", true),
            item("b", false),
            item("c", true),
            item("d", false),
            item("e", true),
        ]
    }

    #[test]
    fn given_open_when_fetch_pending_then_loading_with_spinner() {
        let mut harness = Harness::new();
        harness.reduce(NotificationsIntent::Open);

        let vm = harness.widget.vm();
        assert!(vm.is_open);
        assert!(harness.widget.is_loading());
        assert!(vm.show_spinner);
    }

    #[test]
    fn given_fetch_rejected_when_loaded_then_empty_and_not_loading() {
        let mut harness = Harness::new();
        harness.reduce(NotificationsIntent::Open);
        let generation = harness.widget.generation();

        harness.reduce(NotificationsIntent::Loaded {
            generation,
            result: Err(String::from("connection refused")),
        });

        assert!(!harness.widget.is_loading());
        assert!(harness.widget.vm().items.is_empty());
        assert!(harness.widget.vm().is_open);
    }

    #[test]
    fn given_fetch_success_when_loaded_then_items_replace_previous() {
        let mut harness = Harness::new();
        harness.open_with(vec![item("old", true)]);
        harness.reduce(NotificationsIntent::Close);

        harness.open_with(sample());

        assert_eq!(harness.ids(), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn given_closed_panel_when_stale_fetch_completes_then_it_is_discarded() {
        let mut harness = Harness::new();
        harness.reduce(NotificationsIntent::Open);
        let generation = harness.widget.generation();
        harness.reduce(NotificationsIntent::Close);

        harness.reduce(NotificationsIntent::Loaded {
            generation,
            result: Ok(sample()),
        });

        assert!(harness.widget.vm().items.is_empty());
        assert!(!harness.widget.vm().is_open);
    }

    #[test]
    fn given_reopened_panel_when_older_generation_completes_then_it_is_discarded()
     {
        let mut harness = Harness::new();
        harness.reduce(NotificationsIntent::Open);
        let stale = harness.widget.generation();
        harness.reduce(NotificationsIntent::Close);
        harness.reduce(NotificationsIntent::Open);

        harness.reduce(NotificationsIntent::Loaded {
            generation: stale,
            result: Ok(sample()),
        });

        assert!(harness.widget.is_loading());
        assert!(harness.widget.vm().items.is_empty());
    }

    #[test]
    fn given_remounted_panel_when_previous_session_fetch_completes_then_discarded()
     {
        let mut harness = Harness::new();
        harness.reduce(NotificationsIntent::Open);
        let stale = harness.widget.generation();
        harness.widget = NotificationsWidget::new();
        harness.reduce(NotificationsIntent::Open);
        assert_ne!(harness.widget.generation(), stale);

        harness.reduce(NotificationsIntent::Loaded {
            generation: stale,
            result: Ok(sample()),
        });

        assert!(harness.widget.is_loading());
        assert!(harness.widget.vm().items.is_empty());
    }

    #[test]
    fn given_refetch_in_flight_when_marked_read_then_loaded_keeps_read() {
        let mut harness = Harness::new();
        harness.open_with(sample());
        harness.reduce(NotificationsIntent::Close);
        harness.reduce(NotificationsIntent::Open);
        let generation = harness.widget.generation();

        harness.reduce(NotificationsIntent::MarkAllRead);
        assert_eq!(harness.widget.unread_count(), 0);
        harness.reduce(NotificationsIntent::Loaded {
            generation,
            result: Ok(sample()),
        });

        assert_eq!(harness.widget.unread_count(), 0);
        assert_eq!(harness.ids(), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn given_single_mark_read_when_refetched_then_only_that_item_stays_read() {
        let mut harness = Harness::new();
        harness.open_with(sample());
        harness.reduce(NotificationsIntent::MarkRead {
            id: String::from("a"),
        });
        harness.reduce(NotificationsIntent::Close);

        harness.open_with(sample());

        assert_eq!(harness.widget.unread_count(), 2);
        harness.reduce(NotificationsIntent::SetTab(NotificationTab::Unread));
        assert_eq!(harness.ids(), vec!["c", "e"]);
    }

    #[test]
    fn given_warm_items_when_reopening_then_no_spinner_over_items() {
        let mut harness = Harness::new();
        harness.open_with(sample());
        harness.reduce(NotificationsIntent::Close);
        assert_eq!(harness.widget.vm().items.len(), 5);

        harness.reduce(NotificationsIntent::Open);

        let vm = harness.widget.vm();
        assert!(harness.widget.is_loading());
        assert!(!vm.show_spinner);
        assert_eq!(vm.items.len(), 5);
    }

    #[test]
    fn given_tabs_when_switching_back_to_all_then_original_order_returns() {
        let mut harness = Harness::new();
        harness.open_with(sample());

        harness.reduce(NotificationsIntent::SetTab(NotificationTab::Unread));
        assert_eq!(harness.ids(), vec!["a", "c", "e"]);
        harness.reduce(NotificationsIntent::SetTab(NotificationTab::Read));
        assert_eq!(harness.ids(), vec!["b", "d"]);
        harness.reduce(NotificationsIntent::SetTab(NotificationTab::All));
        assert_eq!(harness.ids(), vec!["a", "b", "c", "d", "e"]);
        harness.reduce(NotificationsIntent::SetTab(NotificationTab::All));
        assert_eq!(harness.ids(), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn given_unread_item_when_mark_read_then_flips_without_waiting() {
        let mut harness = Harness::new();
        harness.open_with(sample());

        harness.reduce(NotificationsIntent::MarkRead {
            id: String::from("c"),
        });

        assert_eq!(harness.widget.unread_count(), 2);
        harness.reduce(NotificationsIntent::SetTab(NotificationTab::Unread));
        assert_eq!(harness.ids(), vec!["a", "e"]);
    }

    #[test]
    fn given_failed_mark_read_when_completed_then_optimistic_state_is_kept() {
        let mut harness = Harness::new();
        harness.open_with(sample());
        harness.reduce(NotificationsIntent::MarkRead {
            id: String::from("a"),
        });

        harness.reduce(NotificationsIntent::MarkReadFinished {
            id: String::from("a"),
            result: Err(String::from("server error")),
        });

        assert_eq!(harness.widget.unread_count(), 2);
    }

    #[test]
    fn given_mark_all_read_when_called_twice_then_all_read_both_times() {
        let mut harness = Harness::new();
        harness.open_with(sample());

        for _ in 0..2 {
            harness.reduce(NotificationsIntent::MarkAllRead);
            assert_eq!(harness.widget.unread_count(), 0);
            assert!(harness.widget.vm().items.iter().all(|item| !item.unread));
        }
    }

    #[test]
    fn given_closed_panel_when_reopened_then_read_state_is_not_changed_by_opening()
     {
        let mut harness = Harness::new();
        harness.open_with(sample());
        harness.reduce(NotificationsIntent::Close);
        harness.reduce(NotificationsIntent::Open);

        assert_eq!(harness.widget.unread_count(), 3);
    }

    #[test]
    fn given_open_panel_when_pressing_outside_then_panel_dismissal_fires() {
        let mut harness = Harness::new();
        harness.open_with(sample());
        let panel = layout::notification_panel_rect(WINDOW);
        let bell = layout::notifications_trigger_rect(WINDOW);

        assert!(
            harness
                .dismisser
                .pointer_pressed_at(panel.center())
                .is_empty()
        );
        assert!(
            harness
                .dismisser
                .pointer_pressed_at(bell.center())
                .is_empty()
        );

        let fired = harness.dismisser.pointer_pressed_at(Point::new(10.0, 400.0));
        assert!(matches!(
            fired.as_slice(),
            [NotificationsIntent::DismissPanel]
        ));
        for intent in fired {
            harness.reduce(intent);
        }

        assert!(!harness.widget.vm().is_open);
        assert!(!harness.dismisser.is_listening());
        assert_eq!(harness.widget.vm().items.len(), 5);
    }

    #[test]
    fn given_row_menu_when_opened_then_panel_stays_open_and_menu_is_inside() {
        let mut harness = Harness::new();
        harness.open_with(sample());

        harness.reduce(NotificationsIntent::ToggleRowMenu {
            id: String::from("e"),
        });

        let vm = harness.widget.vm();
        assert!(vm.is_open);
        let menu = vm.row_menu.expect("row menu open");
        assert_eq!(menu.id, "e");
        assert_eq!(
            menu.actions,
            vec![RowMenuAction::MarkRead, RowMenuAction::CopyText]
        );
        let panel = layout::notification_panel_rect(WINDOW);
        assert!(menu.position.x >= 0.0 && menu.position.y >= 0.0);
        assert!(menu.position.x + layout::ROW_MENU_WIDTH <= panel.width);
        assert_eq!(harness.dismisser.registration_count(), 2);
    }

    #[test]
    fn given_row_menu_when_pressing_elsewhere_in_panel_then_only_menu_closes() {
        let mut harness = Harness::new();
        harness.open_with(sample());
        harness.reduce(NotificationsIntent::ToggleRowMenu {
            id: String::from("a"),
        });

        let panel = layout::notification_panel_rect(WINDOW);
        let header = Point::new(panel.x + 20.0, panel.y + 10.0);
        let fired = harness.dismisser.pointer_pressed_at(header);
        assert_eq!(fired.len(), 1);
        for intent in fired {
            harness.reduce(intent);
        }

        let vm = harness.widget.vm();
        assert!(vm.is_open);
        assert!(vm.row_menu.is_none());
        assert_eq!(harness.dismisser.registration_count(), 1);
    }

    #[test]
    fn given_row_menu_trigger_when_pressed_again_then_menu_toggles_closed() {
        let mut harness = Harness::new();
        harness.open_with(sample());
        let id = String::from("b");
        harness.reduce(NotificationsIntent::ToggleRowMenu { id: id.clone() });

        let panel = layout::notification_panel_rect(WINDOW);
        let trigger = offset_by(layout::row_action_rect(1, 0.0), panel);
        assert!(
            harness
                .dismisser
                .pointer_pressed_at(trigger.center())
                .is_empty()
        );

        harness.reduce(NotificationsIntent::ToggleRowMenu { id });
        assert!(harness.widget.vm().row_menu.is_none());
    }

    #[test]
    fn given_row_menu_when_list_scrolls_then_menu_closes() {
        let mut harness = Harness::new();
        harness.open_with(sample());
        harness.reduce(NotificationsIntent::ToggleRowMenu {
            id: String::from("a"),
        });

        harness.reduce(NotificationsIntent::ListScrolled { offset_y: 40.0 });

        assert!(harness.widget.vm().row_menu.is_none());
        assert!(harness.widget.vm().is_open);
    }

    #[test]
    fn given_row_menu_mark_read_when_chosen_then_item_read_and_menu_closed() {
        let mut harness = Harness::new();
        harness.open_with(sample());
        harness.reduce(NotificationsIntent::ToggleRowMenu {
            id: String::from("a"),
        });

        harness.reduce(NotificationsIntent::RowMenuAction {
            id: String::from("a"),
            action: RowMenuAction::MarkRead,
        });

        assert!(harness.widget.vm().row_menu.is_none());
        assert_eq!(harness.widget.unread_count(), 2);
    }

    #[test]
    fn given_stale_row_dismissal_when_other_menu_open_then_it_is_ignored() {
        let mut harness = Harness::new();
        harness.open_with(sample());
        harness.reduce(NotificationsIntent::ToggleRowMenu {
            id: String::from("c"),
        });

        harness.reduce(NotificationsIntent::DismissRowMenu {
            id: String::from("a"),
        });

        assert_eq!(
            harness.widget.vm().row_menu.map(|menu| menu.id),
            Some(String::from("c"))
        );
    }

    #[test]
    fn given_open_overlays_when_dismiss_all_then_everything_is_released() {
        let mut harness = Harness::new();
        harness.open_with(sample());
        harness.reduce(NotificationsIntent::ToggleRowMenu {
            id: String::from("a"),
        });

        harness.reduce(NotificationsIntent::DismissAll);

        assert!(!harness.widget.vm().is_open);
        assert!(!harness.dismisser.is_listening());
    }
}
