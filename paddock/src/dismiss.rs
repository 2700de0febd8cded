use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use iced::{Point, Rectangle};

/// Screen-space region owned by an overlay: its surface plus its triggers.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Boundary {
    rects: Vec<Rectangle>,
}

impl Boundary {
    pub(crate) fn new(rect: Rectangle) -> Self {
        Self { rects: vec![rect] }
    }

    /// Extend the boundary with another rectangle.
    pub(crate) fn with(mut self, rect: Rectangle) -> Self {
        self.rects.push(rect);
        self
    }

    /// Return whether `point` lies inside any rectangle of the boundary.
    pub(crate) fn contains(&self, point: Point) -> bool {
        self.rects.iter().any(|rect| rect.contains(point))
    }
}

struct Registration<M> {
    id: u64,
    boundary: Boundary,
    on_outside: M,
}

struct Registry<M> {
    next_id: u64,
    cursor: Option<Point>,
    registrations: Vec<Registration<M>>,
}

trait RegistrationTable {
    fn remove(&mut self, id: u64);
    fn set_boundary(&mut self, id: u64, boundary: Boundary);
}

impl<M> RegistrationTable for Registry<M> {
    fn remove(&mut self, id: u64) {
        self.registrations
            .retain(|registration| registration.id != id);
        // Pointer tracking stops with the last overlay; a position recorded
        // before that is stale once the next overlay opens.
        if self.registrations.is_empty() {
            self.cursor = None;
        }
    }

    fn set_boundary(&mut self, id: u64, boundary: Boundary) {
        if let Some(registration) = self
            .registrations
            .iter_mut()
            .find(|registration| registration.id == id)
        {
            registration.boundary = boundary;
        }
    }
}

/// Shared outside-interaction listener for every open overlay.
///
/// Overlays register a [`Boundary`] and the message to emit when a pointer
/// goes down outside of it. A single pointer-down is checked against every
/// registration present at that moment, so sibling overlays never affect
/// each other. The app only listens for pointer input while
/// [`Dismisser::is_listening`] holds.
pub(crate) struct Dismisser<M> {
    registry: Rc<RefCell<Registry<M>>>,
}

impl<M: Clone + 'static> Dismisser<M> {
    pub(crate) fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                cursor: None,
                registrations: Vec::new(),
            })),
        }
    }

    /// Register an overlay. The registration lives as long as the handle.
    pub(crate) fn register(
        &self,
        boundary: Boundary,
        on_outside: M,
    ) -> OverlayHandle {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.registrations.push(Registration {
                id,
                boundary,
                on_outside,
            });
            id
        };

        let table: Rc<RefCell<dyn RegistrationTable>> = self.registry.clone();
        OverlayHandle {
            id,
            registry: Rc::downgrade(&table),
        }
    }

    /// Track the pointer so later button presses can be located.
    pub(crate) fn pointer_moved(&self, position: Point) {
        self.registry.borrow_mut().cursor = Some(position);
    }

    /// Evaluate a pointer-down at the last known cursor position.
    pub(crate) fn pointer_pressed(&self) -> Vec<M> {
        let cursor = self.registry.borrow().cursor;
        match cursor {
            Some(position) => self.pointer_pressed_at(position),
            None => Vec::new(),
        }
    }

    /// Evaluate a pointer-down at `position` and return the dismissal
    /// message of every overlay whose boundary excludes it.
    pub(crate) fn pointer_pressed_at(&self, position: Point) -> Vec<M> {
        let mut registry = self.registry.borrow_mut();
        registry.cursor = Some(position);
        registry
            .registrations
            .iter()
            .filter(|registration| !registration.boundary.contains(position))
            .map(|registration| registration.on_outside.clone())
            .collect()
    }

    /// Return whether at least one overlay is registered.
    pub(crate) fn is_listening(&self) -> bool {
        self.registration_count() > 0
    }

    pub(crate) fn registration_count(&self) -> usize {
        self.registry.borrow().registrations.len()
    }
}

impl<M: Clone + 'static> Default for Dismisser<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Registration seam so reducers register with their own intent type.
pub(crate) trait OverlayRegistrar<I> {
    fn register_overlay(&self, boundary: Boundary, on_outside: I)
    -> OverlayHandle;
}

impl<M: Clone + 'static> OverlayRegistrar<M> for Dismisser<M> {
    fn register_overlay(
        &self,
        boundary: Boundary,
        on_outside: M,
    ) -> OverlayHandle {
        self.register(boundary, on_outside)
    }
}

/// Registrar that wraps widget intents into app messages.
pub(crate) struct MappedRegistrar<'a, M, I> {
    dismisser: &'a Dismisser<M>,
    map: fn(I) -> M,
}

impl<'a, M, I> MappedRegistrar<'a, M, I> {
    pub(crate) fn new(dismisser: &'a Dismisser<M>, map: fn(I) -> M) -> Self {
        Self { dismisser, map }
    }
}

impl<M: Clone + 'static, I> OverlayRegistrar<I> for MappedRegistrar<'_, M, I> {
    fn register_overlay(
        &self,
        boundary: Boundary,
        on_outside: I,
    ) -> OverlayHandle {
        self.dismisser.register(boundary, (self.map)(on_outside))
    }
}

/// Scoped overlay registration. Dropping it deregisters the overlay.
pub(crate) struct OverlayHandle {
    id: u64,
    registry: Weak<RefCell<dyn RegistrationTable>>,
}

impl OverlayHandle {
    /// Replace the boundary after the overlay moved or resized.
    pub(crate) fn set_boundary(&self, boundary: Boundary) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().set_boundary(self.id, boundary);
        }
    }
}

impl fmt::Debug for OverlayHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayHandle").field("id", &self.id).finish()
    }
}

impl Drop for OverlayHandle {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        match registry.try_borrow_mut() {
            Ok(mut registry) => registry.remove(self.id),
            Err(_) => log::warn!(
                "overlay {} deregistered while dismisser is busy",
                self.id
            ),
        };
    }
}

#[cfg(test)]
mod tests {
    use iced::{Point, Rectangle, Size};

    use super::{Boundary, Dismisser, MappedRegistrar, OverlayRegistrar};

    #[derive(Debug, Clone, PartialEq)]
    enum Overlay {
        A,
        B,
    }

    fn rect(x: f32, y: f32, width: f32, height: f32) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(width, height))
    }

    #[test]
    fn given_two_overlays_when_pressing_inside_b_then_only_a_is_dismissed() {
        let dismisser = Dismisser::new();
        let _a = dismisser
            .register(Boundary::new(rect(0.0, 0.0, 10.0, 10.0)), Overlay::A);
        let _b = dismisser
            .register(Boundary::new(rect(20.0, 20.0, 10.0, 10.0)), Overlay::B);

        let fired = dismisser.pointer_pressed_at(Point::new(25.0, 25.0));

        assert_eq!(fired, vec![Overlay::A]);
    }

    #[test]
    fn given_press_outside_all_when_evaluated_then_each_overlay_fires_once() {
        let dismisser = Dismisser::new();
        let _a = dismisser
            .register(Boundary::new(rect(0.0, 0.0, 10.0, 10.0)), Overlay::A);
        let _b = dismisser
            .register(Boundary::new(rect(20.0, 20.0, 10.0, 10.0)), Overlay::B);

        let fired = dismisser.pointer_pressed_at(Point::new(100.0, 100.0));

        assert_eq!(fired, vec![Overlay::A, Overlay::B]);
    }

    #[test]
    fn given_boundary_with_trigger_when_pressing_trigger_then_not_dismissed() {
        let dismisser = Dismisser::new();
        let boundary = Boundary::new(rect(0.0, 64.0, 260.0, 600.0))
            .with(rect(12.0, 12.0, 40.0, 40.0));
        let _sidebar = dismisser.register(boundary, Overlay::A);

        assert!(dismisser.pointer_pressed_at(Point::new(30.0, 30.0)).is_empty());
    }

    #[test]
    fn given_dropped_handle_when_pressing_then_listener_is_released() {
        let dismisser = Dismisser::new();
        let handle = dismisser
            .register(Boundary::new(rect(0.0, 0.0, 10.0, 10.0)), Overlay::A);
        assert!(dismisser.is_listening());

        drop(handle);

        assert!(!dismisser.is_listening());
        assert!(dismisser.pointer_pressed_at(Point::new(50.0, 50.0)).is_empty());
    }

    #[test]
    fn given_tracked_cursor_when_pointer_pressed_then_last_position_is_used() {
        let dismisser = Dismisser::new();
        let _a = dismisser
            .register(Boundary::new(rect(0.0, 0.0, 10.0, 10.0)), Overlay::A);

        assert!(dismisser.pointer_pressed().is_empty());

        dismisser.pointer_moved(Point::new(5.0, 5.0));
        assert!(dismisser.pointer_pressed().is_empty());

        dismisser.pointer_moved(Point::new(15.0, 5.0));
        assert_eq!(dismisser.pointer_pressed(), vec![Overlay::A]);
    }

    #[test]
    fn given_last_overlay_closed_when_next_opens_then_old_cursor_is_forgotten()
    {
        let dismisser = Dismisser::new();
        let first = dismisser
            .register(Boundary::new(rect(0.0, 0.0, 10.0, 10.0)), Overlay::A);
        dismisser.pointer_moved(Point::new(40.0, 40.0));
        drop(first);

        let _second = dismisser
            .register(Boundary::new(rect(0.0, 0.0, 10.0, 10.0)), Overlay::B);

        assert!(dismisser.pointer_pressed().is_empty());
    }

    #[test]
    fn given_moved_overlay_when_boundary_updated_then_new_boundary_applies() {
        let dismisser = Dismisser::new();
        let handle = dismisser
            .register(Boundary::new(rect(0.0, 0.0, 10.0, 10.0)), Overlay::A);

        handle.set_boundary(Boundary::new(rect(50.0, 50.0, 10.0, 10.0)));

        assert!(dismisser.pointer_pressed_at(Point::new(55.0, 55.0)).is_empty());
        assert_eq!(
            dismisser.pointer_pressed_at(Point::new(5.0, 5.0)),
            vec![Overlay::A]
        );
    }

    #[test]
    fn given_mapped_registrar_when_dismissed_then_outer_message_is_emitted() {
        let dismisser = Dismisser::new();
        let registrar = MappedRegistrar::new(&dismisser, Some);
        let _handle = registrar.register_overlay(
            Boundary::new(rect(0.0, 0.0, 10.0, 10.0)),
            Overlay::B,
        );

        assert_eq!(
            dismisser.pointer_pressed_at(Point::new(20.0, 0.0)),
            vec![Some(Overlay::B)]
        );
    }
}
