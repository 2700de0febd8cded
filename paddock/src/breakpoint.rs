use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Width below which the shell switches to the compact layout.
pub(crate) const COMPACT_BREAKPOINT: f32 = 1280.0;
/// Upper bound of the wide-but-tight range where the rail drops captions.
pub(crate) const MID_WIDTH_BREAKPOINT: f32 = 1536.0;

/// Layout mode derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewportMode {
    Wide,
    Narrow,
}

impl ViewportMode {
    /// Derive the mode for a viewport width.
    pub(crate) fn for_width(width: f32) -> Self {
        Self::from_compact(width < COMPACT_BREAKPOINT)
    }

    /// Map a compact-mode signal to a mode.
    pub(crate) fn from_compact(compact: bool) -> Self {
        if compact { Self::Narrow } else { Self::Wide }
    }

    pub(crate) fn is_narrow(self) -> bool {
        self == Self::Narrow
    }
}

/// Half-open width interval `[min, max)`. A missing bound is unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WidthRange {
    min: Option<f32>,
    max: Option<f32>,
}

impl WidthRange {
    pub(crate) const fn below(max: f32) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub(crate) const fn between(min: f32, max: f32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Return whether `width` falls inside the interval.
    pub(crate) fn contains(&self, width: f32) -> bool {
        self.min.is_none_or(|min| width >= min)
            && self.max.is_none_or(|max| width < max)
    }
}

/// Range published by the shell-level compact-mode subscription.
pub(crate) const COMPACT_RANGE: WidthRange =
    WidthRange::below(COMPACT_BREAKPOINT);
/// Range published by the sidebar's own mid-width subscription.
pub(crate) const MID_WIDTH_RANGE: WidthRange =
    WidthRange::between(COMPACT_BREAKPOINT, MID_WIDTH_BREAKPOINT);

struct Subscriber<M> {
    id: u64,
    range: WidthRange,
    matches: bool,
    publish: Box<dyn Fn(bool) -> M>,
}

struct Registry<M> {
    width: f32,
    next_id: u64,
    subscribers: Vec<Subscriber<M>>,
}

trait Detach {
    fn detach(&mut self, id: u64);
}

impl<M> Detach for Registry<M> {
    fn detach(&mut self, id: u64) {
        self.subscribers.retain(|subscriber| subscriber.id != id);
    }
}

/// Publishes a boolean per subscribed width range whenever the viewport
/// width crosses one of the range bounds.
///
/// Each subscription is answered synchronously with its current value and
/// afterwards only on crossings, never on every resized pixel. Dropping the
/// returned [`BreakpointSubscription`] stops publication.
pub(crate) struct BreakpointObserver<M> {
    registry: Rc<RefCell<Registry<M>>>,
}

impl<M: 'static> BreakpointObserver<M> {
    /// Create an observer seeded with the current viewport width.
    pub(crate) fn new(width: f32) -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                width,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Subscribe to a width range.
    ///
    /// Returns the scoped subscription and the initial publication, which
    /// the caller applies before anything else reads the derived state.
    pub(crate) fn subscribe(
        &self,
        range: WidthRange,
        publish: impl Fn(bool) -> M + 'static,
    ) -> (BreakpointSubscription, M) {
        let (id, message) = {
            let registry = &mut *self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;

            let matches = range.contains(registry.width);
            let message = publish(matches);
            registry.subscribers.push(Subscriber {
                id,
                range,
                matches,
                publish: Box::new(publish),
            });
            (id, message)
        };

        let table: Rc<RefCell<dyn Detach>> = self.registry.clone();
        let subscription = BreakpointSubscription {
            id,
            registry: Rc::downgrade(&table),
        };
        (subscription, message)
    }

    /// Record a new viewport width and return the publications of every
    /// subscription whose range membership flipped.
    pub(crate) fn observe(&self, width: f32) -> Vec<M> {
        let registry = &mut *self.registry.borrow_mut();
        registry.width = width;

        registry
            .subscribers
            .iter_mut()
            .filter_map(|subscriber| {
                let matches = subscriber.range.contains(width);
                if matches == subscriber.matches {
                    return None;
                }
                subscriber.matches = matches;
                Some((subscriber.publish)(matches))
            })
            .collect()
    }

    /// Return the last observed width.
    pub(crate) fn width(&self) -> f32 {
        self.registry.borrow().width
    }

    /// Return the number of live subscriptions.
    pub(crate) fn subscriber_count(&self) -> usize {
        self.registry.borrow().subscribers.len()
    }
}

/// Subscription seam that lets widgets subscribe with their own message
/// type without knowing the app-level one.
pub(crate) trait ViewportSubscriber<I> {
    fn subscribe_range(
        &self,
        range: WidthRange,
        publish: fn(bool) -> I,
    ) -> (BreakpointSubscription, I);
}

impl<M: 'static> ViewportSubscriber<M> for BreakpointObserver<M> {
    fn subscribe_range(
        &self,
        range: WidthRange,
        publish: fn(bool) -> M,
    ) -> (BreakpointSubscription, M) {
        self.subscribe(range, publish)
    }
}

/// Observer view that wraps widget messages into app messages.
pub(crate) struct MappedObserver<'a, M, I> {
    observer: &'a BreakpointObserver<M>,
    map: fn(I) -> M,
}

impl<'a, M, I> MappedObserver<'a, M, I> {
    pub(crate) fn new(
        observer: &'a BreakpointObserver<M>,
        map: fn(I) -> M,
    ) -> Self {
        Self { observer, map }
    }
}

impl<M: 'static, I: 'static> ViewportSubscriber<I>
    for MappedObserver<'_, M, I>
{
    fn subscribe_range(
        &self,
        range: WidthRange,
        publish: fn(bool) -> I,
    ) -> (BreakpointSubscription, I) {
        let map = self.map;
        let (subscription, _) = self
            .observer
            .subscribe(range, move |matches| map(publish(matches)));
        let initial = publish(range.contains(self.observer.width()));
        (subscription, initial)
    }
}

/// Scoped subscription handle. Dropping it unsubscribes.
pub(crate) struct BreakpointSubscription {
    id: u64,
    registry: Weak<RefCell<dyn Detach>>,
}

impl fmt::Debug for BreakpointSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreakpointSubscription")
            .field("id", &self.id)
            .finish()
    }
}

impl Drop for BreakpointSubscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        match registry.try_borrow_mut() {
            Ok(mut registry) => registry.detach(self.id),
            Err(_) => log::warn!(
                "breakpoint subscription {} dropped while observer is busy",
                self.id
            ),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::{
        BreakpointObserver, COMPACT_BREAKPOINT, COMPACT_RANGE, MID_WIDTH_RANGE,
        MappedObserver, ViewportMode, ViewportSubscriber, WidthRange,
    };

    #[derive(Debug, Clone, PartialEq)]
    enum Probe {
        Compact(bool),
        Mid(bool),
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Outer {
        Inner(Probe),
    }

    #[test]
    fn given_threshold_when_checking_range_then_lower_bound_is_inclusive() {
        assert!(COMPACT_RANGE.contains(COMPACT_BREAKPOINT - 0.5));
        assert!(!COMPACT_RANGE.contains(COMPACT_BREAKPOINT));
        assert!(MID_WIDTH_RANGE.contains(COMPACT_BREAKPOINT));
        assert!(!MID_WIDTH_RANGE.contains(1536.0));
        assert_eq!(ViewportMode::for_width(1279.0), ViewportMode::Narrow);
        assert_eq!(ViewportMode::for_width(1280.0), ViewportMode::Wide);
    }

    #[test]
    fn given_new_subscription_when_subscribing_then_initial_value_is_returned()
    {
        let observer = BreakpointObserver::new(900.0);
        let (_subscription, initial) =
            observer.subscribe(COMPACT_RANGE, Probe::Compact);
        assert_eq!(initial, Probe::Compact(true));
        assert_eq!(observer.subscriber_count(), 1);
    }

    #[test]
    fn given_resizes_within_one_side_when_observing_then_nothing_is_published()
    {
        let observer = BreakpointObserver::new(1400.0);
        let (_subscription, _) =
            observer.subscribe(COMPACT_RANGE, Probe::Compact);

        assert!(observer.observe(1500.0).is_empty());
        assert!(observer.observe(1280.0).is_empty());
        assert_eq!(observer.width(), 1280.0);
    }

    #[test]
    fn given_threshold_crossings_when_observing_then_each_crossing_publishes_once()
     {
        let observer = BreakpointObserver::new(1400.0);
        let (_subscription, _) =
            observer.subscribe(COMPACT_RANGE, Probe::Compact);

        assert_eq!(observer.observe(1000.0), vec![Probe::Compact(true)]);
        assert!(observer.observe(800.0).is_empty());
        assert_eq!(observer.observe(1300.0), vec![Probe::Compact(false)]);
    }

    #[test]
    fn given_two_ranges_when_observing_then_each_publishes_independently() {
        let observer = BreakpointObserver::new(1700.0);
        let (_compact, compact) =
            observer.subscribe(COMPACT_RANGE, Probe::Compact);
        let (_mid, mid) = observer.subscribe(MID_WIDTH_RANGE, Probe::Mid);
        assert_eq!(compact, Probe::Compact(false));
        assert_eq!(mid, Probe::Mid(false));

        assert_eq!(observer.observe(1400.0), vec![Probe::Mid(true)]);
        assert_eq!(
            observer.observe(1000.0),
            vec![Probe::Compact(true), Probe::Mid(false)]
        );
    }

    #[test]
    fn given_dropped_subscription_when_observing_then_it_no_longer_publishes()
    {
        let observer = BreakpointObserver::new(1400.0);
        let (subscription, _) =
            observer.subscribe(COMPACT_RANGE, Probe::Compact);
        drop(subscription);

        assert_eq!(observer.subscriber_count(), 0);
        assert!(observer.observe(1000.0).is_empty());
    }

    #[test]
    fn given_subscription_outliving_observer_when_dropped_then_nothing_panics()
    {
        let observer = BreakpointObserver::new(1400.0);
        let (subscription, _) =
            observer.subscribe(WidthRange::below(600.0), Probe::Compact);
        drop(observer);
        drop(subscription);
    }

    #[test]
    fn given_mapped_observer_when_subscribing_then_inner_initial_and_outer_updates()
     {
        let observer = BreakpointObserver::new(1400.0);
        let mapped = MappedObserver::new(&observer, Outer::Inner);
        let (_subscription, initial) =
            mapped.subscribe_range(MID_WIDTH_RANGE, Probe::Mid);

        assert_eq!(initial, Probe::Mid(true));
        assert_eq!(
            observer.observe(1600.0),
            vec![Outer::Inner(Probe::Mid(false))]
        );
    }
}
