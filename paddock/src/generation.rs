use std::cell::Cell;

/// Monotonic stamp source for asynchronous fetches.
///
/// Owned by the app rather than by a mounted shell, so a completion issued
/// before sign-out can never match a fetch started after the next sign-in.
#[derive(Debug, Default)]
pub(crate) struct FetchGenerations {
    last: Cell<u64>,
}

impl FetchGenerations {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Hand out the next generation. Never repeats a previous value.
    pub(crate) fn next(&self) -> u64 {
        let next = self.last.get() + 1;
        self.last.set(next);
        next
    }
}
