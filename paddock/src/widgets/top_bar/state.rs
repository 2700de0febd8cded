/// Top bar state: the current page title and the bell badge count.
#[derive(Debug)]
pub(super) struct TopBarState {
    title: String,
    unread_count: usize,
}

impl TopBarState {
    pub(super) fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            unread_count: 0,
        }
    }

    pub(super) fn title(&self) -> &str {
        &self.title
    }

    pub(super) fn unread_count(&self) -> usize {
        self.unread_count
    }

    pub(super) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(super) fn set_unread_count(&mut self, count: usize) {
        self.unread_count = count;
    }
}
