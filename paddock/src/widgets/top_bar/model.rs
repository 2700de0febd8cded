/// View model for the top bar widget.
#[derive(Debug, Clone)]
pub(crate) struct TopBarViewModel<'a> {
    pub(crate) title: &'a str,
    pub(crate) unread_count: usize,
}
