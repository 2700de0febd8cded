pub(crate) mod notifications;
pub(crate) mod profile;
pub(crate) mod sidebar;
pub(crate) mod top_bar;
