pub(crate) mod notifications;
pub(crate) mod pointer;
pub(crate) mod profile;
pub(crate) mod session;
pub(crate) mod sidebar;
pub(crate) mod top_bar;
pub(crate) mod window;
