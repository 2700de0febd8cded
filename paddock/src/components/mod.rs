pub(crate) mod backdrop;
pub(crate) mod icon_button;
pub(crate) mod menu_item;
pub(crate) mod nav_item;
