use iced::{Point, Rectangle, Size};

/// Place a popup of `popup` size next to `origin`, flipping to the other
/// side when it would overflow `area` and clamping it inside with `margin`.
/// Coordinates are relative to the area's top-left corner.
pub(crate) fn anchor_position(
    origin: Point,
    area: Size,
    popup: Size,
    margin: f32,
) -> Point {
    let origin = Point::new(
        origin.x.clamp(0.0, area.width),
        origin.y.clamp(0.0, area.height),
    );

    let fits_right = origin.x + popup.width + margin <= area.width;
    let x = if fits_right {
        origin.x + margin
    } else {
        origin.x - popup.width - margin
    };

    let fits_down = origin.y + popup.height + margin <= area.height;
    let y = if fits_down {
        origin.y + margin
    } else {
        origin.y - popup.height - margin
    };

    let max_x = (area.width - popup.width - margin).max(margin);
    let max_y = (area.height - popup.height - margin).max(margin);

    Point::new(x.clamp(margin, max_x), y.clamp(margin, max_y))
}

/// Total menu height for a given number of items.
pub(crate) fn menu_height_for_items(
    item_count: usize,
    item_height: f32,
    vertical_padding: f32,
) -> f32 {
    vertical_padding + item_height * item_count as f32
}

/// Translate a rectangle by the top-left corner of `parent`.
pub(crate) fn offset_by(rect: Rectangle, parent: Rectangle) -> Rectangle {
    Rectangle::new(
        Point::new(rect.x + parent.x, rect.y + parent.y),
        rect.size(),
    )
}
