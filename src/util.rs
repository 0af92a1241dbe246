use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return the area of the terminal in which everything is drawn: a
/// [`DISPLAY_SIZE`][consts::DISPLAY_SIZE] rectangle in the center of
/// `buffer_area`
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Return a rectangle of size `size` centered within `area`, shrunk to fit if
/// necessary
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(rect);
    rect
}
