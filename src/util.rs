use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a rectangle of the given size centered inside `area`, shrunk to fit
/// if `area` is too small
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [centered] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(centered);
    centered
}

/// Return whether `outer` is at least as wide and as tall as `inner`
pub(crate) fn fits(outer: Size, inner: Size) -> bool {
    outer.width >= inner.width && outer.height >= inner.height
}
