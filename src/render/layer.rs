/// Compositing order of a slide, back to front.
///
/// Every drawing call belongs to exactly one layer, and layers are always painted in
/// [`Layer::ORDER`], independent of the order in which callers describe them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    /// Canvas fill.
    Background,
    /// Drop shadows under panels.
    Shadow,
    /// Panel bodies and outlines.
    Panel,
    /// Header bar, indicator dots, and window titles.
    Chrome,
    /// Text inside and outside windows.
    Content,
}

impl Layer {
    pub const ORDER: [Layer; 5] = [
        Layer::Background,
        Layer::Shadow,
        Layer::Panel,
        Layer::Chrome,
        Layer::Content,
    ];
}
