use kurbo::Shape as _;

use crate::foundation::core::{Point, Rect, Rgb8};
use crate::foundation::error::SlideResult;
use crate::render::canvas::Canvas;
use crate::render::raster::fill_shape;
use crate::text::font::FontHandle;
use crate::text::measure::{TextExtent, TextMeasure, TextPainter};

/// Font-free text backend: every character advances by a fixed fraction of the font size and
/// visible characters are drawn as solid boxes.
///
/// Used for layout previews (`--draft`) and anywhere deterministic metrics matter more than
/// glyph shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DraftText {
    /// Advance per character, as a multiple of the font size.
    pub advance: f32,
    /// Line box height, as a multiple of the font size.
    pub line_height: f32,
}

impl Default for DraftText {
    fn default() -> Self {
        Self {
            advance: 0.5,
            line_height: 1.25,
        }
    }
}

impl DraftText {
    pub fn char_advance(&self, font: &FontHandle) -> f32 {
        font.size_px() * self.advance
    }
}

impl TextMeasure for DraftText {
    fn measure(&mut self, text: &str, font: &FontHandle) -> SlideResult<TextExtent> {
        Ok(TextExtent {
            width: text.chars().count() as f32 * self.char_advance(font),
            height: font.size_px() * self.line_height,
        })
    }
}

impl TextPainter for DraftText {
    fn draw_line(
        &mut self,
        canvas: &mut Canvas,
        text: &str,
        font: &FontHandle,
        origin: Point,
        color: Rgb8,
    ) -> SlideResult<()> {
        let adv = f64::from(self.char_advance(font));
        let size = f64::from(font.size_px());
        let mut boxes = kurbo::BezPath::new();
        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let x0 = origin.x + i as f64 * adv + adv * 0.1;
            let y0 = origin.y + size * 0.2;
            let cell = Rect::new(x0, y0, x0 + adv * 0.8, y0 + size * 0.8);
            boxes.extend(cell.path_elements(0.1));
        }
        if boxes.elements().is_empty() {
            return Ok(());
        }
        fill_shape(canvas, &boxes, color, 255)
    }
}
