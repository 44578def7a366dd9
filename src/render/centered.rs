use crate::foundation::core::{Point, Rect, Rgb8};
use crate::foundation::error::SlideResult;
use crate::render::canvas::Canvas;
use crate::text::font::FontHandle;
use crate::text::measure::{Align, TextPainter, draw_block, layout_block};

/// Inter-line spacing used for centered slide text.
pub const CENTERED_LINE_SPACING: f32 = 12.0;

/// Left edge that centers a block of `text_width` pixels on a canvas of `canvas_width`.
///
/// The block width is rounded up to whole pixels, so the two margins differ by at most one.
pub fn centered_x(canvas_width: u32, text_width: f32) -> i32 {
    let w = text_width.max(0.0).ceil() as i64;
    (i64::from(canvas_width) - w).div_euclid(2) as i32
}

/// Draw `text` horizontally centered on the canvas with its top at `y`.
///
/// Multi-line text is centered line by line against its widest line. Text is never wrapped
/// here. Returns the block bounds.
pub fn draw_centered<P: TextPainter + ?Sized>(
    canvas: &mut Canvas,
    painter: &mut P,
    text: &str,
    font: &FontHandle,
    y: f64,
    color: Rgb8,
    line_spacing: f32,
) -> SlideResult<Rect> {
    let block = layout_block(painter, text, font, line_spacing, Align::Center)?;
    let x = f64::from(centered_x(canvas.width(), block.extent.width));
    draw_block(painter, canvas, &block, font, Point::new(x, y), color)?;
    Ok(Rect::new(
        x,
        y,
        x + f64::from(block.extent.width),
        y + f64::from(block.extent.height),
    ))
}
