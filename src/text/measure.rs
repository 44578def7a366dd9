use crate::foundation::core::{Point, Rgb8};
use crate::foundation::error::SlideResult;
use crate::render::canvas::Canvas;
use crate::text::font::FontHandle;

/// Rendered size of a piece of text, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

/// Horizontal alignment of lines inside a multi-line block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Font metrics query.
///
/// Implementations may cache, but results must depend only on `(text, font)`.
pub trait TextMeasure {
    /// Bounding box of a single line of text.
    fn measure(&mut self, text: &str, font: &FontHandle) -> SlideResult<TextExtent>;

    /// Bounding box of `text` split on line breaks, with `line_spacing` pixels between lines.
    fn measure_multiline(
        &mut self,
        text: &str,
        font: &FontHandle,
        line_spacing: f32,
        align: Align,
    ) -> SlideResult<TextExtent> {
        Ok(layout_block(self, text, font, line_spacing, align)?.extent)
    }
}

/// Draws single lines of text onto a canvas.
pub trait TextPainter: TextMeasure {
    /// Draw `text` with the top-left of its line box at `origin`.
    fn draw_line(
        &mut self,
        canvas: &mut Canvas,
        text: &str,
        font: &FontHandle,
        origin: Point,
        color: Rgb8,
    ) -> SlideResult<()>;
}

/// One line of a [`TextBlock`], positioned relative to the block's top-left.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockLine {
    pub text: String,
    pub width: f32,
    pub x_offset: f32,
    pub y_offset: f32,
}

/// Measured multi-line text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    pub lines: Vec<BlockLine>,
    pub extent: TextExtent,
    /// Distance between consecutive line tops.
    pub line_pitch: f32,
}

/// Measure and position every line of `text`.
///
/// Line height is the tallest measured line (the font size when all lines are empty); the block
/// is `n * line_height + (n - 1) * line_spacing` tall and as wide as its widest line.
pub fn layout_block<M: TextMeasure + ?Sized>(
    metrics: &mut M,
    text: &str,
    font: &FontHandle,
    line_spacing: f32,
    align: Align,
) -> SlideResult<TextBlock> {
    let mut measured = Vec::new();
    let mut line_height = 0.0f32;
    for raw in text.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let extent = if line.is_empty() {
            TextExtent::default()
        } else {
            metrics.measure(line, font)?
        };
        line_height = line_height.max(extent.height);
        measured.push((line.to_string(), extent.width));
    }
    if line_height <= 0.0 {
        line_height = font.size_px();
    }

    let width = measured.iter().map(|(_, w)| *w).fold(0.0f32, f32::max);
    let n = measured.len() as f32;
    let line_pitch = line_height + line_spacing;
    let lines = measured
        .into_iter()
        .enumerate()
        .map(|(i, (text, w))| BlockLine {
            x_offset: match align {
                Align::Left => 0.0,
                Align::Center => (width - w) / 2.0,
                Align::Right => width - w,
            },
            y_offset: i as f32 * line_pitch,
            width: w,
            text,
        })
        .collect();

    Ok(TextBlock {
        lines,
        extent: TextExtent {
            width,
            height: n * line_height + (n - 1.0) * line_spacing,
        },
        line_pitch,
    })
}

/// Draw a laid-out block with its top-left at `origin`. Empty lines draw nothing.
pub fn draw_block<P: TextPainter + ?Sized>(
    painter: &mut P,
    canvas: &mut Canvas,
    block: &TextBlock,
    font: &FontHandle,
    origin: Point,
    color: Rgb8,
) -> SlideResult<()> {
    for line in block.lines.iter().filter(|l| !l.text.is_empty()) {
        let at = Point::new(
            origin.x + f64::from(line.x_offset),
            origin.y + f64::from(line.y_offset),
        );
        painter.draw_line(canvas, &line.text, font, at, color)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/text/measure.rs"]
mod tests;
