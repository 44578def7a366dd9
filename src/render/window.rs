//! Terminal window mockups: shadow, rounded panel, header chrome, and clipped content.

use crate::foundation::core::{PanelGeometry, Point, Rect, Rgb8};
use crate::foundation::error::SlideResult;
use crate::render::canvas::Canvas;
use crate::render::layer::Layer;
use crate::render::raster::{fill_shape, stroke_shape};
use crate::render::shadow::{ShadowStyle, render_shadow};
use crate::text::font::FontHandle;
use crate::text::measure::TextPainter;
use crate::theme::Theme;

/// A line of window content with its caller-chosen color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentLine {
    pub text: String,
    pub color: Rgb8,
}

impl ContentLine {
    pub fn new(text: impl Into<String>, color: Rgb8) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// Fixed window metrics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowStyle {
    pub radius: f64,
    pub header_height: u32,
    pub header_fill: Rgb8,
    pub border_width: f64,
    pub dot_radius: f64,
    /// Left edge of the first dot, from the window's left edge.
    pub dot_inset: f64,
    /// Horizontal distance between consecutive dots.
    pub dot_spacing: f64,
    pub dot_colors: [Rgb8; 3],
    pub title_size_px: f32,
    pub content_left: f64,
    /// Gap between the header and the first content line.
    pub content_gap: u32,
    pub bottom_margin: u32,
    /// Content line pitch as a multiple of the content font size.
    pub pitch_factor: f64,
    pub shadow: ShadowStyle,
}

impl Default for WindowStyle {
    fn default() -> Self {
        Self {
            radius: 24.0,
            header_height: 64,
            header_fill: Rgb8::new(24, 33, 46),
            border_width: 2.0,
            dot_radius: 10.0,
            dot_inset: 22.0,
            dot_spacing: 28.0,
            dot_colors: [
                Rgb8::new(239, 68, 68),
                Rgb8::new(234, 179, 8),
                Rgb8::new(34, 197, 94),
            ],
            title_size_px: 26.0,
            content_left: 34.0,
            content_gap: 24,
            bottom_margin: 30,
            pitch_factor: 1.45,
            shadow: ShadowStyle::default(),
        }
    }
}

impl WindowStyle {
    /// Distance from the window top to the first content line.
    pub fn content_top(&self) -> u32 {
        self.header_height + self.content_gap
    }

    pub fn line_pitch(&self, font: &FontHandle) -> f64 {
        f64::from(font.size_px()) * self.pitch_factor
    }
}

/// Number of content lines that fit between the top padding and the bottom margin.
pub fn visible_capacity(
    height: u32,
    top_padding: u32,
    bottom_margin: u32,
    line_pitch: f64,
) -> usize {
    if !line_pitch.is_finite() || line_pitch <= 0.0 {
        return 0;
    }
    let available = f64::from(height) - f64::from(top_padding) - f64::from(bottom_margin);
    if available <= 0.0 {
        return 0;
    }
    // Absorb float noise such as 30 * 1.45 = 43.49999...
    (available / line_pitch + 1e-9).floor() as usize
}

/// Text placed at an absolute canvas position.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub font: FontHandle,
    pub origin: Point,
    pub color: Rgb8,
}

/// Everything needed to paint one window, resolved up front.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowPlan {
    pub panel: PanelGeometry,
    pub panel_fill: Rgb8,
    pub border: Rgb8,
    pub style: WindowStyle,
    pub header: Rect,
    /// Square strip over the header's lower corners.
    pub header_patch: Rect,
    pub dots: [(kurbo::Circle, Rgb8); 3],
    pub title: PlacedText,
    pub capacity: usize,
    pub content: Vec<PlacedText>,
    /// Lines beyond `capacity`, never drawn.
    pub dropped: usize,
}

/// Resolve window geometry, chrome, and the visible slice of `lines`.
pub fn plan_window<P: TextPainter + ?Sized>(
    painter: &mut P,
    theme: &Theme,
    geometry: PanelGeometry,
    title: &str,
    lines: &[ContentLine],
    font: &FontHandle,
    style: &WindowStyle,
) -> SlideResult<WindowPlan> {
    let panel = PanelGeometry { radius: style.radius, ..geometry };
    let x = f64::from(panel.x);
    let y = f64::from(panel.y);
    let w = f64::from(panel.width);
    let header_h = f64::from(style.header_height.min(panel.height));

    let header = Rect::new(x, y, x + w, y + header_h);
    let header_patch = Rect::new(
        x + style.border_width,
        (y + header_h - style.radius).max(y),
        x + w - style.border_width,
        y + header_h,
    );

    let cy = y + header_h / 2.0;
    let dot = |i: usize| {
        let cx = x + style.dot_inset + style.dot_radius + i as f64 * style.dot_spacing;
        (kurbo::Circle::new((cx, cy), style.dot_radius), style.dot_colors[i])
    };
    let dots = [dot(0), dot(1), dot(2)];

    let title_font = font.with_size(style.title_size_px)?;
    let title_w = painter.measure(title, &title_font)?.width.ceil() as i32;
    let title_x = panel.x + (panel.width as i32 - title_w).div_euclid(2);
    let title_y = panel.y + (header_h as i32 - style.title_size_px as i32) / 2;
    let title = PlacedText {
        text: title.to_string(),
        font: title_font,
        origin: Point::new(f64::from(title_x), f64::from(title_y)),
        color: theme.muted,
    };

    let pitch = style.line_pitch(font);
    let capacity = visible_capacity(
        panel.height,
        style.content_top(),
        style.bottom_margin,
        pitch,
    );
    let top = y + f64::from(style.content_top());
    let content: Vec<PlacedText> = lines
        .iter()
        .take(capacity)
        .enumerate()
        .map(|(i, line)| PlacedText {
            text: line.text.clone(),
            font: font.clone(),
            origin: Point::new(x + style.content_left, (top + i as f64 * pitch).round()),
            color: line.color,
        })
        .collect();
    let dropped = lines.len().saturating_sub(content.len());

    tracing::debug!(
        title = %title.text,
        capacity,
        supplied = lines.len(),
        dropped,
        "window content planned"
    );

    Ok(WindowPlan {
        panel,
        panel_fill: theme.panel,
        border: theme.border,
        style: *style,
        header,
        header_patch,
        dots,
        title,
        capacity,
        content,
        dropped,
    })
}

/// Paint a single layer of `plan`.
pub fn draw_window_layer<P: TextPainter + ?Sized>(
    canvas: &mut Canvas,
    painter: &mut P,
    plan: &WindowPlan,
    layer: Layer,
) -> SlideResult<()> {
    let bw = plan.style.border_width;
    match layer {
        Layer::Background => Ok(()),
        Layer::Shadow => render_shadow(canvas, &plan.panel, &plan.style.shadow),
        Layer::Panel => {
            let body = plan.panel.rounded_rect();
            fill_shape(canvas, &body, plan.panel_fill, 255)?;
            stroke_shape(
                canvas,
                &inset_outline(body.rect(), body.radii().top_left, bw),
                bw,
                plan.border,
            )
        }
        Layer::Chrome => {
            let header = kurbo::RoundedRect::from_rect(plan.header, plan.panel.radius);
            fill_shape(canvas, &header, plan.style.header_fill, 255)?;
            stroke_shape(
                canvas,
                &inset_outline(plan.header, plan.panel.radius, bw),
                bw,
                plan.border,
            )?;
            if plan.header_patch.area() > 0.0 {
                fill_shape(canvas, &plan.header_patch, plan.style.header_fill, 255)?;
            }
            for (circle, color) in &plan.dots {
                fill_shape(canvas, circle, *color, 255)?;
            }
            let t = &plan.title;
            painter.draw_line(canvas, &t.text, &t.font, t.origin, t.color)
        }
        Layer::Content => {
            for line in &plan.content {
                painter.draw_line(canvas, &line.text, &line.font, line.origin, line.color)?;
            }
            Ok(())
        }
    }
}

/// Paint every layer of `plan` in compositing order.
pub fn render_window<P: TextPainter + ?Sized>(
    canvas: &mut Canvas,
    painter: &mut P,
    plan: &WindowPlan,
) -> SlideResult<()> {
    for layer in Layer::ORDER {
        draw_window_layer(canvas, painter, plan, layer)?;
    }
    Ok(())
}

/// Plan and paint a terminal window.
#[allow(clippy::too_many_arguments)]
pub fn draw_window<P: TextPainter + ?Sized>(
    canvas: &mut Canvas,
    painter: &mut P,
    theme: &Theme,
    geometry: PanelGeometry,
    title: &str,
    lines: &[ContentLine],
    font: &FontHandle,
    style: &WindowStyle,
) -> SlideResult<()> {
    let plan = plan_window(painter, theme, geometry, title, lines, font, style)?;
    render_window(canvas, painter, &plan)
}

/// Rounded outline inset by half the stroke so the border stays inside `rect`.
fn inset_outline(rect: Rect, radius: f64, stroke: f64) -> kurbo::RoundedRect {
    let half = stroke / 2.0;
    kurbo::RoundedRect::from_rect(rect.inset(-half), (radius - half).max(0.0))
}

#[cfg(test)]
#[path = "../../tests/unit/render/window.rs"]
mod tests;
