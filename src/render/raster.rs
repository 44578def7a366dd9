//! Vector rasterization through `vello_cpu` into offscreen layers.
//!
//! `vello_cpu` renders into a fresh buffer, so every primitive is drawn into a transparent
//! premultiplied layer covering only its bounds, then blended onto the [`Canvas`].

use vello_cpu::kurbo::Affine;

use crate::foundation::core::{PixelRect, Rect, Rgb8};
use crate::foundation::error::{SlideError, SlideResult};
use crate::render::canvas::Canvas;

/// Extra pixels kept around shape bounds for antialiasing.
const AA_MARGIN: f64 = 2.0;

/// Render a transparent layer of `width x height`.
///
/// `draw` receives the context and the transform from caller coordinates into the layer; it
/// must apply that transform (composed with any local one) before drawing.
pub(crate) fn render_layer(
    width: u32,
    height: u32,
    to_layer: Affine,
    draw: impl FnOnce(&mut vello_cpu::RenderContext, Affine) -> SlideResult<()>,
) -> SlideResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| SlideError::render("layer width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| SlideError::render("layer height exceeds u16"))?;
    if w == 0 || h == 0 {
        return Err(SlideError::render("layer must be non-empty"));
    }

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_transform(to_layer);
    draw(&mut ctx, to_layer)?;
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);
    Ok(pixmap)
}

/// Draw in canvas coordinates, restricted to `bounds` (clipped to the canvas).
pub(crate) fn rasterize_onto(
    canvas: &mut Canvas,
    bounds: Rect,
    draw: impl FnOnce(&mut vello_cpu::RenderContext, Affine) -> SlideResult<()>,
) -> SlideResult<()> {
    let Some(region) = PixelRect::covering(bounds).clip_to(canvas.width(), canvas.height()) else {
        return Ok(());
    };
    let to_layer = Affine::translate((-f64::from(region.x), -f64::from(region.y)));
    let layer = render_layer(region.width, region.height, to_layer, draw)?;
    canvas.blend_premul_rgba8(
        layer.data_as_u8_slice(),
        region.width,
        region.height,
        region.x,
        region.y,
    )
}

pub(crate) fn fill_shape(
    canvas: &mut Canvas,
    shape: &impl kurbo::Shape,
    color: Rgb8,
    alpha: u8,
) -> SlideResult<()> {
    let path = shape_to_cpu(shape);
    let bounds = shape.bounding_box().inflate(AA_MARGIN, AA_MARGIN);
    rasterize_onto(canvas, bounds, |ctx, _| {
        ctx.set_paint(color.with_alpha(alpha));
        ctx.fill_path(&path);
        Ok(())
    })
}

/// Stroke `shape` with the line centered on its outline.
pub(crate) fn stroke_shape(
    canvas: &mut Canvas,
    shape: &impl kurbo::Shape,
    width: f64,
    color: Rgb8,
) -> SlideResult<()> {
    let path = shape_to_cpu(shape);
    let grow = width / 2.0 + AA_MARGIN;
    let bounds = shape.bounding_box().inflate(grow, grow);
    rasterize_onto(canvas, bounds, |ctx, _| {
        ctx.set_paint(color.with_alpha(255));
        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        ctx.stroke_path(&path);
        Ok(())
    })
}

/// Flatten any `kurbo` shape into the rasterizer's path type.
pub(crate) fn shape_to_cpu(shape: &impl kurbo::Shape) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in shape.path_elements(0.1) {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
