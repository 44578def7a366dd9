use crate::foundation::core::{PanelGeometry, Rgb8, Vec2};
use crate::foundation::error::SlideResult;
use crate::render::blur::gaussian_blur_premul;
use crate::render::canvas::Canvas;
use crate::render::raster::{render_layer, shape_to_cpu};

/// Parameters of the offscreen shadow layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowStyle {
    /// Transparent border around the panel inside the layer, in pixels.
    pub margin: u32,
    /// Shadow opacity, 0..=255.
    pub alpha: u8,
    /// Displacement of the shadow relative to the panel.
    pub offset: Vec2,
    /// Gaussian softening radius in pixels; 0 keeps a hard edge. The blur stays inside the
    /// layer, so radii above `margin` are cut off at the layer border.
    pub blur_radius: u32,
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            margin: 10,
            alpha: 140,
            offset: Vec2::ZERO,
            blur_radius: 0,
        }
    }
}

impl ShadowStyle {
    /// Layer size and canvas placement for `panel`.
    pub fn layer_bounds(&self, panel: &PanelGeometry) -> (u32, u32, i32, i32) {
        let margin = self.margin as i32;
        (
            panel.width + 2 * self.margin,
            panel.height + 2 * self.margin,
            panel.x - margin + self.offset.x.round() as i32,
            panel.y - margin + self.offset.y.round() as i32,
        )
    }
}

/// Draw the drop shadow for `panel`. Must run before the panel body.
///
/// The shadow is a black rounded rectangle of the panel's size and radius, filled at
/// `style.alpha` into a transparent layer inset by `style.margin`, then alpha-blended onto the
/// canvas. A non-zero `style.blur_radius` softens the layer before blending.
#[tracing::instrument(level = "trace", skip(canvas))]
pub fn render_shadow(
    canvas: &mut Canvas,
    panel: &PanelGeometry,
    style: &ShadowStyle,
) -> SlideResult<()> {
    let (layer_w, layer_h, at_x, at_y) = style.layer_bounds(panel);
    let m = f64::from(style.margin);
    let body = kurbo::RoundedRect::new(
        m,
        m,
        m + f64::from(panel.width),
        m + f64::from(panel.height),
        panel.radius,
    );
    let path = shape_to_cpu(&body);

    let layer = render_layer(
        layer_w,
        layer_h,
        vello_cpu::kurbo::Affine::IDENTITY,
        |ctx, _| {
            ctx.set_paint(Rgb8::BLACK.with_alpha(style.alpha));
            ctx.fill_path(&path);
            Ok(())
        },
    )?;

    if style.blur_radius == 0 {
        return canvas.blend_premul_rgba8(layer.data_as_u8_slice(), layer_w, layer_h, at_x, at_y);
    }
    let soft = gaussian_blur_premul(layer.data_as_u8_slice(), layer_w, layer_h, style.blur_radius)?;
    canvas.blend_premul_rgba8(&soft, layer_w, layer_h, at_x, at_y)
}

#[cfg(test)]
#[path = "../../tests/unit/render/shadow.rs"]
mod tests;
