use crate::foundation::error::{SlideError, SlideResult};

pub use kurbo::{Point, Rect, Vec2};

/// Slide canvas width in pixels.
pub const SLIDE_WIDTH: u32 = 1920;
/// Slide canvas height in pixels.
pub const SLIDE_HEIGHT: u32 = 1080;

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Straight-alpha color for the rasterizer paint.
    pub fn with_alpha(self, a: u8) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::from_rgba8(self.r, self.g, self.b, a)
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Rounded panel placement in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PanelGeometry {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width, must be > 0.
    pub width: u32,
    /// Height, must be > 0.
    pub height: u32,
    /// Corner radius.
    pub radius: f64,
}

impl PanelGeometry {
    /// Create a validated geometry with a non-empty area and a finite, non-negative radius.
    pub fn new(x: i32, y: i32, width: u32, height: u32, radius: f64) -> SlideResult<Self> {
        if width == 0 || height == 0 {
            return Err(SlideError::validation("panel width and height must be > 0"));
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(SlideError::validation(
                "panel radius must be finite and >= 0",
            ));
        }
        Ok(Self {
            x,
            y,
            width,
            height,
            radius,
        })
    }

    pub fn rect(&self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.x) + f64::from(self.width),
            f64::from(self.y) + f64::from(self.height),
        )
    }

    pub fn rounded_rect(&self) -> kurbo::RoundedRect {
        kurbo::RoundedRect::from_rect(self.rect(), self.radius)
    }

    /// Whether the pixel at `(px, py)` lies inside the unrounded footprint.
    pub fn contains_pixel(&self, px: i32, py: i32) -> bool {
        px >= self.x
            && py >= self.y
            && i64::from(px) < i64::from(self.x) + i64::from(self.width)
            && i64::from(py) < i64::from(self.y) + i64::from(self.height)
    }
}

/// Integer pixel region, used for offscreen layers and clipping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// Smallest pixel region covering `rect`.
    pub fn covering(rect: Rect) -> Self {
        let x0 = rect.x0.floor();
        let y0 = rect.y0.floor();
        let x1 = rect.x1.ceil().max(x0);
        let y1 = rect.y1.ceil().max(y0);
        Self {
            x: x0 as i32,
            y: y0 as i32,
            width: (x1 - x0) as u32,
            height: (y1 - y0) as u32,
        }
    }

    /// Intersection with `[0, width) x [0, height)`; `None` when nothing remains.
    pub fn clip_to(self, width: u32, height: u32) -> Option<Self> {
        let x0 = i64::from(self.x).max(0);
        let y0 = i64::from(self.y).max(0);
        let x1 = (i64::from(self.x) + i64::from(self.width)).min(i64::from(width));
        let y1 = (i64::from(self.y) + i64::from(self.height)).min(i64::from(height));
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Self {
            x: x0 as i32,
            y: y0 as i32,
            width: (x1 - x0) as u32,
            height: (y1 - y0) as u32,
        })
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
