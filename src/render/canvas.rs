use std::path::Path;

use crate::foundation::core::{PixelRect, Rgb8, SLIDE_HEIGHT, SLIDE_WIDTH};
use crate::foundation::error::{SlideError, SlideResult};

/// Opaque RGB8 pixel buffer that every drawing call writes into.
///
/// A canvas is created per slide, passed as `&mut Canvas` to each primitive, and handed to
/// [`Canvas::save_png`] once the slide is complete. Writes are always clipped to the buffer.
#[derive(Clone, Debug)]
pub struct Canvas {
    pixels: image::RgbImage,
}

impl Canvas {
    /// Fixed-size slide canvas filled with `background`.
    pub fn new(background: Rgb8) -> Self {
        Self {
            pixels: image::RgbImage::from_pixel(
                SLIDE_WIDTH,
                SLIDE_HEIGHT,
                image::Rgb(background.to_array()),
            ),
        }
    }

    /// Canvas of arbitrary size; used for thumbnails and tests.
    pub fn with_size(width: u32, height: u32, background: Rgb8) -> SlideResult<Self> {
        if width == 0 || height == 0 {
            return Err(SlideError::validation("canvas width and height must be > 0"));
        }
        Ok(Self {
            pixels: image::RgbImage::from_pixel(width, height, image::Rgb(background.to_array())),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        self.pixels
            .get_pixel_checked(x, y)
            .map(|p| Rgb8::from(p.0))
    }

    pub fn as_image(&self) -> &image::RgbImage {
        &self.pixels
    }

    /// Composite a premultiplied RGBA8 layer with its top-left corner at `(dst_x, dst_y)`.
    ///
    /// Per channel `out = src + dst * (1 - alpha)`, which for premultiplied input is the
    /// straight-alpha blend `src_color * alpha + dst * (1 - alpha)`. Pixels with zero alpha are
    /// left untouched, and the parts of the layer outside the canvas are skipped.
    pub fn blend_premul_rgba8(
        &mut self,
        src: &[u8],
        src_width: u32,
        src_height: u32,
        dst_x: i32,
        dst_y: i32,
    ) -> SlideResult<()> {
        let expected = (src_width as usize)
            .checked_mul(src_height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| SlideError::render("layer size overflow"))?;
        if src.len() != expected {
            return Err(SlideError::render(
                "blend_premul_rgba8 expects src matching width*height*4",
            ));
        }

        let layer = PixelRect {
            x: dst_x,
            y: dst_y,
            width: src_width,
            height: src_height,
        };
        let Some(visible) = layer.clip_to(self.width(), self.height()) else {
            return Ok(());
        };

        for y in visible.y..visible.y + visible.height as i32 {
            let sy = (y - dst_y) as usize;
            for x in visible.x..visible.x + visible.width as i32 {
                let sx = (x - dst_x) as usize;
                let i = (sy * src_width as usize + sx) * 4;
                let s = [src[i], src[i + 1], src[i + 2], src[i + 3]];
                if s[3] == 0 {
                    continue;
                }
                let d = self.pixels.get_pixel_mut(x as u32, y as u32);
                d.0 = over_opaque(d.0, s);
            }
        }
        Ok(())
    }

    /// Persist as PNG. Missing parent directories are created.
    pub fn save_png(&self, path: &Path) -> SlideResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| SlideError::write(path, format!("create output dir: {e}")))?;
        }
        self.pixels
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| SlideError::write(path, e.to_string()))
    }
}

/// Premultiplied source over an opaque destination.
pub(crate) fn over_opaque(dst: [u8; 3], src: [u8; 4]) -> [u8; 3] {
    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 3];
    for i in 0..3 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
