use crate::foundation::error::{SlideError, SlideResult};

/// Separable gaussian blur of a premultiplied RGBA8 layer. Edges clamp.
///
/// Weights are Q16 fixed point and sum to exactly 1.0, so a uniform layer is unchanged.
pub(crate) fn gaussian_blur_premul(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
) -> SlideResult<Vec<u8>> {
    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| SlideError::render("blur layer size overflow"))?;
    if src.len() != len {
        return Err(SlideError::render(
            "gaussian_blur_premul expects src matching width*height*4",
        ));
    }
    if radius == 0 || len == 0 {
        return Ok(src.to_vec());
    }

    let kernel = kernel_q16(radius);
    let mut across = vec![0u8; len];
    let mut out = vec![0u8; len];
    blur_pass(src, &mut across, width, height, &kernel, Axis::X);
    blur_pass(&across, &mut out, width, height, &kernel, Axis::Y);
    Ok(out)
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

/// Normalized weights for `-radius..=radius`, sigma = radius / 2.
fn kernel_q16(radius: u32) -> Vec<u32> {
    let r = radius as i32;
    let sigma = f64::from(radius) / 2.0;
    let denom = 2.0 * sigma * sigma;
    let raw: Vec<f64> = (-r..=r)
        .map(|i| (-f64::from(i * i) / denom).exp())
        .collect();
    let sum: f64 = raw.iter().sum();

    let mut weights: Vec<u32> = raw
        .iter()
        .map(|w| ((w / sum) * 65536.0).round() as u32)
        .collect();
    // Rounding drift goes to the center tap.
    let total: i64 = weights.iter().map(|&w| i64::from(w)).sum();
    let mid = weights.len() / 2;
    weights[mid] = (i64::from(weights[mid]) + 65536 - total).clamp(0, 65536) as u32;
    weights
}

fn blur_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, kernel: &[u32], axis: Axis) {
    let (w, h) = (width as i32, height as i32);
    let radius = (kernel.len() / 2) as i32;
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (k, &weight) in kernel.iter().enumerate() {
                let d = k as i32 - radius;
                let (sx, sy) = match axis {
                    Axis::X => ((x + d).clamp(0, w - 1), y),
                    Axis::Y => (x, (y + d).clamp(0, h - 1)),
                };
                let i = ((sy * w + sx) as usize) * 4;
                for (c, a) in acc.iter_mut().enumerate() {
                    *a += u64::from(weight) * u64::from(src[i + c]);
                }
            }
            let o = ((y * w + x) as usize) * 4;
            for (c, a) in acc.iter().enumerate() {
                dst[o + c] = ((a + 32768) >> 16).min(255) as u8;
            }
        }
    }
}
