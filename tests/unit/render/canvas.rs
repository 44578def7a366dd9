use super::*;

fn bg() -> Rgb8 {
    Rgb8::new(11, 15, 20)
}

#[test]
fn slide_canvas_has_fixed_size_and_background() {
    let c = Canvas::new(bg());
    assert_eq!((c.width(), c.height()), (1920, 1080));
    assert_eq!(c.pixel(0, 0), Some(bg()));
    assert_eq!(c.pixel(1919, 1079), Some(bg()));
    assert_eq!(c.pixel(1920, 0), None);
}

#[test]
fn with_size_rejects_empty() {
    assert!(Canvas::with_size(0, 4, bg()).is_err());
    assert!(Canvas::with_size(4, 0, bg()).is_err());
}

#[test]
fn over_opaque_src_alpha_0_is_noop() {
    assert_eq!(over_opaque([10, 20, 30], [0, 0, 0, 0]), [10, 20, 30]);
}

#[test]
fn over_opaque_src_opaque_replaces_dst() {
    assert_eq!(over_opaque([10, 20, 30], [200, 100, 50, 255]), [200, 100, 50]);
}

#[test]
fn over_opaque_black_at_140_keeps_45_percent() {
    let out = over_opaque([11, 15, 20], [0, 0, 0, 140]);
    let expect = |c: f64| (0.45 * c).round() as i32;
    assert!((i32::from(out[0]) - expect(11.0)).abs() <= 1);
    assert!((i32::from(out[1]) - expect(15.0)).abs() <= 1);
    assert!((i32::from(out[2]) - expect(20.0)).abs() <= 1);
}

#[test]
fn blend_clips_layer_to_canvas() {
    let mut c = Canvas::with_size(4, 4, bg()).unwrap();
    let layer = [255u8, 255, 255, 255].repeat(9);

    c.blend_premul_rgba8(&layer, 3, 3, -1, -1).unwrap();

    let white = Rgb8::new(255, 255, 255);
    assert_eq!(c.pixel(0, 0), Some(white));
    assert_eq!(c.pixel(1, 1), Some(white));
    assert_eq!(c.pixel(2, 2), Some(bg()));
    assert_eq!(c.pixel(2, 0), Some(bg()));
}

#[test]
fn blend_fully_offscreen_is_noop() {
    let mut c = Canvas::with_size(4, 4, bg()).unwrap();
    let layer = [255u8, 0, 0, 255].repeat(4);
    c.blend_premul_rgba8(&layer, 2, 2, 10, 10).unwrap();
    c.blend_premul_rgba8(&layer, 2, 2, -5, 0).unwrap();
    assert!(c.as_image().pixels().all(|p| Rgb8::from(p.0) == bg()));
}

#[test]
fn blend_rejects_mismatched_buffer() {
    let mut c = Canvas::with_size(4, 4, bg()).unwrap();
    assert!(c.blend_premul_rgba8(&[0u8; 7], 1, 2, 0, 0).is_err());
}

#[test]
fn save_png_reports_write_error() {
    let c = Canvas::with_size(2, 2, bg()).unwrap();
    let dir = std::env::temp_dir().join(format!("slidewright_canvas_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    // A directory cannot be overwritten by a file.
    let err = c.save_png(&dir).unwrap_err();
    assert!(matches!(err, SlideError::Write { .. }));

    let ok = dir.join("nested").join("out.png");
    c.save_png(&ok).unwrap();
    let back = image::open(&ok).unwrap().to_rgb8();
    assert_eq!(back.dimensions(), (2, 2));
    assert_eq!(back.get_pixel(0, 0).0, bg().to_array());

    std::fs::remove_dir_all(&dir).ok();
}
