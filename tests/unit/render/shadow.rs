use super::*;

const BG: Rgb8 = Rgb8::new(11, 15, 20);

fn shaded(c: u8) -> i32 {
    (0.55 * 0.0 + 0.45 * f64::from(c)).round() as i32
}

fn assert_shaded(px: Rgb8) {
    assert!((i32::from(px.r) - shaded(BG.r)).abs() <= 1, "{px:?}");
    assert!((i32::from(px.g) - shaded(BG.g)).abs() <= 1, "{px:?}");
    assert!((i32::from(px.b) - shaded(BG.b)).abs() <= 1, "{px:?}");
}

#[test]
fn default_layer_is_panel_plus_margin_at_negative_margin() {
    let panel = PanelGeometry::new(120, 230, 1680, 640, 24.0).unwrap();
    let (w, h, x, y) = ShadowStyle::default().layer_bounds(&panel);
    assert_eq!((w, h, x, y), (1700, 660, 110, 220));
}

#[test]
fn shadow_interior_is_blended_not_solid() {
    let mut canvas = Canvas::with_size(200, 120, BG).unwrap();
    let panel = PanelGeometry::new(40, 30, 100, 50, 8.0).unwrap();

    render_shadow(&mut canvas, &panel, &ShadowStyle::default()).unwrap();

    let px = canvas.pixel(90, 55).unwrap();
    assert_shaded(px);
    assert_ne!(px, Rgb8::BLACK);
}

#[test]
fn shadow_leaves_pixels_outside_the_layer_untouched() {
    let mut canvas = Canvas::with_size(200, 120, BG).unwrap();
    let panel = PanelGeometry::new(40, 30, 100, 50, 8.0).unwrap();

    render_shadow(&mut canvas, &panel, &ShadowStyle::default()).unwrap();

    assert_eq!(canvas.pixel(5, 5), Some(BG));
    assert_eq!(canvas.pixel(150, 100), Some(BG));
    // Transparent margin of the layer.
    assert_eq!(canvas.pixel(35, 55), Some(BG));
}

#[test]
fn offset_shadow_is_visible_outside_the_panel_footprint() {
    let mut canvas = Canvas::with_size(200, 120, BG).unwrap();
    let panel = PanelGeometry::new(40, 30, 100, 50, 8.0).unwrap();
    let style = ShadowStyle {
        offset: Vec2::new(0.0, 12.0),
        ..ShadowStyle::default()
    };

    render_shadow(&mut canvas, &panel, &style).unwrap();

    assert!(!panel.contains_pixel(90, 85));
    assert_shaded(canvas.pixel(90, 85).unwrap());
    // Above the shifted shadow the canvas is untouched.
    assert_eq!(canvas.pixel(90, 35), Some(BG));
}

#[test]
fn shadow_near_canvas_edge_is_clipped() {
    let mut canvas = Canvas::with_size(64, 64, BG).unwrap();
    let panel = PanelGeometry::new(-20, -20, 50, 50, 4.0).unwrap();

    render_shadow(&mut canvas, &panel, &ShadowStyle::default()).unwrap();

    assert_shaded(canvas.pixel(0, 0).unwrap());
    assert_eq!(canvas.pixel(40, 40), Some(BG));
}

#[test]
fn blurred_shadow_softens_its_edge() {
    let panel = PanelGeometry::new(40, 30, 100, 50, 8.0).unwrap();
    let mut hard = Canvas::with_size(200, 120, BG).unwrap();
    let mut soft = Canvas::with_size(200, 120, BG).unwrap();
    render_shadow(&mut hard, &panel, &ShadowStyle::default()).unwrap();
    render_shadow(
        &mut soft,
        &panel,
        &ShadowStyle {
            blur_radius: 4,
            ..ShadowStyle::default()
        },
    )
    .unwrap();

    // Just outside the left edge: untouched when hard, partly darkened when soft.
    assert_eq!(hard.pixel(38, 55), Some(BG));
    let edge = soft.pixel(38, 55).unwrap();
    assert!(edge.b < BG.b, "{edge:?}");
    assert!(i32::from(edge.b) > shaded(BG.b), "{edge:?}");

    // Far from the edges the shadow keeps its full strength.
    assert_shaded(soft.pixel(90, 55).unwrap());
}
