use std::collections::HashMap;
use std::sync::Arc;

use crate::foundation::core::{Point, Rect, Rgb8};
use crate::foundation::error::{SlideError, SlideResult};
use crate::render::canvas::Canvas;
use crate::render::raster::rasterize_onto;
use crate::text::font::{FontHandle, FontRegistry};
use crate::text::measure::{TextExtent, TextMeasure, TextPainter};

/// RGBA8 brush color carried through Parley layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl From<Rgb8> for TextBrushRgba8 {
    fn from(c: Rgb8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: 255,
        }
    }
}

struct ShapedFace {
    family: String,
    font: vello_cpu::peniko::FontData,
}

/// Diagnostics for one registered face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceInfo {
    /// Logical name used by decks.
    pub name: String,
    /// Family name reported by the font itself.
    pub family: String,
}

type MeasureKey = (Arc<str>, u32, String);

/// Parley shaping plus `vello_cpu` glyph rasterization for registered fonts.
///
/// Measurements are cached per `(face, size, text)`; the cache never changes a result.
pub struct ParleyTextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    faces: HashMap<Arc<str>, ShapedFace>,
    measure_cache: HashMap<MeasureKey, TextExtent>,
}

impl ParleyTextEngine {
    /// Register every face of `registry`. Bytes that do not parse as a font are a fatal
    /// resource error.
    pub fn new(registry: &FontRegistry) -> SlideResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let mut faces = HashMap::new();

        for (name, source) in registry.iter() {
            let families = font_ctx.collection.register_fonts(
                parley::fontique::Blob::from(source.bytes.as_ref().clone()),
                None,
            );
            let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
                SlideError::resource_load(format!(
                    "font '{name}' ({}) contains no usable faces",
                    source.origin
                ))
            })?;
            let family = font_ctx
                .collection
                .family_name(family_id)
                .ok_or_else(|| {
                    SlideError::resource_load(format!("font '{name}' family has no name"))
                })?
                .to_string();

            let font = vello_cpu::peniko::FontData::new(
                vello_cpu::peniko::Blob::from(source.bytes.as_ref().clone()),
                0,
            );
            tracing::debug!(face = name, family = %family, "font registered");
            faces.insert(Arc::from(name), ShapedFace { family, font });
        }

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            faces,
            measure_cache: HashMap::new(),
        })
    }

    pub fn faces(&self) -> Vec<FaceInfo> {
        let mut out: Vec<FaceInfo> = self
            .faces
            .iter()
            .map(|(name, f)| FaceInfo {
                name: name.to_string(),
                family: f.family.clone(),
            })
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    fn layout_line(
        &mut self,
        text: &str,
        font: &FontHandle,
        brush: TextBrushRgba8,
    ) -> SlideResult<parley::Layout<TextBrushRgba8>> {
        let family = self
            .faces
            .get(font.face())
            .map(|f| f.family.clone())
            .ok_or_else(|| {
                SlideError::resource_load(format!("font face '{}' is not loaded", font.face()))
            })?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font.size_px()));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout.align(
            None,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );
        Ok(layout)
    }
}

impl TextMeasure for ParleyTextEngine {
    fn measure(&mut self, text: &str, font: &FontHandle) -> SlideResult<TextExtent> {
        let (face, size_bits) = font.cache_key();
        let key = (face, size_bits, text.to_string());
        if let Some(extent) = self.measure_cache.get(&key) {
            return Ok(*extent);
        }

        let layout = self.layout_line(text, font, TextBrushRgba8::default())?;
        let extent = TextExtent {
            width: layout.width(),
            height: layout.height(),
        };
        self.measure_cache.insert(key, extent);
        Ok(extent)
    }
}

impl TextPainter for ParleyTextEngine {
    fn draw_line(
        &mut self,
        canvas: &mut Canvas,
        text: &str,
        font: &FontHandle,
        origin: Point,
        color: Rgb8,
    ) -> SlideResult<()> {
        if text.trim().is_empty() {
            return Ok(());
        }
        let layout = self.layout_line(text, font, color.into())?;
        let glyph_font = self
            .faces
            .get(font.face())
            .map(|f| f.font.clone())
            .ok_or_else(|| {
                SlideError::resource_load(format!("font face '{}' is not loaded", font.face()))
            })?;

        // Glyph ink can overhang the advance box; keep half an em of slack on each side.
        let slack = f64::from(font.size_px()) / 2.0;
        let bounds = Rect::new(
            origin.x - slack,
            origin.y - slack,
            origin.x + f64::from(layout.width()) + slack,
            origin.y + f64::from(layout.height()) + slack,
        );

        rasterize_onto(canvas, bounds, |ctx, to_layer| {
            ctx.set_transform(to_layer * vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
            for line in layout.lines() {
                for item in line.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };
                    let brush = run.style().brush;
                    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                        brush.r, brush.g, brush.b, brush.a,
                    ));
                    let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    });
                    ctx.glyph_run(&glyph_font)
                        .font_size(run.run().font_size())
                        .fill_glyphs(glyphs);
                }
            }
            Ok(())
        })
    }
}
