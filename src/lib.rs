//! Slidewright renders fixed-size presentation slides to PNG.
//!
//! A [`Deck`] lists slides made of centered headlines, positioned and wrapped captions, and
//! terminal-style windows (rounded panel, drop shadow, header bar with indicator dots, and a
//! truncated list of colored content lines). Rendering is CPU-only:
//!
//! - shapes and glyph runs are rasterized with `vello_cpu` into offscreen premultiplied layers
//!   and blended over an opaque RGB [`Canvas`]
//! - text is shaped with `parley` through [`ParleyTextEngine`], or approximated with
//!   [`DraftText`] when no font is at hand
//! - [`render_deck`] writes one PNG per slide and reports per-slide failures
#![forbid(unsafe_code)]

mod foundation;

pub mod composition;
pub mod render;
pub mod text;
pub mod theme;

pub use crate::foundation::core::{
    PanelGeometry, PixelRect, Point, Rect, Rgb8, SLIDE_HEIGHT, SLIDE_WIDTH, Vec2,
};
pub use crate::foundation::error::{SlideError, SlideResult};

pub use crate::composition::compose::{
    ComposeOptions, RenderReport, SlideFailure, compose_slide, draw_element, render_deck,
    render_slide, window_lines,
};
pub use crate::composition::model::{
    Deck, Element, FontSpec, HighlightRule, LineMatch, Slide, StyledLine, WindowContent,
    line_color,
};
pub use crate::render::canvas::Canvas;
pub use crate::render::centered::draw_centered;
pub use crate::render::layer::Layer;
pub use crate::render::shadow::{ShadowStyle, render_shadow};
pub use crate::render::window::{
    ContentLine, WindowPlan, WindowStyle, draw_window, draw_window_layer, plan_window,
    render_window, visible_capacity,
};
pub use crate::text::draft::DraftText;
pub use crate::text::engine::{FaceInfo, ParleyTextEngine};
pub use crate::text::font::{DEFAULT_FACE, FontHandle, FontRegistry, parse_font_arg};
pub use crate::text::measure::{Align, TextExtent, TextMeasure, TextPainter};
pub use crate::text::wrap::wrap;
pub use crate::theme::{Theme, ThemeColor};
