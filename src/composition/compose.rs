use std::path::{Path, PathBuf};

use crate::composition::model::{
    DEFAULT_TRANSCRIPT, Deck, Element, Slide, WindowContent, line_color,
};
use crate::composition::transcript::{read_transcript, transcript_lines};
use crate::foundation::core::{PanelGeometry, Point};
use crate::foundation::error::{SlideError, SlideResult};
use crate::render::canvas::Canvas;
use crate::render::centered::draw_centered;
use crate::render::window::{ContentLine, WindowStyle, draw_window};
use crate::text::measure::TextPainter;
use crate::text::wrap::wrap;
use crate::theme::Theme;

/// Run-wide knobs that are not part of the deck itself.
#[derive(Clone, Debug, Default)]
pub struct ComposeOptions {
    /// Overrides the transcript path of every transcript window.
    pub transcript: Option<PathBuf>,
    pub window: WindowStyle,
}

/// A slide that could not be produced. The rest of the run is unaffected.
#[derive(Debug)]
pub struct SlideFailure {
    pub index: usize,
    pub file: String,
    pub error: SlideError,
}

/// Outcome of [`render_deck`].
#[derive(Debug, Default)]
pub struct RenderReport {
    /// Files written, in slide order.
    pub written: Vec<PathBuf>,
    pub failed: Vec<SlideFailure>,
}

impl RenderReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Resolve a window's content into drawable lines.
///
/// An unreadable transcript degrades to the placeholder line and is logged; it never fails.
pub fn window_lines(
    content: &WindowContent,
    theme: &Theme,
    opts: &ComposeOptions,
) -> Vec<ContentLine> {
    match content {
        WindowContent::Lines { lines } => lines
            .iter()
            .map(|l| ContentLine::new(l.text.clone(), theme.color(l.color)))
            .collect(),
        WindowContent::Code { code, base, rules } => code
            .lines()
            .map(|line| ContentLine::new(line, theme.color(line_color(line, *base, rules))))
            .collect(),
        WindowContent::Transcript {
            path,
            header,
            prefixes,
            base,
            rules,
            placeholder,
        } => {
            let path = opts
                .transcript
                .as_deref()
                .or(path.as_deref())
                .unwrap_or(Path::new(DEFAULT_TRANSCRIPT));
            let text = match read_transcript(path) {
                Ok(text) => Some(text),
                Err(e) => {
                    tracing::warn!(error = %e, "transcript unavailable, showing placeholder");
                    None
                }
            };
            transcript_lines(
                text.as_deref(),
                header,
                prefixes,
                *base,
                rules,
                placeholder,
                theme,
            )
        }
    }
}

/// Draw one element onto `canvas`.
pub fn draw_element(
    canvas: &mut Canvas,
    painter: &mut dyn TextPainter,
    theme: &Theme,
    element: &Element,
    opts: &ComposeOptions,
) -> SlideResult<()> {
    let font = element.font().handle()?;
    match element {
        Element::Centered {
            text,
            y,
            color,
            line_spacing,
            ..
        } => {
            draw_centered(
                canvas,
                painter,
                text,
                &font,
                *y,
                theme.color(*color),
                *line_spacing,
            )?;
            Ok(())
        }
        Element::Text { text, x, y, color, .. } => {
            painter.draw_line(canvas, text, &font, Point::new(*x, *y), theme.color(*color))
        }
        Element::Wrapped {
            text,
            x,
            y,
            max_width,
            line_pitch,
            color,
            ..
        } => {
            for (i, line) in wrap(text, &font, *max_width, painter)?.iter().enumerate() {
                if line.is_empty() {
                    continue;
                }
                let at = Point::new(*x, y + i as f64 * line_pitch);
                painter.draw_line(canvas, line, &font, at, theme.color(*color))?;
            }
            Ok(())
        }
        Element::Window {
            x,
            y,
            w,
            h,
            title,
            content,
            ..
        } => {
            let geometry = PanelGeometry::new(*x, *y, *w, *h, opts.window.radius)?;
            let lines = window_lines(content, theme, opts);
            draw_window(
                canvas,
                painter,
                theme,
                geometry,
                title,
                &lines,
                &font,
                &opts.window,
            )
        }
    }
}

/// Compose a slide onto a fresh background-filled canvas.
#[tracing::instrument(level = "debug", skip_all, fields(file = %slide.file))]
pub fn compose_slide(
    slide: &Slide,
    theme: &Theme,
    painter: &mut dyn TextPainter,
    opts: &ComposeOptions,
) -> SlideResult<Canvas> {
    let mut canvas = Canvas::new(theme.background);
    for element in &slide.elements {
        draw_element(&mut canvas, painter, theme, element, opts)?;
    }
    Ok(canvas)
}

/// Compose slide `index` of `deck` and write it to `path`.
pub fn render_slide(
    deck: &Deck,
    index: usize,
    painter: &mut dyn TextPainter,
    path: &Path,
    opts: &ComposeOptions,
) -> SlideResult<()> {
    let slide = deck.slides.get(index).ok_or_else(|| {
        SlideError::validation(format!(
            "slide index {index} out of range (deck has {})",
            deck.slides.len()
        ))
    })?;
    let canvas = compose_slide(slide, &deck.theme, painter, opts)?;
    canvas.save_png(path)?;
    tracing::info!(path = %path.display(), "slide written");
    Ok(())
}

/// Render every slide of `deck` into `out_dir`, in order.
///
/// A slide that fails to compose or write is recorded in the report and the run moves on.
/// Only run-fatal errors (unusable fonts, invalid deck data) abort.
#[tracing::instrument(skip_all, fields(slides = deck.slides.len(), out = %out_dir.display()))]
pub fn render_deck(
    deck: &Deck,
    painter: &mut dyn TextPainter,
    out_dir: &Path,
    opts: &ComposeOptions,
) -> SlideResult<RenderReport> {
    deck.validate()?;

    let mut report = RenderReport::default();
    for (index, slide) in deck.slides.iter().enumerate() {
        let path = out_dir.join(&slide.file);
        match render_slide(deck, index, painter, &path, opts) {
            Ok(()) => report.written.push(path),
            Err(e) if e.is_fatal_for_run() => return Err(e),
            Err(error) => {
                tracing::warn!(file = %slide.file, error = %error, "slide failed");
                report.failed.push(SlideFailure {
                    index,
                    file: slide.file.clone(),
                    error,
                });
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/unit/composition/compose.rs"]
mod tests;
