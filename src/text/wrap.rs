use crate::foundation::error::{SlideError, SlideResult};
use crate::text::font::FontHandle;
use crate::text::measure::TextMeasure;

/// Greedy line fill of `text` into lines no wider than `max_width` pixels.
///
/// Paragraphs (split on line breaks) are wrapped independently and in order; an empty or
/// whitespace-only paragraph yields one empty line. Words are separated by single spaces, so
/// repeated spaces stay part of the line; leading spaces of a line are dropped. Words are never
/// split: a word wider than `max_width` is emitted alone on its own line.
pub fn wrap<M: TextMeasure + ?Sized>(
    text: &str,
    font: &FontHandle,
    max_width: f32,
    metrics: &mut M,
) -> SlideResult<Vec<String>> {
    if !max_width.is_finite() || max_width <= 0.0 {
        return Err(SlideError::validation("wrap max_width must be finite and > 0"));
    }

    let mut out = Vec::new();
    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            out.push(String::new());
            continue;
        }

        let mut current = String::new();
        // Split on single spaces so runs of spaces inside a line survive.
        for word in paragraph.split(' ') {
            if word.is_empty() && current.is_empty() {
                continue;
            }
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if metrics.measure(&candidate, font)?.width <= max_width {
                current = candidate;
            } else {
                if !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                }
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            out.push(current);
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
