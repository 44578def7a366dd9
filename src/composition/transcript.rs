use std::path::Path;

use crate::composition::model::{HighlightRule, StyledLine, line_color};
use crate::foundation::error::{SlideError, SlideResult};
use crate::render::window::ContentLine;
use crate::theme::{Theme, ThemeColor};

/// Read a captured program transcript. Invalid UTF-8 is replaced, not rejected.
pub fn read_transcript(path: &Path) -> SlideResult<String> {
    let bytes = std::fs::read(path).map_err(|e| {
        SlideError::content_read(format!("read transcript '{}': {e}", path.display()))
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Lines of `text` that start with any of `prefixes`, in file order.
pub fn pick_lines<'a>(text: &'a str, prefixes: &'a [String]) -> impl Iterator<Item = &'a str> {
    text.lines()
        .filter(move |line| prefixes.iter().any(|p| line.starts_with(p.as_str())))
}

/// Window lines for a transcript: `header`, the picked lines, and `placeholder` when fewer than
/// two lines would otherwise be shown. `None` means the transcript could not be read.
pub fn transcript_lines(
    transcript: Option<&str>,
    header: &StyledLine,
    prefixes: &[String],
    base: ThemeColor,
    rules: &[HighlightRule],
    placeholder: &StyledLine,
    theme: &Theme,
) -> Vec<ContentLine> {
    let mut out = vec![ContentLine::new(
        header.text.clone(),
        theme.color(header.color),
    )];
    if let Some(text) = transcript {
        out.extend(pick_lines(text, prefixes).map(|line| {
            ContentLine::new(line, theme.color(line_color(line, base, rules)))
        }));
    }
    if out.len() < 2 {
        out.push(ContentLine::new(
            placeholder.text.clone(),
            theme.color(placeholder.color),
        ));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/composition/transcript.rs"]
mod tests;
