use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{SlideError, SlideResult};
use crate::text::font::{DEFAULT_FACE, FontHandle, FontRegistry};
use crate::theme::{Theme, ThemeColor};

const BUILTIN_DECK: &str = include_str!("builtin_deck.json");

/// Placeholder shown in a transcript window when nothing usable was read.
pub const TRANSCRIPT_PLACEHOLDER: &str = "(demo output not found)";

/// Transcript file looked up when a transcript source names none.
pub const DEFAULT_TRANSCRIPT: &str = "demo-output.txt";

/// A full slide deck: palette, font table, and slides in output order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Deck {
    #[serde(default)]
    pub theme: Theme,
    /// Logical face name to font file. Relative paths resolve against the deck file.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fonts: BTreeMap<String, PathBuf>,
    pub slides: Vec<Slide>,
}

/// One output image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Slide {
    /// Output file name inside the output directory.
    pub file: String,
    /// Drawn in order onto a background-filled canvas.
    pub elements: Vec<Element>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontSpec {
    #[serde(default = "default_face")]
    pub face: String,
    pub size: f32,
}

fn default_face() -> String {
    DEFAULT_FACE.to_string()
}

impl FontSpec {
    pub fn handle(&self) -> SlideResult<FontHandle> {
        FontHandle::new(self.face.as_str(), self.size)
    }
}

fn default_line_spacing() -> f32 {
    crate::render::centered::CENTERED_LINE_SPACING
}

fn text_color() -> ThemeColor {
    ThemeColor::Text
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum Element {
    /// Horizontally centered, possibly multi-line text with its top at `y`.
    Centered {
        text: String,
        font: FontSpec,
        y: f64,
        color: ThemeColor,
        #[serde(default = "default_line_spacing")]
        line_spacing: f32,
    },
    /// A single line at a fixed position.
    Text {
        text: String,
        font: FontSpec,
        x: f64,
        y: f64,
        color: ThemeColor,
    },
    /// Text greedily wrapped to `max_width`, one wrapped line every `line_pitch` pixels.
    Wrapped {
        text: String,
        font: FontSpec,
        x: f64,
        y: f64,
        max_width: f32,
        line_pitch: f64,
        color: ThemeColor,
    },
    /// A terminal-style window.
    Window {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        title: String,
        font: FontSpec,
        content: WindowContent,
    },
}

impl Element {
    pub fn font(&self) -> &FontSpec {
        match self {
            Self::Centered { font, .. }
            | Self::Text { font, .. }
            | Self::Wrapped { font, .. }
            | Self::Window { font, .. } => font,
        }
    }
}

/// Text with a palette color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyledLine {
    pub text: String,
    pub color: ThemeColor,
}

impl StyledLine {
    pub fn new(text: impl Into<String>, color: ThemeColor) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

fn placeholder_line() -> StyledLine {
    StyledLine::new(TRANSCRIPT_PLACEHOLDER, ThemeColor::Muted)
}

/// Where a window's lines come from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case", deny_unknown_fields)]
pub enum WindowContent {
    Lines { lines: Vec<StyledLine> },
    /// A source block split on line breaks and colored by `rules`.
    Code {
        code: String,
        #[serde(default = "text_color")]
        base: ThemeColor,
        #[serde(default)]
        rules: Vec<HighlightRule>,
    },
    /// `header`, then every transcript line starting with one of `prefixes`.
    Transcript {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<PathBuf>,
        header: StyledLine,
        prefixes: Vec<String>,
        #[serde(default = "text_color")]
        base: ThemeColor,
        #[serde(default)]
        rules: Vec<HighlightRule>,
        #[serde(default = "placeholder_line")]
        placeholder: StyledLine,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineMatch {
    StartsWith(String),
    Contains(String),
}

impl LineMatch {
    pub fn matches(&self, line: &str) -> bool {
        match self {
            Self::StartsWith(p) => line.starts_with(p.as_str()),
            Self::Contains(p) => line.contains(p.as_str()),
        }
    }
}

/// `{"starts_with": "//", "color": "muted"}` or `{"contains": "Join", "color": "accent"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightRule {
    #[serde(flatten)]
    pub when: LineMatch,
    pub color: ThemeColor,
}

/// Color of `line`: `base`, overridden by each matching rule in order. The last match wins.
pub fn line_color(line: &str, base: ThemeColor, rules: &[HighlightRule]) -> ThemeColor {
    rules
        .iter()
        .filter(|r| r.when.matches(line))
        .fold(base, |_, r| r.color)
}

impl Deck {
    /// The six-slide deck shipped with the binary.
    pub fn builtin() -> SlideResult<Self> {
        Self::from_reader(BUILTIN_DECK.as_bytes())
    }

    pub fn from_reader<R: std::io::Read>(r: R) -> SlideResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SlideError::validation(format!("parse deck JSON: {e}")))
    }

    /// Load a deck file. Relative font and transcript paths are resolved against its directory.
    pub fn from_path(path: impl AsRef<Path>) -> SlideResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SlideError::validation(format!("open deck JSON '{}': {e}", path.display()))
        })?;
        let mut deck = Self::from_reader(BufReader::new(f))?;
        if let Some(dir) = path.parent() {
            deck.resolve_paths(dir);
        }
        Ok(deck)
    }

    /// Make every relative path in the deck relative to `base` instead.
    pub fn resolve_paths(&mut self, base: &Path) {
        for p in self.fonts.values_mut() {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        }
        for slide in &mut self.slides {
            for el in &mut slide.elements {
                if let Element::Window {
                    content:
                        WindowContent::Transcript {
                            path: Some(p), ..
                        },
                    ..
                } = el
                    && p.is_relative()
                {
                    *p = base.join(&*p);
                }
            }
        }
    }

    /// Face names referenced by any element.
    pub fn faces_used(&self) -> BTreeSet<&str> {
        self.slides
            .iter()
            .flat_map(|s| s.elements.iter())
            .map(|e| e.font().face.as_str())
            .collect()
    }

    /// Structural checks. Every problem is reported, one per line, with its location.
    pub fn validate(&self) -> SlideResult<()> {
        let mut errors = Vec::new();

        if self.slides.is_empty() {
            errors.push("$.slides: deck has no slides".to_string());
        }
        for name in self.fonts.keys() {
            if name.trim().is_empty() {
                errors.push("$.fonts: face names must be non-empty".to_string());
            }
        }

        let mut files = HashSet::new();
        for (i, slide) in self.slides.iter().enumerate() {
            let at = format!("$.slides[{i}]");
            validate_file_name(&slide.file, &at, &mut errors);
            if !slide.file.is_empty() && !files.insert(slide.file.as_str()) {
                errors.push(format!("{at}.file: duplicate output file '{}'", slide.file));
            }
            for (j, el) in slide.elements.iter().enumerate() {
                validate_element(el, &format!("{at}.elements[{j}]"), &mut errors);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SlideError::validation(errors.join("\n")))
        }
    }

    /// Every face the slides use must be registered.
    pub fn validate_fonts(&self, registry: &FontRegistry) -> SlideResult<()> {
        let missing: Vec<&str> = self
            .faces_used()
            .into_iter()
            .filter(|f| !registry.contains(f))
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        Err(SlideError::resource_load(format!(
            "no font registered for face(s): {}",
            missing.join(", ")
        )))
    }
}

fn validate_file_name(file: &str, at: &str, errors: &mut Vec<String>) {
    if file.trim().is_empty() {
        errors.push(format!("{at}.file: must be non-empty"));
    } else if file.contains(['/', '\\']) || file == "." || file == ".." {
        errors.push(format!("{at}.file: '{file}' must be a plain file name"));
    }
}

fn validate_element(el: &Element, at: &str, errors: &mut Vec<String>) {
    let size = el.font().size;
    if !size.is_finite() || size <= 0.0 {
        errors.push(format!("{at}.font.size: must be finite and > 0"));
    }
    if el.font().face.trim().is_empty() {
        errors.push(format!("{at}.font.face: must be non-empty"));
    }

    match el {
        Element::Centered { line_spacing, .. } => {
            if !line_spacing.is_finite() || *line_spacing < 0.0 {
                errors.push(format!("{at}.line_spacing: must be finite and >= 0"));
            }
        }
        Element::Text { .. } => {}
        Element::Wrapped {
            max_width,
            line_pitch,
            ..
        } => {
            if !max_width.is_finite() || *max_width <= 0.0 {
                errors.push(format!("{at}.max_width: must be finite and > 0"));
            }
            if !line_pitch.is_finite() || *line_pitch <= 0.0 {
                errors.push(format!("{at}.line_pitch: must be finite and > 0"));
            }
        }
        Element::Window { w, h, content, .. } => {
            if *w == 0 || *h == 0 {
                errors.push(format!("{at}: window size must be > 0"));
            }
            if let WindowContent::Transcript { prefixes, .. } = content
                && prefixes.is_empty()
            {
                errors.push(format!("{at}.content.prefixes: must not be empty"));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
