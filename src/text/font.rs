use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::foundation::error::{SlideError, SlideResult};

/// Logical face name used when a deck does not name one.
pub const DEFAULT_FACE: &str = "mono";

/// A registered face plus a pixel size. Cheap to clone; never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct FontHandle {
    face: Arc<str>,
    size_px: f32,
}

impl FontHandle {
    pub fn new(face: impl Into<Arc<str>>, size_px: f32) -> SlideResult<Self> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(SlideError::validation("font size must be finite and > 0"));
        }
        Ok(Self {
            face: face.into(),
            size_px,
        })
    }

    pub fn face(&self) -> &str {
        &self.face
    }

    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    /// Same face at another size.
    pub fn with_size(&self, size_px: f32) -> SlideResult<Self> {
        Self::new(Arc::clone(&self.face), size_px)
    }

    pub(crate) fn cache_key(&self) -> (Arc<str>, u32) {
        (Arc::clone(&self.face), self.size_px.to_bits())
    }
}

/// Raw font bytes registered under a logical name.
#[derive(Clone, Debug)]
pub struct FontSource {
    /// Where the bytes came from, for diagnostics.
    pub origin: String,
    pub bytes: Arc<Vec<u8>>,
}

/// Fonts keyed by logical name, resolved once at startup.
///
/// The registry only owns bytes; shaping engines register them on construction.
#[derive(Clone, Debug, Default)]
pub struct FontRegistry {
    faces: BTreeMap<String, FontSource>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_bytes(
        &mut self,
        name: impl Into<String>,
        origin: impl Into<String>,
        bytes: Vec<u8>,
    ) -> SlideResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SlideError::validation("font face name must be non-empty"));
        }
        if bytes.is_empty() {
            return Err(SlideError::resource_load(format!(
                "font '{name}' has no data"
            )));
        }
        self.faces.insert(
            name,
            FontSource {
                origin: origin.into(),
                bytes: Arc::new(bytes),
            },
        );
        Ok(())
    }

    /// Read a font file. A missing or unreadable file is a fatal resource error.
    pub fn register_file(&mut self, name: impl Into<String>, path: &Path) -> SlideResult<()> {
        let name = name.into();
        let bytes = std::fs::read(path).map_err(|e| {
            SlideError::resource_load(format!(
                "failed to read font '{name}' from '{}': {e}",
                path.display()
            ))
        })?;
        tracing::debug!(face = %name, path = %path.display(), bytes = bytes.len(), "font loaded");
        self.register_bytes(name, path.display().to_string(), bytes)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.faces.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FontSource)> {
        self.faces.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Handle for a registered face.
    pub fn handle(&self, name: &str, size_px: f32) -> SlideResult<FontHandle> {
        if !self.contains(name) {
            return Err(SlideError::resource_load(format!(
                "font face '{name}' is not registered"
            )));
        }
        FontHandle::new(name, size_px)
    }
}

/// Parse a `--font` argument: `NAME=PATH`, or a bare `PATH` for the default face.
pub fn parse_font_arg(arg: &str) -> SlideResult<(String, PathBuf)> {
    match arg.split_once('=') {
        Some((name, path)) if !name.is_empty() && !name.contains(['/', '\\']) => {
            if path.is_empty() {
                return Err(SlideError::validation(format!(
                    "font argument '{arg}' has an empty path"
                )));
            }
            Ok((name.to_string(), PathBuf::from(path)))
        }
        _ => Ok((DEFAULT_FACE.to_string(), PathBuf::from(arg))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
