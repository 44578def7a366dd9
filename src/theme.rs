use crate::foundation::core::Rgb8;

/// Slide palette. Built once per run and shared by reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// Canvas fill.
    pub background: Rgb8,
    /// Window body fill.
    pub panel: Rgb8,
    /// Window outlines.
    pub border: Rgb8,
    /// Headlines.
    pub title: Rgb8,
    /// Body and code text.
    pub text: Rgb8,
    /// Captions, comments, window titles.
    pub muted: Rgb8,
    /// Highlights and commands.
    pub accent: Rgb8,
    /// Passing output.
    pub success: Rgb8,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgb8::new(11, 15, 20),
            panel: Rgb8::new(17, 23, 31),
            border: Rgb8::new(36, 46, 63),
            title: Rgb8::new(241, 245, 249),
            text: Rgb8::new(226, 232, 240),
            muted: Rgb8::new(148, 163, 184),
            accent: Rgb8::new(56, 189, 248),
            success: Rgb8::new(34, 197, 94),
        }
    }
}

impl Theme {
    pub fn color(&self, name: ThemeColor) -> Rgb8 {
        match name {
            ThemeColor::Background => self.background,
            ThemeColor::Panel => self.panel,
            ThemeColor::Border => self.border,
            ThemeColor::Title => self.title,
            ThemeColor::Text => self.text,
            ThemeColor::Muted => self.muted,
            ThemeColor::Accent => self.accent,
            ThemeColor::Success => self.success,
        }
    }
}

/// Named palette entry, as referenced from deck files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeColor {
    Background,
    Panel,
    Border,
    Title,
    Text,
    Muted,
    Accent,
    Success,
}
