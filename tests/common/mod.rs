#![allow(dead_code)]

use std::path::PathBuf;

/// A monospace-ish font for tests that shape real text, if this machine has one.
///
/// `SLIDEWRIGHT_TEST_FONT` wins; otherwise a few well-known system locations are tried.
pub fn test_font() -> Option<PathBuf> {
    if let Some(p) = std::env::var_os("SLIDEWRIGHT_TEST_FONT") {
        let p = PathBuf::from(p);
        return p.is_file().then_some(p);
    }
    [
        "tests/data/fonts/Inconsolata-Regular.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
        "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
        "/usr/share/fonts/dejavu-sans-mono-fonts/DejaVuSansMono.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
        "/Library/Fonts/Courier New.ttf",
        "C:\\Windows\\Fonts\\consola.ttf",
    ]
    .into_iter()
    .map(PathBuf::from)
    .find(|p| p.is_file())
}

/// Fresh scratch directory under `target/`.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("slidewright-tests").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
