use super::*;
use crate::composition::model::{LineMatch, TRANSCRIPT_PLACEHOLDER};

const DEMO: &str = "\
[info] running MigrationDemo
After V1 -> V2 migration: UserV2(Ada, 36)
After V2 -> V3 migration: UserV3(Ada Lovelace, 36, false)
Reversed back to V1: UserV1(Ada, 36)
ignored: After doubling: not at line start
After doubling: 72
[success] Total time: 3 s
";

fn prefixes() -> Vec<String> {
    [
        "After V1 -> V2 migration:",
        "After V2 -> V3 migration:",
        "Reversed back to V1:",
        "After doubling:",
    ]
    .map(String::from)
    .to_vec()
}

fn after_is_success() -> Vec<HighlightRule> {
    vec![HighlightRule {
        when: LineMatch::StartsWith("After".into()),
        color: ThemeColor::Success,
    }]
}

fn header() -> StyledLine {
    StyledLine::new("> sbt run", ThemeColor::Accent)
}

fn placeholder() -> StyledLine {
    StyledLine::new(TRANSCRIPT_PLACEHOLDER, ThemeColor::Muted)
}

#[test]
fn picks_prefixed_lines_in_file_order() {
    let p = prefixes();
    let picked: Vec<_> = pick_lines(DEMO, &p).collect();
    assert_eq!(
        picked,
        [
            "After V1 -> V2 migration: UserV2(Ada, 36)",
            "After V2 -> V3 migration: UserV3(Ada Lovelace, 36, false)",
            "Reversed back to V1: UserV1(Ada, 36)",
            "After doubling: 72",
        ]
    );
}

#[test]
fn transcript_lines_are_colored_by_rules() {
    let theme = Theme::default();
    let lines = transcript_lines(
        Some(DEMO),
        &header(),
        &prefixes(),
        ThemeColor::Text,
        &after_is_success(),
        &placeholder(),
        &theme,
    );
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0].color, theme.accent);
    assert_eq!(lines[1].color, theme.success);
    assert_eq!(lines[3].text, "Reversed back to V1: UserV1(Ada, 36)");
    assert_eq!(lines[3].color, theme.text);
}

#[test]
fn unreadable_or_unmatched_transcript_gets_placeholder() {
    let theme = Theme::default();
    for text in [None, Some("nothing useful\n")] {
        let lines = transcript_lines(
            text,
            &header(),
            &prefixes(),
            ThemeColor::Text,
            &after_is_success(),
            &placeholder(),
            &theme,
        );
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].text, TRANSCRIPT_PLACEHOLDER);
        assert_eq!(lines[1].color, theme.muted);
    }
}

#[test]
fn missing_file_is_a_content_read_error() {
    let path = std::env::temp_dir().join("slidewright-no-such-transcript.txt");
    let err = read_transcript(&path).unwrap_err();
    assert!(matches!(err, SlideError::ContentRead(_)));
    assert!(!err.is_fatal_for_run());
}

#[test]
fn invalid_utf8_is_replaced() {
    let path = std::env::temp_dir().join(format!(
        "slidewright-transcript-{}.txt",
        std::process::id()
    ));
    std::fs::write(&path, b"After doubling: \xff72\n").unwrap();
    let text = read_transcript(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert!(text.starts_with("After doubling: \u{fffd}72"));
}
