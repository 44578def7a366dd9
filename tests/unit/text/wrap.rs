use proptest::prelude::*;

use super::*;
use crate::text::draft::DraftText;

// 10 px font with the draft backend: every character is 5 px wide.
fn font() -> FontHandle {
    FontHandle::new("mono", 10.0).unwrap()
}

fn wrap_draft(text: &str, max_width: f32) -> Vec<String> {
    wrap(text, &font(), max_width, &mut DraftText::default()).unwrap()
}

#[test]
fn blank_lines_are_preserved() {
    assert_eq!(wrap_draft("a\n\nb", 600.0), ["a", "", "b"]);
    assert_eq!(wrap_draft("a\n   \nb", 600.0), ["a", "", "b"]);
}

#[test]
fn greedy_fill_flushes_on_first_overflow() {
    // "aaa bbb" is 35 px, "aaa bbb ccc" is 55 px.
    assert_eq!(
        wrap_draft("aaa bbb ccc ddd", 40.0),
        ["aaa bbb", "ccc ddd"]
    );
    assert_eq!(wrap_draft("aaa bbb ccc", 55.0), ["aaa bbb ccc"]);
}

#[test]
fn overlong_word_is_emitted_unsplit() {
    assert_eq!(
        wrap_draft("a extraordinarily b", 30.0),
        ["a", "extraordinarily", "b"]
    );
    assert_eq!(wrap_draft("extraordinarily", 30.0), ["extraordinarily"]);
}

#[test]
fn runs_of_spaces_are_kept() {
    assert_eq!(wrap_draft("a  b", 600.0), ["a  b"]);
    assert_eq!(wrap_draft("a   b  ", 600.0), ["a   b  "]);
}

#[test]
fn leading_spaces_are_dropped() {
    assert_eq!(wrap_draft("   a b", 600.0), ["a b"]);
}

#[test]
fn double_space_at_a_break_stays_with_the_first_line() {
    // "aaa " is 20 px, "aaa  bbb" is 40 px.
    assert_eq!(wrap_draft("aaa  bbb", 30.0), ["aaa ", "bbb"]);
}

#[test]
fn empty_text_has_no_lines() {
    assert!(wrap_draft("", 100.0).is_empty());
}

#[test]
fn non_positive_width_is_rejected() {
    let mut m = DraftText::default();
    assert!(wrap("a", &font(), 0.0, &mut m).is_err());
    assert!(wrap("a", &font(), f32::NAN, &mut m).is_err());
}

#[test]
fn supported_selectors_caption_wraps_to_budget() {
    let hint = "Supported: .when[T]  .each  .eachKey/.eachValue  .wrapped[T]  .at(i)  \
                .atIndices(i*)  .atKey(k)  .atKeys(k*)";
    let font = FontHandle::new("mono", 26.0).unwrap();
    let mut m = DraftText::default();
    let lines = wrap(hint, &font, 600.0, &mut m).unwrap();
    assert!(lines.len() > 1);
    for line in &lines {
        assert!(m.measure(line, &font).unwrap().width <= 600.0, "{line}");
    }
    assert!(lines[0].starts_with("Supported: .when[T]  .each"), "{lines:?}");
}

fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9.,()]{1,14}"
}

proptest! {
    #[test]
    fn lines_respect_width_unless_single_overlong_word(
        paragraphs in prop::collection::vec(prop::collection::vec(word(), 0..12), 1..5),
        max_width in 5.0f32..200.0,
    ) {
        let text = paragraphs
            .iter()
            .map(|p| p.join(" "))
            .collect::<Vec<_>>()
            .join("\n");
        let mut m = DraftText::default();
        let lines = wrap(&text, &font(), max_width, &mut m).unwrap();

        for line in &lines {
            let w = m.measure(line, &font()).unwrap().width;
            let single_word = !line.contains(' ');
            prop_assert!(w <= max_width || single_word, "{line:?} is {w} > {max_width}");
        }

        // No word is lost, split, or reordered.
        let words_in: Vec<&str> = text.split_whitespace().collect();
        let words_out: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
        prop_assert_eq!(words_in, words_out);
    }

    #[test]
    fn already_fitting_lines_are_unchanged(
        lines in prop::collection::vec("[a-z]{1,6}( {1,3}[a-z]{1,6}){0,5} {0,2}", 1..5),
    ) {
        let text = lines.join("\n");
        let mut m = DraftText::default();
        let widest = lines
            .iter()
            .map(|l| m.measure(l, &font()).unwrap().width)
            .fold(0.0f32, f32::max);

        let out = wrap(&text, &font(), widest, &mut m).unwrap();
        prop_assert_eq!(out, lines);
    }

    #[test]
    fn wrap_is_deterministic(text in "[a-z \n]{0,80}", max_width in 5.0f32..120.0) {
        let a = wrap_draft(&text, max_width);
        let b = wrap_draft(&text, max_width);
        prop_assert_eq!(a, b);
    }
}
