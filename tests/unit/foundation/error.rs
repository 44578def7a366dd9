use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SlideError::resource_load("x")
            .to_string()
            .contains("resource load error:")
    );
    assert!(
        SlideError::content_read("x")
            .to_string()
            .contains("content read error:")
    );
    assert!(
        SlideError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SlideError::render("x").to_string().contains("render error:"));
}

#[test]
fn write_error_names_the_destination() {
    let err = SlideError::write("out/02_selectors.png", "permission denied");
    let msg = err.to_string();
    assert!(msg.contains("out/02_selectors.png"));
    assert!(msg.contains("permission denied"));
}

#[test]
fn only_resource_and_validation_errors_abort_the_run() {
    assert!(SlideError::resource_load("font").is_fatal_for_run());
    assert!(SlideError::validation("deck").is_fatal_for_run());
    assert!(!SlideError::write("a.png", "x").is_fatal_for_run());
    assert!(!SlideError::content_read("t").is_fatal_for_run());
    assert!(!SlideError::render("r").is_fatal_for_run());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SlideError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
