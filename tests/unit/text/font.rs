use super::*;

#[test]
fn handle_rejects_bad_sizes() {
    assert!(FontHandle::new("mono", 0.0).is_err());
    assert!(FontHandle::new("mono", -3.0).is_err());
    assert!(FontHandle::new("mono", f32::INFINITY).is_err());
    assert!(FontHandle::new("mono", 30.0).is_ok());
}

#[test]
fn handles_with_different_sizes_are_distinct() {
    let a = FontHandle::new("mono", 30.0).unwrap();
    let b = a.with_size(26.0).unwrap();
    assert_eq!(b.face(), "mono");
    assert_ne!(a, b);
    assert_ne!(a.cache_key(), b.cache_key());
}

#[test]
fn missing_font_file_is_a_resource_error() {
    let mut reg = FontRegistry::new();
    let err = reg
        .register_file("mono", Path::new("definitely/not/here.ttf"))
        .unwrap_err();
    assert!(matches!(err, SlideError::ResourceLoad(_)));
    assert!(err.to_string().contains("here.ttf"));
    assert!(reg.is_empty());
}

#[test]
fn handle_requires_registered_face() {
    let mut reg = FontRegistry::new();
    assert!(matches!(
        reg.handle("mono", 30.0),
        Err(SlideError::ResourceLoad(_))
    ));

    reg.register_bytes("mono", "memory", vec![0u8; 4]).unwrap();
    let h = reg.handle("mono", 30.0).unwrap();
    assert_eq!(h.size_px(), 30.0);
    assert_eq!(reg.iter().count(), 1);
}

#[test]
fn register_rejects_empty_bytes_and_names() {
    let mut reg = FontRegistry::new();
    assert!(reg.register_bytes("mono", "memory", vec![]).is_err());
    assert!(reg.register_bytes("  ", "memory", vec![1]).is_err());
}

#[test]
fn font_arg_parsing() {
    assert_eq!(
        parse_font_arg("fonts/Mono.ttf").unwrap(),
        ("mono".to_string(), PathBuf::from("fonts/Mono.ttf"))
    );
    assert_eq!(
        parse_font_arg("serif=/usr/share/fonts/a.ttf").unwrap(),
        ("serif".to_string(), PathBuf::from("/usr/share/fonts/a.ttf"))
    );
    assert_eq!(
        parse_font_arg("/tmp/x=y/a.ttf").unwrap(),
        ("mono".to_string(), PathBuf::from("/tmp/x=y/a.ttf"))
    );
    assert!(parse_font_arg("serif=").is_err());
}
