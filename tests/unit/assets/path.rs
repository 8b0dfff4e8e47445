use std::collections::HashSet;

use super::*;

#[test]
fn default_scheme_matches_sequence_names() {
    let s = FramePathScheme::default();
    assert_eq!(s.path(FrameIndex(0)), "/sequence/ezgif-frame-001.webp");
    assert_eq!(s.path(FrameIndex(191)), "/sequence/ezgif-frame-192.webp");
    assert!(s.path(FrameIndex(0)).ends_with("-001.webp"));
}

#[test]
fn paths_are_deterministic_and_injective() {
    let s = FramePathScheme::default();
    let mut seen = HashSet::new();
    for i in 0..192 {
        let p = s.path(FrameIndex(i));
        assert_eq!(p, s.path(FrameIndex(i)));
        assert!(seen.insert(p));
    }
    // Ordinals wider than the pad are not truncated.
    assert_eq!(s.path(FrameIndex(1233)), "/sequence/ezgif-frame-1234.webp");
}

#[test]
fn validate_rejects_bad_schemes() {
    let mut s = FramePathScheme::default();
    s.pad_width = 0;
    assert!(s.validate().is_err());
    let s = FramePathScheme {
        extension: String::new(),
        ..FramePathScheme::default()
    };
    assert!(s.validate().is_err());
}

#[test]
fn normalize_strips_root_and_dots() {
    assert_eq!(
        normalize_site_path("/sequence/./a-001.webp").unwrap(),
        "sequence/a-001.webp"
    );
    assert_eq!(
        normalize_site_path("sequence\\a.webp").unwrap(),
        "sequence/a.webp"
    );
    assert!(normalize_site_path("/../etc/passwd").is_err());
    assert!(normalize_site_path("/").is_err());
}
