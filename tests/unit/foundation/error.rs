use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BlendError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BlendError::unsupported_layout("x")
            .to_string()
            .contains("unsupported layout:")
    );
    assert!(
        BlendError::UnknownMode("glow".to_owned())
            .to_string()
            .contains("unknown blend mode 'glow'")
    );
}

#[test]
fn size_mismatch_reports_both_dimensions() {
    let msg = BlendError::size_mismatch((4, 3), (2, 2)).to_string();
    assert!(msg.contains("(4, 3)"));
    assert!(msg.contains("(2, 2)"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BlendError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
