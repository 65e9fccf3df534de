use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RadarError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        RadarError::load("x")
            .to_string()
            .contains("could not load image:")
    );
    assert!(RadarError::render("x").to_string().contains("render error:"));
    assert!(RadarError::encode("x").to_string().contains("encode error:"));
    assert!(
        RadarError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RadarError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
