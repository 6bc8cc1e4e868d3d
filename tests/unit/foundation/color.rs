use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Rgba8 = serde_json::from_value(json!("#00ff9d")).unwrap();
    assert_eq!(c, Rgba8::rgb(0, 255, 157));

    let c: Rgba8 = serde_json::from_value(json!("0000FF80")).unwrap();
    assert_eq!(c, Rgba8::rgba(0, 0, 255, 128));
}

#[test]
fn parses_rgb_array() {
    let c: Rgba8 = serde_json::from_value(json!([10, 20, 30])).unwrap();
    assert_eq!(c, Rgba8::rgb(10, 20, 30));
    assert!(serde_json::from_value::<Rgba8>(json!([1, 2])).is_err());
}

#[test]
fn rejects_bad_hex() {
    assert!(Rgba8::from_hex("#abc").is_err());
    assert!(Rgba8::from_hex("#gg0000").is_err());
}

#[test]
fn css_uses_rgba_for_translucent_colors() {
    let accent = Rgba8::rgb(0, 255, 157);
    assert_eq!(accent.css(), "#00ff9d");
    assert_eq!(accent.with_alpha(0.15).css(), "rgba(0, 255, 157, 0.149)");
    assert_eq!(Rgba8::TRANSPARENT.css(), "rgba(0, 0, 0, 0)");
}

#[test]
fn serializes_as_hex_string() {
    let s = serde_json::to_string(&Rgba8::rgba(0, 212, 255, 255)).unwrap();
    assert_eq!(s, "\"#00d4ff\"");
}
