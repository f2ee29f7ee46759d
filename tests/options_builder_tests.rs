use qr_widget_rs::api::{LogoConfig, StyleConfig, WidgetConfig, build_options};
use qr_widget_rs::render::ErrorCorrectionLevel;
use serde_json::Value;

fn styled_config(style: StyleConfig) -> WidgetConfig {
    WidgetConfig::new().with_provided_value("ABC").with_style(style)
}

#[test]
fn dimensions_and_colors_pass_through() {
    let style = StyleConfig {
        width: 256,
        height: 256,
        background_color: "#102030".to_owned(),
        dot_color: "#aabbcc".to_owned(),
        ..StyleConfig::default()
    };
    let options = build_options(&styled_config(style), "ABC");

    assert_eq!(options.width, 256);
    assert_eq!(options.height, 256);
    assert_eq!(options.background_options.color, "#102030");
    assert_eq!(options.dots_options.color, "#aabbcc");
    assert_eq!(options.data, "ABC");
}

#[test]
fn dot_style_defaults_to_rounded_and_lowercases() {
    let options = build_options(&styled_config(StyleConfig::default()), "ABC");
    assert_eq!(options.dots_options.shape, "rounded");

    let style = StyleConfig {
        dot_style: Some("ClassyRounded".to_owned()),
        ..StyleConfig::default()
    };
    let options = build_options(&styled_config(style), "ABC");
    assert_eq!(options.dots_options.shape, "classyrounded");
}

#[test]
fn corner_sentinel_none_unsets_the_type() {
    let style = StyleConfig {
        corner_square_style: Some("None".to_owned()),
        corner_dot_style: Some("Dot".to_owned()),
        ..StyleConfig::default()
    };
    let options = build_options(&styled_config(style), "ABC");
    assert_eq!(options.corners_square_options.shape, None);
    assert_eq!(options.corners_dot_options.shape, Some("dot".to_owned()));
}

#[test]
fn absent_corner_style_also_omits_the_type() {
    let options = build_options(&styled_config(StyleConfig::default()), "ABC");
    assert_eq!(options.corners_square_options.shape, None);
    assert_eq!(options.corners_dot_options.shape, None);
}

#[test]
fn error_correction_is_always_highest_tier() {
    let options = build_options(&styled_config(StyleConfig::default()), "ABC");
    assert_eq!(
        options.qr_options.error_correction_level,
        ErrorCorrectionLevel::H
    );
}

#[test]
fn logo_sets_image_and_overlay_options() {
    let config = WidgetConfig::new()
        .with_provided_value("ABC")
        .with_logo(LogoConfig::new("https://img.example/logo.png"));
    let options = build_options(&config, "ABC");

    assert_eq!(options.image.as_deref(), Some("https://img.example/logo.png"));
    let image_options = options.image_options.expect("image options present");
    assert_eq!(image_options.cross_origin, "anonymous");
    assert_eq!(image_options.margin, 5);
    assert!((image_options.image_size - 0.5).abs() < f64::EPSILON);
    assert!(image_options.hide_background_dots);
}

#[test]
fn missing_logo_omits_image_options_entirely() {
    let options = build_options(&styled_config(StyleConfig::default()), "ABC");
    assert_eq!(options.image, None);
    assert_eq!(options.image_options, None);
}

#[test]
fn json_payload_matches_external_schema() {
    let style = StyleConfig {
        corner_square_style: Some("ExtraRounded".to_owned()),
        corner_dot_style: Some("None".to_owned()),
        ..StyleConfig::default()
    };
    let config = WidgetConfig::new()
        .with_provided_value("ABC123")
        .with_style(style)
        .with_logo(LogoConfig::new("logo.png"));
    let options = build_options(&config, "ABC123");

    let json: Value =
        serde_json::from_str(&options.to_json().expect("serialize")).expect("valid json");

    assert_eq!(json["data"], "ABC123");
    assert_eq!(json["qrOptions"]["errorCorrectionLevel"], "H");
    assert_eq!(json["dotsOptions"]["type"], "rounded");
    assert_eq!(json["cornersSquareOptions"]["type"], "extrarounded");
    // Sentinel corner style must vanish from the payload, not read "none".
    assert!(json["cornersDotOptions"].get("type").is_none());
    assert_eq!(json["imageOptions"]["crossOrigin"], "anonymous");
    assert_eq!(json["imageOptions"]["hideBackgroundDots"], true);
    assert_eq!(json["backgroundOptions"]["color"], "#ffffff");
}

#[test]
fn payload_without_logo_has_no_image_members() {
    let options = build_options(&styled_config(StyleConfig::default()), "ABC");
    let json: Value =
        serde_json::from_str(&options.to_json().expect("serialize")).expect("valid json");
    assert!(json.get("image").is_none());
    assert!(json.get("imageOptions").is_none());
}
