use crate::render::{
    BackgroundOptions, CornerOptions, DotsOptions, ErrorCorrectionLevel, ImageOptions,
    QrCodeOptions, QrRenderOptions, StyleToken,
};

use super::WidgetConfig;

/// Cross-origin policy for logo fetches; credentials are never sent.
const LOGO_CROSS_ORIGIN: &str = "anonymous";
/// Dot shape used when configuration leaves it unset.
const DEFAULT_DOT_SHAPE: &str = "rounded";

/// Translates widget configuration and a resolved value into the external
/// renderer's options payload.
///
/// Deterministic and pure: the same config and value always produce the
/// same payload, which lets the scheduler detect no-op re-renders by
/// comparing payloads. Error correction is pinned to the highest tier so
/// logo overlays remain scannable.
#[must_use]
pub fn build_options(config: &WidgetConfig, value: &str) -> QrRenderOptions {
    let style = &config.style;

    let dot_shape = match StyleToken::classify(style.dot_style.as_deref()) {
        StyleToken::Named(name) => name,
        StyleToken::Absent | StyleToken::DefaultSentinel => DEFAULT_DOT_SHAPE.to_owned(),
    };

    QrRenderOptions {
        width: style.width,
        height: style.height,
        data: value.to_owned(),
        image: config.logo.as_ref().map(|logo| logo.source.clone()),
        qr_options: QrCodeOptions {
            error_correction_level: ErrorCorrectionLevel::H,
        },
        image_options: config.logo.as_ref().map(|logo| ImageOptions {
            cross_origin: LOGO_CROSS_ORIGIN.to_owned(),
            margin: logo.margin,
            image_size: logo.size,
            hide_background_dots: true,
        }),
        dots_options: DotsOptions {
            color: style.dot_color.clone(),
            shape: dot_shape,
        },
        background_options: BackgroundOptions {
            color: style.background_color.clone(),
        },
        corners_square_options: CornerOptions {
            shape: StyleToken::classify(style.corner_square_style.as_deref()).into_schema_type(),
        },
        corners_dot_options: CornerOptions {
            shape: StyleToken::classify(style.corner_dot_style.as_deref()).into_schema_type(),
        },
    }
}
