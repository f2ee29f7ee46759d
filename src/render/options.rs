use serde::{Deserialize, Serialize};

use crate::error::{WidgetError, WidgetResult};

/// QR error-correction tier understood by the external renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCorrectionLevel {
    L,
    M,
    Q,
    H,
}

/// Explicit classification of a raw style string from configuration.
///
/// Hosts deliver shape names from a fixed choice list where the literal
/// `"None"` means "renderer default". Normalizing up front keeps the
/// three cases distinct instead of leaning on permissive null handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleToken {
    /// No style configured.
    Absent,
    /// The `"None"` sentinel: leave the schema's type field unset.
    DefaultSentinel,
    /// A concrete shape name, already lowercased for the external schema.
    Named(String),
}

impl StyleToken {
    #[must_use]
    pub fn classify(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::Absent,
            Some("None") => Self::DefaultSentinel,
            Some(name) => Self::Named(name.to_ascii_lowercase()),
        }
    }

    /// Schema value for a corner `type` field: `None` omits the field.
    #[must_use]
    pub fn into_schema_type(self) -> Option<String> {
        match self {
            Self::Absent | Self::DefaultSentinel => None,
            Self::Named(name) => Some(name),
        }
    }
}

/// Options payload handed to the external QR renderer.
///
/// Members serialize under the external library's camelCase names so hosts
/// can pass the JSON across their embedding boundary untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrRenderOptions {
    pub width: u32,
    pub height: u32,
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub qr_options: QrCodeOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_options: Option<ImageOptions>,
    pub dots_options: DotsOptions,
    pub background_options: BackgroundOptions,
    pub corners_square_options: CornerOptions,
    pub corners_dot_options: CornerOptions,
}

impl QrRenderOptions {
    /// Serializes the payload for hosts that feed the renderer as JSON.
    pub fn to_json(&self) -> WidgetResult<String> {
        serde_json::to_string(self)
            .map_err(|e| WidgetError::InvalidData(format!("failed to serialize options: {e}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeOptions {
    pub error_correction_level: ErrorCorrectionLevel,
}

/// Logo overlay options. Only present when a logo is configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageOptions {
    pub cross_origin: String,
    pub margin: u32,
    pub image_size: f64,
    pub hide_background_dots: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotsOptions {
    pub color: String,
    #[serde(rename = "type")]
    pub shape: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundOptions {
    pub color: String,
}

/// Corner-square / corner-dot styling. An unset shape leaves the renderer
/// on its default rather than emitting a literal `"none"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CornerOptions {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
}
