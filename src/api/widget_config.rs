use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::QualifiedField;
use crate::error::{WidgetError, WidgetResult};

/// URL query parameter read when no explicit name is configured.
pub const DEFAULT_URL_PARAM: &str = "qrv";
/// Title shown when neither a record field nor static text supplies one.
pub const DEFAULT_TITLE: &str = "QR Code";
/// Placeholder shown while no value resolves.
pub const DEFAULT_NO_VALUE_MESSAGE: &str = "QR code is not available.";

/// Where the encoded value comes from when no record field is configured.
///
/// Record-field mode is not part of this enum: it takes precedence whenever
/// its three preconditions (record id, object type, field name) hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValueSource {
    /// Use the statically configured value.
    #[default]
    ProvidedValue,
    /// Read the value from the current page's query state.
    UrlParameter,
}

/// Visual styling passed through to the external renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_background_color")]
    pub background_color: String,
    #[serde(default = "default_dot_color")]
    pub dot_color: String,
    /// Dot shape name from the host's fixed choice list.
    #[serde(default)]
    pub dot_style: Option<String>,
    /// Corner-square shape; the literal `"None"` means renderer default.
    #[serde(default)]
    pub corner_square_style: Option<String>,
    /// Corner-dot shape; the literal `"None"` means renderer default.
    #[serde(default)]
    pub corner_dot_style: Option<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background_color: default_background_color(),
            dot_color: default_dot_color(),
            dot_style: None,
            corner_square_style: None,
            corner_dot_style: None,
        }
    }
}

/// Logo overlay configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoConfig {
    /// Image reference the renderer can load (URL or resource path).
    pub source: String,
    /// Clearance between the logo and surrounding dots, in module units.
    #[serde(default = "default_logo_margin")]
    pub margin: u32,
    /// Logo edge length relative to the symbol, in `(0, 1]`.
    #[serde(default = "default_logo_size")]
    pub size: f64,
}

impl LogoConfig {
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            margin: default_logo_margin(),
            size: default_logo_size(),
        }
    }
}

/// Title display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleConfig {
    #[serde(default = "default_show_title")]
    pub show: bool,
    /// Record field the title is read from in record-field mode.
    #[serde(default)]
    pub field_name: Option<String>,
    /// Static fallback text.
    #[serde(default = "default_title_text")]
    pub text: String,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            show: default_show_title(),
            field_name: None,
            text: default_title_text(),
        }
    }
}

/// Immutable per-instance widget configuration.
///
/// This type is serializable so host applications can persist/load widget
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(default)]
    pub record_id: Option<String>,
    #[serde(default)]
    pub object_type: Option<String>,
    /// Record field the encoded value is read from in record-field mode.
    #[serde(default)]
    pub value_field: Option<String>,
    #[serde(default)]
    pub value_source: ValueSource,
    #[serde(default)]
    pub provided_value: Option<String>,
    #[serde(default)]
    pub url_param_name: Option<String>,
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub logo: Option<LogoConfig>,
    #[serde(default)]
    pub title: TitleConfig,
    #[serde(default = "default_no_value_message")]
    pub no_value_message: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            record_id: None,
            object_type: None,
            value_field: None,
            value_source: ValueSource::default(),
            provided_value: None,
            url_param_name: None,
            style: StyleConfig::default(),
            logo: None,
            title: TitleConfig::default(),
            no_value_message: default_no_value_message(),
        }
    }
}

impl WidgetConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the widget to a record field source.
    #[must_use]
    pub fn with_record_field(
        mut self,
        record_id: impl Into<String>,
        object_type: impl Into<String>,
        value_field: impl Into<String>,
    ) -> Self {
        self.record_id = Some(record_id.into());
        self.object_type = Some(object_type.into());
        self.value_field = Some(value_field.into());
        self
    }

    /// Sets the non-record value source.
    #[must_use]
    pub fn with_value_source(mut self, source: ValueSource) -> Self {
        self.value_source = source;
        self
    }

    /// Sets the statically provided value.
    #[must_use]
    pub fn with_provided_value(mut self, value: impl Into<String>) -> Self {
        self.provided_value = Some(value.into());
        self
    }

    /// Sets the URL query parameter name.
    #[must_use]
    pub fn with_url_param_name(mut self, name: impl Into<String>) -> Self {
        self.url_param_name = Some(name.into());
        self
    }

    /// Sets visual styling.
    #[must_use]
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Sets the logo overlay.
    #[must_use]
    pub fn with_logo(mut self, logo: LogoConfig) -> Self {
        self.logo = Some(logo);
        self
    }

    /// Sets title display behavior.
    #[must_use]
    pub fn with_title(mut self, title: TitleConfig) -> Self {
        self.title = title;
        self
    }

    /// Sets the placeholder message for the no-value state.
    #[must_use]
    pub fn with_no_value_message(mut self, message: impl Into<String>) -> Self {
        self.no_value_message = message.into();
        self
    }

    /// True when the record-field mode preconditions all hold.
    ///
    /// Record-field mode wins over [`ValueSource`] whenever a record id is
    /// present and the value field qualifies against the object type.
    #[must_use]
    pub fn uses_record_field(&self) -> bool {
        self.record_id
            .as_deref()
            .is_some_and(|id| !id.trim().is_empty())
            && self.qualified_value_field().is_some()
    }

    /// Qualified field the encoded value is read from, when buildable.
    #[must_use]
    pub fn qualified_value_field(&self) -> Option<QualifiedField> {
        QualifiedField::qualify(self.object_type.as_deref(), self.value_field.as_deref())
    }

    /// Qualified field the title is read from, when buildable.
    #[must_use]
    pub fn qualified_title_field(&self) -> Option<QualifiedField> {
        QualifiedField::qualify(self.object_type.as_deref(), self.title.field_name.as_deref())
    }

    /// Effective URL parameter name: trimmed, falling back to `"qrv"`.
    #[must_use]
    pub fn url_param_name(&self) -> &str {
        self.url_param_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_URL_PARAM)
    }

    /// Field list for the record data subscription.
    ///
    /// Holds the value field plus, when title display is on, the title
    /// field. Deduplicated so a shared field is requested once.
    #[must_use]
    pub fn subscription_fields(&self) -> SmallVec<[QualifiedField; 2]> {
        let mut fields = SmallVec::new();
        if let Some(value_field) = self.qualified_value_field() {
            fields.push(value_field);
        }
        if self.title.show
            && let Some(title_field) = self.qualified_title_field()
            && !fields.contains(&title_field)
        {
            fields.push(title_field);
        }
        fields
    }

    /// Rejects configurations the renderer cannot work with.
    pub fn validate(&self) -> WidgetResult<()> {
        if self.style.width == 0 || self.style.height == 0 {
            return Err(WidgetError::InvalidConfig(format!(
                "dimensions must be non-zero: width={}, height={}",
                self.style.width, self.style.height
            )));
        }
        if let Some(logo) = &self.logo {
            if logo.source.trim().is_empty() {
                return Err(WidgetError::InvalidConfig(
                    "logo source must not be blank".to_owned(),
                ));
            }
            if !(logo.size > 0.0 && logo.size <= 1.0) {
                return Err(WidgetError::InvalidConfig(format!(
                    "logo size must be in (0, 1]: {}",
                    logo.size
                )));
            }
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> WidgetResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| WidgetError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> WidgetResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| WidgetError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_width() -> u32 {
    300
}

fn default_height() -> u32 {
    300
}

fn default_background_color() -> String {
    "#ffffff".to_owned()
}

fn default_dot_color() -> String {
    "#000000".to_owned()
}

fn default_logo_margin() -> u32 {
    5
}

fn default_logo_size() -> f64 {
    0.5
}

fn default_show_title() -> bool {
    true
}

fn default_title_text() -> String {
    DEFAULT_TITLE.to_owned()
}

fn default_no_value_message() -> String {
    DEFAULT_NO_VALUE_MESSAGE.to_owned()
}
