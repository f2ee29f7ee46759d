use crate::core::{NavigationState, RecordSnapshot};

use super::widget_config::DEFAULT_TITLE;
use super::{ValueSource, WidgetConfig};

/// Blank check shared by every resolution stage: a missing or blank value
/// means "no value", never an error.
fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() { None } else { Some(value) }
}

/// Resolves the value to encode according to source precedence.
///
/// Record-field mode wins whenever its preconditions hold; otherwise the
/// configured [`ValueSource`] applies. Inputs belonging to non-selected
/// modes never influence the result.
#[must_use]
pub fn resolve_value(
    config: &WidgetConfig,
    record: Option<&RecordSnapshot>,
    navigation: &NavigationState,
) -> Option<String> {
    if config.uses_record_field() {
        let field = config.qualified_value_field()?;
        return record?.value(&field).map(str::to_owned);
    }

    match config.value_source {
        ValueSource::UrlParameter => navigation
            .param(config.url_param_name())
            .map(str::to_owned),
        ValueSource::ProvidedValue => config
            .provided_value
            .as_deref()
            .and_then(non_blank)
            .map(str::to_owned),
    }
}

/// Resolves the displayed title.
///
/// `None` when title display is off. In record-field mode a non-blank
/// snapshot value at the title field wins; otherwise the static text
/// applies, falling back to `"QR Code"` when that is blank too.
#[must_use]
pub fn resolve_title(config: &WidgetConfig, record: Option<&RecordSnapshot>) -> Option<String> {
    if !config.title.show {
        return None;
    }

    if config.uses_record_field()
        && let Some(field) = config.qualified_title_field()
        && let Some(title) = record.and_then(|snapshot| snapshot.value(&field))
    {
        return Some(title.to_owned());
    }

    Some(non_blank(&config.title.text).unwrap_or(DEFAULT_TITLE).to_owned())
}
