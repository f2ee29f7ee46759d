pub mod engine;
pub mod options_builder;
pub mod value_resolver;
pub mod widget_config;

pub use engine::{EvaluateOutcome, RenderPhase, WidgetEngine};
pub use options_builder::build_options;
pub use value_resolver::{resolve_title, resolve_value};
pub use widget_config::{
    DEFAULT_NO_VALUE_MESSAGE, DEFAULT_TITLE, DEFAULT_URL_PARAM, LogoConfig, StyleConfig,
    TitleConfig, ValueSource, WidgetConfig,
};
