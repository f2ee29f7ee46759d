use thiserror::Error;

pub type WidgetResult<T> = Result<T, WidgetError>;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("script load failed: {message}")]
    ScriptLoad { message: String },

    #[error("record fetch failed: {message}")]
    RecordFetch { message: String },

    #[error("mount point unavailable")]
    MountPointUnavailable,

    #[error("invalid data: {0}")]
    InvalidData(String),
}
