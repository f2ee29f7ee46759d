pub mod field;
pub mod navigation;
pub mod readiness;
pub mod record;

pub use field::QualifiedField;
pub use navigation::NavigationState;
pub use readiness::ReadinessState;
pub use record::{RecordEvent, RecordSnapshot};
