//! qr-widget-rs: QR-code widget engine.
//!
//! This crate owns the policy side of a QR-code UI widget: resolving the
//! value to encode from one of several configured sources, gating rendering
//! on asynchronous readiness signals, and translating widget configuration
//! into the options payload of an external QR renderer. QR symbol encoding
//! and drawing stay behind the [`render::QrRenderer`] seam.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{WidgetConfig, WidgetEngine};
pub use error::{WidgetError, WidgetResult};
