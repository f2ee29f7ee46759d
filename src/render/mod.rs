mod null_renderer;
mod options;

pub use null_renderer::NullRenderer;
pub use options::{
    BackgroundOptions, CornerOptions, DotsOptions, ErrorCorrectionLevel, ImageOptions,
    QrCodeOptions, QrRenderOptions, StyleToken,
};

use crate::error::WidgetResult;

/// Opaque identifier of a live rendered artifact.
///
/// The engine holds at most one per widget instance: issued on `create`,
/// reused across `update` calls, surrendered on `clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RenderHandle(u64);

impl RenderHandle {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Contract implemented by the external QR rendering backend.
///
/// The engine never draws. It hands a fully materialized options payload to
/// the backend and tracks the single live artifact through the returned
/// handle, so backends stay isolated from resolution and scheduling logic.
pub trait QrRenderer {
    /// Mounts a fresh artifact, replacing any prior mount-point content.
    ///
    /// Returns [`crate::error::WidgetError::MountPointUnavailable`] when the
    /// container element is not attached yet; the engine treats that as a
    /// deferral, not a fault.
    fn create(&mut self, options: &QrRenderOptions) -> WidgetResult<RenderHandle>;

    /// Refreshes the artifact in place, preserving backend internals.
    fn update(&mut self, handle: RenderHandle, options: &QrRenderOptions) -> WidgetResult<()>;

    /// Empties the mount point and invalidates the handle.
    fn clear(&mut self, handle: RenderHandle) -> WidgetResult<()>;
}
