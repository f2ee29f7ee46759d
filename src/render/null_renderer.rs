use crate::error::{WidgetError, WidgetResult};

use super::{QrRenderOptions, QrRenderer, RenderHandle};

/// No-op renderer used by tests and headless engine usage.
///
/// Records every call so scheduler behavior can be asserted without a real
/// backend, and can simulate a mount point that is not attached yet.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub create_calls: usize,
    pub update_calls: usize,
    pub clear_calls: usize,
    pub last_options: Option<QrRenderOptions>,
    /// When set, `create` reports the container as unavailable.
    pub mount_point_detached: bool,
    next_handle: u64,
    live_handle: Option<RenderHandle>,
}

impl NullRenderer {
    #[must_use]
    pub fn live_handle(&self) -> Option<RenderHandle> {
        self.live_handle
    }
}

impl QrRenderer for NullRenderer {
    fn create(&mut self, options: &QrRenderOptions) -> WidgetResult<RenderHandle> {
        if self.mount_point_detached {
            return Err(WidgetError::MountPointUnavailable);
        }
        self.next_handle += 1;
        let handle = RenderHandle::new(self.next_handle);
        self.live_handle = Some(handle);
        self.last_options = Some(options.clone());
        self.create_calls += 1;
        Ok(handle)
    }

    fn update(&mut self, handle: RenderHandle, options: &QrRenderOptions) -> WidgetResult<()> {
        if self.live_handle != Some(handle) {
            return Err(WidgetError::InvalidData(format!(
                "unknown render handle: {}",
                handle.raw()
            )));
        }
        self.last_options = Some(options.clone());
        self.update_calls += 1;
        Ok(())
    }

    fn clear(&mut self, handle: RenderHandle) -> WidgetResult<()> {
        if self.live_handle != Some(handle) {
            return Err(WidgetError::InvalidData(format!(
                "unknown render handle: {}",
                handle.raw()
            )));
        }
        self.live_handle = None;
        self.last_options = None;
        self.clear_calls += 1;
        Ok(())
    }
}
