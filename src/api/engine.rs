use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{NavigationState, ReadinessState, RecordEvent, RecordSnapshot};
use crate::error::{WidgetError, WidgetResult};
use crate::render::{QrRenderOptions, QrRenderer, RenderHandle};

use super::{WidgetConfig, build_options, resolve_title, resolve_value};

/// Coarse widget lifecycle state derived from readiness and render state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderPhase {
    /// DOM container not attached yet.
    Unmounted,
    /// Mounted, renderer script still loading.
    MountedUnloaded,
    /// Renderer script failed to load; terminal for this instance.
    Disabled,
    /// Ready but nothing rendered (no resolvable value, or record pending).
    NoValue,
    /// A live artifact exists.
    Rendered,
}

/// What a single evaluate-and-render pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvaluateOutcome {
    /// No render action was possible this pass; re-attempted on the next event.
    Deferred,
    /// Script load failed earlier; the instance never renders again.
    Disabled,
    /// Ready with no resolvable value and nothing on screen.
    NoValue,
    /// A previously rendered artifact was torn down after the value went blank.
    Cleared,
    /// A fresh artifact was mounted.
    Created,
    /// The live artifact was refreshed in place.
    Updated,
    /// Ready with a payload identical to the last render; no call issued.
    Unchanged,
}

/// The widget's reactive loop.
///
/// Every external event funnels into [`WidgetEngine::evaluate`], which
/// recomputes readiness and the resolved value from full current state and
/// decides whether to create, update, or clear the rendered artifact.
/// Re-evaluation is idempotent, so events may arrive in any order and
/// duplicate passes are harmless.
pub struct WidgetEngine<R: QrRenderer> {
    renderer: R,
    config: WidgetConfig,
    readiness: ReadinessState,
    record: Option<RecordSnapshot>,
    record_error: Option<String>,
    script_error: Option<String>,
    navigation: NavigationState,
    handle: Option<RenderHandle>,
    last_options: Option<QrRenderOptions>,
}

impl<R: QrRenderer> WidgetEngine<R> {
    pub fn new(renderer: R, config: WidgetConfig) -> WidgetResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            readiness: ReadinessState::default(),
            record: None,
            record_error: None,
            script_error: None,
            navigation: NavigationState::default(),
            handle: None,
            last_options: None,
        })
    }

    /// DOM-mount lifecycle event. Fires once per instance.
    pub fn mounted(&mut self) -> EvaluateOutcome {
        if !self.readiness.dom_mounted {
            debug!("widget mounted");
            self.readiness.dom_mounted = true;
        }
        self.evaluate()
    }

    /// Renderer script finished loading.
    pub fn script_loaded(&mut self) -> EvaluateOutcome {
        // A failed load is terminal; late successes do not revive the instance.
        if self.readiness.script_failed {
            return EvaluateOutcome::Disabled;
        }
        if !self.readiness.script_loaded {
            debug!("renderer script loaded");
            self.readiness.script_loaded = true;
        }
        self.evaluate()
    }

    /// Renderer script failed to load. Latches the instance out of the
    /// rendering path for its remaining lifetime; there is no retry.
    pub fn script_load_failed(&mut self, message: &str) -> EvaluateOutcome {
        warn!(error = %message, "renderer script failed to load; widget disabled");
        self.readiness.script_failed = true;
        self.script_error = Some(message.to_owned());
        self.evaluate()
    }

    /// Delivery from the record data provider.
    ///
    /// A snapshot replaces the prior one wholesale and clears any fetch
    /// error. An error drops the snapshot but leaves `record_fetched`
    /// untouched: a failed fetch never advances readiness.
    pub fn record_event(&mut self, event: RecordEvent) -> EvaluateOutcome {
        match event {
            RecordEvent::Snapshot(snapshot) => {
                debug!(fields = snapshot.len(), "record snapshot delivered");
                self.record = Some(snapshot);
                self.record_error = None;
                self.readiness.record_fetched = true;
            }
            RecordEvent::Error(message) => {
                warn!(error = %message, "record fetch failed");
                self.record = None;
                self.record_error = Some(message);
            }
        }
        self.evaluate()
    }

    /// Navigation context changed; replaces the cached query state.
    pub fn navigation_changed(&mut self, state: NavigationState) -> EvaluateOutcome {
        trace!("navigation state replaced");
        self.navigation = state;
        self.evaluate()
    }

    /// Host signal that the record subscription key (record id or field
    /// list) changed and a re-fetch is in flight. Record-mode readiness
    /// regresses until the next snapshot; a live artifact stays up meanwhile.
    pub fn record_subscription_changed(&mut self) -> EvaluateOutcome {
        debug!("record subscription changed, awaiting fresh snapshot");
        self.readiness.record_fetched = false;
        self.evaluate()
    }

    /// Host render-pass hook. May fire many times per instance; each pass
    /// is another chance to render once a previously missing mount point
    /// has appeared.
    pub fn render_pass_completed(&mut self) -> EvaluateOutcome {
        self.evaluate()
    }

    /// The evaluate-and-render step.
    ///
    /// Always recomputes from full current state rather than from the
    /// triggering event, which is what makes event ordering irrelevant.
    /// Safe to invoke from any host lifecycle hook at any time.
    pub fn evaluate(&mut self) -> EvaluateOutcome {
        if self.readiness.script_failed {
            return EvaluateOutcome::Disabled;
        }
        if !self.readiness.is_ready(self.config.uses_record_field()) {
            return EvaluateOutcome::Deferred;
        }

        let Some(value) = resolve_value(&self.config, self.record.as_ref(), &self.navigation)
        else {
            return self.clear_artifact();
        };

        let options = build_options(&self.config, &value);
        match self.handle {
            None => self.create_artifact(options),
            Some(handle) => self.update_artifact(handle, options),
        }
    }

    fn clear_artifact(&mut self) -> EvaluateOutcome {
        let Some(handle) = self.handle.take() else {
            return EvaluateOutcome::NoValue;
        };
        self.last_options = None;
        if let Err(err) = self.renderer.clear(handle) {
            warn!(error = %err, "failed to clear rendered artifact");
        }
        debug!("cleared artifact after value became unavailable");
        EvaluateOutcome::Cleared
    }

    fn create_artifact(&mut self, options: QrRenderOptions) -> EvaluateOutcome {
        match self.renderer.create(&options) {
            Ok(handle) => {
                debug!(handle = handle.raw(), "created rendered artifact");
                self.handle = Some(handle);
                self.last_options = Some(options);
                EvaluateOutcome::Created
            }
            Err(WidgetError::MountPointUnavailable) => {
                trace!("mount point unavailable, render skipped");
                EvaluateOutcome::Deferred
            }
            Err(err) => {
                warn!(error = %err, "renderer create failed");
                EvaluateOutcome::Deferred
            }
        }
    }

    fn update_artifact(
        &mut self,
        handle: RenderHandle,
        options: QrRenderOptions,
    ) -> EvaluateOutcome {
        if self.last_options.as_ref() == Some(&options) {
            return EvaluateOutcome::Unchanged;
        }
        match self.renderer.update(handle, &options) {
            Ok(()) => {
                trace!(handle = handle.raw(), "updated rendered artifact");
                self.last_options = Some(options);
                EvaluateOutcome::Updated
            }
            Err(err) => {
                warn!(error = %err, "renderer update failed");
                EvaluateOutcome::Deferred
            }
        }
    }

    #[must_use]
    pub fn phase(&self) -> RenderPhase {
        if self.readiness.script_failed {
            RenderPhase::Disabled
        } else if !self.readiness.dom_mounted {
            RenderPhase::Unmounted
        } else if !self.readiness.script_loaded {
            RenderPhase::MountedUnloaded
        } else if self.handle.is_some() {
            RenderPhase::Rendered
        } else {
            RenderPhase::NoValue
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.readiness.script_failed && self.readiness.is_ready(self.config.uses_record_field())
    }

    #[must_use]
    pub fn has_value(&self) -> bool {
        self.resolved_value().is_some()
    }

    /// Value the widget would encode right now, independent of readiness.
    #[must_use]
    pub fn resolved_value(&self) -> Option<String> {
        resolve_value(&self.config, self.record.as_ref(), &self.navigation)
    }

    /// Title to display, or `None` when title display is off.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        resolve_title(&self.config, self.record.as_ref())
    }

    /// Placeholder text for the no-value state.
    #[must_use]
    pub fn no_value_message(&self) -> &str {
        &self.config.no_value_message
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    #[must_use]
    pub fn readiness(&self) -> ReadinessState {
        self.readiness
    }

    #[must_use]
    pub fn record_error(&self) -> Option<&str> {
        self.record_error.as_deref()
    }

    #[must_use]
    pub fn script_error(&self) -> Option<&str> {
        self.script_error.as_deref()
    }

    #[must_use]
    pub fn render_handle(&self) -> Option<RenderHandle> {
        self.handle
    }

    /// Options of the last successful create/update, if an artifact is live.
    #[must_use]
    pub fn last_options(&self) -> Option<&QrRenderOptions> {
        self.last_options.as_ref()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
