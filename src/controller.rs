//! Owns the window, the two child webviews, and the overlay state machine.
//!
//! One controller instance is constructed at startup and lives in managed
//! state behind a mutex; shortcut handlers, IPC commands, page-load
//! callbacks, and settle timers all re-enter through it, so all mutable
//! shell state is serialized in one place.

use std::time::Duration;

use tauri::{
    AppHandle, Emitter, LogicalPosition, LogicalSize, Manager, Url, webview::Webview,
    window::Window,
};

use crate::config::AppConfig;
use crate::error::ShellError;
use crate::normalize;
use crate::overlay::{Overlay, Visibility};
use crate::AppState;

pub const MAIN_WINDOW: &str = "main";
/// Presentation layer: the URL bar document.
pub const BAR_WEBVIEW: &str = "bar";
/// The embedded browsing surface.
pub const CONTENT_WEBVIEW: &str = "content";

/// Controller → presentation: show the bar, payload is the pre-fill string.
pub const SHOW_URL_BAR: &str = "show-url-bar";
/// Controller → presentation: hide the bar.
pub const HIDE_URL_BAR: &str = "hide-url-bar";

pub struct Controller {
    app: AppHandle,
    overlay: Overlay,
    bar_height: f64,
    settle_ms: u64,
}

impl Controller {
    pub fn new(app: AppHandle, config: &AppConfig) -> Self {
        Self {
            app,
            overlay: Overlay::new(),
            bar_height: config.bar_height,
            settle_ms: config.settle_ms,
        }
    }

    /// Global shortcut pressed: flip the bar, unless a transition is
    /// already in flight (then the request is dropped).
    pub fn toggle(&mut self) {
        match self.overlay.toggle() {
            Some(target) => {
                log::info!("toggle: bar -> {target:?}");
                if let Err(e) = self.begin_transition(target) {
                    log::error!("toggle transition failed: {e}");
                }
            }
            None => log::warn!("toggle dropped: transition already in flight"),
        }
    }

    /// Escape (or Enter on an empty bar) from the presentation layer.
    pub fn cancel(&mut self) {
        match self.overlay.request_hide() {
            Some(target) => {
                log::info!("escape received, hiding URL bar");
                if let Err(e) = self.begin_transition(target) {
                    log::error!("hide transition failed: {e}");
                }
            }
            None => log::debug!("escape ignored, bar not settled visible"),
        }
    }

    /// Normalizes raw bar input and points the content view at it. A
    /// dispatch failure leaves the overlay state untouched; the bar hides
    /// only once the load completes (`navigation_finished`).
    pub fn navigate(&mut self, raw: &str) -> Result<(), ShellError> {
        let target = normalize::resolve_input(raw);
        let url: Url = target.parse().map_err(|source| ShellError::InvalidTarget {
            target: target.clone(),
            source,
        })?;
        log::info!("loading {url}");
        self.webview(CONTENT_WEBVIEW)?.navigate(url)?;
        Ok(())
    }

    /// The content view finished a load. Whatever the bar was doing, it
    /// ends hidden; a load while already hidden changes nothing.
    pub fn navigation_finished(&mut self) {
        if let Some(target) = self.overlay.force_hide() {
            log::info!("navigation finished, hiding URL bar");
            if let Err(e) = self.begin_transition(target) {
                log::error!("hide transition failed: {e}");
            }
        }
    }

    /// Window resized: reapply bounds for the current visibility, with no
    /// animation bookkeeping. This path must never arm a settle timer.
    pub fn relayout(&self) {
        if let Err(e) = self.apply_layout() {
            log::error!("relayout failed: {e}");
        }
    }

    /// Settle timer fired: complete the in-flight transition. Landing
    /// hidden hands keyboard focus back to the content view.
    pub fn finish_transition(&mut self) {
        let Some(reached) = self.overlay.settle() else {
            return;
        };
        log::debug!("transition settled at {reached:?}");
        if reached == Visibility::Hidden {
            let focused = self
                .webview(CONTENT_WEBVIEW)
                .and_then(|view| view.set_focus().map_err(ShellError::from));
            if let Err(e) = focused {
                log::warn!("failed to focus content view: {e}");
            }
        }
    }

    fn begin_transition(&mut self, target: Visibility) -> Result<(), ShellError> {
        self.apply_layout()?;
        match target {
            Visibility::Visible => {
                let current = self.current_url();
                self.app.emit(SHOW_URL_BAR, current)?;
                self.webview(BAR_WEBVIEW)?.set_focus()?;
            }
            Visibility::Hidden => {
                self.app.emit(HIDE_URL_BAR, ())?;
            }
        }
        self.schedule_settle();
        Ok(())
    }

    /// Current content-view URL, used to pre-fill the bar. Empty when the
    /// view has nothing yet.
    fn current_url(&self) -> String {
        self.webview(CONTENT_WEBVIEW)
            .ok()
            .and_then(|view| view.url().ok())
            .map(|url| url.to_string())
            .unwrap_or_default()
    }

    /// Content view bounds: full client area when the bar is hidden, the
    /// area below the bar strip while it is shown. The bar document always
    /// spans the whole window; child webviews don't track window size on
    /// their own, so both are laid out here.
    fn apply_layout(&self) -> Result<(), ShellError> {
        let window = self.window()?;
        let scale = window.scale_factor()?;
        let size = window.inner_size()?.to_logical::<f64>(scale);

        let bar = self.webview(BAR_WEBVIEW)?;
        bar.set_position(LogicalPosition::new(0.0, 0.0))?;
        bar.set_size(LogicalSize::new(size.width, size.height))?;

        let content = self.webview(CONTENT_WEBVIEW)?;

        if self.overlay.bar_visible() {
            content.set_position(LogicalPosition::new(0.0, self.bar_height))?;
            content.set_size(LogicalSize::new(
                size.width,
                (size.height - self.bar_height).max(0.0),
            ))?;
        } else {
            content.set_position(LogicalPosition::new(0.0, 0.0))?;
            content.set_size(LogicalSize::new(size.width, size.height))?;
        }
        log::debug!(
            "content bounds updated: {}",
            if self.overlay.bar_visible() {
                "below URL bar"
            } else {
                "full window"
            }
        );
        Ok(())
    }

    /// Fixed-duration, non-cancellable: a timer from a superseded
    /// transition finds the machine already settled and does nothing.
    fn schedule_settle(&self) {
        let app = self.app.clone();
        let delay = Duration::from_millis(self.settle_ms);
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            let Some(state) = app.try_state::<AppState>() else {
                return;
            };
            let Ok(mut controller) = state.controller.lock() else {
                return;
            };
            controller.finish_transition();
        });
    }

    fn window(&self) -> Result<Window, ShellError> {
        self.app
            .get_window(MAIN_WINDOW)
            .ok_or(ShellError::MissingWindow(MAIN_WINDOW))
    }

    fn webview(&self, label: &'static str) -> Result<Webview, ShellError> {
        self.app
            .get_webview(label)
            .ok_or(ShellError::MissingWebview(label))
    }
}
