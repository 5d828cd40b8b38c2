// Overlay controller - owns the input mode and drives the host window

use serde::{Deserialize, Serialize};

/// Input mode of the overlay window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Mouse events pass through to whatever is beneath the overlay
    Clickthrough,
    /// Mouse events are captured by the overlay
    Interactive,
}

impl InputMode {
    /// Wire string sent to the content layer
    pub fn as_str(self) -> &'static str {
        match self {
            InputMode::Clickthrough => "clickthrough",
            InputMode::Interactive => "interactive",
        }
    }

    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            InputMode::Clickthrough => InputMode::Interactive,
            InputMode::Interactive => InputMode::Clickthrough,
        }
    }

    /// Whether the window should ignore mouse events in this mode
    pub fn is_clickthrough(self) -> bool {
        self == InputMode::Clickthrough
    }
}

/// Host window capabilities the controller depends on.
///
/// All calls are fire-and-forget: the production impl logs failures instead
/// of propagating them, so the controller never sees an error.
pub trait OverlayHost {
    /// Set mouse-event behavior: ignore (forwarding to windows beneath)
    /// when true, capture when false.
    fn set_ignore_mouse_events(&self, ignore: bool);

    /// Push a mode notification to the content layer.
    fn notify_mode(&self, mode: InputMode);

    /// Destroy the overlay window.
    fn close(&self);

    /// Whether the overlay window still exists.
    fn is_open(&self) -> bool;
}

/// Owns the single overlay window's input mode and keeps the host window
/// configuration in sync with it.
pub struct OverlayController<H: OverlayHost> {
    host: H,
    mode: InputMode,
}

impl<H: OverlayHost> OverlayController<H> {
    /// Initial mode is always click-through
    pub fn new(host: H) -> Self {
        Self {
            host,
            mode: InputMode::Clickthrough,
        }
    }

    /// Apply the initial click-through state and send the initial mode
    /// notification. Called once, right after the window is created.
    pub fn initialize(&mut self) {
        self.apply();
        log::info!("Overlay initialized (mode: {})", self.mode.as_str());
    }

    /// Flip the input mode and push the new state to the window and the
    /// content layer. Pressing the hotkey after the window is gone is a
    /// no-op: state does not flip and nothing is notified.
    pub fn toggle(&mut self) {
        if !self.host.is_open() {
            log::debug!("Toggle ignored: overlay window no longer exists");
            return;
        }
        self.mode = self.mode.toggled();
        self.apply();
        log::info!("Overlay mode toggled (mode: {})", self.mode.as_str());
    }

    /// Close the overlay window. No-op if it is already gone.
    pub fn close(&mut self) {
        if !self.host.is_open() {
            log::debug!("Close ignored: overlay window no longer exists");
            return;
        }
        self.host.close();
        log::info!("Overlay closed on content-layer request");
    }

    /// Current input mode
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Push the current mode to the window config and the content layer
    fn apply(&self) {
        self.host.set_ignore_mouse_events(self.mode.is_clickthrough());
        self.host.notify_mode(self.mode);
    }
}
