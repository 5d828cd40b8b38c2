// Overlay window - geometry, creation and the Tauri-backed host capability

use tauri::{AppHandle, Emitter, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::controller::{InputMode, OverlayHost};

/// Window label used for lookups and capability scoping
pub const OVERLAY_LABEL: &str = "overlay";

/// Fixed overlay size in logical pixels
pub const OVERLAY_WIDTH: f64 = 1920.0;
pub const OVERLAY_HEIGHT: f64 = 1080.0;

/// Event channel carrying mode strings to the content layer
pub const MODE_EVENT: &str = "mode";

/// Top-left offset that centers a window of the given size inside a work
/// area. Floored, and negative when the work area is smaller than the window.
pub fn centered_origin(work_w: f64, work_h: f64, win_w: f64, win_h: f64) -> (f64, f64) {
    (
        ((work_w - win_w) / 2.0).floor(),
        ((work_h - win_h) / 2.0).floor(),
    )
}

/// Create the single overlay window: transparent, frameless, resizable and
/// movable, always on top, skipped by the task switcher, no shadow, centered
/// on the primary display's work area.
pub fn create_overlay_window(app: &AppHandle) -> tauri::Result<WebviewWindow> {
    let (x, y) = match app.primary_monitor()? {
        Some(monitor) => {
            let scale = monitor.scale_factor();
            let area = monitor.work_area();
            let size = area.size.to_logical::<f64>(scale);
            let origin = area.position.to_logical::<f64>(scale);
            let (dx, dy) = centered_origin(size.width, size.height, OVERLAY_WIDTH, OVERLAY_HEIGHT);
            (origin.x + dx, origin.y + dy)
        }
        None => {
            log::warn!("No primary monitor reported; placing overlay at origin");
            (0.0, 0.0)
        }
    };

    WebviewWindowBuilder::new(app, OVERLAY_LABEL, WebviewUrl::App("overlay.html".into()))
        .title("glasspane")
        .inner_size(OVERLAY_WIDTH, OVERLAY_HEIGHT)
        .position(x, y)
        .transparent(true)
        .decorations(false)
        .resizable(true)
        .always_on_top(true)
        .skip_taskbar(true)
        .shadow(false)
        .build()
}

/// Production overlay host backed by the Tauri webview window
pub struct TauriOverlay {
    window: WebviewWindow,
}

impl TauriOverlay {
    pub fn new(window: WebviewWindow) -> Self {
        Self { window }
    }
}

impl OverlayHost for TauriOverlay {
    fn set_ignore_mouse_events(&self, ignore: bool) {
        // Forwarding of ignored events is whatever the host platform provides
        if let Err(e) = self.window.set_ignore_cursor_events(ignore) {
            log::warn!("Failed to set ignore-cursor-events ({}): {}", ignore, e);
        }
    }

    fn notify_mode(&self, mode: InputMode) {
        if let Err(e) = self.window.emit(MODE_EVENT, mode) {
            log::warn!("Failed to notify content layer of mode change: {}", e);
        }
    }

    fn close(&self) {
        if let Err(e) = self.window.close() {
            log::warn!("Failed to close overlay window: {}", e);
        }
    }

    fn is_open(&self) -> bool {
        self.window
            .app_handle()
            .get_webview_window(OVERLAY_LABEL)
            .is_some()
    }
}
