use std::sync::Mutex;
use tauri::{Listener, Manager, RunEvent, State};

mod controller;
mod hotkeys;
mod overlay;

pub use controller::{InputMode, OverlayController, OverlayHost};
pub use overlay::TauriOverlay;

/// Event channel on which the content layer requests closure
pub const CLOSE_EVENT: &str = "close-overlay";

/// Shared application state: the one overlay controller
pub struct OverlayState {
    pub controller: Mutex<OverlayController<TauriOverlay>>,
}

/// Build and run the Tauri application
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Info)
                .build(),
        )
        .plugin(tauri_plugin_global_shortcut::Builder::new().build())
        .setup(|app| {
            // The one overlay window; failure here is fatal, the app has
            // nothing to do without it.
            let window = overlay::create_overlay_window(app.handle())?;

            let mut controller = OverlayController::new(TauriOverlay::new(window));
            controller.initialize();
            app.manage(OverlayState {
                controller: Mutex::new(controller),
            });

            // Close-request channel from the content layer (fire-and-forget,
            // no payload)
            let handle = app.handle().clone();
            app.listen_any(CLOSE_EVENT, move |_event| {
                let state: State<OverlayState> = handle.state();
                state.controller.lock().unwrap().close();
            });

            // Registered last, so initialization (including the initial mode
            // notification) is complete before the hotkey can fire
            hotkeys::register_toggle(app.handle())?;

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app, event| {
            if let RunEvent::Exit = event {
                hotkeys::unregister_all(app);
            }
        });
}
