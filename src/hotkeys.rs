// Global hotkey using the tauri global-shortcut plugin

use tauri::{AppHandle, Manager, State};
use tauri_plugin_global_shortcut::{Code, GlobalShortcutExt, Modifiers, Shortcut, ShortcutState};

use crate::OverlayState;

/// Ctrl+Shift+T - toggle between click-through and interactive
pub fn toggle_shortcut() -> Shortcut {
    Shortcut::new(Some(Modifiers::CONTROL | Modifiers::SHIFT), Code::KeyT)
}

/// Register the mode-toggle shortcut. Registration failure is fatal to
/// startup, so the error propagates to the setup hook.
pub fn register_toggle(app: &AppHandle) -> Result<(), Box<dyn std::error::Error>> {
    let toggle = toggle_shortcut();

    app.global_shortcut().on_shortcut(toggle, move |app, shortcut, event| {
        // Only trigger on key press, not release
        if event.state != ShortcutState::Pressed {
            return;
        }
        if shortcut == &toggle {
            let state: State<OverlayState> = app.state();
            state.controller.lock().unwrap().toggle();
        }
    })?;

    log::info!("Registered Ctrl+Shift+T (toggle input mode)");
    Ok(())
}

/// Release every global shortcut registration. Runs on every exit path so
/// the system-wide keyboard hook never leaks.
pub fn unregister_all(app: &AppHandle) {
    if let Err(e) = app.global_shortcut().unregister_all() {
        log::warn!("Failed to unregister global shortcuts: {}", e);
    } else {
        log::info!("Global shortcuts released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_shortcut_is_ctrl_shift_t() {
        let shortcut = toggle_shortcut();
        assert_eq!(shortcut.mods, Modifiers::CONTROL | Modifiers::SHIFT);
        assert_eq!(shortcut.key, Code::KeyT);
    }
}
