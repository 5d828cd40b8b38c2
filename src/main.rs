// Prevents console window in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    // Software compositing keeps the transparent overlay working on
    // WebKitGTK; without it the window comes up with a black background
    // on some drivers.
    #[cfg(target_os = "linux")]
    std::env::set_var("WEBKIT_DISABLE_COMPOSITING_MODE", "1");

    glasspane_lib::run()
}
