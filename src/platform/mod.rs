#[cfg(windows)]
pub mod win32;

/// Non-Windows builds get inert stand-ins so the app still compiles and the
/// animator logic stays testable everywhere.
#[cfg(not(windows))]
pub mod fallback {
    /// No global cursor API to poll — `CursorMoved` events feed the target.
    pub fn setup_overlay(window: &winit::window::Window) {
        if let Err(e) = window.set_cursor_hittest(false) {
            log::warn!("click-through unavailable on this platform: {e}");
        }
    }

    /// No reduced-motion API — treat the preference as not set.
    pub fn reduced_motion_enabled() -> bool {
        false
    }
}
