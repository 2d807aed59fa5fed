//! Mirrors of the platform window's chrome state.
//!
//! The window manager is the source of truth for focus, maximization, and
//! decoration; this module just reflects it into [`Signal`]s the shell can
//! subscribe to. Two paths feed the mirror: a synchronous query of the
//! current state at startup, and the event stream afterwards. The platform
//! gives no ordering guarantee between the two, so both paths write the same
//! signals and rely on change-only notification to make either order
//! harmless.

use halcyon_core::{Signal, signal};

/// The queries the mirror needs from the platform window. The real handle
/// lives outside this crate (a Tauri/winit window, a test stub, ...).
pub trait WindowHandle {
    fn is_focused(&self) -> bool;
    fn is_maximized(&self) -> bool;
    fn is_decorated(&self) -> bool;
}

/// Window-manager events the mirror consumes.
///
/// `Resized` carries no geometry: the mirror only cares that the maximized
/// flag may have flipped, and re-queries the handle for it. Decoration never
/// changes after window creation, so no event exists for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowEvent {
    FocusChanged(bool),
    Resized,
}

/// Reactive flags mirroring the current window's chrome state.
pub struct WindowState {
    pub focused: Signal<bool>,
    pub maximized: Signal<bool>,
    pub decorated: Signal<bool>,
}

impl WindowState {
    /// All flags start `false` until the first query or event lands.
    pub fn new() -> Self {
        Self {
            focused: signal(false),
            maximized: signal(false),
            decorated: signal(false),
        }
    }

    /// Seeds every flag from the handle's current state. Called once after
    /// subscription is set up; may resolve before or after the first event.
    pub fn sync(&self, window: &dyn WindowHandle) {
        self.focused.set(window.is_focused());
        self.maximized.set(window.is_maximized());
        self.decorated.set(window.is_decorated());
    }

    /// Applies one window-manager event. Resize events carry no maximize
    /// state of their own, so the handle is re-queried.
    pub fn apply(&self, window: &dyn WindowHandle, event: WindowEvent) {
        match event {
            WindowEvent::FocusChanged(focused) => {
                self.focused.set(focused);
            }
            WindowEvent::Resized => {
                let maximized = window.is_maximized();
                log::debug!("maximized: {maximized}");
                self.maximized.set(maximized);
            }
        }
    }
}

impl Default for WindowState {
    fn default() -> Self {
        Self::new()
    }
}
