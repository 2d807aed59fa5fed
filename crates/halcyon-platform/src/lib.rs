//! # Halcyon platform mirrors
//!
//! Reflects external window-manager and document state into reactive flags:
//!
//! - [`window::WindowState`] — focus / maximized / decorated, fed by a
//!   [`window::WindowHandle`] plus its event stream.
//! - [`rem_size::RemSize`] — the document's root font size in pixels.
//!
//! Everything here is single-threaded and event-driven; each flag is written
//! only by its own mirror path, never concurrently with shell logic.

pub mod rem_size;
pub mod tests;
pub mod window;

pub use rem_size::{RemSize, RemSizeError, parse_rem_size};
pub use window::{WindowEvent, WindowHandle, WindowState};
