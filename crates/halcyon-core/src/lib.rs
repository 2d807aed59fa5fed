//! # Halcyon core
//!
//! Reactive plumbing for the application shell. Two pieces:
//!
//! - [`Signal<T>`] — observable, single-threaded value used for the
//!   window-state mirrors in `halcyon-platform`.
//! - [`theme`] — theme tables and override resolution, surfaced to styling
//!   through `var(--theme-*)` custom properties.
//!
//! ## Signals
//!
//! ```rust
//! use halcyon_core::*;
//!
//! let focused = signal(false);
//! focused.subscribe(|f| log::debug!("focus: {f}"));
//! focused.set(true);
//! assert!(focused.get());
//! ```
//!
//! Setting a signal to its current value is a no-op; platform event sources
//! coalesce, so subscribers only ever see real transitions.

pub mod signal;
pub mod theme;

pub use signal::*;
pub use theme::{Theme, css_var};
