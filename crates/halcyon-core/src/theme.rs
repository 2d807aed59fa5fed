//! # Theme resolution
//!
//! Themes are key/value tables consumed by the styling layer through CSS
//! custom properties. A theme is a closed set of variants:
//!
//! - [`Theme::Default`] — the built-in table.
//! - [`Theme::Override`] — a base theme plus a map of shadowed keys.
//!
//! Overrides nest to arbitrary depth; resolution walks the innermost base's
//! table in order, and for each key the outermost layer that defines it wins.
//! An override can only shadow keys its base already defines — keys that
//! appear only in the override map are never emitted.
//!
//! ```rust
//! use std::collections::HashMap;
//! use halcyon_core::theme::Theme;
//!
//! let theme = Theme::Default
//!     .with_overrides(HashMap::from([("background".into(), "#ffffff".into())]));
//!
//! let entries = theme.entries();
//! assert_eq!(entries[0], ("background".into(), "#ffffff".into()));
//! ```

use std::collections::HashMap;

/// Built-in theme table. Order is load-bearing: resolved themes always emit
/// in this order, and the styling layer relies on it being stable.
pub const DEFAULT_THEME: &[(&str, &str)] = &[
    ("background", "#1a191c"),
    ("foreground", "#25272b"),
    ("titlebar-windows-minimize-icon", "#cccccc"),
    ("titlebar-windows-minimize-hover-background", "#373737"),
    ("titlebar-windows-minimize-hover-icon", "#cccccc"),
    ("titlebar-windows-minimize-hover-transition-speed", "66ms"),
    ("titlebar-windows-minimize-active-background", "#545454"),
    ("titlebar-windows-minimize-active-icon", "#cccccc"),
    ("titlebar-windows-maximize-icon", "#cccccc"),
    ("titlebar-windows-maximize-hover-background", "#373737"),
    ("titlebar-windows-maximize-hover-icon", "#cccccc"),
    ("titlebar-windows-maximize-hover-transition-speed", "66ms"),
    ("titlebar-windows-maximize-active-background", "#545454"),
    ("titlebar-windows-maximize-active-icon", "#cccccc"),
    ("titlebar-windows-restore-icon", "#cccccc"),
    ("titlebar-windows-restore-hover-background", "#373737"),
    ("titlebar-windows-restore-hover-icon", "#cccccc"),
    ("titlebar-windows-restore-hover-transition-speed", "66ms"),
    ("titlebar-windows-restore-active-background", "#545454"),
    ("titlebar-windows-restore-active-icon", "#cccccc"),
    ("titlebar-windows-close-icon", "#cccccc"),
    ("titlebar-windows-close-hover-background", "#e81123"),
    ("titlebar-windows-close-hover-icon", "#ffffff"),
    ("titlebar-windows-close-hover-transition-speed", "66ms"),
    ("titlebar-windows-close-active-background", "#94141e"),
    ("titlebar-windows-close-active-icon", "#ffffff"),
];

/// Maps a camelCase theme key to its CSS custom-property reference,
/// e.g. `titlebarWindowsCloseIcon` → `var(--theme-titlebar-windows-close-icon)`.
///
/// Each ASCII uppercase letter becomes a hyphen followed by its lowercase
/// form; everything else passes through, so keys that are already kebab-case
/// come out unchanged.
pub fn css_var(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 14);
    out.push_str("var(--theme-");
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out.push(')');
    out
}

/// A resolvable theme. Cheap value object: built per lookup, resolved once,
/// discarded.
#[derive(Clone, Debug, Default)]
pub enum Theme {
    #[default]
    Default,
    Override {
        base: Box<Theme>,
        overrides: HashMap<String, String>,
    },
}

impl Theme {
    /// Wraps `self` in an override layer. Later layers shadow earlier ones
    /// for any key both define.
    pub fn with_overrides(self, overrides: HashMap<String, String>) -> Theme {
        Theme::Override {
            base: Box::new(self),
            overrides,
        }
    }

    /// Resolves the theme into its (key, value) sequence.
    ///
    /// The output always has exactly the built-in table's keys, in the
    /// built-in table's order. Override layers replace values but never add
    /// or remove keys; an override entry whose key the base does not define
    /// is inert.
    pub fn entries(&self) -> Vec<(String, String)> {
        match self {
            Theme::Default => DEFAULT_THEME
                .iter()
                .map(|&(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
            Theme::Override { base, overrides } => {
                log::trace!("resolving {} override(s) over {base:?}", overrides.len());
                base.entries()
                    .into_iter()
                    .map(|(k, v)| match overrides.get(&k) {
                        Some(o) => (k, o.clone()),
                        None => (k, v),
                    })
                    .collect()
            }
        }
    }
}
