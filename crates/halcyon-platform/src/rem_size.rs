//! Root font-size (rem) observer.
//!
//! The shell scales some chrome measurements by the document's root font
//! size. The styling layer reports it as a computed `font-size` string
//! (`"16px"`); this module parses that and mirrors it into a [`Signal`],
//! refreshed on every root style mutation notification.

use halcyon_core::{Signal, signal};
use thiserror::Error;

/// A root font size that cannot be interpreted. Fatal to the caller path:
/// it means the environment reports font sizes in a unit the shell does not
/// support, and there is no sensible fallback value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RemSizeError {
    #[error("root font size {0:?} has no px suffix")]
    MissingPxSuffix(String),
    #[error("root font size {0:?} has no leading digits")]
    NotANumber(String),
}

/// Parses a computed `font-size` value like `"16px"` into whole pixels.
///
/// Fractional sizes truncate (`"16.5px"` → 16). Any other unit is an error.
pub fn parse_rem_size(size: &str) -> Result<u32, RemSizeError> {
    let Some(number) = size.strip_suffix("px") else {
        return Err(RemSizeError::MissingPxSuffix(size.to_owned()));
    };

    let digits: &str = &number[..number
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(number.len())];
    digits
        .parse()
        .map_err(|_| RemSizeError::NotANumber(size.to_owned()))
}

/// Reactive mirror of the root font size, in whole pixels.
pub struct RemSize {
    pub value: Signal<u32>,
}

impl RemSize {
    /// Seeds the mirror from the document's initial computed font size.
    pub fn new(font_size: &str) -> Result<Self, RemSizeError> {
        Ok(Self {
            value: signal(parse_rem_size(font_size)?),
        })
    }

    /// Re-reads the computed font size after a root style mutation.
    pub fn observe(&self, font_size: &str) -> Result<(), RemSizeError> {
        log::debug!("root style mutated, font-size {font_size:?}");
        self.value.set(parse_rem_size(font_size)?);
        Ok(())
    }
}
