//! Redacted `core::fmt` implementations for [`SecretBox`].
//!
//! Every implemented format trait renders the marker, never the value:
//!
//! - `Display` and `Debug` pad the marker, so fill, alignment, width and
//!   precision only reshape the marker text
//! - `LowerHex` and `UpperHex` hex-encode the marker's bytes
//!
//! None of the impls place a bound on `T`.

use std::fmt;

use super::wrapper::SecretBox;

impl<T> fmt::Display for SecretBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.redacted())
    }
}

// Same output as `Display`. `{:#?}` must not fall back to structural printing.
impl<T> fmt::Debug for SecretBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<T> fmt::LowerHex for SecretBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex: String = self
            .redacted()
            .bytes()
            .map(|byte| format!("{byte:02x}"))
            .collect();
        f.pad(&hex)
    }
}

impl<T> fmt::UpperHex for SecretBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex: String = self
            .redacted()
            .bytes()
            .map(|byte| format!("{byte:02X}"))
            .collect();
        f.pad(&hex)
    }
}
