//! Adapters for emitting [`SecretBox`] values through `tracing`.
//!
//! `tracing`'s `Value` trait is sealed, so a `SecretBox` is recorded through
//! one of the formatting sigils, both of which render the marker:
//!
//! ```ignore
//! use secret_box::tracing::TracingRedactedExt;
//!
//! tracing::info!(password = %password);
//! tracing::info!(password = ?password);
//! tracing::info!(password = password.tracing_redacted());
//! ```
//!
//! With the `json` feature also enabled, a failed `SecretBox` deserialization
//! emits a `debug` event that carries only the target type name.

use tracing::field::{DisplayValue, display};

use crate::SecretBox;

/// Marker trait for types whose `tracing` integration always emits redacted
/// output.
///
/// This trait is implemented only for `SecretBox<T>` and references to it.
pub trait TracingRedacted {}

impl<T: TracingRedacted + ?Sized> TracingRedacted for &T {}

impl<T> TracingRedacted for SecretBox<T> {}

/// Extension trait for logging redacted values as display strings.
pub trait TracingRedactedExt {
    /// Returns the redaction marker wrapped as a `tracing` display value.
    fn tracing_redacted(&self) -> DisplayValue<String>;
}

impl<T> TracingRedactedExt for SecretBox<T> {
    fn tracing_redacted(&self) -> DisplayValue<String> {
        display(self.redacted())
    }
}
