//! Adapters for emitting [`SecretBox`] values through `slog`.
//!
//! `SecretBox<T>` implements `slog::Value`, so it can be passed directly as a
//! key-value pair:
//!
//! ```ignore
//! slog::info!(logger, "login"; "password" => &password);
//! ```
//!
//! The value is emitted with `emit_str` as the redaction marker. This module does
//! not configure `slog` or decide which values are sensitive.

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::SecretBox;

/// Marker trait for types whose `slog` integration always emits redacted output.
///
/// It is implemented for `SecretBox<T>` and references to it, never for raw
/// types:
///
/// ```compile_fail
/// use secret_box::slog::SlogRedacted;
///
/// fn assert_slog_redacted<T: SlogRedacted>() {}
///
/// assert_slog_redacted::<String>();
/// ```
pub trait SlogRedacted: SlogValue {}

impl<T: SlogRedacted + ?Sized> SlogRedacted for &T {}

impl<T> SlogValue for SecretBox<T> {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, &self.redacted())
    }
}

impl<T> SlogRedacted for SecretBox<T> {}
