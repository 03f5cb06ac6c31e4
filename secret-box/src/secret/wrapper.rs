//! The [`SecretBox<T>`] wrapper type.

use std::any::type_name;

/// Fixed text rendered in place of a wrapped value.
pub const REDACTED_PLACEHOLDER: &str = "REDACTED";

// =============================================================================
// SecretBox - Wrapper that never renders its value
// =============================================================================

/// Wraps a sensitive value so that it cannot be rendered by accident.
///
/// Every output path renders the marker `SecretBox[<type name of T>]{REDACTED}`
/// instead of the value: `Display`, `Debug` (plain and `{:#?}`), `LowerHex`,
/// `UpperHex`, `serde::Serialize` and the logging adapters. Format traits that
/// are not implemented cannot be used at all:
///
/// ```compile_fail
/// use secret_box::SecretBox;
///
/// let pin = SecretBox::new(1234_u32);
/// let _ = format!("{pin:o}");
/// ```
///
/// There is no `Deref` to the inner value, so methods of `T` are unreachable
/// without calling [`SecretBox::expose`]:
///
/// ```compile_fail
/// use secret_box::SecretBox;
///
/// let password = SecretBox::new(String::from("hunter2"));
/// let _ = password.len();
/// ```
///
/// `SecretBox` is not a secrets manager. The value lives in plain memory and is
/// not zeroized on drop. Wrap values, not references: any `&T`, `Rc<T>` or clone
/// kept outside the box is not protected by it. Code that reads the value's
/// memory directly rather than going through `fmt` or `serde` is not covered.
///
/// The box is immutable once built; to hold a different secret, build a new
/// box. It adds no synchronization, so it is `Send`/`Sync` exactly when `T` is.
#[derive(Clone, Copy, Default)]
pub struct SecretBox<T> {
    value: T,
}

impl<T> SecretBox<T> {
    /// Wraps `value`. Never fails and performs no validation.
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Consumes the box and returns the wrapped value.
    ///
    /// This is the only way to read the value. Once returned it is no longer
    /// protected, and anything that formats or serializes it will emit it in
    /// cleartext.
    #[must_use]
    pub fn expose(self) -> T {
        self.value
    }

    /// Returns the redaction marker for `T` without needing an instance.
    #[must_use]
    pub fn marker() -> String {
        format!(
            "SecretBox[{}]{{{REDACTED_PLACEHOLDER}}}",
            type_name::<T>()
        )
    }

    /// Returns the redaction marker this box renders as.
    #[must_use]
    pub fn redacted(&self) -> String {
        Self::marker()
    }
}

impl<T> From<T> for SecretBox<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
