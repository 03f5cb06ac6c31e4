//! Deserialization failure for [`SecretBox`](super::SecretBox).

use std::{any::type_name, fmt, marker::PhantomData};

/// Returned when input cannot be deserialized into the `T` of a `SecretBox<T>`.
///
/// The parser's own error is discarded because it may quote the malformed
/// input, and that input may be the secret. This error carries only a type tag
/// for `T`, so its message names the target type and nothing else.
pub struct DeserializeError<T> {
    target: PhantomData<fn() -> T>,
}

impl<T> DeserializeError<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            target: PhantomData,
        }
    }

    /// Name of the type that could not be deserialized.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

// Manual impls: derives would add bounds on `T`.
impl<T> Clone for DeserializeError<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DeserializeError<T> {}

impl<T> Default for DeserializeError<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for DeserializeError<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for DeserializeError<T> {}

impl<T> fmt::Display for DeserializeError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = self.type_name();
        write!(
            f,
            "failed to deserialize SecretBox[{target}] due to malformed input; \
             details redacted to avoid leaking wrapped {target}"
        )
    }
}

impl<T> fmt::Debug for DeserializeError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeserializeError[{}]", self.type_name())
    }
}

impl<T> std::error::Error for DeserializeError<T> {}
