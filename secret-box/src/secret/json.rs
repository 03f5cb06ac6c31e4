//! `serde` support for [`SecretBox`].
//!
//! `Serialize` emits the redaction marker as a string, so any serde format
//! (and any struct that derives `Serialize` around a `SecretBox`) renders the
//! marker instead of the value. `Deserialize` reads the real value, treats
//! `null` as the default value of `T`, and replaces parser errors with
//! [`DeserializeError`] so malformed input is never echoed back.

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{DeserializeOwned, Error as _},
};
use serde_json::Value as JsonValue;

use super::{error::DeserializeError, wrapper::SecretBox};

impl<T> Serialize for SecretBox<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for SecretBox<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<T>::deserialize(deserializer) {
            Ok(value) => Ok(Self::new(value.unwrap_or_default())),
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target_type = std::any::type_name::<T>(),
                    "discarded deserialization error for SecretBox"
                );
                Err(D::Error::custom(DeserializeError::<T>::new()))
            }
        }
    }
}

impl<T> SecretBox<T> {
    /// Returns the JSON encoding of this box: a string literal holding the
    /// redaction marker.
    #[must_use]
    pub fn to_json(&self) -> Vec<u8> {
        JsonValue::String(self.redacted()).to_string().into_bytes()
    }

    /// Deserializes a box from JSON.
    ///
    /// `null` produces a box holding `T::default()`. Any other input that is not
    /// valid JSON for `T` yields a [`DeserializeError`] naming only `T`.
    pub fn from_json(bytes: &[u8]) -> Result<Self, DeserializeError<T>>
    where
        T: DeserializeOwned + Default,
    {
        serde_json::from_slice(bytes).map_err(|_| DeserializeError::new())
    }
}
