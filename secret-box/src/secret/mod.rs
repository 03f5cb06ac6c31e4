//! The `SecretBox` wrapper and its rendering overrides.
//!
//! - **`wrapper`**: The `SecretBox<T>` type, construction and extraction
//! - **`display`**: `core::fmt` overrides (`Display`, `Debug`, hex)
//! - **`error`**: `DeserializeError<T>`, the type-name-only failure
//! - **`json`**: `serde` overrides and JSON helpers (requires `json` feature)

mod display;
mod error;
#[cfg(feature = "json")]
mod json;
mod wrapper;

pub use error::DeserializeError;
pub use wrapper::{REDACTED_PLACEHOLDER, SecretBox};
