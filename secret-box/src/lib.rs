//! A generic wrapper that keeps sensitive values out of rendered output.
//!
//! [`SecretBox<T>`] owns a value and renders as a fixed marker,
//! `SecretBox[<type name of T>]{REDACTED}`, through every output path the
//! ecosystem offers:
//! - `Display` and `Debug` (including `{:#?}` and width/precision flags)
//! - `LowerHex`/`UpperHex`, which hex-encode the marker rather than the value
//! - `serde::Serialize`, so JSON and serde-backed loggers see the marker
//!   (behind the `json` feature)
//! - `slog::Value` and `tracing` display values (behind the `slog` and
//!   `tracing` features)
//!
//! The only way back to the raw value is [`SecretBox::expose`].
//!
//! What this crate does not do:
//! - encrypt, hash, or zeroize the value; it lives in plain memory
//! - restrict programmatic access through `expose`
//! - protect references to the value that were kept before wrapping
//!
//! ```
//! use secret_box::SecretBox;
//!
//! let password = SecretBox::new(String::from("hunter2"));
//! let rendered = format!("{password} {password:?}");
//! assert!(!rendered.contains("hunter2"));
//! assert_eq!(password.expose(), "hunter2");
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

mod secret;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use secret::{DeserializeError, REDACTED_PLACEHOLDER, SecretBox};
