//! Integration tests for the slog module.
//!
//! These tests verify that:
//! - the `slog::Value` implementation emits the redaction marker as a string
//! - a `slog::Logger` writing a `SecretBox` never outputs the wrapped value

#![cfg(feature = "slog")]

use std::{
    cell::RefCell,
    collections::HashMap,
    fmt::{Arguments, Write as _},
    sync::{Arc, Mutex},
};

use secret_box::{SecretBox, slog::SlogRedacted};
use slog::{KV, o};

// A test serializer that captures serialized key-value pairs
struct CapturingSerializer {
    captured: RefCell<HashMap<String, String>>,
}

impl CapturingSerializer {
    fn new() -> Self {
        Self {
            captured: RefCell::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        self.captured.borrow().get(key).cloned()
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), val.to_string());
        Ok(())
    }

    fn emit_str(&mut self, key: slog::Key, val: &str) -> slog::Result {
        self.captured.borrow_mut().insert(key.into(), val.into());
        Ok(())
    }
}

fn serialize_to_capture<V: slog::Value, S: slog::Serializer>(
    value: &V,
    key: &'static str,
    serializer: &mut S,
) {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    value.serialize(&record, key, serializer).unwrap();
}

// Serializes every key-value pair of a record into `key=value` pairs.
#[derive(Default)]
struct LineSerializer(String);

impl slog::Serializer for LineSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        write!(self.0, " {key}={val}").map_err(|_| slog::Error::Other)
    }
}

// A drain that renders each record as a line and keeps it in memory.
#[derive(Clone, Default)]
struct CapturingDrain {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CapturingDrain {
    fn output(&self) -> String {
        self.lines.lock().unwrap().join("\n")
    }
}

impl slog::Drain for CapturingDrain {
    type Ok = ();
    type Err = slog::Never;

    fn log(
        &self,
        record: &slog::Record<'_>,
        values: &slog::OwnedKVList,
    ) -> Result<Self::Ok, Self::Err> {
        let mut serializer = LineSerializer::default();
        record.kv().serialize(record, &mut serializer).unwrap();
        values.serialize(record, &mut serializer).unwrap();
        let line = format!("{}{}", record.msg(), serializer.0);
        self.lines.lock().unwrap().push(line);
        Ok(())
    }
}

mod value_impl {
    use super::*;

    #[test]
    fn emits_marker_string() {
        let secret = SecretBox::new(String::from("bar"));
        let mut serializer = CapturingSerializer::new();
        serialize_to_capture(&secret, "secret", &mut serializer);

        assert_eq!(serializer.get("secret"), Some(SecretBox::<String>::marker()));
    }

    #[test]
    fn emits_marker_through_reference() {
        let secret = SecretBox::new(31_337_u32);
        let mut serializer = CapturingSerializer::new();
        serialize_to_capture(&&secret, "pin", &mut serializer);

        assert_eq!(serializer.get("pin"), Some("SecretBox[u32]{REDACTED}".into()));
    }

    #[test]
    fn secret_box_is_slog_redacted() {
        fn assert_slog_redacted<T: SlogRedacted>() {}
        assert_slog_redacted::<SecretBox<String>>();
        assert_slog_redacted::<&SecretBox<String>>();
    }
}

mod logger {
    use super::*;

    #[test]
    fn logged_field_is_redacted() {
        let drain = CapturingDrain::default();
        let logger = slog::Logger::root(drain.clone(), o!());
        let secret = SecretBox::new(String::from("bar"));

        slog::info!(logger, "login"; "secret" => &secret);

        let logged = drain.output();
        assert!(logged.contains(&format!("secret={}", SecretBox::<String>::marker())));
        assert!(!logged.contains("bar"));
    }

    #[test]
    fn logger_context_is_redacted() {
        let drain = CapturingDrain::default();
        let secret = SecretBox::new(String::from("bar"));
        let logger = slog::Logger::root(drain.clone(), o!("api_key" => secret));

        slog::info!(logger, "request");

        let logged = drain.output();
        assert!(logged.contains(&SecretBox::<String>::marker()));
        assert!(!logged.contains("bar"));
    }

    #[test]
    fn display_and_debug_sigils_are_redacted() {
        let drain = CapturingDrain::default();
        let logger = slog::Logger::root(drain.clone(), o!());
        let secret = SecretBox::new(String::from("bar"));

        slog::info!(logger, "login"; "shown" => %secret, "debugged" => ?secret);
        slog::info!(logger, "message {}", secret);

        let logged = drain.output();
        assert!(logged.contains(&format!("shown={}", SecretBox::<String>::marker())));
        assert!(logged.contains(&format!("debugged={}", SecretBox::<String>::marker())));
        assert!(!logged.contains("bar"));
    }
}
