//! Tokenizer — raw args → positional values + named options.

use std::collections::HashMap;

use serde::{Serialize, Serializer};

use crate::args::shorthand::Shorthand;

/// Value attached to a named option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Option was given without a value. Serializes as `true`.
    Flag,
    /// Option carried an explicit value.
    Value(String),
}

impl OptionValue {
    /// The string value, if the option carried one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Flag => None,
            OptionValue::Value(value) => Some(value),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Value(value.to_string())
    }
}

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OptionValue::Flag => serializer.serialize_bool(true),
            OptionValue::Value(value) => serializer.serialize_str(value),
        }
    }
}

/// Tokenized command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedArgs {
    /// Positional values in the order they appeared.
    pub top_level: Vec<String>,
    /// Named options. A repeated name keeps its last value.
    pub options: HashMap<String, OptionValue>,
}

impl ParsedArgs {
    /// Look up an option by its canonical name.
    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }
}

/// Per-call scan state. At most one name waits for a value at a time.
#[derive(Default)]
struct Scan {
    parsed: ParsedArgs,
    open: Option<String>,
}

impl Scan {
    /// Resolve the waiting name, if any, to a bare flag.
    fn close(&mut self) {
        if let Some(name) = self.open.take() {
            self.parsed.options.insert(name, OptionValue::Flag);
        }
    }

    fn open(&mut self, name: String) {
        self.close();
        self.open = Some(name);
    }

    fn flag(&mut self, name: String) {
        self.close();
        self.parsed.options.insert(name, OptionValue::Flag);
    }

    /// An empty waiting name (from `--` or `--=`) never takes a value; it
    /// stays pending and the token is positional.
    fn value(&mut self, value: String) {
        match self.open.take() {
            Some(name) if !name.is_empty() => {
                self.parsed.options.insert(name, OptionValue::Value(value));
            }
            pending => {
                self.open = pending;
                self.parsed.top_level.push(value);
            }
        }
    }

    fn finish(mut self) -> ParsedArgs {
        self.close();
        self.parsed
    }
}

/// Tokenize raw arguments (program name already stripped).
///
/// Recognized forms:
///
/// - `--name`, `--name value`, `--name=value`. A trailing `=` with nothing
///   after it leaves `name` waiting for the next value.
/// - `-abc`: `a` and `b` become flags, `c` may take the next value.
///   Letters go through `shorthand`; long names never do.
/// - anything else (including a lone `-`) is a value: it fills the waiting
///   name, or is appended to `top_level`.
///
/// Never fails. Validation happens downstream.
pub fn parse_args(raw_args: &[String], shorthand: &Shorthand) -> ParsedArgs {
    let mut scan = Scan::default();

    for arg in raw_args {
        if let Some(long) = arg.strip_prefix("--") {
            match long.split_once('=') {
                None => scan.open(long.to_string()),
                Some((name, value)) => {
                    scan.open(name.to_string());
                    if !value.is_empty() {
                        scan.value(value.to_string());
                    }
                }
            }
        } else if let Some(cluster) = arg.strip_prefix('-').filter(|c| !c.is_empty()) {
            let mut letters = cluster.chars();
            let trailing = letters.next_back();
            for letter in letters {
                scan.flag(shorthand.resolve(letter));
            }
            if let Some(letter) = trailing {
                scan.open(shorthand.resolve(letter));
            }
        } else {
            scan.value(arg.clone());
        }
    }

    scan.finish()
}
