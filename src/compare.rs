//! Environment file vs process environment comparison

use crate::config::{EnvFile, ProcessEnv};
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Stand-in for a key the process environment does not have
pub const MISSING: &str = "<missing>";

/// One file-declared key compared against the process
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyComparison {
    /// Declared key
    pub key: String,
    /// Value declared in the file
    pub file_value: String,
    /// Live value, or [`MISSING`]
    pub process_value: String,
    /// Whether the live value equals the declared one
    pub matches: bool,
}

/// Compare every key declared in `file` with `process`, in file order
#[must_use]
pub fn compare(file: &EnvFile, process: &ProcessEnv) -> Vec<KeyComparison> {
    file.iter()
        .map(|(key, file_value)| {
            let live = process.get(key);
            KeyComparison {
                key: key.to_string(),
                file_value: file_value.to_string(),
                process_value: live.unwrap_or(MISSING).to_string(),
                matches: live == Some(file_value),
            }
        })
        .collect()
}

/// Contents of the editor settings file
#[derive(Debug, Clone, PartialEq)]
pub enum EditorSettings {
    /// No file at the expected path
    Absent,
    /// Parsed JSON
    Parsed(Value),
    /// File exists but is not readable JSON
    Invalid,
}

impl EditorSettings {
    /// Read and parse the editor settings file at `path`
    #[must_use]
    pub fn read(path: &Path) -> Self {
        if !path.exists() {
            debug!("No editor settings at {}", path.display());
            return Self::Absent;
        }
        let parsed = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()));
        match parsed {
            Ok(value) => Self::Parsed(value),
            Err(e) => {
                warn!("Failed to parse {}: {}", path.display(), e);
                Self::Invalid
            }
        }
    }

    /// What the report shows, `None` when there is nothing to show
    #[must_use]
    pub fn display_value(&self) -> Option<Value> {
        match self {
            Self::Absent => None,
            Self::Parsed(value) if is_blank(value) => None,
            Self::Parsed(value) => Some(value.clone()),
            Self::Invalid => Some(json!({ "error": "failed to parse" })),
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Write the mismatch table followed by the editor settings block
pub fn write_report<W: Write>(
    out: &mut W,
    comparisons: &[KeyComparison],
    editor: &EditorSettings,
    editor_label: &str,
) -> io::Result<()> {
    writeln!(
        out,
        "Comparison of .env -> process environment (showing mismatches):"
    )?;
    for item in comparisons.iter().filter(|c| !c.matches) {
        writeln!(
            out,
            "{}: file='{}' process='{}'",
            item.key, item.file_value, item.process_value
        )?;
    }
    writeln!(out)?;

    match editor.display_value() {
        Some(value) => {
            writeln!(out, "Found {editor_label} entries:")?;
            let pretty = serde_json::to_string_pretty(&value).map_err(io::Error::other)?;
            writeln!(out, "{pretty}")?;
        }
        None => writeln!(out, "No {editor_label} found or empty.")?,
    }
    Ok(())
}
