//! Manifest transformation: parse, validate, regenerate identifiers, serialize.
//!
//! The transformer is a single straight-line pass over one document. It owns
//! the exclusion set of identifiers in use and threads it through the header
//! and module passes, so no two tracked fields ever end up holding the same
//! value, including across the header/module boundary.

use crate::core::error::{Error, Result};
use crate::core::generator;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use std::collections::HashSet;

/// Which identifier fields are eligible for regeneration in one run.
///
/// A field outside scope is never mutated, but its current value still
/// occupies the namespace: with [`Scope::ModulesOnly`] the header keeps its
/// identifier and no module may be assigned it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    All,
    HeaderOnly,
    ModulesOnly,
}

#[derive(Debug, Clone)]
pub struct TransformOptions {
    pub scope: Scope,
    pub seed: Option<String>,
    /// Indent width for the rewritten JSON; 0 means compact output.
    pub indent: usize,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            scope: Scope::All,
            seed: None,
            indent: 2,
        }
    }
}

/// One regenerated field, in document order: header first, then modules by
/// array position (`header.uuid`, `modules[i].uuid`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    pub path: String,
    pub old_value: String,
    pub new_value: String,
}

#[derive(Debug, Clone)]
pub struct TransformOutput {
    /// The re-serialized manifest, line breaks in the detected style, exactly
    /// one trailing line break appended.
    pub text: String,
    pub changes: Vec<Change>,
    pub line_ending: &'static str,
}

/// Rewrite the identifier fields of a raw manifest document.
///
/// Parses and validates `raw`, regenerates `header.uuid` and each string
/// `modules[i].uuid` within the selected scope, and returns the serialized
/// result together with the ordered change log. Fails with [`Error::Parse`]
/// on malformed JSON and [`Error::Schema`] when the required shape is
/// missing; no partial output is ever produced.
pub fn transform(raw: &str, options: &TransformOptions) -> Result<TransformOutput> {
    let line_ending = detect_line_ending(raw);

    let mut data: Value = serde_json::from_str(raw).map_err(|e| Error::Parse {
        line: e.line(),
        column: e.column(),
    })?;

    let root = match data.as_object_mut() {
        Some(root) => root,
        None => return Err(Error::Schema("invalid root".to_string())),
    };

    let header_uuid = root
        .get("header")
        .and_then(Value::as_object)
        .and_then(|h| h.get("uuid"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| Error::Schema("missing header.uuid".to_string()))?;

    if !root.get("modules").map(Value::is_array).unwrap_or(false) {
        return Err(Error::Schema("missing modules array".to_string()));
    }

    let seed = options.seed.as_deref();
    let mut changes = Vec::new();

    // Every identifier currently in use occupies the namespace. Module uuids
    // always count; the header's only needs seeding here when it survives the
    // run untouched, otherwise the header pass re-registers its replacement.
    let mut used: HashSet<String> = HashSet::new();
    if let Some(modules) = root.get("modules").and_then(Value::as_array) {
        for entry in modules {
            if let Some(uuid) = entry.get("uuid").and_then(Value::as_str) {
                used.insert(uuid.to_string());
            }
        }
    }
    if options.scope == Scope::ModulesOnly {
        used.insert(header_uuid.clone());
    }

    if options.scope != Scope::ModulesOnly {
        used.remove(&header_uuid);
        let new_value = generator::generate("header.uuid", &mut used, seed);
        if let Some(slot) = root.get_mut("header").and_then(|h| h.get_mut("uuid")) {
            *slot = Value::String(new_value.clone());
        }
        changes.push(Change {
            path: "header.uuid".to_string(),
            old_value: header_uuid,
            new_value,
        });
    }

    if options.scope != Scope::HeaderOnly {
        if let Some(modules) = root.get_mut("modules").and_then(Value::as_array_mut) {
            for (i, entry) in modules.iter_mut().enumerate() {
                let old_value = match entry.get("uuid").and_then(Value::as_str) {
                    Some(uuid) => uuid.to_string(),
                    None => continue,
                };
                used.remove(&old_value);
                let path = format!("modules[{i}].uuid");
                let new_value = generator::generate(&path, &mut used, seed);
                if let Some(slot) = entry.get_mut("uuid") {
                    *slot = Value::String(new_value.clone());
                }
                changes.push(Change {
                    path,
                    old_value,
                    new_value,
                });
            }
        }
    }

    let serialized = serialize_with_indent(&data, options.indent)?;
    let mut text = if line_ending == "\r\n" {
        serialized.replace('\n', "\r\n")
    } else {
        serialized
    };
    text.push_str(line_ending);

    Ok(TransformOutput {
        text,
        changes,
        line_ending,
    })
}

/// Textual heuristic over the original input, independent of platform.
fn detect_line_ending(raw: &str) -> &'static str {
    if raw.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

fn serialize_with_indent(value: &Value, indent: usize) -> Result<String> {
    if indent == 0 {
        return Ok(serde_json::to_string(value)?);
    }

    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;

    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
