// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Option mappings supplied by callers.

use std::path::Path;

use indexmap::IndexMap;
use serde_yaml::{Mapping, Value};

use crate::Result;

#[cfg(test)]
#[path = "./options_test.rs"]
mod options_test;

/// Ordered mapping from option name to value.
pub type Options = IndexMap<String, Value>;

/// Parse options from a YAML mapping.
pub fn options_from_yaml<S: Into<String>>(yaml: S) -> Result<Options> {
    crate::document::from_yaml(yaml)
}

/// Load options from a YAML file.
pub fn load_options<P: AsRef<Path>>(path: P) -> Result<Options> {
    crate::document::load(path)
}

/// Normalize nested containers within the options.
///
/// YAML tags are stripped, and keys of nested mappings that are plain
/// scalars are converted to strings. Already normalized options are
/// returned unchanged.
pub fn normalize(options: Options) -> Options {
    options
        .into_iter()
        .map(|(key, value)| (key, normalize_value(value)))
        .collect()
}

fn normalize_value(value: Value) -> Value {
    match value {
        Value::Tagged(tagged) => normalize_value(tagged.value),
        Value::Sequence(items) => Value::Sequence(items.into_iter().map(normalize_value).collect()),
        Value::Mapping(mapping) => {
            let mut normalized = Mapping::with_capacity(mapping.len());
            for (key, value) in mapping {
                normalized.insert(normalize_key(key), normalize_value(value));
            }
            Value::Mapping(normalized)
        }
        scalar => scalar,
    }
}

fn normalize_key(key: Value) -> Value {
    match key {
        Value::Tagged(tagged) => normalize_key(tagged.value),
        Value::Bool(b) => Value::String(b.to_string()),
        Value::Number(n) => Value::String(n.to_string()),
        other => other,
    }
}
