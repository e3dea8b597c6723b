// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Schema definitions and construction from declarative field specs.
//!
//! A schema source is a YAML mapping from field name to a small record:
//!
//! ```yaml
//! variable1:
//!   required: false
//!   type: bool
//!   default: true
//!
//! variable2:
//!   required: true
//!   type: float
//!
//! variable3:
//!   type: int
//!   default: 1
//! ```

use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::field::{Field, FieldType};
use crate::{Error, Result};

#[cfg(test)]
#[path = "./schema_test.rs"]
mod schema_test;

/// Declarative description of one field, as read from a schema source.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FieldSpec {
    /// Type name: one of `bool`, `int`, `float`, `str`.
    #[serde(rename = "type")]
    pub ty: String,

    /// Required fields have no default and must be supplied.
    #[serde(default)]
    pub required: bool,

    /// Default for optional fields; `null` or absent makes the field nullable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

/// Ordered mapping of field names to their specs.
pub type SchemaDef = IndexMap<String, FieldSpec>;

/// An ordered, immutable collection of uniquely named fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    /// Create a schema from fields, rejecting duplicate names.
    pub fn new(fields: Vec<Field>) -> Result<Self> {
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.name() == field.name()) {
                return Err(Error::DuplicateField(field.name().to_string()));
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names of all required fields, in declaration order.
    pub fn required_names(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| !f.is_optional())
            .map(Field::name)
            .collect()
    }

    /// Parse field specs from YAML and build the schema.
    pub fn from_yaml<S: Into<String>>(yaml: S) -> Result<Self> {
        build_schema(&field_specs_from_yaml(yaml)?)
    }

    /// Load field specs from a file and build the schema.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        build_schema(&load_field_specs(path)?)
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Parse field specs from a YAML mapping.
pub fn field_specs_from_yaml<S: Into<String>>(yaml: S) -> Result<SchemaDef> {
    crate::document::from_yaml(yaml)
}

/// Load field specs from a YAML file.
pub fn load_field_specs<P: AsRef<Path>>(path: P) -> Result<SchemaDef> {
    crate::document::load(path)
}

/// Build a schema from field specs.
///
/// An optional field whose default does not match its declared type is
/// left out of the schema, with a warning naming the field. Use
/// [`build_schema_strict`] to reject such specs instead.
pub fn build_schema(specs: &SchemaDef) -> Result<Schema> {
    build(specs, false)
}

/// Build a schema from field specs, failing on mismatched defaults.
pub fn build_schema_strict(specs: &SchemaDef) -> Result<Schema> {
    build(specs, true)
}

fn build(specs: &SchemaDef, strict: bool) -> Result<Schema> {
    let mut fields = Vec::with_capacity(specs.len());

    for (name, spec) in specs {
        let ty =
            FieldType::from_str(&spec.ty).map_err(|_| Error::UnknownType(spec.ty.clone()))?;

        if spec.required {
            fields.push(Field::required(name, ty));
            continue;
        }

        match &spec.default {
            None | Some(Value::Null) => fields.push(Field::optional(name, ty, Value::Null)),
            Some(default) if ty.matches(default) => {
                fields.push(Field::optional(name, ty, default.clone()))
            }
            Some(_) if strict => {
                return Err(Error::DefaultTypeMismatch {
                    field: name.clone(),
                    expected: ty.to_string(),
                });
            }
            Some(default) => {
                tracing::warn!(
                    field = %name,
                    expected = %ty,
                    found = crate::field::value_kind(default),
                    "default value does not match the declared type; field dropped from schema"
                );
            }
        }
    }

    Schema::new(fields)
}
