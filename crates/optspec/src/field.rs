// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Field types and the fields that make up a schema.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

#[cfg(test)]
#[path = "./field_test.rs"]
mod field_test;

/// Value types a schema field may declare.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FieldType {
    Bool,
    Int,
    Float,
    Str,
}

impl FieldType {
    /// Check whether a value is an instance of this type.
    ///
    /// Integers are not floats and booleans are not integers.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Tagged(tagged)) => self.matches(&tagged.value),
            (Self::Bool, Value::Bool(_)) => true,
            (Self::Int, Value::Number(n)) => n.is_i64() || n.is_u64(),
            (Self::Float, Value::Number(n)) => n.is_f64(),
            (Self::Str, Value::String(_)) => true,
            _ => false,
        }
    }
}

/// Short name for the kind of a value, used in error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(tagged) => value_kind(&tagged.value),
    }
}

/// A single named option in a schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// Must be supplied by callers.
    Required { name: String, ty: FieldType },
    /// Takes `default` when not supplied.
    ///
    /// A nullable field also accepts `null`; fields declared without a
    /// default are nullable with a `null` default.
    Optional {
        name: String,
        ty: FieldType,
        nullable: bool,
        default: Value,
    },
}

impl Field {
    pub fn required<S: Into<String>>(name: S, ty: FieldType) -> Self {
        Self::Required {
            name: name.into(),
            ty,
        }
    }

    pub fn optional<S: Into<String>>(name: S, ty: FieldType, default: Value) -> Self {
        Self::Optional {
            name: name.into(),
            ty,
            nullable: default.is_null(),
            default,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Required { name, .. } | Self::Optional { name, .. } => name,
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Required { ty, .. } | Self::Optional { ty, .. } => *ty,
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional { .. })
    }

    /// The default value, only for optional fields.
    pub fn default_value(&self) -> Option<&Value> {
        match self {
            Self::Required { .. } => None,
            Self::Optional { default, .. } => Some(default),
        }
    }

    /// Check whether a supplied value is acceptable for this field.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Self::Required { ty, .. } => ty.matches(value),
            Self::Optional { ty, nullable, .. } => {
                (*nullable && value.is_null()) || ty.matches(value)
            }
        }
    }

    /// Human readable description of the accepted type.
    pub fn type_label(&self) -> String {
        match self {
            Self::Optional {
                ty, nullable: true, ..
            } => format!("{ty} or null"),
            _ => self.field_type().to_string(),
        }
    }
}
