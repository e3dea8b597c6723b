// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for optspec operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

use crate::validate::Violation;

/// Convenience Result type with optspec Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during optspec operations.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Options do not conform to the schema
    #[error("Schema validation failed with error: {}", join_violations(.violations))]
    #[diagnostic(
        code(optspec::validation_failed),
        help("Check that required options are set and values match the declared types")
    )]
    Validation { violations: Vec<Violation> },

    /// Option value is not one of the accepted values
    #[error("Option '{key}' has value {value} which is not one of: {}", .valid.join(", "))]
    #[diagnostic(code(optspec::invalid_option))]
    InvalidOption {
        key: String,
        value: String,
        valid: Vec<String>,
    },

    /// Option key was not supplied
    #[error("Option '{0}' was not supplied")]
    #[diagnostic(code(optspec::missing_option))]
    MissingOption(String),

    /// Logger method name is not known
    #[error("Logger method {0} is not supported")]
    #[diagnostic(
        code(optspec::unsupported_log_method),
        help("Use one of: critical, debug, error, info, status, warn")
    )]
    UnsupportedLogMethod(String),

    /// Field type name is not known
    #[error("Unknown field type: {0}")]
    #[diagnostic(
        code(optspec::unknown_type),
        help("Supported types are: bool, int, float, str")
    )]
    UnknownType(String),

    /// Field name declared more than once
    #[error("Field '{0}' is declared more than once")]
    #[diagnostic(code(optspec::duplicate_field))]
    DuplicateField(String),

    /// Declared default does not match the declared type
    #[error("Default value for optional field '{field}' is not of type {expected}")]
    #[diagnostic(
        code(optspec::default_type_mismatch),
        help("Change the default to a {expected} value or remove it to make the field nullable")
    )]
    DefaultTypeMismatch { field: String, expected: String },

    /// Invalid YAML input
    #[error("Invalid YAML document: {error}")]
    #[diagnostic(code(optspec::invalid_yaml), help("Check YAML syntax"))]
    InvalidYaml {
        #[source]
        error: serde_yaml::Error,
        yaml_content: String,
    },

    /// Failed to read file
    #[error("Failed to read file: {path:?}")]
    #[diagnostic(code(optspec::read_failed))]
    ReadFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Failed to write file
    #[error("Failed to write file: {path:?}")]
    #[diagnostic(code(optspec::write_failed))]
    WriteFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
