// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Validation of caller options against a schema.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::field::{value_kind, Field};
use crate::logger::{LogMethod, Logger};
use crate::options::normalize;
use crate::table::{display_value, render_summary, GridRenderer, TableRenderer};
use crate::{Error, Options, Result, Schema};

#[cfg(test)]
#[path = "./validate_test.rs"]
mod validate_test;

/// Default maximum width of string values in the summary table.
pub const DEFAULT_TABLE_WIDTH: usize = 50;

/// A single way in which options fail to conform to a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A required field was not supplied.
    Missing { field: String },
    /// A supplied value has the wrong type.
    WrongType {
        field: String,
        expected: String,
        found: String,
    },
    /// A key not declared by the schema, when extra keys are rejected.
    UnexpectedKey { key: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "missing required key '{field}'"),
            Self::WrongType {
                field,
                expected,
                found,
            } => write!(f, "key '{field}' should be {expected}, found {found}"),
            Self::UnexpectedKey { key } => write!(f, "wrong key '{key}'"),
        }
    }
}

/// Settings controlling schema validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ValidateOptions {
    /// Tolerate option keys that the schema does not declare.
    pub ignore_extra_keys: bool,

    /// Write a summary table of the resolved options.
    pub render_table: bool,

    /// Channel the summary table is written to.
    pub log_method: LogMethod,

    /// Width at which string values wrap in the summary table.
    pub width: usize,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            ignore_extra_keys: true,
            render_table: true,
            log_method: LogMethod::Info,
            width: DEFAULT_TABLE_WIDTH,
        }
    }
}

impl ValidateOptions {
    /// Select the summary table channel by name.
    pub fn with_log_method(mut self, name: &str) -> Result<Self> {
        self.log_method = LogMethod::from_name(name)?;
        Ok(self)
    }
}

/// Validates options against schemas, filling defaults and reporting
/// the resolved values.
pub struct OptionsValidator {
    logger: Logger,
    renderer: Box<dyn TableRenderer>,
    settings: ValidateOptions,
}

impl Default for OptionsValidator {
    fn default() -> Self {
        Self::new(ValidateOptions::default())
    }
}

impl OptionsValidator {
    pub fn new(settings: ValidateOptions) -> Self {
        Self {
            logger: Logger::with_caller(module_path!()),
            renderer: Box::new(GridRenderer),
            settings,
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_renderer<R: TableRenderer + 'static>(mut self, renderer: R) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn settings(&self) -> &ValidateOptions {
        &self.settings
    }

    /// Check that options conform to the schema without filling defaults.
    pub fn validate_opts(&self, schema: &Schema, options: &Options) -> Result<()> {
        validate_opts(schema, options, self.settings.ignore_extra_keys)
    }

    /// Fill defaults, normalize and validate options.
    ///
    /// Defaults for absent optional fields are inserted into `options`
    /// itself. The returned mapping holds the normalized, validated
    /// values for every schema field.
    pub fn validate_schema(&self, schema: &Schema, options: &mut Options) -> Result<Options> {
        for field in schema {
            let Field::Optional { name, default, .. } = field else {
                continue;
            };
            if options.contains_key(name) {
                continue;
            }
            self.logger.info(&format!(
                "Schema optional value {name} has not been defined; setting to default value {}.",
                display_value(default)
            ));
            options.insert(name.clone(), default.clone());
        }

        let resolved = normalize(options.clone());
        validate_opts(schema, &resolved, self.settings.ignore_extra_keys)?;

        if self.settings.render_table {
            let table = self.render_table(schema, &resolved);
            self.logger
                .write(self.settings.log_method, &format!("\n\n{table}\n\n"));
        }
        self.logger.info("Schema successfully validated.");

        Ok(resolved)
    }

    /// Render the summary table for resolved options.
    pub fn render_table(&self, schema: &Schema, resolved: &Options) -> String {
        render_summary(
            self.renderer.as_ref(),
            schema,
            resolved,
            self.settings.width,
        )
    }
}

/// Check that options conform to the schema.
///
/// Every required field must be present with a matching type, and every
/// optional field that is present must match its type (or be null when
/// nullable). All violations are reported together.
pub fn validate_opts(schema: &Schema, options: &Options, ignore_extra_keys: bool) -> Result<()> {
    let mut violations = Vec::new();

    for field in schema {
        match options.get(field.name()) {
            None if field.is_optional() => {}
            None => violations.push(Violation::Missing {
                field: field.name().to_string(),
            }),
            Some(value) if field.accepts(value) => {}
            Some(value) => violations.push(Violation::WrongType {
                field: field.name().to_string(),
                expected: field.type_label(),
                found: value_kind(value).to_string(),
            }),
        }
    }

    if !ignore_extra_keys {
        violations.extend(
            options
                .keys()
                .filter(|key| !schema.contains(key))
                .map(|key| Violation::UnexpectedKey { key: key.clone() }),
        );
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation { violations })
    }
}

/// Fill defaults and validate with the given settings.
///
/// See [`OptionsValidator::validate_schema`].
pub fn validate_schema(
    schema: &Schema,
    options: &mut Options,
    settings: ValidateOptions,
) -> Result<Options> {
    OptionsValidator::new(settings).validate_schema(schema, options)
}

/// Check a single option key.
///
/// The key must be present in `data`. With `use_set_membership`, its value
/// must also be a string found in `valid_opts`.
pub fn check_opts<S: AsRef<str>>(
    key: &str,
    valid_opts: &[S],
    data: &Options,
    use_set_membership: bool,
) -> Result<()> {
    let value = data
        .get(key)
        .ok_or_else(|| Error::MissingOption(key.to_string()))?;
    if !use_set_membership {
        return Ok(());
    }

    let accepted = match value {
        Value::String(s) => valid_opts.iter().any(|opt| opt.as_ref() == s.as_str()),
        _ => false,
    };
    if accepted {
        return Ok(());
    }
    Err(Error::InvalidOption {
        key: key.to_string(),
        value: display_value(value),
        valid: valid_opts.iter().map(|o| o.as_ref().to_string()).collect(),
    })
}

/// Check that every required key is among the supplied keys.
pub fn validate_keys<S: AsRef<str>, R: AsRef<str>>(supplied: &[S], required: &[R]) -> bool {
    required
        .iter()
        .all(|r| supplied.iter().any(|s| s.as_ref() == r.as_ref()))
}
