// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! optspec - Declarative Option Schemas
//!
//! This crate validates option mappings (keyword arguments, configuration
//! blocks) against declarative schemas, filling in defaults for optional
//! fields and reporting the resolved values as a table.
//!
//! # Overview
//!
//! A schema is declared as a mapping from field name to a type, whether the
//! field is required, and an optional default. Optional fields declared
//! without a default accept `null` and resolve to it when not supplied.
//!
//! # Example
//!
//! ```yaml
//! # schema.yaml
//! nodes:
//!   required: true
//!   type: int
//!
//! queue:
//!   type: str
//!   default: batch
//!
//! account:
//!   type: str
//! ```
//!
//! ```no_run
//! let schema = optspec::Schema::load("schema.yaml")?;
//! let mut options = optspec::load_options("options.yaml")?;
//! let resolved = optspec::OptionsValidator::default().validate_schema(&schema, &mut options)?;
//! # Ok::<(), optspec::Error>(())
//! ```

mod document;
pub mod error;
pub mod field;
pub mod logger;
pub mod lua;
pub mod options;
pub mod schema;
pub mod table;
pub mod validate;

pub use error::{Error, Result};
pub use field::{Field, FieldType};
pub use logger::{LogMethod, Logger};
pub use lua::{write_lua, LoadEntry, LuaModule};
pub use options::{load_options, normalize, options_from_yaml, Options};
pub use schema::{
    build_schema, build_schema_strict, field_specs_from_yaml, load_field_specs, FieldSpec, Schema,
    SchemaDef,
};
pub use table::{Align, GridRenderer, TableRenderer};
pub use validate::{
    check_opts, validate_keys, validate_opts, validate_schema, OptionsValidator, ValidateOptions,
    Violation,
};
