// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `optspec validate` command.

use std::path::PathBuf;

use clap::Args;
use miette::Result;
use optspec::validate::DEFAULT_TABLE_WIDTH;
use optspec::{Logger, OptionsValidator, ValidateOptions};

#[cfg(test)]
#[path = "./cmd_validate_test.rs"]
mod cmd_validate_test;

/// Validate an options file and print the resolved options
#[derive(Debug, Args)]
pub struct CmdValidate {
    /// Schema definition file
    #[clap(short, long, env = "OPTSPEC_SCHEMA")]
    schema: PathBuf,

    /// Options file to validate
    #[clap(short, long)]
    options: PathBuf,

    /// Fail when an optional field's default does not match its type
    #[clap(long, env = "OPTSPEC_STRICT_SCHEMA")]
    strict_schema: bool,

    /// Reject option keys that the schema does not declare
    #[clap(long, env = "OPTSPEC_REJECT_EXTRA_KEYS")]
    reject_extra_keys: bool,

    /// Do not write the resolved options table
    #[clap(long)]
    no_table: bool,

    /// Logger method for the resolved options table
    #[clap(long, default_value = "info", env = "OPTSPEC_LOG_METHOD")]
    log_method: String,

    /// Width at which string values wrap in the table
    #[clap(long, default_value_t = DEFAULT_TABLE_WIDTH, env = "OPTSPEC_TABLE_WIDTH")]
    width: usize,

    /// Output format: yaml, json
    #[clap(long, default_value = "yaml")]
    format: String,
}

impl CmdValidate {
    pub fn run(&mut self) -> Result<i32> {
        let output = self.resolve()?;
        print!("{output}");
        Ok(0)
    }

    /// Validate the options file and format the resolved options.
    fn resolve(&self) -> Result<String> {
        let specs = optspec::load_field_specs(&self.schema)?;
        let schema = if self.strict_schema {
            optspec::build_schema_strict(&specs)?
        } else {
            optspec::build_schema(&specs)?
        };

        let settings = ValidateOptions {
            ignore_extra_keys: !self.reject_extra_keys,
            render_table: !self.no_table,
            width: self.width,
            ..Default::default()
        }
        .with_log_method(&self.log_method)?;

        let mut options = optspec::load_options(&self.options)?;
        let resolved = OptionsValidator::new(settings)
            .with_logger(Logger::with_caller("optspec"))
            .validate_schema(&schema, &mut options)?;

        match self.format.as_str() {
            "json" => serde_json::to_string_pretty(&resolved)
                .map(|json| format!("{json}\n"))
                .map_err(|e| miette::miette!("Failed to format options as JSON: {e}")),
            "yaml" => serde_yaml::to_string(&resolved)
                .map_err(|e| miette::miette!("Failed to format options as YAML: {e}")),
            other => Err(miette::miette!(
                "Unknown output format '{other}', expected yaml or json"
            )),
        }
    }
}
