// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `optspec show` command.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use miette::Result;
use optspec::table::display_value;
use optspec::{Align, Field, GridRenderer, TableRenderer};

/// Display the fields declared by a schema
#[derive(Debug, Args)]
pub struct CmdShow {
    /// Schema definition file
    #[clap(short, long, env = "OPTSPEC_SCHEMA")]
    schema: PathBuf,

    /// Fail when an optional field's default does not match its type
    #[clap(long, env = "OPTSPEC_STRICT_SCHEMA")]
    strict_schema: bool,
}

impl CmdShow {
    pub fn run(&mut self) -> Result<i32> {
        let specs = optspec::load_field_specs(&self.schema)?;
        let schema = if self.strict_schema {
            optspec::build_schema_strict(&specs)?
        } else {
            optspec::build_schema(&specs)?
        };

        println!("{}", "Schema Fields:".bold());
        println!();

        if schema.is_empty() {
            println!("  {}", "(no fields)".dimmed());
        } else {
            let rows: Vec<Vec<String>> = schema
                .iter()
                .map(|field| {
                    let default = match field {
                        Field::Optional { default, .. } => display_value(default),
                        Field::Required { .. } => String::new(),
                    };
                    vec![
                        field.name().to_string(),
                        field.type_label(),
                        field.is_optional().to_string(),
                        default,
                    ]
                })
                .collect();
            let table = GridRenderer.render(
                &["Variable", "Type", "Optional", "Default Value"],
                &rows,
                &[Align::Left, Align::Center, Align::Center, Align::Left],
            );
            println!("{table}");
        }

        let dropped = specs.len() - schema.len();
        println!();
        println!(
            "Total: {} field(s), {} required",
            schema.len(),
            schema.required_names().len()
        );
        if dropped > 0 {
            println!(
                "{}",
                format!("{dropped} field(s) dropped: default does not match declared type")
                    .yellow()
            );
        }

        Ok(0)
    }
}
