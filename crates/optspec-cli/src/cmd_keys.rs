// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `optspec keys` command.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use miette::Result;

/// Check that an options file defines the given keys
#[derive(Debug, Args)]
pub struct CmdKeys {
    /// Options file to check
    #[clap(short, long)]
    options: PathBuf,

    /// Key that must be present (repeatable)
    #[clap(short, long = "require", required = true)]
    required: Vec<String>,
}

impl CmdKeys {
    pub fn run(&mut self) -> Result<i32> {
        let options = optspec::load_options(&self.options)?;
        let supplied: Vec<&String> = options.keys().collect();

        if optspec::validate_keys(&supplied, &self.required) {
            println!("{} All required keys present", "✓".green());
            return Ok(0);
        }

        eprintln!("Error: Missing required keys:");
        for key in self.required.iter().filter(|k| !options.contains_key(*k)) {
            eprintln!("  - {}", key.red());
        }
        Ok(1)
    }
}
