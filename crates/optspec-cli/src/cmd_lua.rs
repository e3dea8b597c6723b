// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `optspec lua` command.

use std::path::PathBuf;

use clap::Args;
use miette::Result;

/// Write an environment module (LUA) file
#[derive(Debug, Args)]
pub struct CmdLua {
    /// Module description file (YAML)
    #[clap(short, long)]
    spec: PathBuf,

    /// Path of the LUA file to write
    #[clap(short, long)]
    output: PathBuf,

    /// Overwrite the output file if it exists
    #[clap(long)]
    force: bool,
}

impl CmdLua {
    pub fn run(&mut self) -> Result<i32> {
        if self.output.exists() && !self.force {
            return Err(miette::miette!(
                "{:?} already exists, use --force to overwrite",
                self.output
            ));
        }

        let module = optspec::LuaModule::load(&self.spec)?;
        optspec::write_lua(&module, &self.output)?;

        println!("Created {:?}", self.output);
        Ok(0)
    }
}
