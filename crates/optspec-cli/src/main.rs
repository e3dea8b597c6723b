// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! optspec - Declarative Option Schema CLI

use clap::{Parser, Subcommand};
use miette::Result;

mod cmd_keys;
mod cmd_lua;
mod cmd_show;
mod cmd_validate;

use cmd_keys::CmdKeys;
use cmd_lua::CmdLua;
use cmd_show::CmdShow;
use cmd_validate::CmdValidate;

#[derive(Parser)]
#[clap(
    name = "optspec",
    about = "Declarative option schema validation",
    version,
    long_about = "Validate option files against declarative schemas and generate environment modules"
)]
struct Opt {
    #[clap(flatten)]
    logging: Logging,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
struct Logging {
    /// Increase verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[clap(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Validate an options file and print the resolved options
    Validate(CmdValidate),

    /// Display the fields declared by a schema
    Show(CmdShow),

    /// Check that an options file defines the given keys
    Keys(CmdKeys),

    /// Write an environment module (LUA) file
    Lua(CmdLua),
}

impl Opt {
    fn run(self) -> Result<i32> {
        // Setup logging
        let log_level = match (self.logging.quiet, self.logging.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::WARN,
            (false, 1) => tracing::Level::INFO,
            (false, 2) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .init();

        // Dispatch to command
        match self.cmd {
            Command::Validate(mut cmd) => cmd.run(),
            Command::Show(mut cmd) => cmd.run(),
            Command::Keys(mut cmd) => cmd.run(),
            Command::Lua(mut cmd) => cmd.run(),
        }
    }
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    let code = opt.run()?;
    std::process::exit(code);
}
