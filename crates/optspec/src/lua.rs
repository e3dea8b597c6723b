// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Lmod environment module (LUA) generation.
//!
//! # Example
//!
//! ```yaml
//! description: "Compiler toolchain"
//! help: "Loads the compiler toolchain."
//! conflicts:
//!   - gcc
//! family:
//!   - compiler
//! setenv:
//!   - CC: icc
//! prepend_path:
//!   PATH:
//!     - /opt/intel/bin
//! load:
//!   - cmake
//!   - python: "3.11"
//! ```

use std::path::Path;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::table::display_value;
use crate::{Error, Logger, Result};

#[cfg(test)]
#[path = "./lua_test.rs"]
mod lua_test;

/// Format of the creation timestamp in module headers.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A module to load from the generated file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LoadEntry {
    /// Load by name: `load("name")`.
    Name(String),
    /// Load by name and version: `load(pathJoin("name", "version"))`.
    Versioned(IndexMap<String, Value>),
}

/// Description of an environment module file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LuaModule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Modules that cannot be loaded alongside this one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub family: Vec<String>,

    /// Variables to set, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub setenv: Vec<IndexMap<String, Value>>,

    /// Paths prepended to each variable.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub prepend_path: IndexMap<String, Vec<String>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub load: Vec<LoadEntry>,
}

impl LuaModule {
    pub fn from_yaml<S: Into<String>>(yaml: S) -> Result<Self> {
        crate::document::from_yaml(yaml)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        crate::document::load(path)
    }

    /// Render the module file contents.
    pub fn render(&self, author: &str, created: DateTime<Utc>) -> String {
        let mut out = format!(
            "-- -*- lua -*-\n-- Author: {author}\n-- Created: {}\n\n",
            created.format(TIMESTAMP_FORMAT)
        );

        if let Some(description) = &self.description {
            let description = description.trim_end();
            out.push_str("--\n");
            for line in description.lines() {
                out.push_str(format!("-- {line}").trim_end());
                out.push('\n');
            }
            out.push_str(&format!(
                "--\n\
                \n\
                local pkgName = myModuleName()\n\
                local pkgVersion = myModuleVersion()\n\
                local pkgNameVer = myModuleFullName()\n\
                \n\
                whatis(\"Name: \" .. pkgName)\n\
                whatis(\"Version: \" .. pkgVersion)\n\
                whatis(\"Description: {}\")\n\n",
                escape(description)
            ));
        }

        if let Some(help) = &self.help {
            let level = "=".repeat(long_bracket_level(help));
            out.push_str(&format!("help([{level}[\n{help}\n]{level}])\n\n"));
        }

        section(&mut out, "Conflict(s)", &self.conflicts, |name| {
            format!("conflict(\"{}\")", escape(name))
        });
        section(&mut out, "Family", &self.family, |name| {
            format!("family(\"{}\")", escape(name))
        });

        let setenv: Vec<(&String, &Value)> =
            self.setenv.iter().flat_map(IndexMap::iter).collect();
        section(&mut out, "Environment variables", &setenv, |(name, value)| {
            format!(
                "setenv(\"{}\", \"{}\")",
                escape(name),
                escape(&display_value(value))
            )
        });

        let prepend: Vec<(&String, &Vec<String>)> = self.prepend_path.iter().collect();
        section(&mut out, "Prepend paths", &prepend, |(name, paths)| {
            let paths: Vec<String> = paths.iter().map(|p| escape(p)).collect();
            format!("prepend_path(\"{}\", \"{}\")", escape(name), paths.join("\", \""))
        });

        let load: Vec<String> = self
            .load
            .iter()
            .flat_map(|entry| match entry {
                LoadEntry::Name(name) => vec![format!("load(\"{}\")", escape(name))],
                LoadEntry::Versioned(versions) => versions
                    .iter()
                    .map(|(name, version)| {
                        format!(
                            "load(pathJoin(\"{}\", \"{}\"))",
                            escape(name),
                            escape(&display_value(version))
                        )
                    })
                    .collect(),
            })
            .collect();
        section(&mut out, "Load packages and versions", &load, String::clone);

        out
    }
}

/// Append a titled block with one line per item; empty blocks are skipped.
fn section<T, F>(out: &mut String, title: &str, items: &[T], line: F)
where
    F: Fn(&T) -> String,
{
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("-- {title}.\n"));
    for item in items {
        out.push_str(&line(item));
        out.push('\n');
    }
    out.push('\n');
}

/// Escape a value for a double quoted LUA string.
fn escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Smallest long bracket level whose closing bracket does not occur in `text`.
fn long_bracket_level(text: &str) -> usize {
    (0..)
        .find(|level| !text.contains(&format!("]{}]", "=".repeat(*level))))
        .unwrap_or_default()
}

/// Write an environment module file for the current user.
pub fn write_lua<P: AsRef<Path>>(module: &LuaModule, path: P) -> Result<()> {
    let path = path.as_ref();
    let logger = Logger::with_caller(module_path!());
    logger.info(&format!(
        "Creating LUA-formatted file path {}.",
        path.display()
    ));

    let contents = module.render(&whoami::username(), Utc::now());
    std::fs::write(path, contents).map_err(|error| Error::WriteFailed {
        path: path.to_path_buf(),
        error,
    })
}
