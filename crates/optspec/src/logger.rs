// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Leveled logging handle passed to components that report to users.

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[cfg(test)]
#[path = "./logger_test.rs"]
mod logger_test;

/// Named logging channel.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogMethod {
    Critical,
    Debug,
    Error,
    #[default]
    Info,
    /// Informational message highlighted for progress reporting.
    Status,
    #[serde(alias = "warning")]
    #[strum(to_string = "warn", serialize = "warning")]
    Warn,
}

impl LogMethod {
    /// Look up a log method by name (case insensitive).
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse()
            .map_err(|_| Error::UnsupportedLogMethod(name.to_string()))
    }
}

/// Logging handle that tags messages with an optional caller name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Logger {
    caller_name: Option<String>,
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logger that prefixes every message with `caller_name`.
    pub fn with_caller<S: Into<String>>(caller_name: S) -> Self {
        Self {
            caller_name: Some(caller_name.into()),
        }
    }

    pub fn caller_name(&self) -> Option<&str> {
        self.caller_name.as_deref()
    }

    /// The message as it will be written, including the caller prefix.
    pub fn format_message(&self, msg: &str) -> String {
        match &self.caller_name {
            Some(caller) => format!("{caller}: {msg}"),
            None => msg.to_string(),
        }
    }

    /// Write a message through the given channel.
    pub fn write(&self, method: LogMethod, msg: &str) {
        let msg = self.format_message(msg);
        match method {
            LogMethod::Critical => tracing::error!("{}", msg.bold()),
            LogMethod::Debug => tracing::debug!("{msg}"),
            LogMethod::Error => tracing::error!("{msg}"),
            LogMethod::Info => tracing::info!("{msg}"),
            LogMethod::Status => tracing::info!("{}", msg.cyan().bold()),
            LogMethod::Warn => tracing::warn!("{msg}"),
        }
    }

    pub fn critical(&self, msg: &str) {
        self.write(LogMethod::Critical, msg);
    }

    pub fn debug(&self, msg: &str) {
        self.write(LogMethod::Debug, msg);
    }

    pub fn error(&self, msg: &str) {
        self.write(LogMethod::Error, msg);
    }

    pub fn info(&self, msg: &str) {
        self.write(LogMethod::Info, msg);
    }

    pub fn status(&self, msg: &str) {
        self.write(LogMethod::Status, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.write(LogMethod::Warn, msg);
    }
}
