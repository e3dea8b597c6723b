// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Reading YAML documents from strings and files.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Parse a YAML document, keeping the source text for diagnostics.
pub(crate) fn from_yaml<T, S>(yaml: S) -> Result<T>
where
    T: DeserializeOwned,
    S: Into<String>,
{
    let yaml = yaml.into();
    serde_yaml::from_str(&yaml).map_err(|error| Error::InvalidYaml {
        error,
        yaml_content: yaml.clone(),
    })
}

/// Read and parse a YAML document from a file.
pub(crate) fn load<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let yaml = std::fs::read_to_string(path).map_err(|error| Error::ReadFailed {
        path: path.to_path_buf(),
        error,
    })?;
    tracing::debug!(path = %path.display(), "loaded yaml document");
    from_yaml(yaml)
}
