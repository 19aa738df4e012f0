// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

fn default_project() -> String {
    "website".into()
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// Site name rendered as the `site` attribute.
    pub project: String,
    /// Folder that image paths are checked against.
    pub public_folder: Option<PathBuf>,
    /// Extra attributes rendered as plain meta tags.
    pub unwrapped: Vec<String>,
    pub defaults_file: Option<PathBuf>,
    pub asset_base: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project: default_project(),
            public_folder: None,
            unwrapped: vec![],
            defaults_file: None,
            asset_base: None,
        }
    }
}

impl Config {
    pub fn parse(yaml: &str, path: &Path) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|source| Error::Config {
            path: path.to_owned(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_owned(),
            source,
        })?;

        Self::parse(&yaml, path)
    }
}
