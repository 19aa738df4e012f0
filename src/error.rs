// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

/// Errors surfaced while loading defaults or configuration.
///
/// Rendering itself never fails; anything missing there falls back to a
/// documented default instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The defaults file is missing, unreadable, or its modification time
    /// could not be read.
    #[error("could not read `{}`", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row does not line up with the header, or the file is not UTF-8.
    #[error("malformed CSV in `{}`", .path.display())]
    MalformedCsv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid configuration in `{}`", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl Error {
    /// Sort a CSV error into the I/O or malformed-content bucket.
    pub(crate) fn from_csv(path: &std::path::Path, err: csv::Error) -> Self {
        if err.is_io_error() {
            Error::FileRead {
                path: path.to_owned(),
                source: err.into(),
            }
        } else {
            Error::MalformedCsv {
                path: path.to_owned(),
                source: err,
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
