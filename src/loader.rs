// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use std::path::Path;

use crate::{
    attributes::Record,
    error::{Error, Result},
};

/// Read a defaults file into records, one per data row.
///
/// The header row names the fields; every later row must have as many
/// columns as the header.
pub fn load(path: &Path) -> Result<Vec<Record>> {
    log::info!("Parsing defaults from {:?}", path);

    let file = std::fs::File::open(path).map_err(|source| Error::FileRead {
        path: path.to_owned(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|err| Error::from_csv(path, err))?
        .clone();

    reader
        .records()
        .map(|row| -> Result<Record> {
            let row = row.map_err(|err| Error::from_csv(path, err))?;
            Ok(headers.iter().zip(row.iter()).collect())
        })
        .collect()
}
