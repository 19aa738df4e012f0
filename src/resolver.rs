// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use crate::attributes::Record;

/// Pick the defaults record for `current_url`.
///
/// A record applies when its `url` field is a substring of the current URL.
/// When several apply, the last one wins. Records without a `url` field never apply.
pub fn resolve<'a>(current_url: &str, records: &'a [Record]) -> Option<&'a Record> {
    let found = records.iter().rev().find(|record| {
        record
            .get("url")
            .map(|url| current_url.contains(url))
            .unwrap_or(false)
    });

    match found {
        Some(record) => log::debug!("Using defaults of {:?} for `{}`", record.get("url"), current_url),
        None => log::debug!("No defaults apply to `{}`", current_url),
    }

    found
}
