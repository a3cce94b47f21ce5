// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/error.rs - Error types for the enumeration code generator.
 *  Copyright (C) 2026  Forest Crossman <cyrozap@gmail.com>
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use thiserror::Error;

/// Errors produced while reading, building, or writing an enumeration table.
///
/// Every variant is fatal: the pipeline stops at the first error and no
/// output is written.
#[derive(Debug, Error)]
pub enum Error {
    /// A required column name was absent from the header row.
    #[error("required column {0:?} is missing from the header row")]
    MissingColumn(&'static str),

    /// A Values cell was neither a valid decimal integer nor a valid
    /// "16#"-tagged hexadecimal integer.
    #[error("invalid numeric value {text:?}")]
    InvalidValue {
        text: String,
        source: std::num::ParseIntError,
    },

    /// A Display cell lacked the parenthesized short form the identifier
    /// is derived from.
    #[error("display label {0:?} has no parenthesized short name")]
    MalformedDisplay(String),

    /// Two entries within the same enumeration carried the same numeric
    /// value.
    #[error("duplicate value {value} in enumeration {enumeration:?}")]
    DuplicateValue { enumeration: String, value: u16 },

    /// A data row with an empty grouping code appeared before any
    /// enumeration was started.
    #[error("row {row} has an empty code cell but no enumeration has been started")]
    OrphanRow { row: usize },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
