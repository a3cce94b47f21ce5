// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/reader.rs - Table reader for motor-drive parameter value-set tables.
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

/*!
 * # `reader` Module
 *
 * This module parses a delimited drive parameter table into typed rows.
 *
 * The first record is the header; it defines the column order. Only the
 * column names matter, so a table may carry the required columns in any
 * order (and extra columns are ignored). Every later record becomes one
 * [Row].
 *
 * ## Usage Example
 *
 * ```no_run
 * use drivegen::reader::ParameterTable;
 *
 * fn main() -> Result<(), drivegen::Error> {
 *     let table = ParameterTable::from_path("enums_atv600.csv")?;
 *
 *     for row in &table.rows {
 *         println!("{}: {}", row.code, row.display);
 *     }
 *
 *     Ok(())
 * }
 * ```
 */

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

use csv;

use crate::error::Error;

/// Positional indices of the required columns, derived from the header row.
#[derive(Debug)]
pub struct ColumnSchema {
    /// Index of the "Code" column (the grouping code).
    pub code: usize,
    /// Index of the "Values" column (the numeric value).
    pub values: usize,
    /// Index of the "Display" column (the display label).
    pub display: usize,
    /// Index of the "Description" column (the free-text description).
    pub description: usize,
}

impl ColumnSchema {
    /// Derives the schema from a header record.
    ///
    /// Fails with [Error::MissingColumn] if any required column name is
    /// absent, including the degenerate case of an empty header.
    pub fn from_headers(headers: &csv::StringRecord) -> Result<Self, Error> {
        Ok(Self {
            code: column_index(headers, "Code")?,
            values: column_index(headers, "Values")?,
            display: column_index(headers, "Display")?,
            description: column_index(headers, "Description")?,
        })
    }
}

/// One raw data row of the parameter table.
///
/// Cells are kept verbatim; trimming and case normalization happen in the
/// builder.
#[derive(Debug)]
pub struct Row {
    /// The grouping code. Non-empty starts a new enumeration; empty
    /// continues the current one.
    pub code: String,
    /// The numeric value, decimal or "16#"-tagged hexadecimal.
    pub values: String,
    /// The display label, carrying the parenthesized short form.
    pub display: String,
    /// The free-text description.
    pub description: String,
}

/// A fully read parameter table: the column schema plus every data row in
/// file order.
#[derive(Debug)]
pub struct ParameterTable {
    /// The column schema derived from the header row.
    pub schema: ColumnSchema,
    /// All data rows, in the order they appear in the input.
    pub rows: Vec<Row>,
}

impl ParameterTable {
    /// Reads a parameter table from any reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The delimited table text.
    ///
    /// # Returns
    ///
    /// A `Result` containing the read `ParameterTable` or an error.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let schema = ColumnSchema::from_headers(&headers)?;

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            rows.push(Row {
                code: record.get(schema.code).unwrap_or_default().to_string(),
                values: record.get(schema.values).unwrap_or_default().to_string(),
                display: record.get(schema.display).unwrap_or_default().to_string(),
                description: record
                    .get(schema.description)
                    .unwrap_or_default()
                    .to_string(),
            });
        }

        Ok(Self { schema, rows })
    }

    /// Reads a parameter table from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

fn column_index(headers: &csv::StringRecord, name: &'static str) -> Result<usize, Error> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or(Error::MissingColumn(name))
}
