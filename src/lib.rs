// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/lib.rs - Enumeration code generator for motor-drive parameter tables.
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
 * # `drivegen` Crate
 *
 * A library for turning a motor drive's parameter value-set table (codes,
 * numeric values, display labels, descriptions) into a C++ header of
 * strongly-typed enumerations with human-readable formatting functions.
 *
 * This crate provides a full pipeline for working with drive parameter
 * tables:
 *
 * 1. [reader]: Parses the delimited table into typed rows.
 * 2. [builder]: Derives identifiers and numeric values and groups rows
 *    into named enumerations.
 * 3. [emitter]: Renders the enumeration declarations and descriptor
 *    functions into a single generated header.
 *
 * ## Usage Example
 *
 * ```no_run
 * use drivegen::builder::EnumerationTable;
 * use drivegen::emitter::{EmitOrder, GeneratedHeader};
 * use drivegen::reader::ParameterTable;
 *
 * fn main() -> Result<(), drivegen::Error> {
 *     // Read the parameter table
 *     let table = ParameterTable::from_path("enums_atv600.csv")?;
 *
 *     // Build the enumeration model
 *     let enumerations = EnumerationTable::from_table(&table)?;
 *
 *     // Render and write the generated header
 *     let header = GeneratedHeader::from_enumerations(&enumerations, EmitOrder::Insertion);
 *     header.write_to_path("generated_enums.hpp")?;
 *
 *     Ok(())
 * }
 * ```
 */

pub mod builder;
pub mod emitter;
mod error;
pub mod reader;

pub use error::Error;
