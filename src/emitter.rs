// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/emitter.rs - C++ header emitter for drive parameter enumerations.
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
 * # `emitter` Module
 *
 * This module renders a built [EnumerationTable] into a single generated
 * C++ header.
 *
 * For each enumeration it emits an `enum struct <name>_e: std::uint16_t`
 * declaration, an `enum_desc` function switching over every enumerant
 * (with a `default:` branch returning `"unknown"`), and a `format_as`
 * adapter delegating to `enum_desc`. The whole header is bracketed by
 * `clang-format` off/on markers so the column-aligned assignments survive
 * reformatting.
 *
 * [EnumerationTable]: crate::builder::EnumerationTable
 */

use std::fs;
use std::path::Path;

use crate::builder::Enumeration;
use crate::builder::EnumerationTable;
use crate::error::Error;

/// The order in which enumerations appear in the generated header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitOrder {
    /// First-seen order from the input table.
    Insertion,
    /// Alphabetical by enumeration name.
    Sorted,
}

// Column the enumerant values are aligned to.
const VALUE_COLUMN: usize = 40;

const BANNER: &str = "\
// ATTENTION: This file is generated by drivegen\n\n\
// DO NOT EDIT THIS FILE!\n\n\
#pragma once\n\n\
#include <cstdint>\n\
#include <string_view>\n\n\
// clang-format off\n";

/// The rendered header, accumulated in memory and written in one
/// operation.
#[derive(Debug)]
pub struct GeneratedHeader {
    /// The full text of the generated header.
    pub source: String,
}

impl GeneratedHeader {
    /// Renders the generated header from a built enumeration table.
    ///
    /// Rendering is deterministic: the same table and order always produce
    /// byte-identical text.
    ///
    /// # Arguments
    ///
    /// * `table` - The built enumeration table.
    /// * `order` - The order enumerations are emitted in.
    pub fn from_enumerations(table: &EnumerationTable, order: EmitOrder) -> Self {
        let mut enumerations: Vec<&Enumeration> = table.enumerations.values().collect();
        if order == EmitOrder::Sorted {
            enumerations.sort_by(|a, b| a.name.cmp(&b.name));
        }

        let mut source = String::from(BANNER);
        for enumeration in enumerations {
            source.push_str(&render_declaration(enumeration));
            source.push_str(&render_descriptor(enumeration));
        }
        source.push_str("// clang-format on\n");

        Self { source }
    }

    /// Writes the generated header to a file in one operation.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        fs::write(path, &self.source)?;
        Ok(())
    }
}

fn type_name(enumeration: &Enumeration) -> String {
    format!("{}_e", enumeration.name.to_lowercase())
}

fn render_declaration(enumeration: &Enumeration) -> String {
    let type_name = type_name(enumeration);

    let mut out = format!("// Begin of {type_name} enum declaration\n");
    out.push_str(&format!("enum struct {type_name}: std::uint16_t {{\n"));
    for entry in &enumeration.entries {
        let assignment = format!("   {} =", entry.identifier);
        let padding = " ".repeat(VALUE_COLUMN.saturating_sub(assignment.len()));
        out.push_str(&format!(
            "{}{} {}, ///< {} ({})\n",
            assignment, padding, entry.value, entry.description, entry.display_name
        ));
    }
    out.push_str("};\n");

    out
}

fn render_descriptor(enumeration: &Enumeration) -> String {
    let type_name = type_name(enumeration);

    let mut out = format!(
        "[[nodiscard]] constexpr auto enum_desc({type_name} const enum_value) -> std::string_view {{\n"
    );
    out.push_str("   switch(enum_value)\n");
    out.push_str("   {\n");
    for entry in &enumeration.entries {
        out.push_str(&format!("      case {}::{}:\n", type_name, entry.identifier));
        out.push_str(&format!(
            "         return \"{}, {}\";\n",
            entry.display_name, entry.description
        ));
    }
    out.push_str("      default:\n");
    out.push_str("         return \"unknown\";\n");
    out.push_str("   }\n");
    out.push_str("}\n");
    out.push_str(&format!(
        "constexpr auto format_as({type_name} const enum_value) -> std::string_view {{ return enum_desc(enum_value); }}\n\n"
    ));

    out
}
