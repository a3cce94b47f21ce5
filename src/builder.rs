// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/builder.rs - Enumeration model builder for drive parameter tables.
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
 * # `builder` Module
 *
 * This module turns raw table rows into named enumerations.
 *
 * Each row becomes one [Entry]: its numeric value is parsed (decimal, or
 * base 16 when tagged with the `16#` prefix) and its identifier is the
 * lower-cased short form between the first pair of parentheses in the
 * display label. Rows are grouped by the "Code" column: a non-empty code
 * starts a new enumeration, an empty code appends to the current one.
 *
 * The identifier rule is deliberately a narrow text extraction, not a
 * grammar: the substring strictly between the first `(` and the first `)`,
 * trimmed and lower-cased. Labels without such a pair are rejected.
 *
 * ## Usage Example
 *
 * ```no_run
 * use drivegen::builder::EnumerationTable;
 * use drivegen::reader::ParameterTable;
 *
 * fn main() -> Result<(), drivegen::Error> {
 *     let table = ParameterTable::from_path("enums_atv600.csv")?;
 *     let enumerations = EnumerationTable::from_table(&table)?;
 *
 *     for (name, enumeration) in &enumerations.enumerations {
 *         println!("{}: {} entries", name, enumeration.entries.len());
 *     }
 *
 *     Ok(())
 * }
 * ```
 */

use indexmap::IndexMap;

use crate::error::Error;
use crate::reader::ParameterTable;
use crate::reader::Row;

/// One enumerant, derived from one table row. Immutable after creation.
#[derive(Debug)]
pub struct Entry {
    /// The numeric value of the enumerant.
    pub value: u16,
    /// The derived identifier, fit for use as a programmatic name.
    pub identifier: String,
    /// The raw display label from the table.
    pub display_name: String,
    /// The free-text description from the table.
    pub description: String,
}

impl Entry {
    fn from_row(row: &Row) -> Result<Self, Error> {
        Ok(Self {
            value: parse_value(&row.values)?,
            identifier: derive_identifier(&row.display)?,
            display_name: row.display.clone(),
            description: row.description.clone(),
        })
    }
}

/// A named enumeration: an ordered sequence of entries under one grouping
/// code.
#[derive(Debug)]
pub struct Enumeration {
    /// The enumeration name (the trimmed, upper-cased grouping code).
    pub name: String,
    /// The entries, in the row order they were read.
    pub entries: Vec<Entry>,
}

/// The completed enumeration model for one run.
#[derive(Debug)]
pub struct EnumerationTable {
    /// A map of enumeration names to their enumerations, in first-seen
    /// order.
    pub enumerations: IndexMap<String, Enumeration>,
}

impl EnumerationTable {
    /// Builds the enumeration model from a read parameter table.
    ///
    /// # Arguments
    ///
    /// * `table` - The read parameter table.
    ///
    /// # Returns
    ///
    /// A `Result` containing the built `EnumerationTable` or an error.
    pub fn from_table(table: &ParameterTable) -> Result<Self, Error> {
        let mut enumerations: IndexMap<String, Enumeration> = IndexMap::new();
        let mut current_name: Option<String> = None;

        for (index, row) in table.rows.iter().enumerate() {
            let code = row.code.trim();
            if !code.is_empty() {
                current_name = Some(code.to_uppercase());
            }

            let name = match &current_name {
                Some(name) => name.clone(),
                None => return Err(Error::OrphanRow { row: index + 1 }),
            };

            let entry = Entry::from_row(row)?;

            let enumeration = enumerations
                .entry(name.clone())
                .or_insert_with(|| Enumeration {
                    name,
                    entries: Vec::new(),
                });

            if enumeration.entries.iter().any(|e| e.value == entry.value) {
                return Err(Error::DuplicateValue {
                    enumeration: enumeration.name.clone(),
                    value: entry.value,
                });
            }

            enumeration.entries.push(entry);
        }

        Ok(Self { enumerations })
    }
}

fn parse_value(text: &str) -> Result<u16, Error> {
    let parsed = match text.strip_prefix("16#") {
        Some(hex_digits) => u16::from_str_radix(hex_digits, 16),
        None => text.parse::<u16>(),
    };

    parsed.map_err(|source| Error::InvalidValue {
        text: text.to_string(),
        source,
    })
}

fn derive_identifier(display: &str) -> Result<String, Error> {
    let identifier = match (display.find('('), display.find(')')) {
        (Some(begin), Some(end)) if begin < end => display[begin + 1..end].trim().to_lowercase(),
        _ => return Err(Error::MalformedDisplay(display.to_string())),
    };

    if identifier.is_empty() {
        return Err(Error::MalformedDisplay(display.to_string()));
    }

    Ok(identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::ParameterTable;

    fn table_from(input: &str) -> ParameterTable {
        ParameterTable::from_reader(input.as_bytes()).unwrap()
    }

    #[test]
    fn test_parse_value_decimal() {
        assert_eq!(parse_value("12").unwrap(), 12);
        assert_eq!(parse_value("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_value_hex_tagged() {
        assert_eq!(parse_value("16#1F").unwrap(), 31);
        assert_eq!(parse_value("16#0").unwrap(), 0);
    }

    #[test]
    fn test_parse_value_invalid() {
        for text in ["", "twelve", "16#", "16#XYZ", "0x1F"] {
            let result = parse_value(text);
            assert!(matches!(result, Err(Error::InvalidValue { .. })), "{text:?}");
        }
    }

    #[test]
    fn test_derive_identifier() {
        assert_eq!(derive_identifier("Speed ref (FR1)").unwrap(), "fr1");
        assert_eq!(derive_identifier("Disabled (No)").unwrap(), "no");
        assert_eq!(derive_identifier("( Padded )").unwrap(), "padded");
    }

    #[test]
    fn test_derive_identifier_malformed() {
        for display in ["No parens", "Unclosed (abc", "Unopened abc)", "Reversed )abc(", "Empty ()"] {
            let result = derive_identifier(display);
            assert!(
                matches!(result, Err(Error::MalformedDisplay(_))),
                "{display:?}"
            );
        }
    }

    #[test]
    fn test_grouping_by_code_cell() {
        let table = table_from(
            "Code,Values,Display,Description\n\
             AIOL,0,Positive (POS),Positive only\n\
             ,1,Negative (NEG),Negative only\n\
             ETT,0,Drive (DRI),Drive fault\n",
        );
        let enumerations = EnumerationTable::from_table(&table).unwrap();

        assert_eq!(enumerations.enumerations.len(), 2);
        let aiol = &enumerations.enumerations["AIOL"];
        assert_eq!(aiol.entries.len(), 2);
        assert_eq!(aiol.entries[0].identifier, "pos");
        assert_eq!(aiol.entries[0].value, 0);
        assert_eq!(aiol.entries[1].identifier, "neg");
        assert_eq!(aiol.entries[1].value, 1);
        let ett = &enumerations.enumerations["ETT"];
        assert_eq!(ett.entries.len(), 1);
    }

    #[test]
    fn test_code_is_trimmed_and_uppercased() {
        let table = table_from("Code,Values,Display,Description\n aiol ,0,Positive (POS),Positive only\n");
        let enumerations = EnumerationTable::from_table(&table).unwrap();
        assert!(enumerations.enumerations.contains_key("AIOL"));
    }

    #[test]
    fn test_orphan_row_is_fatal() {
        let table = table_from("Code,Values,Description,Display\n,0,Positive only,Positive (POS)\n");
        let result = EnumerationTable::from_table(&table);
        assert!(matches!(result, Err(Error::OrphanRow { row: 1 })));
    }

    #[test]
    fn test_duplicate_value_is_fatal() {
        let table = table_from(
            "Code,Values,Display,Description\n\
             AIOL,0,Positive (POS),Positive only\n\
             ,16#0,Negative (NEG),Negative only\n",
        );
        let result = EnumerationTable::from_table(&table);
        match result {
            Err(Error::DuplicateValue { enumeration, value }) => {
                assert_eq!(enumeration, "AIOL");
                assert_eq!(value, 0);
            }
            other => panic!("expected DuplicateValue, got {other:?}"),
        }
    }

    #[test]
    fn test_same_value_in_different_enumerations_is_fine() {
        let table = table_from(
            "Code,Values,Display,Description\n\
             AIOL,0,Positive (POS),Positive only\n\
             ETT,0,Drive (DRI),Drive fault\n",
        );
        assert!(EnumerationTable::from_table(&table).is_ok());
    }

    #[test]
    fn test_repeated_code_reopens_the_enumeration() {
        let table = table_from(
            "Code,Values,Display,Description\n\
             AIOL,0,Positive (POS),Positive only\n\
             ETT,0,Drive (DRI),Drive fault\n\
             AIOL,1,Negative (NEG),Negative only\n",
        );
        let enumerations = EnumerationTable::from_table(&table).unwrap();
        assert_eq!(enumerations.enumerations.len(), 2);
        assert_eq!(enumerations.enumerations["AIOL"].entries.len(), 2);
    }
}
