// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  dump.rs - Enumeration model demo for drive parameter tables.
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

use clap::Parser;

use drivegen::builder::*;
use drivegen::reader::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The parameter table to read.
    file: String,
}

fn main() {
    let args = Args::parse();

    let table = match ParameterTable::from_path(&args.file) {
        Ok(table) => table,
        Err(error) => {
            eprintln!("Error reading table {:?}: {:?}", &args.file, error);
            return;
        }
    };

    println!("{:?}", table.schema);

    let enumerations = match EnumerationTable::from_table(&table) {
        Ok(enumerations) => enumerations,
        Err(error) => {
            eprintln!("Error building enumerations from {:?}: {:?}", &args.file, error);
            return;
        }
    };

    for (name, enumeration) in &enumerations.enumerations {
        println!("{} ({} entries)", name, enumeration.entries.len());
        for entry in &enumeration.entries {
            println!(
                "  {} = {} [{}] {}",
                entry.identifier, entry.value, entry.display_name, entry.description
            );
        }
    }
}
