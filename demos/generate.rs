// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  generate.rs - Header generation demo for drive parameter tables.
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
use drivegen::emitter::*;
use drivegen::reader::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The parameter table to read.
    #[arg(default_value = "enums_atv600.csv")]
    input: String,
    /// The header file to write.
    #[arg(default_value = "generated_enums.hpp")]
    output: String,
    /// Emit enumerations in alphabetical order instead of first-seen order.
    #[arg(long)]
    sorted: bool,
}

fn main() {
    let args = Args::parse();

    let table = match ParameterTable::from_path(&args.input) {
        Ok(table) => table,
        Err(error) => {
            eprintln!("Error reading table {:?}: {:?}", &args.input, error);
            return;
        }
    };

    let enumerations = match EnumerationTable::from_table(&table) {
        Ok(enumerations) => enumerations,
        Err(error) => {
            eprintln!("Error building enumerations from {:?}: {:?}", &args.input, error);
            return;
        }
    };

    let order = if args.sorted {
        EmitOrder::Sorted
    } else {
        EmitOrder::Insertion
    };

    let header = GeneratedHeader::from_enumerations(&enumerations, order);
    if let Err(error) = header.write_to_path(&args.output) {
        eprintln!("Error writing header {:?}: {:?}", &args.output, error);
        return;
    }

    println!(
        "Generated {} enumerations into {:?}",
        enumerations.enumerations.len(),
        &args.output
    );
}
