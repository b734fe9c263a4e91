#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;
use vending::application::catalog::{default_catalog, seed};
use vending::application::machine::VendingMachine;

/// Writes shell commands, one per line, to a temporary script file.
pub fn script(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file
}

/// Writes a catalog CSV with the given data rows under the standard header.
pub fn catalog_csv(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "id,name,price,stock").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}

/// A machine loaded with the built-in drinks.
pub fn default_machine() -> VendingMachine {
    let mut machine = VendingMachine::new();
    seed(&mut machine, default_catalog());
    machine
}
