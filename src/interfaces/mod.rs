//! Outer adapters: CSV import/export, text rendering and the command shell.

pub mod csv;
pub mod format;
pub mod shell;
