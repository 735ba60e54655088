//! Single-user expense ledger kept in a CSV file, driven by an interactive
//! menu on standard input and output.

pub mod csv;
pub mod domain;
pub mod error;
pub mod menu;
pub mod prompt;
pub mod recorder;
pub mod report;
pub mod store;
