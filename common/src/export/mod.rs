//! Export core modules shared across CLI and WASM wrappers.

pub mod csv_core;

pub use csv_core::{export_filename, to_csv, CSV_HEADER, CSV_MIME};

#[cfg(feature = "quoted-csv")]
pub use csv_core::to_csv_quoted;
