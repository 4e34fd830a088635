//! An application that downloads the DICOM data dictionary and creates code or
//! data to reproduce it in `dicom-value-dictionary-std`.
//!
//! ### How to use
//!
//! Run the application with the following subcommand:
//!
//! - **`data-element`** or **`tags`**: DICOM data element dictionary
//!
//! It retrieves the attribute tables of PS3.6
//! from the DICOM standard website (or a local copy of `part06.xml`)
//! and writes them as a Rust code file or as JSON.
//!
//! Please use the `--help` flag for the full usage information.

use clap::{Parser, Subcommand};

mod common;
mod tags;

/// DICOM attribute dictionary builder
#[derive(Debug, Parser)]
struct App {
    #[clap(subcommand)]
    command: BuilderSubcommand,
}

#[derive(Debug, Subcommand)]
enum BuilderSubcommand {
    #[clap(name("data-element"))]
    DataElement(tags::DataElementApp),
}

fn main() -> eyre::Result<()> {
    match App::parse() {
        App {
            command: BuilderSubcommand::DataElement(app),
        } => tags::run(app),
    }
}

#[cfg(test)]
mod tests {
    use super::App;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        App::command().debug_assert();
    }
}
