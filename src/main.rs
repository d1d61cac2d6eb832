#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]
#![deny(missing_docs)]

//! Arrayset, an array-backed unordered set container.

#[macro_use]
mod macros;

mod bench;
mod cli;
mod demo;
mod errors;
mod unorderedset;

/// The name of the crate.
pub static NAME: &str = "arrayset";
/// The version of the crate.
pub static VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> anyhow::Result<()> {
    let cli = <cli::Cli as clap::Parser>::parse();

    match cli.subcommand {
        Some(cli::Subcommands::Bench { cycles }) => bench::run(cycles),
        Some(cli::Subcommands::Demo) | None => demo::run()?,
    }

    Ok(())
}
