use clap::{Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    #[clap(subcommand)]
    pub subcommand: Option<Subcommands>,
}

#[derive(Subcommand)]
pub enum Subcommands {
    /// Walk through the set contract, printing the state after each step.
    Demo,
    /// Time add/re-add/remove cycles against the standard-library sets.
    Bench {
        /// Number of workload cycles to run.
        #[clap(long, value_name = "N", default_value = "1000000")]
        cycles: usize,
    },
}
