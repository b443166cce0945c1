use std::path::PathBuf;

use clap::{builder::RangedU64ValueParser, Args, Parser, Subcommand, ValueEnum};
use eyre::{eyre, Result};
use serde::Serialize;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Bias {
    Left,
    Right,
}

#[derive(Parser, Debug, Serialize)]
pub struct InsortExperimentArgs {
    #[command(subcommand)]
    pub command: InsortCommands,

    /// a file to write the results to
    pub outfile: PathBuf,
}

#[derive(Subcommand, Debug, Clone, Serialize)]
pub enum InsortCommands {
    /// Time insertion point lookups on sorted vectors
    Bisect(SweepArgs),
    /// Time sorted insertions into sorted vectors
    Insort(SweepArgs),
}

#[derive(Args, Debug, Clone, Serialize)]
pub struct SweepArgs {
    #[arg(long, default_value = "1000")]
    /// The minimum length of the vector to build
    pub min_size: u64,

    #[arg(long, default_value = "100000")]
    /// The maximum length of the vector to build
    pub max_size: u64,

    #[arg(
        short,
        long,
        default_value = "1000",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub step_size: usize,

    /// the number of queries to execute per iteration
    #[arg(short, long, default_value = "100")]
    pub query_size: u64,

    #[arg(short, long, default_value = "right", value_enum)]
    pub bias: Bias,

    /// seed for the random data; drawn from entropy when absent
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SweepArgs {
    pub fn validate(&self) -> Result<()> {
        if self.min_size > self.max_size {
            return Err(eyre!(
                "--min-size ({}) cannot exceed --max-size ({})",
                self.min_size,
                self.max_size
            ));
        }
        Ok(())
    }
}

impl InsortExperimentArgs {
    pub fn sweep(&self) -> &SweepArgs {
        match &self.command {
            InsortCommands::Bisect(sweep) | InsortCommands::Insort(sweep) => sweep,
        }
    }
}
