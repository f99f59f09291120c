use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "thermoqc", version, about = "Thermostability plate-reading sanitizer CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, help = "Input plate-reading CSV")]
    pub input: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, default_value_t = false, help = "Write a thermoqc.json report")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[arg(long, help = "Input plate-reading CSV")]
    pub input: PathBuf,
}
