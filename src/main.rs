use anyhow::Result;
use clap::{Parser, Subcommand};

use x64operand::{
    inspect::{inspect, kinds, InspectArgs, KindsArgs},
    instrumentation,
};

#[derive(Parser)]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[clap(long)]
    #[clap(help = "Enable chrome tracing")]
    #[clap(long_help = "Enable chrome tracing which on program exit will generate
a json file to be opened with a chrome tracing compatible
viewer.")]
    trace: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[clap(about = "Check an immediate literal against every immediate width")]
    #[clap(aliases = &["i", "imm"])]
    Inspect(InspectArgs),
    #[clap(about = "List the operand kinds")]
    #[clap(aliases = &["k"])]
    Kinds(KindsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _trace_guard = if cli.trace {
        Some(instrumentation::trace())
    } else {
        None
    };

    match &cli.command {
        Command::Inspect(args) => inspect(args),
        Command::Kinds(args) => kinds(args),
    }
}
