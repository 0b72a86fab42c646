use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use self::{inspect::InspectArg, rank::RankArg};

mod inspect;
mod rank;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v: info, -vv: debug); `RUST_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Score and rank every phone in a dataset
    Rank(#[clap(flatten)] RankArg),
    /// Summarize a dataset and its missing values without scoring it
    Inspect(#[clap(flatten)] InspectArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose);
    match args.mode {
        Mode::Rank(arg) => rank::run(&arg)?,
        Mode::Inspect(arg) => inspect::run(&arg)?,
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
