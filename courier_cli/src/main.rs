use clap::{Parser, Subcommand};

use crate::{generate::GenerateSubcommands, optimize::OptimizeArgs};

mod file_utils;
mod generate;
mod optimize;
mod parsers;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Plans the tasks of a JSON problem file
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Optimize { args } => optimize::run(args)?,
        Commands::Generate { commands } => generate::run(commands)?,
    }

    Ok(())
}
