use anyhow::Result;
use clap::Parser;
use lexiscore::cli::{Cli, Commands};
use lexiscore::commands::{self, AnalyzeOptions};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            config,
            documents,
            stop_words,
            positive,
            negative,
            table,
            format,
            output,
            on_unmatched,
            no_parallel,
        } => commands::handle_analyze(AnalyzeOptions {
            config,
            documents,
            stop_words,
            positive,
            negative,
            table,
            format,
            output,
            on_unmatched,
            no_parallel,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
