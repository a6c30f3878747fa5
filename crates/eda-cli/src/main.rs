//! eda-cli - exploratory data analysis reports for CSV/TSV files.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use log::LevelFilter;

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Overview { file, sep } => commands::overview::run(file, sep),

        Commands::Report {
            file,
            out_dir,
            sep,
            max_cat_columns,
            top_k,
            min_missing_share,
            title,
        } => commands::report::run(commands::report::ReportArgs {
            file,
            out_dir,
            sep,
            max_cat_columns,
            top_k,
            min_missing_share,
            title,
        }),

        Commands::Quality { file, sep, json } => commands::quality::run(file, sep, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
