use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file overriding the command-line model configuration.
    #[arg(global = true, long)]
    config_file: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the per-author model and print a summary.
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Score an unknown work against every known author.
    Attribute(cmd::attribute::AttributeArgs),
    /// Generate synthetic text from one author's statistics.
    Generate(cmd::generate::GenerateArgs),
    /// Look up an author's n-th most frequent n-gram group.
    Rank(cmd::rank::RankArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args, cli.config_file.as_deref()),
        Commands::Attribute(args) => cmd::attribute::run(args, cli.config_file.as_deref()),
        Commands::Generate(args) => cmd::generate::run(args, cli.config_file.as_deref()),
        Commands::Rank(args) => cmd::rank::run(args, cli.config_file.as_deref()),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
