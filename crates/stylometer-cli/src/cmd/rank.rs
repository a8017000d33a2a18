use clap::Args;
use stylometer_core::{ModelConfig, SmResult};

#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    #[command(flatten)]
    pub config: ModelConfig,

    /// Author to query.
    #[arg(short, long)]
    pub author: String,

    /// 1-based frequency rank to look up.
    #[arg(short, long)]
    pub rank: usize,
}

pub fn run(args: RankArgs, config_file: Option<&str>) -> SmResult<()> {
    let session = super::analyzed_session(args.config, config_file)?;
    let group = session.nth_most_frequent(&args.author, args.rank)?;

    if group.is_empty() {
        println!(
            "No n-gram at rank {} for '{}' (fewer distinct frequencies exist).",
            args.rank, args.author
        );
        return Ok(());
    }

    println!(
        "Rank {} of '{}' ({} n-gram{}):",
        args.rank,
        args.author,
        group.len(),
        if group.len() == 1 { "" } else { "s" }
    );
    for ngram in &group {
        println!("  {}", ngram.join(" "));
    }
    Ok(())
}
