use crate::reports;
use clap::Args;
use stylometer_core::{ModelConfig, SmResult};

#[derive(Args, Debug, Clone)]
pub struct AttributeArgs {
    #[command(flatten)]
    pub config: ModelConfig,

    /// Path of the unknown work to attribute.
    #[arg(short, long)]
    pub work: String,

    /// Emit the scores as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: AttributeArgs, config_file: Option<&str>) -> SmResult<()> {
    let session = super::analyzed_session(args.config, config_file)?;

    let mut scores = session.find_author(&args.work)?;
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&scores)?);
    } else {
        reports::attribution(&args.work, &scores);
    }
    Ok(())
}
