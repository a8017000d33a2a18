use crate::reports;
use clap::Args;
use stylometer_core::{ModelConfig, SmResult};

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: ModelConfig,
}

pub fn run(args: AnalyzeArgs, config_file: Option<&str>) -> SmResult<()> {
    let session = super::analyzed_session(args.config, config_file)?;
    reports::model_summary(session.model()?, session.corpus());
    Ok(())
}
