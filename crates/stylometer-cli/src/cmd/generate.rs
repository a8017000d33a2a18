use clap::Args;
use fastrand::Rng;
use stylometer_core::generator;
use stylometer_core::{ModelConfig, SmResult};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: ModelConfig,

    /// Author whose statistics drive the generation.
    #[arg(short, long)]
    pub author: String,

    /// Number of tokens to generate.
    #[arg(short, long, default_value_t = 200)]
    pub size: usize,

    /// Path of the text file to write.
    #[arg(short, long)]
    pub output: String,

    /// Seed for reproducible output; omit for a fresh random stream.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: GenerateArgs, config_file: Option<&str>) -> SmResult<()> {
    let session = super::analyzed_session(args.config, config_file)?;
    let model = session.model()?;

    match args.seed {
        Some(seed) => {
            let mut rng = Rng::with_seed(seed);
            generator::gen_text_with_rng(model, &args.author, args.size, &args.output, &mut rng)?;
        }
        None => generator::gen_text(model, &args.author, args.size, &args.output)?,
    }

    info!("✍️  Generated text for '{}' into {}", args.author, args.output);
    Ok(())
}
