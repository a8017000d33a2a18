pub mod analyze;
pub mod attribute;
pub mod generate;
pub mod rank;

use stylometer_core::{ModelConfig, SmResult, StylometerSession};
use tracing::info;

/// Resolves the effective configuration: an explicit JSON file wins over
/// the command-line arguments.
pub(crate) fn resolve_config(
    cli_config: ModelConfig,
    config_file: Option<&str>,
) -> SmResult<ModelConfig> {
    match config_file {
        Some(path) => {
            info!("⚙️  Loading configuration from {}", path);
            ModelConfig::load_from_file(path)
        }
        None => {
            cli_config.validate()?;
            Ok(cli_config)
        }
    }
}

/// Builds a session and runs the one-shot analysis every command needs.
pub(crate) fn analyzed_session(
    config: ModelConfig,
    config_file: Option<&str>,
) -> SmResult<StylometerSession> {
    let config = resolve_config(config, config_file)?;
    info!("📚 Corpus root: {}", config.authors_dir);

    let mut session = StylometerSession::new(config)?;
    session.analyze()?;
    Ok(session)
}
