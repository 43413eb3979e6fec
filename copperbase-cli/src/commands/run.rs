//! `copperbase run` command handler
//!
//! Loads the configuration, applies CLI overrides (highest precedence),
//! assembles the HTTP services, and hands off to the playground runner.

use std::path::Path;

use tracing::info;

use copperbase_client::{ApiClient, Databases, Functions, Storage, Users};
use copperbase_core::config::CopperbaseConfig;
use copperbase_core::error::CopperbaseError;
use copperbase_core::wait::WaitPolicy;

use crate::cli::RunArgs;
use crate::error::CliError;
use crate::playground::Playground;

/// Execute the `run` command.
pub async fn execute(
    args: RunArgs,
    config_path: &Path,
    log_level_override: Option<&str>,
) -> Result<(), CliError> {
    let mut config = CopperbaseConfig::load(config_path).await?;
    if let Some(level) = log_level_override {
        config.general.log_level = level.to_owned();
    }
    crate::logging::init_tracing(&config.general)?;

    apply_overrides(&mut config, &args);
    config.validate()?;
    config.connection.ensure_complete()?;

    let wait = if args.no_wait {
        WaitPolicy::None
    } else {
        WaitPolicy::from_config(&config.playground)?
    };

    info!(
        endpoint = %config.connection.endpoint,
        project = %config.connection.project,
        "starting playground run"
    );

    let client = ApiClient::new(&config.connection).map_err(CopperbaseError::from)?;
    let playground = Playground::new(
        Users::new(client.clone()),
        Databases::new(client.clone()),
        Functions::new(client.clone()),
        Storage::new(client),
        wait,
        config.playground.upload_path.as_str(),
    );

    playground.run().await?;
    Ok(())
}

/// Apply CLI argument overrides onto the loaded configuration.
///
/// CLI arguments take precedence over environment variables and the file.
fn apply_overrides(config: &mut CopperbaseConfig, args: &RunArgs) {
    if let Some(ref endpoint) = args.endpoint {
        config.connection.endpoint = endpoint.clone();
    }
    if let Some(ref project) = args.project {
        config.connection.project = project.clone();
    }
    if let Some(ref api_key) = args.api_key {
        config.connection.api_key = api_key.clone();
    }
    if let Some(ref upload_path) = args.upload_path {
        config.playground.upload_path = upload_path.display().to_string();
    }
}
