//! Accolade CLI entrypoint for contributor credits generation.

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use accolade::{
    AccoladeConfig, CreditsEngine, CreditsError, OctocrabContributionGateway,
    OctocrabProfileGateway, RepositoryLocator, credit_line, discover_repository_with_remote,
    render_credits, resolve_display_names,
};
use ortho_config::OrthoConfig;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CreditsError> {
    let config = load_config()?;

    let since = config.since_bound()?;
    let exclude = config.exclusions();
    let token = config.resolve_token()?;

    let local_repo = discover_repository_with_remote(Path::new("."), config.remote_name())?;
    let locator = RepositoryLocator::from_github_origin(local_repo.github_origin())?;

    let gateway = OctocrabContributionGateway::for_token(token.as_ref(), &locator)?;
    let engine = CreditsEngine::new(&gateway);
    let contributors = engine.collect(&locator, since.as_ref(), &exclude).await?;

    let line = if config.full_name() {
        let profiles = OctocrabProfileGateway::for_token(token.as_ref(), &locator)?;
        let resolved = resolve_display_names(&profiles, &contributors).await?;
        render_credits(
            resolved
                .iter()
                .map(|entry| credit_line(&entry.login, Some(&entry.display_name))),
        )
    } else {
        render_credits(contributors.iter().map(|login| credit_line(login, None)))
    };

    write_output(&line)?;
    Ok(())
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`CreditsError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<AccoladeConfig, CreditsError> {
    AccoladeConfig::load().map_err(|error| CreditsError::Configuration {
        message: error.to_string(),
    })
}

fn write_output(line: &str) -> Result<(), CreditsError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{line}").map_err(|error| CreditsError::Io {
        message: error.to_string(),
    })
}
