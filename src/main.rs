//! Cheergate CLI entrypoint: the positive-emoji merge gate.

use std::io::{self, Write};
use std::process::ExitCode;

use cheergate::{
    CheergateConfig, GateCheck, GateError, GateOutcome, GateSettings, LookbackWindow,
    OctocrabGateway, PersonalAccessToken, RepositoryLocator, SentimentPolicy, report,
};
use chrono::Utc;
use ortho_config::OrthoConfig;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(outcome) if !outcome.is_blocking() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(error) => {
            if writeln!(io::stderr().lock(), "Action failed with error: {error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<GateOutcome, GateError> {
    let config = load_config()?;
    let settings = GateSettings::from_config(&config);

    let (owner, repo) = config.resolve_repository()?;
    let token_value = config.resolve_token()?;

    let locator = RepositoryLocator::from_owner_repo(&owner, &repo)?;
    let token = PersonalAccessToken::new(token_value)?;
    let policy = SentimentPolicy::builtin()?;
    let window = LookbackWindow::ending_at(Utc::now(), settings.days());

    let gateway = OctocrabGateway::for_token(&token, &locator)?;
    let outcome = GateCheck::new(&gateway)
        .run(&locator, &policy, window, &settings)
        .await?;

    report::write_check_header(&mut io::stdout().lock(), settings.days())?;
    report::write_outcome(&mut io::stdout().lock(), &mut io::stderr().lock(), &outcome)?;
    Ok(outcome)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`GateError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<CheergateConfig, GateError> {
    CheergateConfig::load().map_err(|error| GateError::Configuration {
        message: error.to_string(),
    })
}
