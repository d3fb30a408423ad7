use gh_client::OctocrabClient;
use ghnotes::{summarize, Summary};
use ghnotes_config::{load_env_files, resolve_token, AppConfig};
use std::io;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run().await {
        Ok(summary) => {
            log::info!(
                "Printed {} notifications ({} closed skipped, {} lookup failures)",
                summary.shown,
                summary.skipped_closed,
                summary.warnings.len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ERROR: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<Summary> {
    // Environment wins over the per-user env file, which wins over ./.env
    load_env_files();

    let config = AppConfig::load();
    let credential = resolve_token();
    if credential.is_empty() {
        log::debug!("GITHUB_TOKEN is not set, requests will be unauthenticated");
    }

    let client = OctocrabClient::connect(credential.token(), config.host.as_deref())?;
    log::debug!("Using GitHub API at {}", client.base_url());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    summarize(&client, &mut out).await
}
