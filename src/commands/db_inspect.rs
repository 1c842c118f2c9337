use crate::config::{redact_url, EnvLoader, ProcessEnv};
use crate::database::PgCatalog;
use crate::error::{EnvKitError, Result};
use crate::inspect::inspect_tables;
use crate::settings::Settings;
use std::io::Write;
use tracing::info;

/// Handle the db-inspect command, writing to stdout
pub async fn handle_db_inspect(settings: &Settings) -> Result<()> {
    let process = ProcessEnv::capture();
    let stdout = std::io::stdout();
    handle_db_inspect_with(settings, &process, &mut stdout.lock()).await
}

/// Handle the db-inspect command against an explicit process snapshot
pub async fn handle_db_inspect_with<W: Write>(
    settings: &Settings,
    process: &ProcessEnv,
    out: &mut W,
) -> Result<()> {
    let loader = EnvLoader::new(settings.start_dir()?, &settings.env_file, settings.parser);
    let resolved = loader.load(process, settings.override_existing)?;

    let database_url = resolved
        .database_url()
        .ok_or(EnvKitError::MissingDatabaseUrl)?;

    let catalog = PgCatalog::connect(&database_url).await?;
    let shown = redact_url(&database_url);
    info!("Connected to {}", shown);
    writeln!(out, "Connected to: {shown}")?;

    let summaries = inspect_tables(&catalog, settings.sample, out).await?;
    info!("Inspected {} tables", summaries.len());
    Ok(())
}
