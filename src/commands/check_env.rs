use crate::compare::{compare, write_report, EditorSettings};
use crate::config::{EnvLoader, ProcessEnv};
use crate::error::Result;
use crate::settings::Settings;
use std::io::Write;
use tracing::{info, warn};

/// Handle the check-env command, writing the report to stdout
pub fn handle_check_env(settings: &Settings) -> Result<()> {
    let process = ProcessEnv::capture();
    let stdout = std::io::stdout();
    handle_check_env_with(settings, &process, &mut stdout.lock())
}

/// Handle the check-env command against an explicit process snapshot
pub fn handle_check_env_with<W: Write>(
    settings: &Settings,
    process: &ProcessEnv,
    out: &mut W,
) -> Result<()> {
    let loader = EnvLoader::new(settings.start_dir()?, &settings.env_file, settings.parser);
    // Comparison reads the file itself; a failed load only gets logged
    match loader.load(process, false) {
        Ok(resolved) => info!(
            "Resolved configuration (loaded={}, source={:?})",
            resolved.is_loaded(),
            resolved.source()
        ),
        Err(e) => warn!("Could not load environment file: {}", e),
    }

    let declared = loader.as_dict()?;
    let comparisons = compare(&declared, process);

    let editor_path = loader.root().join(&settings.editor_settings);
    let editor = EditorSettings::read(&editor_path);
    let label = settings.editor_settings.display().to_string();

    write_report(out, &comparisons, &editor, &label)?;
    Ok(())
}
