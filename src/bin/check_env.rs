use envkit::cli::CheckEnvCli;
use envkit::commands::check_env;
use envkit::logging::init_logging;
use std::process;

// Allow println in CLI binary
#[allow(clippy::disallowed_methods)]
fn main() {
    init_logging();

    let cli = CheckEnvCli::parse();
    tracing::debug!("check-env initialized");

    let result = cli
        .common
        .settings()
        .map_err(envkit::EnvKitError::from)
        .and_then(|settings| check_env::handle_check_env(&settings));

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
