use envkit::cli::DbInspectCli;
use envkit::commands::db_inspect;
use envkit::logging::init_logging;
use std::process;

// Allow println in CLI binary
#[allow(clippy::disallowed_methods)]
fn main() {
    init_logging();

    let cli = DbInspectCli::parse();
    tracing::debug!("db-inspect initialized");

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    // Single-threaded: one connection, queries issued one after another
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(db_inspect::handle_db_inspect(&settings)) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
