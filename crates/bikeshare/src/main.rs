mod bootstrap;

use std::io;

use anyhow::{Context, Result};
use bikeshare_core::settings::Settings;
use bikeshare_runtime::session::{Session, SessionConfig};

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_deref())?;

    tracing::info!("Bikeshare explorer v{} starting", env!("CARGO_PKG_VERSION"));

    let data_dir = bootstrap::discover_data_dir(settings.data_dir.as_deref());
    tracing::info!(
        "Data directory: {}, pause: {}s",
        data_dir.display(),
        settings.pause_secs
    );

    let config = SessionConfig {
        data_dir: data_dir.clone(),
        pause: settings.pause(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config, stdin.lock(), stdout.lock());
    session
        .run()
        .with_context(|| format!("bikeshare session failed (data directory {})", data_dir.display()))?;

    tracing::info!("Session ended after {} iteration(s)", session.iterations());
    Ok(())
}
