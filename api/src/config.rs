//! Startup configuration loading
//!
//! `config.env` and `.env` are read first (both optional, earlier files
//! win), then the process environment is mapped onto `AppConfig`.

use nb_shared::config::{AppConfig, ConfigError};

/// Files consulted before reading the environment, in priority order
pub const ENV_FILES: [&str; 2] = ["config.env", ".env"];

/// Load env files and build the application configuration
pub fn load() -> Result<AppConfig, ConfigError> {
    for file in ENV_FILES {
        match dotenvy::from_filename(file) {
            Ok(path) => log::info!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => log::warn!("Ignoring unreadable {}: {}", file, e),
        }
    }

    let config = AppConfig::from_env()?;
    log::info!(
        "Configuration loaded: environment={}, bind={}",
        config.environment,
        config.server.bind_address()
    );
    Ok(config)
}
