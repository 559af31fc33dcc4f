pub mod build_info;

use std::{env, path::PathBuf, sync::Once};

static TRACING_INIT: Once = Once::new();

/// Environment variable overriding the directory used for configuration.
pub const HOME_ENV: &str = "BUDGET_TRACKER_HOME";

const DEFAULT_DIRECTIVE: &str = "budget_tracker=warn";

/// Initializes the global tracing subscriber, writing to stderr so shell
/// output stays clean. `RUST_LOG` replaces the default directive.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Resolves the base directory holding the configuration file.
pub fn base_dir() -> PathBuf {
    if let Some(home) = env::var_os(HOME_ENV) {
        return PathBuf::from(home);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("budget_tracker")
}
