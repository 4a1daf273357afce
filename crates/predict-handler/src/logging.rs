use log::LevelFilter;

/// Environment variable holding the `env_logger` filter.
pub const LOG_ENV: &str = "PREDICT_LOG";

const DEFAULT_FILTER: &str = "error,predict_handler=info";

/// Initialise the global logger. Safe to call more than once; only the first
/// call installs a logger.
pub fn init() {
    let _ = env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or(LOG_ENV, DEFAULT_FILTER))
        .try_init();
}
