//! Logger configuration for the Sprout application.
//! Creation confirmations go to stdout; the log level only affects
//! diagnostic traces.

/// Initializes the global logger, at debug level when verbose is set.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();
}
