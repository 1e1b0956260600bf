//! # CLI Module
//!
//! Argument parsing, key loading, padding and the encrypt/decrypt commands.

mod app;
mod commands;
mod error;
mod keys;
mod padding;

pub use app::run;

/// Setup logging based on verbosity
pub fn setup_logging(verbose: bool, quiet: bool) {
    let log_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "info"
    };

    // A second init (e.g. from tests) is harmless.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .try_init();
}

/// Print error and exit
pub fn exit_with_error(e: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", e);
    std::process::exit(1);
}
