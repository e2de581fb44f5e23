//! perfdiff - Benchmark Report Differ CLI
//!
//! Prints YAML benchmark streams verbatim or as the difference between
//! the two most recent runs.

use clap::Parser;
use perf_yaml_diff::{
    app::App,
    cli::Cli,
    config::{display_config_summary, load_config},
    error::{AppError, ErrorReporter, Result},
    logging::Logger,
    models::Config,
    BUILD_TIME, GIT_COMMIT, PKG_NAME, VERSION,
};
use std::process;

fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(99);
    }));

    let cli = Cli::parse();
    let debug = cli.debug;

    let config = match load_config(cli) {
        Ok(config) => config,
        Err(e) => exit_with(&e, ErrorReporter::new(false, debug)),
    };

    colored::control::set_override(config.enable_color);

    let reporter = ErrorReporter::new(config.enable_color, config.debug);
    if let Err(e) = run_application(config) {
        exit_with(&e, reporter);
    }
}

/// Main application logic
fn run_application(config: Config) -> Result<()> {
    let logger = Logger::with_config("MAIN", &config);

    logger.debug(&format!("{} v{}", PKG_NAME, VERSION))
        .field("build_time", BUILD_TIME)
        .field("git_commit", GIT_COMMIT.unwrap_or("unknown"))
        .log();

    if config.debug {
        for line in display_config_summary(&config).lines() {
            logger.debug(line).log();
        }
    }

    let app = App::new(config);
    app.run().map_err(|e| {
        logger.debug("Run failed").error_info(&e).log();
        e
    })
}

fn exit_with(error: &AppError, reporter: ErrorReporter) -> ! {
    reporter.report_error(error);
    process::exit(error.exit_code());
}
