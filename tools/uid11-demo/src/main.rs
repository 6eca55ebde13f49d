//! uid11-demo
//!
//! Small driver around the `uid11` library: generates random, time+random
//! and sequential identifiers, decodes them, and walks identifier prefixes.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

mod commands;
mod config;
mod output;

use commands::Cli;
use config::Config;

fn init_tracing(config: &Config) {
    // prefer RUST_LOG, fall back to the configured level
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let fmt_layer = if config.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let config = Config::from_env().with_overrides(cli.log_level.clone(), cli.log_json);
    init_tracing(&config);

    if let Err(e) = cli.run() {
        output::print_error(&e);
        std::process::exit(1);
    }
}
