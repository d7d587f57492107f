//! `foodshare` command-line tool.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use foodshare_cli::logging::{LogConfig, LogFormat, init_logging};
use foodshare_cli::settings::{Settings, load_settings};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod output;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    run_event, run_events, run_latest, run_map, run_similarity, run_stats, run_submit,
    run_validate,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let settings = settings_from_cli(&cli);

    let result = match &cli.command {
        Command::Validate(args) => run_validate(args, &settings),
        Command::Submit(args) => run_submit(args, &settings),
        Command::Events(args) => run_events(args, &settings).map(|()| true),
        Command::Event(args) => run_event(args, &settings).map(|()| true),
        Command::Latest => run_latest(&settings).map(|()| true),
        Command::Stats(args) => run_stats(args, &settings).map(|()| true),
        Command::Map(args) => run_map(args, &settings).map(|()| true),
        Command::Similarity(args) => {
            run_similarity(args, &settings);
            Ok(true)
        }
    };
    let exit_code = match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(error) => {
            tracing::error!(error = %error, "command failed");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn settings_from_cli(cli: &Cli) -> Settings {
    let mut settings = load_settings(cli.config.as_deref());
    if let Some(url) = &cli.api_url {
        settings.api.base_url.clone_from(url);
    }
    settings
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
