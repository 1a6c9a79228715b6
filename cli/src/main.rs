//! # flexutils Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This file is the entry point for the `flexutils` binary, a small command
//! line front-end to the plugin tooling utilities. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up `tracing` based on verbosity flags
//! - Loading configuration and building the console logger
//! - Routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Render inline markup
//! flexutils render "Run {{npm install}} in **your project**"
//!
//! # Print a table
//! flexutils table --header name,version --row foo,1.0.0 --row bar,2.1.0
//!
//! # Run npm behind a spinner, capturing its output
//! flexutils -v spawn npm --capture -- --version
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure tracing based on verbosity level
//! 3. Load configuration and resolve logger options (flags > env > files)
//! 4. Route to the command handler
//! 5. Display any error and exit with code 1, or exit with the command's code
//!
use clap::{Parser, Subcommand};
use flexutils::{
    common::ui::logger::{Logger, LoggerOptions},
    core::config,
};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "flexutils",
    about = "Console and process utilities for plugin tooling",
    long_about = "Render inline markup, print tables, wrap text and run the JavaScript\n\
                  toolchain the same way plugin tooling does.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase internal diagnostics (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Suppress everything except errors.
    #[arg(long, global = true)]
    quiet: bool,
    /// Print debug messages.
    #[arg(long, global = true)]
    debug: bool,
    /// Print trace messages (implies --debug).
    #[arg(long, global = true)]
    trace: bool,
    /// Never emit ANSI colors.
    #[arg(long, global = true)]
    no_color: bool,
}

impl Cli {
    /// Applies the global flags on top of options resolved from env and files.
    fn logger_options(&self, base: LoggerOptions) -> LoggerOptions {
        LoggerOptions {
            quiet: if self.quiet { Some(true) } else { base.quiet },
            debug: if self.debug || self.trace {
                Some(true)
            } else {
                base.debug
            },
            trace: if self.trace { Some(true) } else { base.trace },
            color: if self.no_color { Some(false) } else { base.color },
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Log a message with inline markup rendered.
    #[command(alias = "r")]
    Render(commands::render::RenderArgs),
    /// Print rows as a table.
    #[command(alias = "t")]
    Table(commands::table::TableArgs),
    /// Print a JSON array of objects as a table.
    TableJson(commands::table::TableJsonArgs),
    /// Wrap text to a column limit.
    #[command(alias = "w")]
    Wrap(commands::wrap::WrapArgs),
    /// Run node, yarn or npm.
    #[command(alias = "s")]
    Spawn(commands::spawn::SpawnArgs),
    /// Show the detected environment flags.
    #[command(alias = "e")]
    Env(commands::env::EnvArgs),
}

fn init_tracing(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<i32> {
    let cfg = config::load_config()?;
    let options = cli.logger_options(cfg.logger.logger_options());
    let ctx = commands::Context {
        logger: Logger::new(options),
        config: cfg,
    };

    match cli.command {
        Commands::Render(args) => commands::render::handle_render(&ctx, args).map(|_| 0),
        Commands::Table(args) => commands::table::handle_table(&ctx, args).map(|_| 0),
        Commands::TableJson(args) => commands::table::handle_table_json(&ctx, args).map(|_| 0),
        Commands::Wrap(args) => commands::wrap::handle_wrap(&ctx, args).map(|_| 0),
        Commands::Spawn(args) => commands::spawn::handle_spawn(&ctx, args).await,
        Commands::Env(args) => commands::env::handle_env(&ctx, args).map(|_| 0),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    match run(cli).await {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!("Command execution failed: {:?}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
