//! Sitekeeper CLI
//!
//! The command-line interface for keeping the homepage project cards in
//! sync with the weekly traffic ranking.

mod cli;
mod commands;
mod error;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands, DomainAction};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let config = cli.config.as_deref();

    match cli.command {
        Some(cmd) => execute_command(cmd, config),
        None => {
            // No command provided - show help hint
            println!("{} Sitekeeper CLI", "site".green().bold());
            println!();
            println!("Run {} for available commands.", "site --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, config: Option<&str>) -> Result<()> {
    match cmd {
        Commands::Update {
            document,
            feed,
            domains,
            backup_dir,
            dry_run,
            skip_publish,
        } => {
            let overrides = commands::PathOverrides {
                document,
                feed,
                domains,
                backup_dir,
            };
            commands::run_update(config, &overrides, dry_run, skip_publish)
        }
        Commands::Check { document } => commands::run_check(config, document.as_deref()),
        Commands::CollectBlogs { www_root, output } => {
            commands::run_collect_blogs(config, www_root.as_deref(), output.as_deref())
        }
        Commands::Domain { action } => match action {
            DomainAction::DisplayName { domain } => commands::run_display_name(config, &domain),
            DomainAction::Enabled { domain } => commands::run_enabled(config, &domain),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "site", &mut std::io::stdout());
            Ok(())
        }
    }
}
