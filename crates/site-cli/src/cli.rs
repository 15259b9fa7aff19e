//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Sitekeeper - keep the homepage project cards in sync with traffic
#[derive(Parser, Debug)]
#[command(name = "site")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (defaults to site.toml in the working directory)
    #[arg(short, long, global = true, env = "SITE_CONFIG")]
    pub config: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Update the homepage project cards from the ranking feed
    ///
    /// Loads the feed and domain config, rewrites the card region in
    /// memory, snapshots the document, writes it, and publishes.
    ///
    /// Examples:
    ///   site update                  # Full pipeline with site.toml
    ///   site update --dry-run        # Show the diff, touch nothing
    ///   site update --skip-publish   # Local write only
    Update {
        /// Homepage document to patch (overrides the settings file)
        #[arg(long)]
        document: Option<String>,

        /// Ranking feed JSON (overrides the settings file)
        #[arg(long)]
        feed: Option<String>,

        /// Domain presentation config JSON (overrides the settings file)
        #[arg(long)]
        domains: Option<String>,

        /// Snapshot directory (overrides the settings file)
        #[arg(long)]
        backup_dir: Option<String>,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,

        /// Skip the remote publish step
        #[arg(long)]
        skip_publish: bool,
    },

    /// Check homepage document health without changing anything
    Check {
        /// Homepage document to inspect (overrides the settings file)
        #[arg(long)]
        document: Option<String>,
    },

    /// Collect blog article metadata into blog_data.json
    CollectBlogs {
        /// Site tree to scan (overrides the settings file)
        #[arg(long)]
        www_root: Option<String>,

        /// Output JSON file (overrides the settings file)
        #[arg(long)]
        output: Option<String>,
    },

    /// Query the domain presentation config
    Domain {
        /// Query to perform
        #[command(subcommand)]
        action: DomainAction,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   site completions bash > ~/.local/share/bash-completion/completions/site
    ///   site completions zsh > ~/.zfunc/_site
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Domain config queries, shaped for use from shell scripts.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum DomainAction {
    /// Print the display label for a domain
    DisplayName {
        /// Domain to look up
        domain: String,
    },

    /// Print true/false for whether a domain is enabled
    Enabled {
        /// Domain to look up
        domain: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        // Verify the CLI is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from::<[&str; 0], &str>([]);
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_verbose_flag() {
        let cli = Cli::parse_from(["site", "--verbose"]);
        assert!(cli.verbose);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_global_config_after_subcommand() {
        let cli = Cli::parse_from(["site", "update", "--config", "alt.toml"]);
        assert_eq!(cli.config.as_deref(), Some("alt.toml"));
    }

    #[test]
    fn parse_update_defaults() {
        let cli = Cli::parse_from(["site", "update"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Update {
                document: None,
                feed: None,
                dry_run: false,
                skip_publish: false,
                ..
            })
        ));
    }

    #[test]
    fn parse_update_with_overrides() {
        let cli = Cli::parse_from([
            "site",
            "update",
            "--document",
            "www/index.html",
            "--backup-dir",
            "snapshots",
            "--dry-run",
            "--skip-publish",
        ]);
        match cli.command {
            Some(Commands::Update {
                document,
                backup_dir,
                dry_run,
                skip_publish,
                ..
            }) => {
                assert_eq!(document.as_deref(), Some("www/index.html"));
                assert_eq!(backup_dir.as_deref(), Some("snapshots"));
                assert!(dry_run);
                assert!(skip_publish);
            }
            other => panic!("Expected Update command, got {other:?}"),
        }
    }

    #[test]
    fn parse_check_command() {
        let cli = Cli::parse_from(["site", "check", "--document", "index.html"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Check { document: Some(d) }) if d == "index.html"
        ));
    }

    #[test]
    fn parse_collect_blogs_command() {
        let cli = Cli::parse_from(["site", "collect-blogs", "--www-root", "www"]);
        assert!(matches!(
            cli.command,
            Some(Commands::CollectBlogs { www_root: Some(r), output: None }) if r == "www"
        ));
    }

    #[test]
    fn parse_domain_display_name() {
        let cli = Cli::parse_from(["site", "domain", "display-name", "pdf.nimblekit.io"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Domain {
                action: DomainAction::DisplayName { domain }
            }) if domain == "pdf.nimblekit.io"
        ));
    }

    #[test]
    fn parse_domain_enabled() {
        let cli = Cli::parse_from(["site", "domain", "enabled", "qr.nimblekit.io"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Domain {
                action: DomainAction::Enabled { domain }
            }) if domain == "qr.nimblekit.io"
        ));
    }

    #[test]
    fn parse_completions_command() {
        let cli = Cli::parse_from(["site", "completions", "bash"]);
        assert!(matches!(cli.command, Some(Commands::Completions { .. })));
    }
}
