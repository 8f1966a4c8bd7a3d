//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "siteforge",
    bin_name = "siteforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Scaffold and validate edge deployment projects",
    long_about = "Siteforge generates the infrastructure, gateway, and \
                  configuration artifacts for an edge deployment, and checks \
                  that an existing tree still follows those conventions.",
    after_help = "EXAMPLES:\n\
        \x20 siteforge setup mysite.com \"My community site\"\n\
        \x20 siteforge check\n\
        \x20 siteforge check -v\n\
        \x20 siteforge completions bash > /usr/share/bash-completion/completions/siteforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate the project tree in the current directory.
    #[command(
        visible_alias = "validate",
        about = "Validate the project setup",
        after_help = "EXAMPLES:\n\
            \x20 siteforge check\n\
            \x20 siteforge check --fix   # reserved; reports only for now\n\n\
        Exits 0 when no validation failed; warnings alone never fail the run."
    )]
    Check(CheckArgs),

    /// Configure the project for a domain and generate all artifacts.
    #[command(
        visible_alias = "init",
        about = "Scaffold project configuration and infrastructure",
        after_help = "EXAMPLES:\n\
            \x20 siteforge setup mysite.com\n\
            \x20 siteforge setup mysite.com \"My awesome community\""
    )]
    Setup(SetupArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 siteforge completions bash > ~/.local/share/bash-completion/completions/siteforge\n\
            \x20 siteforge completions zsh  > ~/.zfunc/_siteforge\n\
            \x20 siteforge completions fish > ~/.config/fish/completions/siteforge.fish"
    )]
    Completions(CompletionsArgs),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `siteforge check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Reserved: apply suggested fixes automatically.
    ///
    /// Accepted today so scripts can opt in early; the checks only report
    /// suggested fixes as text.
    #[arg(long = "fix", help = "Reserved: apply suggested fixes (currently report-only)")]
    pub fix: bool,
}

// ── setup ─────────────────────────────────────────────────────────────────────

/// Arguments for `siteforge setup`.
#[derive(Debug, Args)]
pub struct SetupArgs {
    /// Domain the project is deployed under, e.g. `mysite.com`.
    #[arg(value_name = "DOMAIN", help = "Project domain (lowercase)")]
    pub domain: String,

    /// Short project description used in generated artifacts.
    #[arg(value_name = "DESCRIPTION", help = "Project description")]
    pub description: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `siteforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_check_command() {
        let cli = Cli::parse_from(["siteforge", "check"]);
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn check_fix_flag_is_accepted() {
        let cli = Cli::parse_from(["siteforge", "check", "--fix"]);
        if let Commands::Check(args) = cli.command {
            assert!(args.fix);
        } else {
            panic!("expected Check command");
        }
    }

    #[test]
    fn validate_alias_maps_to_check() {
        let cli = Cli::parse_from(["siteforge", "validate"]);
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn parse_setup_with_description() {
        let cli = Cli::parse_from(["siteforge", "setup", "mysite.com", "My site"]);
        if let Commands::Setup(args) = cli.command {
            assert_eq!(args.domain, "mysite.com");
            assert_eq!(args.description.as_deref(), Some("My site"));
        } else {
            panic!("expected Setup command");
        }
    }

    #[test]
    fn setup_requires_domain() {
        assert!(Cli::try_parse_from(["siteforge", "setup"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["siteforge", "--quiet", "--verbose", "check"]);
        assert!(result.is_err());
    }
}
