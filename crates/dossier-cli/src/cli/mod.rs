use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `dossier` binary.
#[derive(Debug, Parser)]
#[command(
    name = "dossier",
    version,
    about = "Dossier - ask research questions and read the generated reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend URL (overrides server.base_url)
    #[arg(short, long, global = true)]
    pub server: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            server: self.server.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::AuthCommands;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "dossier",
            "--format",
            "json",
            "--limit",
            "10",
            "--verbose",
            "history",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::History(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["dossier", "history", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["dossier", "--format", "xml", "history"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn ask_joins_question_words() {
        let cli = Cli::try_parse_from(["dossier", "ask", "can", "metformin", "help?", "--mode", "direct"])
            .expect("cli should parse");
        let Commands::Ask(args) = cli.command else {
            panic!("expected ask");
        };
        assert_eq!(args.question(), "can metformin help?");
        assert_eq!(args.mode.as_deref(), Some("direct"));
    }

    #[test]
    fn ask_requires_a_question() {
        assert!(Cli::try_parse_from(["dossier", "ask"]).is_err());
    }

    #[test]
    fn report_flags_parse() {
        let cli = Cli::try_parse_from([
            "dossier",
            "report",
            "12",
            "--no-wait",
            "--export",
            "out.md",
            "--open",
        ])
        .expect("cli should parse");
        let Commands::Report(args) = cli.command else {
            panic!("expected report");
        };
        assert_eq!(args.id, "12");
        assert!(args.no_wait);
        assert!(args.open);
        assert_eq!(args.export.as_deref(), Some(std::path::Path::new("out.md")));
    }

    #[test]
    fn auth_login_takes_email() {
        let cli = Cli::try_parse_from(["dossier", "auth", "login", "--email", "a@b.c", "--password-stdin"])
            .expect("cli should parse");
        let Commands::Auth { action: AuthCommands::Login(args) } = cli.command else {
            panic!("expected auth login");
        };
        assert_eq!(args.email, "a@b.c");
        assert!(args.password.password_stdin);
    }

    #[test]
    fn auth_register_takes_username_and_rejects_two_password_sources() {
        let cli = Cli::try_parse_from([
            "dossier", "auth", "register", "--username", "ada", "--email", "a@b.c", "--password", "pw",
        ])
        .expect("cli should parse");
        let Commands::Auth { action: AuthCommands::Register(args) } = cli.command else {
            panic!("expected auth register");
        };
        assert_eq!(args.username, "ada");
        assert_eq!(args.password.password.as_deref(), Some("pw"));

        let both = Cli::try_parse_from([
            "dossier", "auth", "register", "--username", "ada", "--email", "a@b.c",
            "--password", "pw", "--password-stdin",
        ]);
        assert!(both.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["dossier", "--server", "http://example.test", "history"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.server.as_deref(), Some("http://example.test"));
    }
}
