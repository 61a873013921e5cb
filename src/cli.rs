use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "chat-timeline",
    about = "Project chat conversation snapshots into timeline render directives"
)]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the conversation as a text timeline
    Render(SnapshotArgs),
    /// Print one row of render directives per message
    Directives(SnapshotArgs),
}

#[derive(Debug, Clone, Args)]
pub struct SnapshotArgs {
    /// Conversation snapshot (TOML)
    pub snapshot: PathBuf,

    /// Number of most recent messages to project (0 = configured window)
    #[arg(short, long, default_value_t = 0)]
    pub limit: usize,
}

impl Command {
    pub fn snapshot_args(&self) -> &SnapshotArgs {
        match self {
            Command::Render(args) | Command::Directives(args) => args,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn parses_render_command_with_defaults() {
        let cli = Cli::parse_from(["chat-timeline", "render", "chat.toml"]);

        assert!(matches!(cli.command, Command::Render(_)));
        assert_eq!(cli.command.snapshot_args().limit, 0);
        assert_eq!(
            cli.command.snapshot_args().snapshot.to_string_lossy(),
            "chat.toml"
        );
        assert!(cli.config.is_none());
    }

    #[test]
    fn parses_directives_command_with_limit_and_config() {
        let cli = Cli::parse_from([
            "chat-timeline",
            "directives",
            "chat.toml",
            "--limit",
            "20",
            "--config",
            "custom.toml",
        ]);

        assert!(matches!(cli.command, Command::Directives(_)));
        assert_eq!(cli.command.snapshot_args().limit, 20);
        assert_eq!(
            cli.config
                .as_deref()
                .map(|p| p.to_string_lossy().to_string()),
            Some("custom.toml".to_owned())
        );
    }

    #[test]
    fn rejects_missing_snapshot_path() {
        assert!(Cli::try_parse_from(["chat-timeline", "render"]).is_err());
        assert!(Cli::try_parse_from(["chat-timeline"]).is_err());
    }
}
