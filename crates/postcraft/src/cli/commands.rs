//! CLI command definitions.

use clap::{Parser, Subcommand};

/// Postcraft - turn a topic into a LinkedIn post, a blog article and a French translation
#[derive(Parser, Debug)]
#[command(name = "postcraft")]
#[command(about = "Turn a topic into a LinkedIn post, a blog article and a French translation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Session token (defaults to the current session)
    #[arg(short, long, global = true)]
    pub session: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List the available topics
    Topics,

    /// Select a topic by its exact title
    SelectTopic {
        /// Topic title
        title: String,
    },

    /// Generate post ideas for the selected topic
    Ideas,

    /// Select one of the generated ideas
    SelectIdea {
        /// Zero-based index shown by `ideas`
        index: usize,
    },

    /// Generate the LinkedIn post and blog article for the selected idea
    Content,

    /// Translate the generated content to French
    Translate,

    /// Show the session stage and stored artifacts
    Show,

    /// Clear generated content and translation
    Reset,

    /// Start a new session and make it current
    NewSession,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_select_topic_with_global_flags() {
        let cli = Cli::try_parse_from([
            "postcraft",
            "select-topic",
            "VPN Explained Simply",
            "--session",
            "abc",
            "-v",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Commands::SelectTopic {
                title: "VPN Explained Simply".to_string()
            }
        );
        assert_eq!(cli.session.as_deref(), Some("abc"));
        assert!(cli.verbose);
        assert!(!cli.json_logs);
    }

    #[test]
    fn test_parse_select_idea_index() {
        let cli = Cli::try_parse_from(["postcraft", "select-idea", "3"]).unwrap();
        assert_eq!(cli.command, Commands::SelectIdea { index: 3 });
        assert!(Cli::try_parse_from(["postcraft", "select-idea", "-1"]).is_err());
    }

    #[test]
    fn test_parse_new_session() {
        let cli = Cli::try_parse_from(["postcraft", "--json-logs", "new-session"]).unwrap();
        assert_eq!(cli.command, Commands::NewSession);
        assert!(cli.json_logs);
    }
}
