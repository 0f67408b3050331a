use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "userlist")]
#[command(about = "Fetch a list of users and render them as cards", version)]
#[command(after_help = "EXAMPLES:
    userlist render                   Render cards to stdout
    userlist render --out users.html  Render cards to a file
    userlist watch --out users.html   Keep the page open and reload on demand
    userlist list --format json       Print the raw user list")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Users endpoint (overrides the config file)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Only show error status messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show detailed error information and info-level logs
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch users once and render them as cards
    #[command(after_help = "EXAMPLES:
    userlist render
    userlist render --out users.html")]
    Render(RenderArgs),
    /// Render, then reload or react to connectivity changes from stdin
    #[command(after_help = "COMMANDS (one per line on stdin):
    r, reload     Fetch users again
    offline       Report that the connection was lost
    online        Report that the connection is back
    q, quit       Exit

EXAMPLES:
    userlist watch --out users.html")]
    Watch(RenderArgs),
    /// Fetch users and print them as a table or JSON
    #[command(after_help = "EXAMPLES:
    userlist list
    userlist list --format json")]
    List {
        /// Output format
        #[arg(long, short = 'o', value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    userlist completions bash > ~/.bash_completion.d/userlist
    userlist completions zsh > ~/.zfunc/_userlist")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    Init,
}

#[derive(Args)]
pub struct RenderArgs {
    /// Write the rendered container to this file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}
