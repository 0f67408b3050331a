mod cli;
mod client;
mod commands;
mod config;
mod error;
mod logging;
mod render;
mod surface;
mod types;
mod widget;

use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use cli::{Cli, Commands};
use client::UsersClient;
use config::Config;
use error::Result;
use std::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = std::error::Error::source(cause);
            }
        }

        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        // Commands that don't require config/client
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "userlist", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run()?;
        }
        // Commands that require config and client
        command => {
            let config = Config::load()?;
            let client = UsersClient::new(config.endpoint(cli.endpoint.as_deref())?);

            match command {
                Commands::Render(args) => {
                    commands::render::run(&client, &config, args, cli.quiet).await?;
                }
                Commands::Watch(args) => {
                    commands::watch::run(&client, &config, args, cli.quiet).await?;
                }
                Commands::List { format } => {
                    commands::list::list(&client, format).await?;
                }
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
