use std::io::{self, Write};

use crate::client::DEFAULT_ENDPOINT;
use crate::config::Config;
use crate::error::Result;

fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = prompt(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("userlist configuration");
    println!("======================\n");

    let endpoint = prompt(&format!("Users endpoint [{DEFAULT_ENDPOINT}]: "))?;
    let skeleton = prompt("Placeholder count while loading [8]: ")?;
    let output = prompt("Write rendered cards to file [stdout]: ")?;

    let config = Config {
        endpoint: (!endpoint.is_empty()).then_some(endpoint),
        skeleton_count: skeleton.parse().ok(),
        output: (!output.is_empty()).then(|| output.into()),
    };

    // Reject a bad endpoint before writing it.
    config.endpoint(None)?;
    config.save_to(&config_path)?;

    println!("\nConfig saved to {}", config_path.display());
    Ok(())
}
