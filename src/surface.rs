//! Terminal and file backed UI surfaces for the CLI host.

use std::io::Write;
use std::path::PathBuf;

use colored::Colorize;
use tracing::warn;

use crate::widget::{ContentSink, Status, StatusSink};

/// Where rendered markup ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Rewritten on every update.
    File(PathBuf),
    /// Printed on every update when `live`, otherwise only on [`HtmlSurface::finish`].
    Stdout { live: bool },
}

/// The `#users` container, backed by a file or stdout.
pub struct HtmlSurface {
    target: Target,
    markup: String,
}

impl HtmlSurface {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            markup: String::new(),
        }
    }

    pub fn document(&self) -> String {
        format!("<section id=\"users\">{}</section>\n", self.markup)
    }

    /// Print the final markup for non-live stdout targets.
    pub fn finish(&self) -> std::io::Result<()> {
        if let Target::Stdout { live: false } = self.target {
            let mut out = std::io::stdout().lock();
            out.write_all(self.document().as_bytes())?;
            out.flush()?;
        }
        Ok(())
    }

    fn publish(&self) -> std::io::Result<()> {
        match &self.target {
            Target::File(path) => std::fs::write(path, self.document()),
            Target::Stdout { live: true } => {
                let mut out = std::io::stdout().lock();
                out.write_all(self.document().as_bytes())?;
                out.flush()
            }
            Target::Stdout { live: false } => Ok(()),
        }
    }
}

impl ContentSink for HtmlSurface {
    fn replace(&mut self, markup: &str) {
        self.markup = markup.to_string();
        if let Err(e) = self.publish() {
            warn!(error = %e, output = ?self.target, "failed to publish markup");
        }
    }
}

/// Status line printed to stderr.
pub struct TerminalStatus {
    quiet: bool,
}

impl TerminalStatus {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn line(status: &Status) -> String {
        if status.is_error {
            status.message.red().bold().to_string()
        } else {
            status.message.green().to_string()
        }
    }
}

impl StatusSink for TerminalStatus {
    fn show(&mut self, status: &Status) {
        if self.quiet && !status.is_error {
            return;
        }
        eprintln!("{}", Self::line(status));
    }
}
