use tracing::debug;

use crate::cli::RenderArgs;
use crate::client::UsersClient;
use crate::config::Config;
use crate::error::{Result, UserListError};
use crate::surface::{HtmlSurface, Target, TerminalStatus};
use crate::widget::{DisplayState, UserListWidget};

pub fn target(config: &Config, args: RenderArgs, live: bool) -> Target {
    match config.resolve_output(args.out) {
        Some(path) => Target::File(path),
        None => Target::Stdout { live },
    }
}

pub async fn run(client: &UsersClient, config: &Config, args: RenderArgs, quiet: bool) -> Result<()> {
    let target = target(config, args, false);
    debug!(output = ?target, endpoint = client.endpoint(), "rendering once");

    let mut widget = UserListWidget::new(HtmlSurface::new(target), TerminalStatus::new(quiet))
        .with_skeleton_count(config.skeleton_count());

    widget.fetch_users(client).await;
    widget.content().finish()?;
    debug!(status = %widget.status().message, "final status");

    match widget.state() {
        DisplayState::Error { message } => {
            debug!(%message, "render finished in error state");
            Err(UserListError::LoadFailed)
        }
        DisplayState::Loaded { count } => {
            debug!(count, "render finished");
            Ok(())
        }
        DisplayState::Idle | DisplayState::Loading => Ok(()),
    }
}
