use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing::{debug, error};

use crate::cli::RenderArgs;
use crate::client::{UserSource, UsersClient};
use crate::config::Config;
use crate::error::Result;
use crate::surface::{HtmlSurface, TerminalStatus};
use crate::types::User;
use crate::widget::{Connectivity, ContentSink, FetchTicket, StatusSink, UserListWidget};

use super::render::target;

/// Something the user typed on stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Reload,
    Connectivity(Connectivity),
    Quit,
}

pub fn parse_event(line: &str) -> Option<HostEvent> {
    match line.trim().to_ascii_lowercase().as_str() {
        "r" | "reload" => Some(HostEvent::Reload),
        "offline" => Some(HostEvent::Connectivity(Connectivity::Offline)),
        "online" => Some(HostEvent::Connectivity(Connectivity::Online)),
        "q" | "quit" | "exit" => Some(HostEvent::Quit),
        _ => None,
    }
}

type Completion = (FetchTicket, Result<Vec<User>>);

fn spawn_fetch<C, S, U>(
    widget: &mut UserListWidget<C, S>,
    inflight: &mut JoinSet<Completion>,
    source: &U,
) where
    C: ContentSink,
    S: StatusSink,
    U: UserSource + Clone + Send + Sync + 'static,
{
    let ticket = widget.begin_fetch();
    let source = source.clone();
    inflight.spawn(async move { (ticket, source.fetch_users().await) });
}

pub async fn run(client: &UsersClient, config: &Config, args: RenderArgs, quiet: bool) -> Result<()> {
    let mut widget = UserListWidget::new(
        HtmlSurface::new(target(config, args, true)),
        TerminalStatus::new(quiet),
    )
    .with_skeleton_count(config.skeleton_count());

    let input = BufReader::new(tokio::io::stdin());
    event_loop(&mut widget, client, input).await
}

/// Page-load fetch, then react to commands read from `input`.
///
/// End of input stops reading but in-flight fetches still land before the
/// loop returns. `quit` returns immediately.
pub async fn event_loop<C, S, U, R>(
    widget: &mut UserListWidget<C, S>,
    source: &U,
    input: R,
) -> Result<()>
where
    C: ContentSink,
    S: StatusSink,
    U: UserSource + Clone + Send + Sync + 'static,
    R: AsyncBufRead + Unpin,
{
    let mut inflight = JoinSet::new();
    spawn_fetch(widget, &mut inflight, source);

    let mut lines = input.lines();
    let mut input_open = true;

    while input_open || !inflight.is_empty() {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    debug!(pending = inflight.len(), "input closed");
                    input_open = false;
                    continue;
                };
                match parse_event(&line) {
                    Some(HostEvent::Reload) => spawn_fetch(widget, &mut inflight, source),
                    Some(HostEvent::Connectivity(c)) => widget.set_connectivity(c),
                    Some(HostEvent::Quit) => break,
                    None if line.trim().is_empty() => {}
                    None => eprintln!("Unknown command: {} (try reload, offline, online, quit)", line.trim()),
                }
            }
            Some(joined) = inflight.join_next() => match joined {
                Ok((ticket, result)) => {
                    widget.complete_fetch(ticket, result);
                }
                Err(e) => error!(error = %e, "fetch task failed"),
            },
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::error::UserListError;
    use crate::surface::Target;
    use crate::widget::DisplayState;

    /// Answers after yielding to the scheduler a few times, so the input
    /// side of the loop always gets there first.
    #[derive(Clone, Default)]
    struct SlowSource {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl UserSource for SlowSource {
        async fn fetch_users(&self) -> Result<Vec<User>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            for _ in 0..5 {
                tokio::task::yield_now().await;
            }
            if self.fail {
                return Err(UserListError::Api {
                    status: 500,
                    reason: "Internal Server Error".to_string(),
                });
            }
            Ok(vec![User::default(); call])
        }
    }

    fn widget() -> UserListWidget<HtmlSurface, TerminalStatus> {
        UserListWidget::new(
            HtmlSurface::new(Target::Stdout { live: false }),
            TerminalStatus::new(true),
        )
    }

    #[tokio::test]
    async fn test_closed_input_waits_for_page_load() {
        let mut w = widget();
        event_loop(&mut w, &SlowSource::default(), BufReader::new(&b""[..]))
            .await
            .unwrap();

        assert_eq!(w.state(), &DisplayState::Loaded { count: 1 });
        assert_eq!(w.status().message, "Loaded 1 users.");
        assert!(!w.content().document().contains("skeleton"));
    }

    #[tokio::test]
    async fn test_closed_input_waits_for_failed_page_load() {
        let mut w = widget();
        let source = SlowSource {
            fail: true,
            ..SlowSource::default()
        };
        event_loop(&mut w, &source, BufReader::new(&b""[..]))
            .await
            .unwrap();

        assert!(matches!(w.state(), DisplayState::Error { .. }));
        assert!(w.status().is_error);
        assert_eq!(w.content().document(), "<section id=\"users\"></section>\n");
    }

    #[tokio::test]
    async fn test_reload_then_eof_settles_on_latest() {
        let mut w = widget();
        let source = SlowSource::default();
        event_loop(&mut w, &source, BufReader::new(&b"reload\noffline\n"[..]))
            .await
            .unwrap();

        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
        let DisplayState::Loaded { count } = *w.state() else {
            panic!("expected loaded, got {:?}", w.state());
        };
        assert_eq!(w.status(), &crate::widget::Status::info(format!("Loaded {count} users.")));
    }

    #[tokio::test]
    async fn test_quit_returns_without_waiting() {
        let mut w = widget();
        event_loop(&mut w, &SlowSource::default(), BufReader::new(&b"quit\n"[..]))
            .await
            .unwrap();

        assert_eq!(w.state(), &DisplayState::Loading);
    }

    #[test]
    fn test_parse_event() {
        assert_eq!(parse_event("r"), Some(HostEvent::Reload));
        assert_eq!(parse_event("  Reload \n"), Some(HostEvent::Reload));
        assert_eq!(
            parse_event("offline"),
            Some(HostEvent::Connectivity(Connectivity::Offline))
        );
        assert_eq!(
            parse_event("ONLINE"),
            Some(HostEvent::Connectivity(Connectivity::Online))
        );
        assert_eq!(parse_event("q"), Some(HostEvent::Quit));
        assert_eq!(parse_event("refresh"), None);
        assert_eq!(parse_event(""), None);
    }
}
