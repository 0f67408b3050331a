//! The user list widget: fetch, render, report.
//!
//! The widget never touches a terminal or file directly. It is handed a
//! [`ContentSink`] for the card container and a [`StatusSink`] for the status
//! line, and the host decides what those are.

use tracing::{debug, error, info, warn};

use crate::client::UserSource;
use crate::error::Result;
use crate::render;
use crate::types::User;

pub const DEFAULT_SKELETON_COUNT: usize = 8;

pub const LOADING_MESSAGE: &str = "Loading users…";
pub const OFFLINE_MESSAGE: &str = "You are offline. Reload when back online.";
pub const ONLINE_MESSAGE: &str = "Back online. Click Reload to refresh.";

/// The container the cards are rendered into.
pub trait ContentSink {
    fn replace(&mut self, markup: &str);

    fn clear(&mut self) {
        self.replace("");
    }
}

/// The single-line status region.
pub trait StatusSink {
    fn show(&mut self, status: &Status);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub is_error: bool,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

/// What the content area currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplayState {
    #[default]
    Idle,
    Loading,
    Loaded { count: usize },
    Error { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Online,
    Offline,
}

/// Identifies one fetch. Only the most recently issued ticket may update the
/// widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

pub struct UserListWidget<C, S> {
    content: C,
    status_sink: S,
    status: Status,
    state: DisplayState,
    skeleton_count: usize,
    latest: u64,
}

impl<C: ContentSink, S: StatusSink> UserListWidget<C, S> {
    pub fn new(content: C, status_sink: S) -> Self {
        Self {
            content,
            status_sink,
            status: Status::default(),
            state: DisplayState::Idle,
            skeleton_count: DEFAULT_SKELETON_COUNT,
            latest: 0,
        }
    }

    pub fn with_skeleton_count(mut self, count: usize) -> Self {
        self.skeleton_count = count;
        self
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    #[cfg(test)]
    pub fn status_sink(&self) -> &S {
        &self.status_sink
    }

    /// Fetch from `source` and render the outcome.
    pub async fn fetch_users<U: UserSource + ?Sized>(&mut self, source: &U) {
        let ticket = self.begin_fetch();
        let result = source.fetch_users().await;
        self.complete_fetch(ticket, result);
    }

    /// Enter the loading state and hand out a ticket for the request about to
    /// be made.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest += 1;
        let ticket = FetchTicket(self.latest);

        self.set_status(Status::info(LOADING_MESSAGE));
        self.content
            .replace(&render::render_skeleton(self.skeleton_count));
        self.state = DisplayState::Loading;

        debug!(ticket = ticket.0, "fetch started");
        ticket
    }

    /// Apply the outcome of the fetch identified by `ticket`. Returns `false`
    /// if a newer fetch has been started since, in which case nothing changes.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<User>>) -> bool {
        if ticket.0 != self.latest {
            debug!(
                ticket = ticket.0,
                latest = self.latest,
                "ignoring stale fetch completion"
            );
            return false;
        }

        match result {
            Ok(users) => {
                let count = users.len();
                self.content.replace(&render::render_users(&users));
                self.set_status(Status::info(format!("Loaded {count} users.")));
                self.state = DisplayState::Loaded { count };
                info!(count, "users loaded");
            }
            Err(e) => {
                error!(error = %e, "failed to load users");
                let message = format!(
                    "Failed to load users. {e}. Check your internet and try again."
                );
                self.content.clear();
                self.set_status(Status::error(message.clone()));
                self.state = DisplayState::Error { message };
            }
        }

        true
    }

    /// Reflect a connectivity change on the status line. Content and display
    /// state are left alone and no fetch is started.
    pub fn set_connectivity(&mut self, connectivity: Connectivity) {
        match connectivity {
            Connectivity::Offline => {
                warn!("connection lost");
                self.set_status(Status::error(OFFLINE_MESSAGE));
            }
            Connectivity::Online => {
                info!("connection restored");
                self.set_status(Status::info(ONLINE_MESSAGE));
            }
        }
    }

    fn set_status(&mut self, status: Status) {
        self.status_sink.show(&status);
        self.status = status;
    }
}
