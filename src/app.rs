//! Page controller: query input, request lifecycle, display state
//!
//! Each submission is tagged with a sequence number. Requests are never
//! cancelled; instead a response is applied only if its sequence number is
//! the most recently issued one, so the latest submission always wins and an
//! abandoned request cannot overwrite newer state.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::{
    client::RecommendProvider,
    error::AppResult,
    models::RecommendResponse,
};

/// Shown when the service answered without an `answer` field
pub const NO_ANSWER_MESSAGE: &str = "No answer received.";

/// Shown on any transport or HTTP failure; the detail is only logged
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch recommendations.";

/// What the result panel is currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    Idle,
    Loading,
    Success(String),
    Error(String),
}

/// Events delivered to the app from spawned work
#[derive(Debug)]
pub enum AppEvent {
    FetchComplete {
        seq: u64,
        result: AppResult<RecommendResponse>,
    },
}

pub struct App {
    /// Current search text; persists across submissions
    pub query: String,
    pub display: DisplayState,
    pub should_quit: bool,
    provider: Arc<dyn RecommendProvider>,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    /// Sequence number of the newest submission; older responses are stale
    latest_seq: u64,
}

impl App {
    pub fn new(
        provider: Arc<dyn RecommendProvider>,
        events_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            query: String::new(),
            display: DisplayState::Idle,
            should_quit: false,
            provider,
            events_tx,
            latest_seq: 0,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.query.pop();
            }
            KeyCode::Char(c) => self.query.push(c),
            _ => {}
        }
    }

    /// Start a recommendation request for the current query
    ///
    /// An empty or whitespace-only query is a no-op: no request goes out and
    /// whatever is displayed stays displayed.
    pub fn submit(&mut self) {
        if self.query.trim().is_empty() {
            return;
        }

        self.latest_seq += 1;
        let seq = self.latest_seq;
        self.display = DisplayState::Loading;

        let provider = Arc::clone(&self.provider);
        let question = self.query.clone();
        let events_tx = self.events_tx.clone();

        tracing::info!(query = %question, seq, "Submitting recommendation request");

        tokio::spawn(async move {
            let result = provider.recommend(&question).await;
            // Receiver gone means the app is shutting down
            let _ = events_tx.send(AppEvent::FetchComplete { seq, result });
        });
    }

    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::FetchComplete { seq, result } => {
                if seq != self.latest_seq {
                    tracing::debug!(seq, latest = self.latest_seq, "Dropping stale response");
                    return;
                }
                match result {
                    Ok(response) => {
                        let answer = response
                            .answer
                            .filter(|answer| !answer.is_empty())
                            .unwrap_or_else(|| NO_ANSWER_MESSAGE.to_string());
                        self.display = DisplayState::Success(answer);
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "Recommendation request failed");
                        self.display = DisplayState::Error(FETCH_FAILED_MESSAGE.to_string());
                    }
                }
            }
        }
    }
}
