//! Quotes State
//!
//! Currency rows shown by the banner. Starts with mock data; a live refresh
//! replaces it with dolarapi.com values or a single static error, which is
//! also raised as an error toast.

use crate::constants::QUOTE_FETCH_ERROR;
use crate::domain::{Quote, mock_quotes};
use crate::error::Result;
use crate::services::{QuoteClient, run_in_tokio};
use crate::states::{QuoteSettings, UIEvent};
use gpui::{Context, EventEmitter};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Loading state for the quote banner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuotesLoadState {
    /// Showing mock data, nothing requested
    #[default]
    Idle,
    /// Fetch in progress
    Loading,
    /// Live data applied
    Loaded,
    /// Fetch failed
    Error(Arc<str>),
}

impl QuotesLoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, QuotesLoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QuotesLoadState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Reduce a batch result to what the banner displays
///
/// Any failure collapses to the same static message; details only go to the log.
pub fn fetch_outcome(result: Result<Vec<Quote>>) -> std::result::Result<Vec<Quote>, Arc<str>> {
    result.map_err(|e| {
        error!(error = %e, "Failed to fetch currency quotes");
        Arc::from(QUOTE_FETCH_ERROR)
    })
}

/// Currency quotes shown by the banner
#[derive(Debug, Clone)]
pub struct QuotesState {
    quotes: Vec<Quote>,
    load_state: QuotesLoadState,
}

impl EventEmitter<UIEvent> for QuotesState {}

impl Default for QuotesState {
    fn default() -> Self {
        Self::new()
    }
}

impl QuotesState {
    pub fn new() -> Self {
        Self {
            quotes: mock_quotes(),
            load_state: QuotesLoadState::Idle,
        }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn load_state(&self) -> &QuotesLoadState {
        &self.load_state
    }

    /// Fetch live quotes when enabled, otherwise keep the mock rows
    pub fn refresh(&mut self, settings: &QuoteSettings, cx: &mut Context<Self>) {
        if !settings.live {
            debug!("Live quotes disabled, keeping mock data");
            return;
        }
        if self.load_state.is_loading() {
            return;
        }

        let client = match QuoteClient::new(settings.timeout()) {
            Ok(client) => client,
            Err(e) => {
                self.apply(fetch_outcome(Err(e)), cx);
                return;
            }
        };

        self.load_state = QuotesLoadState::Loading;
        cx.notify();

        cx.spawn(async move |this, cx| {
            let result = run_in_tokio(async move { client.fetch_all().await }).await;
            let outcome = fetch_outcome(result);
            let _ = this.update(cx, |state, cx| state.apply(outcome, cx));
        })
        .detach();
    }

    fn apply(&mut self, outcome: std::result::Result<Vec<Quote>, Arc<str>>, cx: &mut Context<Self>) {
        match outcome {
            Ok(quotes) => {
                info!(count = quotes.len(), "Currency quotes refreshed");
                self.quotes = quotes;
                self.load_state = QuotesLoadState::Loaded;
            }
            Err(message) => {
                cx.emit(UIEvent::error_toast(message.clone()));
                self.load_state = QuotesLoadState::Error(message);
            }
        }
        cx.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_starts_with_mock_quotes() {
        let state = QuotesState::new();
        assert_eq!(state.quotes().len(), 4);
        assert_eq!(state.load_state(), &QuotesLoadState::Idle);
        assert!(state.load_state().error().is_none());
    }

    #[test]
    fn test_any_failure_maps_to_static_message() {
        let outcome = fetch_outcome(Err(Error::Timeout {
            message: "https://dolarapi.com/v1/dolares/blue".to_string(),
        }));
        assert_eq!(outcome.expect_err("failed batch").as_ref(), QUOTE_FETCH_ERROR);

        let outcome = fetch_outcome(Err(Error::Invalid {
            message: "boom".to_string(),
        }));
        assert_eq!(outcome.expect_err("failed batch").as_ref(), "Failed to fetch currency data.");
    }

    #[test]
    fn test_success_passes_quotes_through() {
        let outcome = fetch_outcome(Ok(mock_quotes())).expect("ok batch");
        assert_eq!(outcome, mock_quotes());
    }

    #[test]
    fn test_error_state_accessors() {
        let state = QuotesLoadState::Error(Arc::from(QUOTE_FETCH_ERROR));
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some(QUOTE_FETCH_ERROR));
        assert!(QuotesLoadState::Loading.is_loading());
    }
}
