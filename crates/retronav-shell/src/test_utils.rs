//! Shared test utilities for the shell.
//!
//! Provides a [`RecordingEngine`] that records every dispatched command
//! and completes navigations immediately, for assertions in unit tests
//! across shell modules.

use retronav_types::engine::{EngineEvent, WebEngine};

/// A recorded engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Navigate(String),
    Back,
    Forward,
    Reload,
}

/// An engine stub that records commands and acknowledges each `navigate`
/// with an immediate `UrlChanged` on the next poll.
pub struct RecordingEngine {
    pub calls: Vec<EngineCall>,
    current: String,
    pending: Vec<EngineEvent>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            current: String::new(),
            pending: Vec::new(),
        }
    }

    /// Target of the most recent `navigate` call, if any.
    pub fn last_navigation(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            EngineCall::Navigate(url) => Some(url.as_str()),
            _ => None,
        })
    }

    /// Inject an engine-originated event (redirects, history landings).
    pub fn emit(&mut self, event: EngineEvent) {
        if let EngineEvent::UrlChanged(url) = &event {
            self.current = url.clone();
        }
        self.pending.push(event);
    }
}

impl Default for RecordingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl WebEngine for RecordingEngine {
    fn navigate(&mut self, url: &str) {
        self.calls.push(EngineCall::Navigate(url.to_string()));
        self.current = url.to_string();
        self.pending.push(EngineEvent::UrlChanged(url.to_string()));
    }

    fn back(&mut self) {
        self.calls.push(EngineCall::Back);
    }

    fn forward(&mut self) {
        self.calls.push(EngineCall::Forward);
    }

    fn reload(&mut self) {
        self.calls.push(EngineCall::Reload);
    }

    fn current_url(&self) -> &str {
        &self.current
    }

    fn poll_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.pending)
    }
}
