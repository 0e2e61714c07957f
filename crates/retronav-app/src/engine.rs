//! Headless engine: a `WebEngine` that tracks history but renders nothing.
//!
//! Stands in for an embedded rendering widget so the shell can run in a
//! terminal. Navigations complete instantly; history works the usual way
//! (new navigation pushes the current page onto the back stack and clears
//! the forward stack).

use retronav_types::engine::{EngineEvent, WebEngine};

/// A non-rendering engine with back/forward stacks.
pub struct HeadlessEngine {
    back_stack: Vec<String>,
    forward_stack: Vec<String>,
    current: String,
    pending: Vec<EngineEvent>,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self {
            back_stack: Vec::new(),
            forward_stack: Vec::new(),
            current: String::new(),
            pending: Vec::new(),
        }
    }
}

impl Default for HeadlessEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl WebEngine for HeadlessEngine {
    fn navigate(&mut self, url: &str) {
        if !self.current.is_empty() {
            self.back_stack.push(std::mem::take(&mut self.current));
        }
        self.forward_stack.clear();
        self.current = url.to_string();
        self.pending.push(EngineEvent::UrlChanged(url.to_string()));
    }

    fn back(&mut self) {
        let Some(prev) = self.back_stack.pop() else {
            return;
        };
        let displaced = std::mem::replace(&mut self.current, prev.clone());
        self.forward_stack.push(displaced);
        self.pending.push(EngineEvent::UrlChanged(prev));
    }

    fn forward(&mut self) {
        let Some(next) = self.forward_stack.pop() else {
            return;
        };
        let displaced = std::mem::replace(&mut self.current, next.clone());
        self.back_stack.push(displaced);
        self.pending.push(EngineEvent::UrlChanged(next));
    }

    fn reload(&mut self) {
        if !self.current.is_empty() {
            self.pending.push(EngineEvent::UrlChanged(self.current.clone()));
        }
    }

    fn current_url(&self) -> &str {
        &self.current
    }

    fn poll_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.pending)
    }
}
