//! The rendering-engine seam.
//!
//! RetroNav does no rendering, networking, or parsing of its own; all of
//! that lives behind [`WebEngine`], implemented by whatever embedded
//! engine the host wires in. The shell only dispatches commands to it and
//! drains its notifications once per event-loop turn.

/// A notification emitted by the rendering engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The displayed URL changed (navigation completed, redirect landed,
    /// or history traversal finished).
    UrlChanged(String),
}

/// Abstraction over an embedded web-rendering engine.
///
/// The engine may complete navigations asynchronously; completion is
/// observed only through [`WebEngine::poll_events`]. The shell places no
/// ordering requirement on when a `UrlChanged` arrives relative to a
/// `navigate` call.
pub trait WebEngine {
    /// Load the given URL. The string is passed through untouched;
    /// malformed input is the engine's problem to surface.
    fn navigate(&mut self, url: &str);

    /// Go back one step in the engine's history, if possible.
    fn back(&mut self);

    /// Go forward one step in the engine's history, if possible.
    fn forward(&mut self);

    /// Reload the current page.
    fn reload(&mut self);

    /// The URL the engine currently displays.
    fn current_url(&self) -> &str;

    /// Drain pending notifications, oldest first.
    fn poll_events(&mut self) -> Vec<EngineEvent>;
}
