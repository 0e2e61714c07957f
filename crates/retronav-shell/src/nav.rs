//! Navigation controller: address-bar input, engine dispatch, current URL.

use retronav_types::engine::WebEngine;

use crate::config::ShellConfig;

/// Translates user navigation input into engine commands and tracks the
/// currently displayed URL.
///
/// The current URL is updated only from engine `UrlChanged` notifications
/// (routed in via [`NavigationController::on_url_changed`]); a `go_to`
/// alone does not move it, since the engine may redirect or fail.
pub struct NavigationController {
    current_url: String,
    default_scheme: String,
    surprise_url: String,
}

impl NavigationController {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            current_url: String::new(),
            default_scheme: config.default_scheme.clone(),
            surprise_url: config.surprise_url.clone(),
        }
    }

    /// Normalize address-bar input: prepend the default scheme when the
    /// input does not already start with a recognized one. No further
    /// validation; malformed input is the engine's to report.
    pub fn normalize_input(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.starts_with("http") {
            trimmed.to_string()
        } else {
            format!("{}{}", self.default_scheme, trimmed)
        }
    }

    /// Navigate to typed address-bar input, normalizing first.
    pub fn go_to(&self, engine: &mut impl WebEngine, raw: &str) {
        let url = self.normalize_input(raw);
        log::debug!("navigate: {url}");
        engine.navigate(&url);
    }

    /// Navigate to an already-complete URL (bookmark selection path);
    /// skips normalization.
    pub fn go_to_exact(&self, engine: &mut impl WebEngine, url: &str) {
        log::debug!("navigate (exact): {url}");
        engine.navigate(url);
    }

    /// Navigate to the fixed surprise page.
    pub fn go_to_random(&self, engine: &mut impl WebEngine) {
        self.go_to_exact(engine, &self.surprise_url);
    }

    /// Pass-through history commands. No local state changes; the engine
    /// reports the outcome through its own `UrlChanged`.
    pub fn go_back(&self, engine: &mut impl WebEngine) {
        engine.back();
    }

    pub fn go_forward(&self, engine: &mut impl WebEngine) {
        engine.forward();
    }

    pub fn reload(&self, engine: &mut impl WebEngine) {
        engine.reload();
    }

    /// Record an engine-reported URL change.
    pub fn on_url_changed(&mut self, new_url: &str) {
        self.current_url = new_url.to_string();
    }

    /// The currently displayed URL (empty until the first `UrlChanged`).
    pub fn current_url(&self) -> &str {
        &self.current_url
    }
}
