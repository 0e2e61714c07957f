//! Shell orchestration: one engine, one controller, one menu, one store.

use retronav_bookmarks::BookmarkStore;
use retronav_types::engine::{EngineEvent, WebEngine};

use crate::config::ShellConfig;
use crate::menu::{BookmarkMenu, Indicator, MenuEntry};
use crate::nav::NavigationController;

/// The assembled browser shell.
///
/// Owns the engine and all shell state; the host GUI calls the UI-facing
/// methods from its widget callbacks and [`BrowserShell::pump`] once per
/// event-loop turn. Everything runs on that single control thread.
pub struct BrowserShell<E: WebEngine> {
    engine: E,
    nav: NavigationController,
    menu: BookmarkMenu,
    store: BookmarkStore,
    home_url: String,
}

impl<E: WebEngine> BrowserShell<E> {
    /// Assemble a shell with a store opened from the configured path.
    pub fn new(engine: E, config: &ShellConfig) -> Self {
        let store = BookmarkStore::open(&config.bookmarks_path);
        Self::with_store(engine, config, store)
    }

    /// Assemble a shell around an existing store.
    pub fn with_store(engine: E, config: &ShellConfig, store: BookmarkStore) -> Self {
        Self {
            engine,
            nav: NavigationController::new(config),
            menu: BookmarkMenu::from_store(&store),
            store,
            home_url: config.home_url.clone(),
        }
    }

    /// Kick off the initial home-page navigation and set the indicator
    /// for whatever the engine currently shows.
    pub fn start(&mut self) {
        self.nav.go_to_exact(&mut self.engine, &self.home_url);
        let url = self.engine.current_url().to_string();
        self.menu.refresh_indicator(&self.store, &url);
    }

    /// Address bar submitted with `text`.
    pub fn submit_address(&mut self, text: &str) {
        self.nav.go_to(&mut self.engine, text);
    }

    pub fn back(&mut self) {
        self.nav.go_back(&mut self.engine);
    }

    pub fn forward(&mut self) {
        self.nav.go_forward(&mut self.engine);
    }

    pub fn reload(&mut self) {
        self.nav.reload(&mut self.engine);
    }

    /// The "Surprise Me" shortcut.
    pub fn surprise(&mut self) {
        self.nav.go_to_random(&mut self.engine);
    }

    /// Toggle the bookmark state of the current page.
    pub fn toggle_bookmark(&mut self) {
        let url = self.nav.current_url().to_string();
        self.menu.on_toggle_requested(&mut self.store, &url);
    }

    /// Bookmark menu entry at `index` selected. Returns whether the index
    /// resolved to an entry.
    pub fn select_bookmark(&mut self, index: usize) -> bool {
        let Some(url) = self.menu.entry_url(index).map(str::to_string) else {
            return false;
        };
        self.nav.go_to_exact(&mut self.engine, &url);
        true
    }

    /// Drain engine notifications. A `UrlChanged` always moves the
    /// current URL before the indicator is recomputed against it.
    pub fn pump(&mut self) {
        for event in self.engine.poll_events() {
            match event {
                EngineEvent::UrlChanged(url) => {
                    log::debug!("url changed: {url}");
                    self.nav.on_url_changed(&url);
                    self.menu.refresh_indicator(&self.store, &url);
                },
            }
        }
    }

    /// Text shown in the address bar.
    pub fn address(&self) -> &str {
        self.nav.current_url()
    }

    pub fn indicator(&self) -> Indicator {
        self.menu.indicator()
    }

    pub fn bookmark_entries(&self) -> &[MenuEntry] {
        self.menu.entries()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}
