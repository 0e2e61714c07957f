//! Bookmark-menu presenter: the selectable bookmark list and the toggle
//! indicator shown on the bookmark control.

use retronav_bookmarks::BookmarkStore;

/// Visual state of the bookmark toggle control. Strictly binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Current page is not bookmarked.
    Default,
    /// Current page is bookmarked.
    Bookmarked,
}

/// One selectable menu item per bookmarked URL.
///
/// Each entry owns its URL value, captured when the entry is built; the
/// menu never hands out references into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub url: String,
}

/// Presenter for the bookmark dropdown and toggle indicator.
///
/// The entry list is rebuilt wholesale from the store after every store
/// mutation, keeping it in 1:1 correspondence with the bookmark list.
pub struct BookmarkMenu {
    entries: Vec<MenuEntry>,
    indicator: Indicator,
}

impl BookmarkMenu {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            indicator: Indicator::Default,
        }
    }

    /// Build a menu already populated from `store`.
    pub fn from_store(store: &BookmarkStore) -> Self {
        let mut menu = Self::new();
        menu.rebuild(store);
        menu
    }

    /// Rebuild the entry list to match the store exactly.
    pub fn rebuild(&mut self, store: &BookmarkStore) {
        self.entries = store
            .urls()
            .iter()
            .map(|url| MenuEntry { url: url.clone() })
            .collect();
    }

    /// Recompute the indicator for `url` against the store.
    pub fn refresh_indicator(&mut self, store: &BookmarkStore, url: &str) {
        self.indicator = if store.contains(url) {
            Indicator::Bookmarked
        } else {
            Indicator::Default
        };
    }

    /// Toggle `url` in the store, then resynchronize entries and
    /// indicator. An empty URL is a no-op (nothing loaded yet).
    pub fn on_toggle_requested(&mut self, store: &mut BookmarkStore, url: &str) {
        if url.is_empty() {
            return;
        }
        let bookmarked = store.toggle(url);
        log::debug!(
            "bookmark {}: {url}",
            if bookmarked { "added" } else { "removed" }
        );
        self.rebuild(store);
        self.refresh_indicator(store, url);
    }

    /// URL of the entry at `index`, if any.
    pub fn entry_url(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.url.as_str())
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }
}

impl Default for BookmarkMenu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_on_empty_list_bookmarks_and_lights_indicator() {
        let mut store = BookmarkStore::ephemeral();
        let mut menu = BookmarkMenu::new();

        menu.on_toggle_requested(&mut store, "https://wiby.org");

        assert_eq!(store.urls(), ["https://wiby.org"]);
        assert_eq!(menu.indicator(), Indicator::Bookmarked);
        assert_eq!(menu.entry_url(0), Some("https://wiby.org"));
    }

    #[test]
    fn second_toggle_removes_and_resets_indicator() {
        let mut store = BookmarkStore::ephemeral();
        let mut menu = BookmarkMenu::new();

        menu.on_toggle_requested(&mut store, "https://wiby.org");
        menu.on_toggle_requested(&mut store, "https://wiby.org");

        assert!(store.is_empty());
        assert!(menu.entries().is_empty());
        assert_eq!(menu.indicator(), Indicator::Default);
    }

    #[test]
    fn entries_track_store_one_to_one() {
        let mut store = BookmarkStore::ephemeral();
        store.add("https://a.com");
        store.add("https://b.com");
        let mut menu = BookmarkMenu::from_store(&store);
        assert_eq!(menu.entries().len(), 2);

        menu.on_toggle_requested(&mut store, "https://a.com");
        assert_eq!(store.urls(), ["https://b.com"]);
        assert_eq!(menu.entries().len(), 1);
        assert_eq!(menu.entry_url(0), Some("https://b.com"));
    }

    #[test]
    fn empty_url_toggle_is_a_no_op() {
        let mut store = BookmarkStore::ephemeral();
        let mut menu = BookmarkMenu::new();

        menu.on_toggle_requested(&mut store, "");

        assert!(store.is_empty());
        assert!(menu.entries().is_empty());
        assert_eq!(menu.indicator(), Indicator::Default);
    }

    #[test]
    fn indicator_reflects_membership_of_the_given_url() {
        let mut store = BookmarkStore::ephemeral();
        store.add("https://b.com");
        let mut menu = BookmarkMenu::from_store(&store);

        menu.refresh_indicator(&store, "https://b.com");
        assert_eq!(menu.indicator(), Indicator::Bookmarked);

        menu.refresh_indicator(&store, "https://a.com");
        assert_eq!(menu.indicator(), Indicator::Default);
    }

    #[test]
    fn entry_url_out_of_range_is_none() {
        let menu = BookmarkMenu::new();
        assert_eq!(menu.entry_url(0), None);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn arb_urls() -> impl Strategy<Value = Vec<String>> {
            proptest::collection::vec(
                "[a-z]{3,10}".prop_map(|s| format!("https://{s}.com")),
                0..15,
            )
        }

        proptest! {
            #[test]
            fn entries_always_mirror_the_store(urls in arb_urls()) {
                let mut store = BookmarkStore::ephemeral();
                let mut menu = BookmarkMenu::new();
                for url in &urls {
                    menu.on_toggle_requested(&mut store, url);
                    let entry_urls: Vec<&str> =
                        menu.entries().iter().map(|e| e.url.as_str()).collect();
                    let store_urls: Vec<&str> =
                        store.urls().iter().map(String::as_str).collect();
                    prop_assert_eq!(entry_urls, store_urls);
                }
            }

            #[test]
            fn indicator_matches_store_membership(urls in arb_urls()) {
                let mut store = BookmarkStore::ephemeral();
                let mut menu = BookmarkMenu::new();
                for url in &urls {
                    menu.on_toggle_requested(&mut store, url);
                    let expected = if store.contains(url) {
                        Indicator::Bookmarked
                    } else {
                        Indicator::Default
                    };
                    prop_assert_eq!(menu.indicator(), expected);
                }
            }
        }
    }
}
