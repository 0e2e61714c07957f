//! RetroNav browser shell.
//!
//! Everything here is wiring: the navigation controller translates user
//! input into engine commands, the bookmark menu mirrors the bookmark
//! store into a selectable list with a toggle indicator, and
//! [`shell::BrowserShell`] ties both to a [`retronav_types::engine::WebEngine`]
//! behind a single event pump. Rendering, networking, and parsing all
//! live on the far side of the engine seam.

pub mod config;
pub mod menu;
pub mod nav;
pub mod shell;
pub mod test_utils;

pub use config::ShellConfig;
pub use menu::{BookmarkMenu, Indicator, MenuEntry};
pub use nav::NavigationController;
pub use shell::BrowserShell;
