//! Interactive command dispatch for the headless shell.

use retronav_shell::{BrowserShell, Indicator};
use retronav_types::engine::WebEngine;

/// Outcome of dispatching one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    Quit,
}

/// Print the address line with the bookmark indicator.
pub fn print_status<E: WebEngine>(shell: &BrowserShell<E>) {
    let marker = match shell.indicator() {
        Indicator::Bookmarked => "*",
        Indicator::Default => " ",
    };
    println!("[{marker}] {}", shell.address());
}

fn print_bookmarks<E: WebEngine>(shell: &BrowserShell<E>) {
    let entries = shell.bookmark_entries();
    if entries.is_empty() {
        println!("(no bookmarks)");
        return;
    }
    for (i, entry) in entries.iter().enumerate() {
        println!("{i}: {}", entry.url);
    }
}

fn print_help() {
    println!(
        "Commands:\n\
         \x20 open <url>   navigate (scheme added if missing)\n\
         \x20 back         go back\n\
         \x20 forward      go forward\n\
         \x20 reload       reload current page\n\
         \x20 surprise     go to the surprise page\n\
         \x20 mark         toggle bookmark for current page\n\
         \x20 bookmarks    list bookmarks\n\
         \x20 goto <n>     open bookmark n\n\
         \x20 url          print current address\n\
         \x20 quit         exit"
    );
}

/// Dispatch one input line against the shell, pump the engine, and report
/// the resulting state.
pub fn dispatch<E: WebEngine>(shell: &mut BrowserShell<E>, line: &str) -> CommandResult {
    let mut parts = line.split_whitespace();
    let Some(cmd) = parts.next() else {
        return CommandResult::Continue;
    };
    let arg = parts.next();

    match cmd {
        "open" => match arg {
            Some(url) => shell.submit_address(url),
            None => println!("Usage: open <url>"),
        },
        "back" => shell.back(),
        "forward" => shell.forward(),
        "reload" => shell.reload(),
        "surprise" => shell.surprise(),
        "mark" => shell.toggle_bookmark(),
        "bookmarks" => {
            print_bookmarks(shell);
            return CommandResult::Continue;
        },
        "goto" => match arg.and_then(|n| n.parse::<usize>().ok()) {
            Some(index) => {
                if !shell.select_bookmark(index) {
                    println!("no bookmark {index}");
                }
            },
            None => println!("Usage: goto <n>"),
        },
        "url" => {
            print_status(shell);
            return CommandResult::Continue;
        },
        "help" => {
            print_help();
            return CommandResult::Continue;
        },
        "quit" | "exit" => return CommandResult::Quit,
        other => {
            println!("unknown command: {other} (try 'help')");
            return CommandResult::Continue;
        },
    }

    shell.pump();
    print_status(shell);
    CommandResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::HeadlessEngine;
    use retronav_bookmarks::BookmarkStore;
    use retronav_shell::ShellConfig;

    fn shell() -> BrowserShell<HeadlessEngine> {
        BrowserShell::with_store(
            HeadlessEngine::new(),
            &ShellConfig::default(),
            BookmarkStore::ephemeral(),
        )
    }

    #[test]
    fn open_normalizes_and_navigates() {
        let mut shell = shell();
        dispatch(&mut shell, "open wiby.org");
        assert_eq!(shell.address(), "http://wiby.org");
    }

    #[test]
    fn mark_then_goto_round_trip() {
        let mut shell = shell();
        dispatch(&mut shell, "open https://a.com");
        dispatch(&mut shell, "mark");
        assert_eq!(shell.indicator(), Indicator::Bookmarked);

        dispatch(&mut shell, "open https://b.com");
        assert_eq!(shell.indicator(), Indicator::Default);

        dispatch(&mut shell, "goto 0");
        assert_eq!(shell.address(), "https://a.com");
        assert_eq!(shell.indicator(), Indicator::Bookmarked);
    }

    #[test]
    fn back_and_forward_traverse_history() {
        let mut shell = shell();
        dispatch(&mut shell, "open https://a.com");
        dispatch(&mut shell, "open https://b.com");
        dispatch(&mut shell, "back");
        assert_eq!(shell.address(), "https://a.com");
        dispatch(&mut shell, "forward");
        assert_eq!(shell.address(), "https://b.com");
    }

    #[test]
    fn surprise_goes_to_the_fixed_page() {
        let mut shell = shell();
        dispatch(&mut shell, "surprise");
        assert_eq!(shell.address(), "https://wiby.me/surprise/");
    }

    #[test]
    fn quit_and_blank_lines() {
        let mut shell = shell();
        assert_eq!(dispatch(&mut shell, "quit"), CommandResult::Quit);
        assert_eq!(dispatch(&mut shell, "exit"), CommandResult::Quit);
        assert_eq!(dispatch(&mut shell, "   "), CommandResult::Continue);
        assert_eq!(dispatch(&mut shell, "bogus"), CommandResult::Continue);
    }
}
