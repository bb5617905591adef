//! Terminal utilities for title setting and output management

use std::io::{self, Write};

/// Sets the terminal title to the specified text
pub fn set_terminal_title(title: &str) {
    // ANSI escape sequence to set terminal title
    print!("\x1b]0;{}\x07", title);
}

/// Sets the terminal title and ensures it's flushed to the terminal
pub fn set_terminal_title_and_flush(title: &str) -> io::Result<()> {
    set_terminal_title(title);
    io::stdout().flush()
}

/// Clears the screen and draws `frame` from the top-left corner
pub fn redraw(frame: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "\x1b[2J\x1b[H{frame}")?;
    stdout.flush()
}
