use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode},
};
use std::io::{self, Write};

/// Switches `out` to the alternate screen with mouse reporting on and the
/// cursor hidden. Raw mode is enabled separately by the caller.
pub fn enter<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, EnterAlternateScreen, EnableMouseCapture, Hide)
}

/// Undoes `enter`. Safe to call after a partial `enter`.
pub fn leave<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, DisableMouseCapture, LeaveAlternateScreen, Show)
}

/// Puts the real terminal back the way it was found. Both steps are
/// always attempted; the first error is returned.
pub fn restore() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = leave(&mut io::stdout());
    raw.and(screen)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_enter_switches_screen_and_captures_mouse() {
        let out = written(|out| enter(out));
        assert!(out.contains("\x1b[?1049h"));
        assert!(out.contains("\x1b[?1000h"));
        assert!(out.contains("\x1b[?25l"));
    }

    #[test]
    fn test_leave_undoes_enter() {
        let out = written(|out| leave(out));
        assert!(out.contains("\x1b[?1049l"));
        assert!(out.contains("\x1b[?1000l"));
        assert!(out.contains("\x1b[?25h"));
    }
}
