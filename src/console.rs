//! Console capability for ANSI output
//!
//! On Windows the console only interprets escape sequences once virtual
//! terminal processing is switched on. [`AnsiConsole::acquire`] makes that
//! call; elsewhere it is a no-op.

/// Line ending the console expects between lines of terminal output
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Outcome of enabling ANSI processing on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiConsole {
    /// Escape sequences will be interpreted
    Enabled,
    /// The platform refused; output is written anyway on a best-effort basis
    Unavailable { code: Option<i32> },
}

impl AnsiConsole {
    /// Switches the console into ANSI mode
    ///
    /// Never fails; a refusal is recorded with the OS error code.
    pub fn acquire() -> Self {
        match enable_virtual_terminal() {
            Ok(()) => AnsiConsole::Enabled,
            Err(err) => AnsiConsole::Unavailable {
                code: err.raw_os_error(),
            },
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, AnsiConsole::Enabled)
    }
}

#[cfg(windows)]
fn enable_virtual_terminal() -> std::io::Result<()> {
    let mut console = winapi_util::console::Console::stdout()?;
    console.set_virtual_terminal_processing(true)
}

#[cfg(not(windows))]
fn enable_virtual_terminal() -> std::io::Result<()> {
    Ok(())
}

/// Rewrites `\n` (and existing `\r\n`) line breaks to `line_ending`
pub fn normalize_newlines(text: &str, line_ending: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 16);
    let mut lines = text.split('\n').peekable();
    while let Some(line) = lines.next() {
        out.push_str(line.strip_suffix('\r').unwrap_or(line));
        if lines.peek().is_some() {
            out.push_str(line_ending);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_to_crlf() {
        assert_eq!(normalize_newlines("a\nb\n", "\r\n"), "a\r\nb\r\n");
    }

    #[test]
    fn test_normalize_does_not_double_carriage_returns() {
        assert_eq!(normalize_newlines("a\r\nb\nc", "\r\n"), "a\r\nb\r\nc");
    }

    #[test]
    fn test_normalize_to_lf() {
        assert_eq!(normalize_newlines("a\r\nb\n", "\n"), "a\nb\n");
    }

    #[test]
    fn test_normalize_keeps_text_without_newlines() {
        assert_eq!(normalize_newlines("\x1b[0mabc", "\r\n"), "\x1b[0mabc");
        assert_eq!(normalize_newlines("", "\r\n"), "");
    }

    #[cfg(not(windows))]
    #[test]
    fn test_acquire_is_enabled_off_windows() {
        assert_eq!(AnsiConsole::acquire(), AnsiConsole::Enabled);
        assert!(AnsiConsole::acquire().is_enabled());
    }
}
