//! Display abstraction for frame output.
//!
//! All terminal control goes through the narrow [`Display`] trait so the
//! playback loop can write to a real terminal or to an in-memory capture.

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};
use std::io::{self, BufWriter, Stdout, Write};

/// Text output with two cursor operations: full clear and home.
pub trait Display {
    /// Clear the whole screen and put the cursor in the top-left corner.
    fn clear(&mut self) -> io::Result<()>;

    /// Move the cursor to the top-left corner without clearing.
    fn home(&mut self) -> io::Result<()>;

    /// Write text at the cursor.
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    /// Push buffered output to the device.
    fn flush(&mut self) -> io::Result<()>;
}

/// Display backed by a terminal writer (normally stdout).
///
/// The cursor is hidden from the first `clear` until the display is
/// dropped, so it does not flicker across the frame while drawing.
pub struct TerminalDisplay<W: Write> {
    out: W,
    cursor_hidden: bool,
}

impl TerminalDisplay<BufWriter<Stdout>> {
    /// Buffered display on standard output.
    pub fn stdout() -> Self {
        Self::new(BufWriter::new(io::stdout()))
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            cursor_hidden: false,
        }
    }
}

impl<W: Write> Display for TerminalDisplay<W> {
    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Hide, Clear(ClearType::All), MoveTo(0, 0))?;
        self.cursor_hidden = true;
        self.out.flush()
    }

    fn home(&mut self) -> io::Result<()> {
        queue!(self.out, MoveTo(0, 0))
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> Drop for TerminalDisplay<W> {
    fn drop(&mut self) {
        if self.cursor_hidden {
            // Best-effort restore - ignore errors during drop
            let _ = execute!(self.out, Show);
        }
    }
}

/// One call made on a [`CaptureDisplay`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    Clear,
    Home,
    Text(String),
    Flush,
}

/// In-memory display that records every call, for tests and headless use.
#[derive(Debug, Default)]
pub struct CaptureDisplay {
    events: Vec<DisplayEvent>,
}

impl CaptureDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[DisplayEvent] {
        &self.events
    }

    /// All text written so far, concatenated.
    pub fn text(&self) -> String {
        self.events
            .iter()
            .filter_map(|e| match e {
                DisplayEvent::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of recorded events equal to `event`.
    pub fn count(&self, event: &DisplayEvent) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }
}

impl Display for CaptureDisplay {
    fn clear(&mut self) -> io::Result<()> {
        self.events.push(DisplayEvent::Clear);
        Ok(())
    }

    fn home(&mut self) -> io::Result<()> {
        self.events.push(DisplayEvent::Home);
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.events.push(DisplayEvent::Text(text.to_string()));
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.events.push(DisplayEvent::Flush);
        Ok(())
    }
}
