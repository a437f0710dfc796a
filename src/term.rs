//! Full-screen drawing for the game panels.

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};

/// The alternate screen in raw mode. Repaints only when the panel text changes,
/// and hands the terminal back when dropped.
pub struct Screen<W: Write = Stdout>
{
    out: W,
    last_frame: Option<Vec<String>>,
    raw: bool,
}

impl Screen<Stdout>
{
    pub fn enter() -> io::Result<Self>
    {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        let mut screen = Self::new(out);
        screen.raw = true;
        Ok(screen)
    }
}

impl<W: Write> Screen<W>
{
    fn new(out: W) -> Self
    {
        Self {
            out,
            last_frame: None,
            raw: false,
        }
    }

    /// Paints `lines`; returns false when the frame matched the one on screen.
    pub fn draw(&mut self, lines: &[String]) -> io::Result<bool>
    {
        if self.last_frame.as_deref() == Some(lines) {
            return Ok(false);
        }
        draw_lines(&mut self.out, lines)?;
        self.last_frame = Some(lines.to_vec());
        Ok(true)
    }

    /// Forces the next `draw` to repaint, e.g. after a resize.
    pub fn invalidate(&mut self)
    {
        self.last_frame = None;
    }
}

impl<W: Write> Drop for Screen<W>
{
    fn drop(&mut self)
    {
        if !self.raw {
            return;
        }
        if let Err(err) = execute!(self.out, Show, LeaveAlternateScreen) {
            tracing::warn!(%err, "failed to leave alternate screen");
        }
        if let Err(err) = terminal::disable_raw_mode() {
            tracing::warn!(%err, "failed to leave raw mode");
        }
    }
}

/// Clears the screen and writes `lines` from the top. Raw mode needs explicit `\r\n`.
pub fn draw_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()>
{
    let output = format!("{}\r\n", lines.join("\r\n"));
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    out.write_all(output.as_bytes())?;
    out.flush()
}
