//! Thin crossterm layer: raw mode, key reading, and menu drawing.

use crate::menu::{Key, Menu};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use std::io::{self, Write};
use std::time::Duration;

/// How presenters decorate their output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    /// Pause after each listed line.
    pub delay: Duration,
    pub color: bool,
    /// Clear the screen before a final result.
    pub clear_screen: bool,
}

impl Presentation {
    /// Undecorated output for pipes and tests.
    pub fn plain(delay: Duration) -> Self {
        Self {
            delay,
            color: false,
            clear_screen: false,
        }
    }

    /// Print a notice on its own line, dark red when colors are on.
    pub fn notice<W: Write>(&self, out: &mut W, msg: &str) -> io::Result<()> {
        print_colored(out, Color::DarkRed, msg, self.color)
    }

    /// Clear the screen if this presentation asks for it.
    pub fn begin_result<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.clear_screen {
            clear(out)?;
        }
        Ok(())
    }
}

/// Keeps the terminal in raw mode until dropped.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Stdout writer for raw mode, where a bare `\n` does not return the carriage.
pub struct TermOut<W: Write> {
    inner: W,
}

impl<W: Write> TermOut<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for TermOut<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for chunk in buf.split_inclusive(|b| *b == b'\n') {
            match chunk.split_last() {
                Some((b'\n', line)) => {
                    self.inner.write_all(line)?;
                    self.inner.write_all(b"\r\n")?;
                }
                _ => self.inner.write_all(chunk)?,
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

pub fn key_from_event(ev: &KeyEvent) -> Option<Key> {
    if ev.kind != KeyEventKind::Press {
        return None;
    }
    if ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Key::Interrupt);
    }
    Some(match ev.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        _ => Key::Other,
    })
}

/// Block until the next key press.
pub fn read_key() -> io::Result<Key> {
    loop {
        if let Event::Key(k) = event::read()? {
            if let Some(key) = key_from_event(&k) {
                return Ok(key);
            }
        }
    }
}

/// Wait up to `timeout` for a key press.
pub fn poll_key(timeout: Duration) -> io::Result<Option<Key>> {
    if event::poll(timeout)? {
        if let Event::Key(k) = event::read()? {
            return Ok(key_from_event(&k));
        }
    }
    Ok(None)
}

pub fn clear<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
}

/// Print `msg` on its own line in `color`.
pub fn print_colored<W: Write>(
    out: &mut W,
    color: Color,
    msg: &str,
    use_color: bool,
) -> io::Result<()> {
    if use_color {
        queue!(out, SetForegroundColor(color))?;
    }
    writeln!(out, "{}", msg)?;
    if use_color {
        queue!(out, ResetColor)?;
    }
    out.flush()
}

/// Draw the menu, highlighting the selected entry black on white.
pub fn render_menu<W: Write>(out: &mut W, menu: &Menu, use_color: bool) -> io::Result<()> {
    for (label, selected) in menu.entries() {
        if selected && use_color {
            queue!(
                out,
                SetForegroundColor(Color::Black),
                SetBackgroundColor(Color::White),
                Print(label),
                ResetColor
            )?;
            writeln!(out)?;
        } else if selected {
            writeln!(out, "> {}", label)?;
        } else {
            writeln!(out, "{}", label)?;
        }
    }
    out.flush()
}
