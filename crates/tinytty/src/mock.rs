//! A virtual terminal device for testing.
//!
//! [`MockDevice`] implements [`Device`] against an in-memory cell grid
//! instead of a real terminal. It records every primitive call in order,
//! keeps a virtual cursor and color state, and serves scripted input bytes,
//! so tests can drive [`Terminal`](crate::Terminal) end to end and assert on
//! both the resulting screen content and the exact calls made.
//!
//! The grid models the essentials of real terminal output: writes advance
//! the cursor and wrap at the right edge onto the next row; output past the
//! last row is dropped (no scrollback).

use std::collections::VecDeque;
use std::io::{Error, ErrorKind, Result};

use crate::color::{Background, Color};
use crate::device::{Device, TerminalSize};

/// A recorded device call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SetTitle(String),
    SetEcho(bool),
    SetCursorVisible(bool),
    MoveCursor(u16, u16),
    ReadByte(u8),
    Write(String),
    Flush,
    SetForeground(Color, bool),
    SetBackground(Background),
    ResetColors,
    ClearScreen,
    ClearLine,
}

/// A terminal device backed by an in-memory grid.
#[derive(Debug)]
pub struct MockDevice {
    size: TerminalSize,
    fail_size: bool,
    cells: Vec<char>,
    cursor: (u16, u16),
    echo: bool,
    cursor_visible: bool,
    foreground: Option<(Color, bool)>,
    background: Option<Background>,
    input: VecDeque<u8>,
    actions: Vec<Action>,
}

impl MockDevice {
    /// Create a device with the given grid size, blank and with the cursor
    /// at the origin.
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            size: TerminalSize { columns, rows },
            fail_size: false,
            cells: vec![' '; usize::from(columns) * usize::from(rows)],
            cursor: (0, 0),
            echo: true,
            cursor_visible: true,
            foreground: None,
            background: None,
            input: VecDeque::new(),
            actions: Vec::new(),
        }
    }

    /// Make every subsequent size query fail, so tests can exercise the
    /// degraded zero-size behavior.
    pub fn set_size_failure(&mut self, fail: bool) {
        self.fail_size = fail;
    }

    /// Append bytes to the scripted input.
    pub fn feed_input(&mut self, bytes: &[u8]) {
        self.input.extend(bytes);
    }

    /// Get the recorded calls in order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Get the character at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics when the position lies outside the grid.
    pub fn cell(&self, x: u16, y: u16) -> char {
        assert!(
            x < self.size.columns && y < self.size.rows,
            "cell position must lie within the grid"
        );
        self.cells[self.index(x, y)]
    }

    /// Get the full text of row `y`, including trailing blanks.
    pub fn row_text(&self, y: u16) -> String {
        let start = self.index(0, y);
        self.cells[start..start + usize::from(self.size.columns)]
            .iter()
            .collect()
    }

    /// Determine whether every cell is blank.
    pub fn screen_is_blank(&self) -> bool {
        self.cells.iter().all(|ch| *ch == ' ')
    }

    /// Get the virtual cursor position.
    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    /// Get the number of unconsumed scripted input bytes.
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    /// Determine whether echo is enabled.
    pub fn echo_enabled(&self) -> bool {
        self.echo
    }

    /// Determine whether the cursor is visible.
    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Get the current foreground, or `None` for the default.
    pub fn foreground(&self) -> Option<(Color, bool)> {
        self.foreground
    }

    /// Get the current background, or `None` for the default.
    pub fn background(&self) -> Option<Background> {
        self.background
    }

    fn index(&self, x: u16, y: u16) -> usize {
        usize::from(y) * usize::from(self.size.columns) + usize::from(x)
    }

    fn blank_row(&mut self, y: u16) {
        let start = self.index(0, y);
        for cell in &mut self.cells[start..start + usize::from(self.size.columns)] {
            *cell = ' ';
        }
    }
}

impl Device for MockDevice {
    fn size(&mut self) -> Result<TerminalSize> {
        if self.fail_size {
            return Err(Error::other("scripted size query failure"));
        }
        Ok(self.size)
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        self.actions.push(Action::SetTitle(title.to_owned()));
        Ok(())
    }

    fn set_echo(&mut self, enabled: bool) -> Result<()> {
        self.echo = enabled;
        self.actions.push(Action::SetEcho(enabled));
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        self.cursor_visible = visible;
        self.actions.push(Action::SetCursorVisible(visible));
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.cursor = (x, y);
        self.actions.push(Action::MoveCursor(x, y));
        Ok(())
    }

    fn cursor_position(&mut self) -> Result<(u16, u16)> {
        Ok(self.cursor)
    }

    fn read_byte(&mut self) -> Result<u8> {
        let byte = self
            .input
            .pop_front()
            .ok_or_else(|| Error::new(ErrorKind::WouldBlock, "scripted input is exhausted"))?;
        self.actions.push(Action::ReadByte(byte));
        Ok(byte)
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.actions.push(Action::Write(text.to_owned()));

        let (mut x, mut y) = self.cursor;
        for ch in text.chars() {
            if y >= self.size.rows {
                break;
            }
            let index = self.index(x, y);
            self.cells[index] = ch;

            x += 1;
            if x >= self.size.columns {
                x = 0;
                y += 1;
            }
        }
        self.cursor = (x, y);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.actions.push(Action::Flush);
        Ok(())
    }

    fn set_foreground(&mut self, color: Color, bold: bool) -> Result<()> {
        self.foreground = Some((color, bold));
        self.actions.push(Action::SetForeground(color, bold));
        Ok(())
    }

    fn set_background(&mut self, background: Background) -> Result<()> {
        self.background = Some(background);
        self.actions.push(Action::SetBackground(background));
        Ok(())
    }

    fn reset_colors(&mut self) -> Result<()> {
        self.foreground = None;
        self.background = None;
        self.actions.push(Action::ResetColors);
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        for cell in &mut self.cells {
            *cell = ' ';
        }
        self.cursor = (0, 0);
        self.actions.push(Action::ClearScreen);
        Ok(())
    }

    fn clear_line(&mut self) -> Result<()> {
        let row = self.cursor.1;
        if row < self.size.rows {
            self.blank_row(row);
        }
        self.cursor = (0, row);
        self.actions.push(Action::ClearLine);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_writes_wrap_and_drop_past_last_row() {
        let mut device = MockDevice::new(4, 2);
        device.write_text("abcdefXXXX").unwrap();

        assert_eq!(device.row_text(0), "abcd");
        assert_eq!(device.row_text(1), "efXX");
        // The last two characters fell off the bottom; the cursor stays
        // where the wrap left it.
        assert_eq!(device.cursor(), (0, 2));
    }

    #[test]
    fn test_scripted_input() {
        let mut device = MockDevice::new(4, 2);
        device.feed_input(b"ab");

        assert_eq!(device.read_byte().unwrap(), b'a');
        assert_eq!(device.read_byte().unwrap(), b'b');
        assert_eq!(
            device.read_byte().unwrap_err().kind(),
            ErrorKind::WouldBlock
        );
    }
}
