//! Drawing operations: placing characters and strings at coordinates,
//! clearing regions, and the blocking warning banner.
//!
//! Every coordinate-based operation routes through
//! [`move_cursor`](crate::Terminal::move_cursor) and therefore re-checks the
//! terminal bounds on each call. Out-of-bounds requests perform nothing and
//! say so through the return value.

use std::io::Result;

use crate::device::Device;
use crate::term::Terminal;

/// The suffix appended to every warning banner.
const MORE: &str = " --MORE--";

impl<D: Device> Terminal<D> {
    /// Print one character at `(x, y)`.
    ///
    /// Returns `Ok(false)` without writing when the position is out of
    /// bounds. Output may stay buffered until the next flushing operation.
    pub fn print_char(&mut self, x: u16, y: u16, ch: char) -> Result<bool> {
        self.put_char(x, y, ch)
    }

    /// Put one character at `(x, y)`.
    ///
    /// Behaviorally identical to [`print_char`](Self::print_char); the two
    /// names exist to express intent at the call site.
    pub fn put_char(&mut self, x: u16, y: u16, ch: char) -> Result<bool> {
        if !self.move_cursor(x, y)? {
            return Ok(false);
        }

        let mut buffer = [0_u8; 4];
        self.device_mut().write_text(ch.encode_utf8(&mut buffer))?;
        Ok(true)
    }

    /// Put a sequence of characters in a row, starting at `(x, y)`.
    ///
    /// Each character goes through [`put_char`](Self::put_char) one column
    /// further than the previous one, so each is independently bounds-checked
    /// and characters past the terminal width are silently dropped. Returns
    /// the number of characters actually written.
    pub fn put_chars(&mut self, x: u16, y: u16, text: &str) -> Result<usize> {
        let mut count = 0;
        for (index, ch) in text.chars().enumerate() {
            let Ok(offset) = u16::try_from(index) else {
                break;
            };
            let Some(column) = x.checked_add(offset) else {
                break;
            };
            if self.put_char(column, y, ch)? {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Put a string at `(x, y)`, clearing the target line first.
    ///
    /// The whole row is erased before the string is written in one operation
    /// and flushed, so a shorter string never leaves stale characters from a
    /// prior longer write. Unlike [`put_chars`](Self::put_chars), the string
    /// is not bounds-checked per character; the terminal's own wrapping
    /// governs what happens past the width. Returns `Ok(false)` without any
    /// effect when `(x, y)` is out of bounds.
    pub fn put_string(&mut self, x: u16, y: u16, text: &str) -> Result<bool> {
        if !self.clear_line(x, y)? {
            return Ok(false);
        }
        self.move_cursor(x, y)?;
        self.device_mut().write_text(text)?;
        self.device_mut().flush()?;
        Ok(true)
    }

    /// Show a message at `(x, y)` and block until any key is pressed.
    ///
    /// Returns `Ok(false)` without writing or blocking when the position is
    /// out of bounds. Requires echo to be disabled for the key wait to be
    /// immediate.
    pub fn show_message(&mut self, x: u16, y: u16, text: &str) -> Result<bool> {
        if !self.move_cursor(x, y)? {
            return Ok(false);
        }
        self.device_mut().write_text(text)?;
        self.device_mut().flush()?;
        self.wait_key()?;
        Ok(true)
    }

    /// Erase the whole screen and home the cursor to `(0, 0)`.
    pub fn clear_screen(&mut self) -> Result<()> {
        self.device_mut().clear_screen()?;
        self.device_mut().flush()
    }

    /// Erase the entire row containing `(x, y)`.
    ///
    /// After clearing, the cursor sits at the start of that row. Returns
    /// `Ok(false)` without any effect when the position is out of bounds.
    pub fn clear_line(&mut self, x: u16, y: u16) -> Result<bool> {
        if !self.move_cursor(x, y)? {
            return Ok(false);
        }
        self.device_mut().clear_line()?;
        self.device_mut().flush()?;
        Ok(true)
    }

    /// Show a warning banner at the top of the screen and block until the
    /// space key dismisses it.
    ///
    /// The banner is `text` followed by `" --MORE--"`, truncated so that the
    /// whole banner fits the current terminal width with the suffix intact.
    /// Keys other than space are consumed and discarded; the call returns
    /// only once a space has been read. Afterwards the top row is cleared.
    pub fn show_warning(&mut self, text: &str) -> Result<()> {
        let columns = usize::from(self.size()?.columns);
        let budget = columns.saturating_sub(MORE.len());
        let banner: String = text
            .chars()
            .take(budget)
            .chain(MORE.chars())
            .take(columns)
            .collect();

        self.put_string(0, 0, &banner)?;
        while self.read_key()? != b' ' {}
        self.clear_line(0, 0)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::mock::{Action, MockDevice};
    use crate::term::Terminal;

    fn terminal(columns: u16, rows: u16) -> Terminal<MockDevice> {
        Terminal::with_device(MockDevice::new(columns, rows))
    }

    #[test]
    fn test_put_char_in_bounds() {
        let mut tty = terminal(80, 24);

        assert!(tty.put_char(3, 2, '@').unwrap());
        assert!(tty.print_char(79, 23, '#').unwrap());

        let device = tty.into_device();
        assert_eq!(device.cell(3, 2), '@');
        assert_eq!(device.cell(79, 23), '#');
    }

    #[test]
    fn test_out_of_bounds_drawing_is_noop() {
        let mut tty = terminal(80, 24);

        assert!(!tty.put_char(80, 0, 'x').unwrap());
        assert!(!tty.put_char(0, 24, 'x').unwrap());
        assert!(!tty.put_string(80, 0, "nope").unwrap());
        assert!(!tty.clear_line(0, 24).unwrap());
        assert!(!tty.show_message(99, 99, "nope").unwrap());

        let device = tty.into_device();
        assert!(device.screen_is_blank(), "no cell may change");
        assert_eq!(device.cursor(), (0, 0));
        assert_eq!(device.pending_input(), 0);
    }

    #[test]
    fn test_put_chars_at_right_edge() {
        // The fifth character lands exactly on the last valid column.
        let mut tty = terminal(80, 24);
        assert_eq!(tty.put_chars(75, 0, "HELLO").unwrap(), 5);
        let device = tty.into_device();
        assert_eq!(device.row_text(0).trim_start(), "HELLO");
        assert_eq!(device.cell(79, 0), 'O');

        // Three characters would land on columns 80..=82 and are dropped.
        let mut tty = terminal(80, 24);
        assert_eq!(tty.put_chars(78, 0, "HELLO").unwrap(), 2);
        let device = tty.into_device();
        assert_eq!(device.row_text(0).trim_start(), "HE");
    }

    #[test]
    fn test_put_string_clears_stale_content() {
        let mut tty = terminal(80, 24);

        assert!(tty.put_string(0, 5, "a rather long line of text").unwrap());
        assert!(tty.put_string(0, 5, "short").unwrap());

        let device = tty.into_device();
        assert_eq!(device.row_text(5).trim_end(), "short");
    }

    #[test]
    fn test_put_string_is_not_bounds_checked_per_character() {
        let mut tty = terminal(10, 24);

        // The string overflows the width; the terminal wraps it instead of
        // dropping characters.
        assert!(tty.put_string(0, 0, "0123456789abc").unwrap());

        let device = tty.into_device();
        assert_eq!(device.row_text(0), "0123456789");
        assert_eq!(device.row_text(1).trim_end(), "abc");
    }

    #[test]
    fn test_show_message_blocks_for_any_key() {
        let mut device = MockDevice::new(80, 24);
        device.feed_input(b"qx");
        let mut tty = Terminal::with_device(device);

        assert!(tty.show_message(2, 1, "hello").unwrap());

        let device = tty.into_device();
        // Exactly one key consumed, message on screen.
        assert_eq!(device.pending_input(), 1);
        assert!(device.row_text(1).trim_end().ends_with("hello"));
    }

    #[test]
    fn test_show_warning_waits_for_space() {
        let mut device = MockDevice::new(80, 24);
        device.feed_input(b"ab x");
        let mut tty = Terminal::with_device(device);

        tty.show_warning("danger ahead").unwrap();

        let device = tty.into_device();
        // 'a', 'b', and the space are consumed; 'x' is untouched.
        assert_eq!(device.pending_input(), 1);
        // The banner was cleared again after dismissal.
        assert_eq!(device.row_text(0).trim_end(), "");
    }

    #[test]
    fn test_show_warning_truncates_to_terminal_width() {
        let mut device = MockDevice::new(20, 24);
        device.feed_input(b" ");
        let mut tty = Terminal::with_device(device);

        tty.show_warning("this message is far too long for the terminal")
            .unwrap();

        // The banner itself is cleared again on dismissal, so inspect the
        // recorded write instead of the grid.
        let device = tty.into_device();
        let banner = device
            .actions()
            .iter()
            .find_map(|action| match action {
                Action::Write(text) if text.contains("--MORE--") => Some(text.clone()),
                _ => None,
            })
            .expect("warning banner must be written");
        assert_eq!(banner, "this messag --MORE--");
        assert_eq!(banner.chars().count(), 20);
    }

    #[test]
    fn test_show_warning_short_message_keeps_suffix() {
        let mut device = MockDevice::new(80, 24);
        device.feed_input(b" ");
        let mut tty = Terminal::with_device(device);
        tty.show_warning("ok").unwrap();
        // Dismissed and cleared without error; banner fit the width.
        assert_eq!(tty.into_device().pending_input(), 0);
    }

    #[test]
    fn test_clear_screen_homes_cursor() {
        let mut tty = terminal(80, 24);
        assert!(tty.put_string(0, 3, "junk").unwrap());
        tty.clear_screen().unwrap();

        let device = tty.into_device();
        assert!(device.screen_is_blank(), "screen must be erased");
        assert_eq!(device.cursor(), (0, 0));
    }

    #[test]
    fn test_clear_line_repositions_to_row_start() {
        let mut tty = terminal(80, 24);
        assert!(tty.put_string(0, 7, "to be erased").unwrap());
        assert!(tty.clear_line(5, 7).unwrap());

        let device = tty.into_device();
        assert_eq!(device.row_text(7).trim_end(), "");
        assert_eq!(device.cursor(), (0, 7));
    }
}
