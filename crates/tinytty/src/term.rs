use std::io::Result;

use crate::color::{Background, Color};
use crate::device::{Device, TerminalSize};
use crate::sys::SysDevice;

/// A terminal, wrapping a platform [`Device`].
///
/// This type implements the public operation set on top of the device
/// primitives: geometry queries and modes, colors, and the drawing
/// operations in [`draw`](crate::Terminal#drawing). It adds what the
/// primitives do not have, namely the bounds check that guards every
/// coordinate-based operation.
///
/// # Error handling
///
/// Operations never panic and never abort the process. A coordinate outside
/// the current terminal bounds is not an error; the operation performs
/// nothing and returns `Ok(false)` (or a written count of 0). Operating
/// system failures surface as [`std::io::Error`], which callers are free to
/// ignore. [`columns`](Self::columns) and [`rows`](Self::rows) swallow the
/// query error and fall back to 0, which in turn makes every bounds check
/// fail; [`size`](Self::size) reports the underlying error instead.
///
/// # Ambient state
///
/// Colors, cursor visibility, and echo mode live in the terminal device
/// itself and persist until the next set/reset call or process exit. There
/// is no color stack and no restoration on drop; callers that need to
/// restore prior state must track it themselves.
pub struct Terminal<D: Device> {
    device: D,
}

impl Terminal<SysDevice> {
    /// Open a terminal on this platform's device.
    pub fn open() -> Result<Self> {
        Ok(Self::with_device(SysDevice::open()?))
    }
}

impl<D: Device> Terminal<D> {
    /// Create a terminal over the given device.
    pub fn with_device(device: D) -> Self {
        Self { device }
    }

    /// Access the underlying device.
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// Consume the terminal, returning the device.
    pub fn into_device(self) -> D {
        self.device
    }

    /// Query the current terminal size.
    pub fn size(&mut self) -> Result<TerminalSize> {
        self.device.size()
    }

    /// Get the current number of columns, or 0 if the query fails.
    pub fn columns(&mut self) -> u16 {
        self.size().map_or(0, |size| size.columns)
    }

    /// Get the current number of rows, or 0 if the query fails.
    pub fn rows(&mut self) -> u16 {
        self.size().map_or(0, |size| size.rows)
    }

    /// Determine whether `(x, y)` lies within the current terminal bounds.
    ///
    /// The geometry is re-queried on every call, so the answer is current
    /// even across terminal resizes. A failed query puts every coordinate
    /// out of bounds.
    pub fn in_bounds(&mut self, x: u16, y: u16) -> bool {
        match self.size() {
            Ok(size) => x < size.columns && y < size.rows,
            Err(_) => false,
        }
    }

    /// Set the terminal title. Best-effort.
    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.device.set_title(title)
    }

    /// Enable or disable key echo.
    ///
    /// Disabling echo also disables canonical (line-buffered) input, so
    /// [`read_key`](Self::read_key) completes on the next byte without
    /// waiting for a line terminator. Enabling restores both.
    pub fn set_echo(&mut self, enabled: bool) -> Result<()> {
        self.device.set_echo(enabled)
    }

    /// Hide the cursor.
    pub fn hide_cursor(&mut self) -> Result<()> {
        self.device.set_cursor_visible(false)
    }

    /// Show the cursor.
    pub fn show_cursor(&mut self) -> Result<()> {
        self.device.set_cursor_visible(true)
    }

    /// Move the cursor to `(x, y)`.
    ///
    /// Returns `Ok(false)` without touching the device when the position is
    /// out of bounds. This is the single choke point that every drawing
    /// operation routes through.
    pub fn move_cursor(&mut self, x: u16, y: u16) -> Result<bool> {
        if !self.in_bounds(x, y) {
            return Ok(false);
        }
        self.device.move_cursor(x, y)?;
        Ok(true)
    }

    /// Block until a key arrives, discarding it.
    ///
    /// Call [`set_echo`](Self::set_echo) with `false` first; otherwise the
    /// read blocks on a line-buffered read requiring Enter.
    pub fn wait_key(&mut self) -> Result<()> {
        self.device.read_byte().map(|_| ())
    }

    /// Block until a key arrives and return its byte.
    pub fn read_key(&mut self) -> Result<u8> {
        self.device.read_byte()
    }

    /// Set the foreground color at normal intensity for subsequent writes.
    pub fn set_color(&mut self, color: Color) -> Result<()> {
        self.device.set_foreground(color, false)
    }

    /// Set the foreground color at bold intensity for subsequent writes.
    pub fn set_bold(&mut self, color: Color) -> Result<()> {
        self.device.set_foreground(color, true)
    }

    /// Set the background color for subsequent writes.
    pub fn set_background(&mut self, background: Background) -> Result<()> {
        self.device.set_background(background)
    }

    /// Restore the default foreground and background.
    pub fn reset_color(&mut self) -> Result<()> {
        self.device.reset_colors()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::mock::{Action, MockDevice};

    #[test]
    fn test_bounds() {
        let mut tty = Terminal::with_device(MockDevice::new(80, 24));

        assert!(tty.in_bounds(0, 0));
        assert!(tty.in_bounds(79, 23));
        assert!(!tty.in_bounds(80, 23));
        assert!(!tty.in_bounds(79, 24));
        assert_eq!(tty.columns(), 80);
        assert_eq!(tty.rows(), 24);
    }

    #[test]
    fn test_size_failure_falls_back_to_zero() {
        let mut device = MockDevice::new(80, 24);
        device.set_size_failure(true);
        let mut tty = Terminal::with_device(device);

        assert_eq!(tty.columns(), 0);
        assert_eq!(tty.rows(), 0);
        assert!(!tty.in_bounds(0, 0));
        assert!(tty.size().is_err());
    }

    #[test]
    fn test_move_cursor_out_of_bounds_is_noop() {
        let mut tty = Terminal::with_device(MockDevice::new(80, 24));

        assert!(!tty.move_cursor(80, 0).unwrap());
        assert!(!tty.move_cursor(0, 24).unwrap());
        let device = tty.into_device();
        assert_eq!(device.cursor(), (0, 0));
        assert!(device
            .actions()
            .iter()
            .all(|action| !matches!(action, Action::MoveCursor(_, _))));
    }

    #[test]
    fn test_move_cursor_repositions() {
        let mut tty = Terminal::with_device(MockDevice::new(80, 24));

        assert!(tty.move_cursor(17, 4).unwrap());
        assert_eq!(tty.device_mut().cursor_position().unwrap(), (17, 4));
    }

    #[test]
    fn test_echo_and_raw_reads() {
        let mut device = MockDevice::new(80, 24);
        device.feed_input(b"x");
        let mut tty = Terminal::with_device(device);

        tty.set_echo(false).unwrap();
        assert!(!tty.device_mut().echo_enabled());
        assert_eq!(tty.read_key().unwrap(), b'x');
        // No byte available: the mock reports the condition as an error
        // rather than blocking forever.
        assert!(tty.read_key().is_err());

        tty.set_echo(true).unwrap();
        let device = tty.into_device();
        assert!(device.echo_enabled());
        assert_eq!(
            device
                .actions()
                .iter()
                .filter(|action| matches!(action, Action::SetEcho(_)))
                .count(),
            2
        );
    }

    #[test]
    fn test_color_round_trip() {
        for color in [Color::Black, Color::DarkCyan, Color::Red, Color::White] {
            let mut tty = Terminal::with_device(MockDevice::new(80, 24));
            tty.set_color(color).unwrap();
            tty.set_background(Background::DarkBlue).unwrap();
            tty.reset_color().unwrap();

            let device = tty.into_device();
            assert_eq!(device.foreground(), None, "reset must clear foreground");
            assert_eq!(device.background(), None, "reset must clear background");
        }
    }

    #[test]
    fn test_cursor_visibility() {
        let mut tty = Terminal::with_device(MockDevice::new(80, 24));
        tty.hide_cursor().unwrap();
        assert!(!tty.device_mut().cursor_visible());
        tty.show_cursor().unwrap();
        assert!(tty.device_mut().cursor_visible());
    }
}
