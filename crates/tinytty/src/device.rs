//! The platform capability seam.

use std::io::Result;

use crate::color::{Background, Color};

/// A terminal's current size.
///
/// The size is queried fresh from the operating system on every use and never
/// cached, so it is always current as of the call, including across resizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerminalSize {
    /// The number of columns.
    pub columns: u16,
    /// The number of rows.
    pub rows: u16,
}

/// The primitive operations of a terminal device.
///
/// An implementation of this trait encapsulates one platform's terminal API:
/// escape sequences over termios-configured file descriptors on Unix, screen
/// buffer and attribute calls on the Windows console, or a purely virtual
/// screen for testing. [`Terminal`](crate::Terminal) builds the public
/// coordinate- and color-checked operations on top of these primitives and is
/// generic over the device, so tests can substitute
/// [`MockDevice`](crate::mock::MockDevice) and assert on recorded calls.
///
/// Methods take `&mut self` because even queries may need to write to the
/// device, and implementations may buffer their output. All methods report
/// operating system failures as [`std::io::Error`]; none panic.
///
/// This trait is object-safe.
pub trait Device {
    /// Query the current terminal size.
    fn size(&mut self) -> Result<TerminalSize>;

    /// Set the terminal title. Best-effort.
    fn set_title(&mut self, title: &str) -> Result<()>;

    /// Enable or disable key echo.
    ///
    /// Disabling echo also disables canonical (line-buffered) input, so
    /// subsequent [`read_byte`](Self::read_byte) calls complete as soon as a
    /// single byte arrives. Enabling restores both.
    fn set_echo(&mut self, enabled: bool) -> Result<()>;

    /// Show or hide the cursor.
    fn set_cursor_visible(&mut self, visible: bool) -> Result<()>;

    /// Move the cursor to the zero-based position `(x, y)`.
    ///
    /// This primitive performs no bounds check; that is the caller's job.
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    /// Query the zero-based cursor position.
    ///
    /// The Windows console exposes the position through its screen buffer
    /// info; the Unix device does not track it and fails with
    /// [`std::io::ErrorKind::Unsupported`].
    fn cursor_position(&mut self) -> Result<(u16, u16)>;

    /// Block until one raw byte of input is available and return it.
    fn read_byte(&mut self) -> Result<u8>;

    /// Write text at the current cursor position.
    ///
    /// Output may be buffered; [`flush`](Self::flush) makes it visible.
    fn write_text(&mut self, text: &str) -> Result<()>;

    /// Flush any buffered output to the terminal.
    fn flush(&mut self) -> Result<()>;

    /// Set the foreground color for subsequent writes.
    ///
    /// With `bold`, the POSIX device requests bold intensity via SGR `1`. The
    /// Windows console collapses bold to the plain color mapping, since the
    /// bright colors already carry the intensity bit.
    fn set_foreground(&mut self, color: Color, bold: bool) -> Result<()>;

    /// Set the background color for subsequent writes.
    fn set_background(&mut self, background: Background) -> Result<()>;

    /// Restore the default foreground and background.
    fn reset_colors(&mut self) -> Result<()>;

    /// Erase the whole screen and home the cursor to `(0, 0)`.
    fn clear_screen(&mut self) -> Result<()>;

    /// Erase the row under the cursor and leave the cursor at its start.
    fn clear_line(&mut self) -> Result<()>;
}

/// A mutably borrowed device is a device.
impl<D: Device + ?Sized> Device for &mut D {
    fn size(&mut self) -> Result<TerminalSize> {
        (**self).size()
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        (**self).set_title(title)
    }

    fn set_echo(&mut self, enabled: bool) -> Result<()> {
        (**self).set_echo(enabled)
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        (**self).set_cursor_visible(visible)
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        (**self).move_cursor(x, y)
    }

    fn cursor_position(&mut self) -> Result<(u16, u16)> {
        (**self).cursor_position()
    }

    fn read_byte(&mut self) -> Result<u8> {
        (**self).read_byte()
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        (**self).write_text(text)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn set_foreground(&mut self, color: Color, bold: bool) -> Result<()> {
        (**self).set_foreground(color, bold)
    }

    fn set_background(&mut self, background: Background) -> Result<()> {
        (**self).set_background(background)
    }

    fn reset_colors(&mut self) -> Result<()> {
        (**self).reset_colors()
    }

    fn clear_screen(&mut self) -> Result<()> {
        (**self).clear_screen()
    }

    fn clear_line(&mut self) -> Result<()> {
        (**self).clear_line()
    }
}

fn _assert_traits_are_object_safe() {
    fn is_object_safe<T: ?Sized>() {}

    is_object_safe::<dyn Device>();
}
