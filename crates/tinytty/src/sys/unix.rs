use std::ffi::c_void;
use std::fs::OpenOptions;
use std::io::{BufWriter, Error, ErrorKind, Result, Write};
use std::mem::MaybeUninit;
use std::os::fd::{AsRawFd, OwnedFd, RawFd};
use std::ptr::{from_mut, from_ref};

use super::util::IntoResult;
use crate::cmd::{
    ClearScreen, Command, EraseLine, HideCursor, MoveTo, MoveToLineStart, ResetColor,
    SetBackground, SetBold, SetColor, SetTitle, ShowCursor,
};
use crate::color::{Background, Color};
use crate::device::{Device, TerminalSize};

// ----------------------------------------------------------------------------------------------------------

/// Raw unbuffered terminal output.
#[derive(Debug)]
struct RawOutput {
    handle: RawFd,
}

impl Write for RawOutput {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        unsafe {
            libc::write(
                self.handle,
                buf.as_ptr() as *const c_void,
                buf.len() as libc::size_t,
            )
        }
        .into_result()
        .map(|count| count as usize)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

// ----------------------------------------------------------------------------------------------------------

/// The POSIX terminal device.
///
/// The device owns a connection to the controlling terminal `/dev/tty`. It
/// implements all cursor, color, and erase primitives as ANSI escape
/// sequences from [`cmd`](crate::cmd) written through a buffered writer,
/// while the mode primitives go through termios and the size query through
/// `ioctl(TIOCGWINSZ)`.
#[derive(Debug)]
pub struct UnixDevice {
    handle: OwnedFd,
    writer: BufWriter<RawOutput>,
}

impl UnixDevice {
    /// Open the controlling terminal.
    pub fn open() -> Result<Self> {
        let handle: OwnedFd = OpenOptions::new()
            .read(true)
            .write(true)
            .open("/dev/tty")?
            .into();
        let writer = BufWriter::with_capacity(
            1_024,
            RawOutput {
                handle: handle.as_raw_fd(),
            },
        );

        Ok(Self { handle, writer })
    }

    /// Write the command to the output buffer.
    fn exec(&mut self, command: impl Command) -> Result<()> {
        write!(self.writer, "{}", command)?;
        Ok(())
    }

    /// Read the current termios state.
    fn termios(&self) -> Result<libc::termios> {
        let mut state = MaybeUninit::uninit();
        unsafe { libc::tcgetattr(self.handle.as_raw_fd(), state.as_mut_ptr()) }.into_result()?;
        Ok(unsafe { state.assume_init() })
    }
}

impl Device for UnixDevice {
    fn size(&mut self) -> Result<TerminalSize> {
        let mut size = libc::winsize {
            ws_row: 0,
            ws_col: 0,
            ws_xpixel: 0,
            ws_ypixel: 0,
        };
        unsafe {
            libc::ioctl(
                self.handle.as_raw_fd(),
                libc::TIOCGWINSZ,
                from_mut(&mut size),
            )
        }
        .into_result()?;

        Ok(TerminalSize {
            columns: size.ws_col,
            rows: size.ws_row,
        })
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        self.exec(SetTitle(title))?;
        self.writer.flush()
    }

    fn set_echo(&mut self, enabled: bool) -> Result<()> {
        let mut state = self.termios()?;
        if enabled {
            state.c_lflag |= libc::ICANON | libc::ECHO;
        } else {
            state.c_lflag &= !(libc::ICANON | libc::ECHO);
        }
        unsafe { libc::tcsetattr(self.handle.as_raw_fd(), libc::TCSAFLUSH, from_ref(&state)) }
            .into_result()?;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        if visible {
            self.exec(ShowCursor)?;
        } else {
            self.exec(HideCursor)?;
        }
        self.writer.flush()
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.exec(MoveTo(x, y))
    }

    fn cursor_position(&mut self) -> Result<(u16, u16)> {
        // Reading the position back would require the CSI 6n query/response
        // round trip, which this layer does not implement.
        Err(ErrorKind::Unsupported.into())
    }

    fn read_byte(&mut self) -> Result<u8> {
        // Make pending output visible before blocking.
        self.writer.flush()?;

        let mut byte = 0_u8;
        loop {
            let count = unsafe {
                libc::read(
                    self.handle.as_raw_fd(),
                    from_mut(&mut byte).cast::<c_void>(),
                    1,
                )
            };
            match count {
                -1 => {
                    let error = Error::last_os_error();
                    if error.kind() == ErrorKind::Interrupted {
                        continue;
                    }
                    return Err(error);
                }
                0 => return Err(ErrorKind::UnexpectedEof.into()),
                _ => return Ok(byte),
            }
        }
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()
    }

    fn set_foreground(&mut self, color: Color, bold: bool) -> Result<()> {
        if bold {
            self.exec(SetBold(color))
        } else {
            self.exec(SetColor(color))
        }
    }

    fn set_background(&mut self, background: Background) -> Result<()> {
        self.exec(SetBackground(background))
    }

    fn reset_colors(&mut self) -> Result<()> {
        self.exec(ResetColor)
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.exec(ClearScreen)?;
        self.writer.flush()
    }

    fn clear_line(&mut self) -> Result<()> {
        self.exec(EraseLine)?;
        self.exec(MoveToLineStart)?;
        self.writer.flush()
    }
}
