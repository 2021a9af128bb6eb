use std::ffi::c_void;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Result};
use std::mem::zeroed;
use std::os::windows::io::{AsRawHandle, OwnedHandle, RawHandle};
use std::ptr::{from_mut, from_ref, null};

use windows_sys::Win32::System::Console::{
    self, CONSOLE_CURSOR_INFO, CONSOLE_SCREEN_BUFFER_INFO, COORD,
};

use super::util::IntoResult;
use crate::color::{Background, Color};
use crate::device::{Device, TerminalSize};

/// The console's default attribute: light gray on black.
const DEFAULT_ATTRIBUTE: u16 = 7;

/// The Windows console device.
///
/// The device owns handles to the console's input and output buffers. Unlike
/// the POSIX device, it draws and styles through structured console calls
/// rather than escape sequences: cursor position and size come from the
/// screen buffer info, colors are a 16-bit attribute word with foreground and
/// background nibbles, and erasing is an output fill.
#[derive(Debug)]
pub struct WindowsDevice {
    input: OwnedHandle,
    output: OwnedHandle,
}

// SAFETY: Windows HANDLE is defined as a *mut c_void but console handles are
// thread-safe, and Rust's standard library implements `Send` and `Sync` for
// its own wrapped handles.
unsafe impl Send for WindowsDevice {}

impl WindowsDevice {
    /// Open the console's input and output buffers.
    pub fn open() -> Result<Self> {
        let input = OpenOptions::new()
            .read(true)
            .write(true)
            .open("CONIN$")?
            .into();
        let output = OpenOptions::new()
            .read(true)
            .write(true)
            .open("CONOUT$")?
            .into();

        Ok(Self { input, output })
    }

    #[inline]
    fn input_handle(&self) -> RawHandle {
        self.input.as_raw_handle()
    }

    #[inline]
    fn output_handle(&self) -> RawHandle {
        self.output.as_raw_handle()
    }

    /// Query the screen buffer info, which bundles the size, the cursor
    /// position, and the current attribute word.
    fn buffer_info(&self) -> Result<CONSOLE_SCREEN_BUFFER_INFO> {
        let mut info: CONSOLE_SCREEN_BUFFER_INFO = unsafe { zeroed() };
        unsafe { Console::GetConsoleScreenBufferInfo(self.output_handle(), from_mut(&mut info)) }
            .into_result()?;
        Ok(info)
    }

    fn set_attribute(&self, attribute: u16) -> Result<()> {
        unsafe { Console::SetConsoleTextAttribute(self.output_handle(), attribute) }
            .into_result()?;
        Ok(())
    }

    fn set_cursor_position(&self, position: COORD) -> Result<()> {
        unsafe { Console::SetConsoleCursorPosition(self.output_handle(), position) }
            .into_result()?;
        Ok(())
    }

    /// Fill `length` cells with spaces, starting at `start`.
    fn fill_blank(&self, start: COORD, length: u32) -> Result<()> {
        let mut filled = 0_u32;
        unsafe {
            Console::FillConsoleOutputCharacterA(
                self.output_handle(),
                b' ' as i8,
                length,
                start,
                from_mut(&mut filled),
            )
        }
        .into_result()?;
        Ok(())
    }
}

impl Device for WindowsDevice {
    fn size(&mut self) -> Result<TerminalSize> {
        let info = self.buffer_info()?;
        Ok(TerminalSize {
            columns: (info.srWindow.Right - info.srWindow.Left + 1) as u16,
            rows: (info.srWindow.Bottom - info.srWindow.Top + 1) as u16,
        })
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        let mut buffer = title.as_bytes().to_vec();
        buffer.push(0);
        unsafe { Console::SetConsoleTitleA(buffer.as_ptr()) }.into_result()?;
        Ok(())
    }

    fn set_echo(&mut self, enabled: bool) -> Result<()> {
        let mut mode = 0;
        unsafe { Console::GetConsoleMode(self.input_handle(), from_mut(&mut mode)) }
            .into_result()?;
        if enabled {
            mode |= Console::ENABLE_ECHO_INPUT | Console::ENABLE_LINE_INPUT;
        } else {
            mode &= !(Console::ENABLE_ECHO_INPUT | Console::ENABLE_LINE_INPUT);
        }
        unsafe { Console::SetConsoleMode(self.input_handle(), mode) }.into_result()?;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        let mut info: CONSOLE_CURSOR_INFO = unsafe { zeroed() };
        // When the current cursor state cannot be read, degrade to a no-op.
        if unsafe { Console::GetConsoleCursorInfo(self.output_handle(), from_mut(&mut info)) } == 0
        {
            return Ok(());
        }

        info.bVisible = i32::from(visible);
        unsafe { Console::SetConsoleCursorInfo(self.output_handle(), from_ref(&info)) }
            .into_result()?;
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.set_cursor_position(COORD {
            X: x as i16,
            Y: y as i16,
        })
    }

    fn cursor_position(&mut self) -> Result<(u16, u16)> {
        let info = self.buffer_info()?;
        Ok((
            info.dwCursorPosition.X as u16,
            info.dwCursorPosition.Y as u16,
        ))
    }

    fn read_byte(&mut self) -> Result<u8> {
        let mut byte = 0_u8;
        let mut count = 0_u32;
        unsafe {
            Console::ReadConsoleA(
                self.input_handle(),
                from_mut(&mut byte).cast::<c_void>(),
                1,
                from_mut(&mut count),
                null(),
            )
        }
        .into_result()?;

        if count == 0 {
            return Err(ErrorKind::UnexpectedEof.into());
        }
        Ok(byte)
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut bytes = text.as_bytes();
        while !bytes.is_empty() {
            let mut written = 0_u32;
            unsafe {
                Console::WriteConsoleA(
                    self.output_handle(),
                    bytes.as_ptr().cast::<c_void>(),
                    bytes.len() as u32,
                    from_mut(&mut written),
                    null(),
                )
            }
            .into_result()?;
            bytes = &bytes[written as usize..];
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        // Console writes are unbuffered.
        Ok(())
    }

    fn set_foreground(&mut self, color: Color, _bold: bool) -> Result<()> {
        // Bold collapses to the plain color mapping; the bright colors
        // already carry the intensity bit.
        let info = self.buffer_info()?;
        self.set_attribute((info.wAttributes & 0xFFF0) | u16::from(color.attribute()))
    }

    fn set_background(&mut self, background: Background) -> Result<()> {
        let info = self.buffer_info()?;
        self.set_attribute((info.wAttributes & 0xFF0F) | (u16::from(background.attribute()) << 4))
    }

    fn reset_colors(&mut self) -> Result<()> {
        let info = self.buffer_info()?;
        self.set_attribute((info.wAttributes & 0xFF00) | DEFAULT_ATTRIBUTE)
    }

    fn clear_screen(&mut self) -> Result<()> {
        let info = self.buffer_info()?;
        let top_left = COORD { X: 0, Y: 0 };
        let length = (info.dwSize.X as u32) * (info.dwSize.Y as u32);

        self.fill_blank(top_left, length)?;

        // Reset every cell's attribute as well, clearing stale backgrounds.
        let mut filled = 0_u32;
        unsafe {
            Console::FillConsoleOutputAttribute(
                self.output_handle(),
                info.wAttributes,
                length,
                top_left,
                from_mut(&mut filled),
            )
        }
        .into_result()?;

        self.set_cursor_position(top_left)
    }

    fn clear_line(&mut self) -> Result<()> {
        let info = self.buffer_info()?;
        let start = COORD {
            X: 0,
            Y: info.dwCursorPosition.Y,
        };

        self.fill_blank(start, info.dwSize.X as u32)?;
        self.set_cursor_position(start)
    }
}
