//! # Tiny Tty
//!
//! This crate provides **minimal and cross-platform terminal control**. Its
//! only dependency is the low-level crate enabling system calls, i.e.,
//! [`libc`](https://crates.io/crates/libc) on Unix and
//! [`windows-sys`](https://crates.io/crates/windows-sys) on Windows.
//!
//! The interface is a single type:
//!
//!   * Open a [`Terminal`] with [`Terminal::open`].
//!   * Query its geometry, switch echo and cursor visibility, and set
//!     [`Color`]s and [`Background`]s.
//!   * Draw characters and strings at `(x, y)` coordinates with
//!     [`put_char`](Terminal::put_char), [`put_chars`](Terminal::put_chars),
//!     and [`put_string`](Terminal::put_string), or block on user
//!     acknowledgement with [`show_warning`](Terminal::show_warning).
//!
//! Coordinates are zero-based, column first, with the origin in the top left
//! corner. Every drawing operation checks the current terminal bounds and
//! reports an out-of-bounds request by returning `Ok(false)` or a written
//! count, never by panicking. See [`Terminal`] for the error handling rules.
//!
//! The [`Terminal`] type is generic over its [`Device`], the small set of
//! primitives that differ between platforms. [`Terminal::open`] picks the
//! platform's [`SysDevice`]; tests substitute the in-memory
//! [`MockDevice`](mock::MockDevice) instead.
//!
//!
//! # Example
//!
//! ```no_run
//! # use std::io::Result;
//! # use tinytty::{Color, Terminal};
//! # fn run() -> Result<()> {
//! let mut tty = Terminal::open()?;
//! tty.set_echo(false)?;
//! tty.clear_screen()?;
//! tty.set_bold(Color::Red)?;
//! tty.put_string(2, 1, "hello from row 1")?;
//! tty.reset_color()?;
//! tty.show_warning("low on disk space")?;
//! tty.set_echo(true)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Windows
//!
//! On Unix, the device writes ANSI escape sequences from [`cmd`] and
//! configures modes through termios. On Windows, it uses the structured
//! console API instead, including for colors and erasing, so it works on
//! consoles that predate escape sequence support. Bold text is the one
//! surface that differs: the Windows console has no intensity attribute
//! separate from the bright colors, so bold renders as the plain color.

pub mod cmd;
mod color;
mod device;
mod draw;
pub mod mock;
mod sys;
mod term;

pub use color::{Background, Color};
pub use device::{Device, TerminalSize};
pub use sys::SysDevice;
pub use term::Terminal;
