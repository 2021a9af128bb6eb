//! A small library of terminal commands.
//!
//! Commands are instructions for the terminal, communicated in-band as ANSI
//! escape sequences. Writing the sequence is the job of each command's
//! [`std::fmt::Display`] implementation, whereas [`std::fmt::Debug`] simply
//! identifies the command. The POSIX device is the primary consumer: it
//! executes a command by writing its display to the terminal's output.
//!
//! Coordinates on this layer are zero-based with the origin at the top left;
//! the commands translate to the one-based coordinates of the wire format.
//!
//! # Example
//!
//! ```
//! # use tinytty::cmd::MoveTo;
//! assert_eq!(format!("{}", MoveTo(17, 4)), "\x1b[5;18H");
//! ```

use crate::color::{Background, Color};

/// A command for the terminal.
///
/// This trait is object-safe.
pub trait Command: std::fmt::Debug + std::fmt::Display {}

/// A borrowed command is a command.
impl<C: Command + ?Sized> Command for &C {}

macro_rules! define_unit_command {
    ($name:ident, $ansi:tt) => {
        #[doc = concat!("The unit `", stringify!($name), "` command.")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name;

        impl Command for $name {}

        impl std::fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($ansi)
            }
        }
    };
}

define_unit_command!(HideCursor, "\x1b[?25l");
define_unit_command!(ShowCursor, "\x1b[?25h");

define_unit_command!(ClearScreen, "\x1b[2J\x1b[1;1H");
define_unit_command!(EraseLine, "\x1b[2K");
define_unit_command!(MoveToLineStart, "\x1b[G");

define_unit_command!(ResetColor, "\x1b[0;0m");

/// The `MoveTo(x, y)` command.
///
/// The column comes first, matching the coordinate order of the drawing
/// operations, even though the emitted CSI `H` sequence puts the row first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveTo(pub u16, pub u16);

impl Command for MoveTo {}

impl std::fmt::Display for MoveTo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\x1b[{};{}H",
            u32::from(self.1) + 1,
            u32::from(self.0) + 1
        )
    }
}

/// The `SetColor` command: normal-intensity foreground.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetColor(pub Color);

impl Command for SetColor {}

impl std::fmt::Display for SetColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\x1b[0;{}m", self.0.sgr())
    }
}

/// The `SetBold` command: bold/bright foreground.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetBold(pub Color);

impl Command for SetBold {}

impl std::fmt::Display for SetBold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\x1b[1;{}m", self.0.sgr())
    }
}

/// The `SetBackground` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetBackground(pub Background);

impl Command for SetBackground {}

impl std::fmt::Display for SetBackground {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\x1b[{}m", self.0.sgr())
    }
}

/// The `SetTitle` command.
///
/// Borrows the title text, since the command is written out immediately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetTitle<'a>(pub &'a str);

impl Command for SetTitle<'_> {}

impl std::fmt::Display for SetTitle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\x1b]0;{}\x07", self.0)
    }
}

fn _assert_traits_are_object_safe() {
    fn is_object_safe<T: ?Sized>() {}

    is_object_safe::<dyn Command>();
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_size_and_display() {
        assert_eq!(std::mem::size_of::<HideCursor>(), 0);
        assert_eq!(std::mem::size_of::<MoveTo>(), 4);

        assert_eq!(format!("{}", HideCursor), "\x1b[?25l");
        assert_eq!(format!("{}", ShowCursor), "\x1b[?25h");
        assert_eq!(format!("{}", ClearScreen), "\x1b[2J\x1b[1;1H");
        assert_eq!(format!("{}", EraseLine), "\x1b[2K");
        assert_eq!(format!("{}", MoveToLineStart), "\x1b[G");
        assert_eq!(format!("{}", ResetColor), "\x1b[0;0m");
    }

    #[test]
    fn test_move_to_is_one_based() {
        assert_eq!(format!("{}", MoveTo(0, 0)), "\x1b[1;1H");
        assert_eq!(format!("{}", MoveTo(17, 4)), "\x1b[5;18H");
        // The +1 translation must not wrap at the extreme.
        assert_eq!(
            format!("{}", MoveTo(u16::MAX, u16::MAX)),
            "\x1b[65536;65536H"
        );
    }

    #[test]
    fn test_colors_and_title() {
        assert_eq!(format!("{}", SetColor(Color::DarkRed)), "\x1b[0;31m");
        assert_eq!(format!("{}", SetColor(Color::Red)), "\x1b[0;91m");
        assert_eq!(format!("{}", SetBold(Color::DarkCyan)), "\x1b[1;36m");
        assert_eq!(
            format!("{}", SetBackground(Background::DarkBlue)),
            "\x1b[44m"
        );
        assert_eq!(format!("{}", SetBackground(Background::White)), "\x1b[107m");
        assert_eq!(format!("{}", SetTitle("dungeon")), "\x1b]0;dungeon\x07");
    }
}
