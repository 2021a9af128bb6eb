//! The 16-color terminal palette.
//!
//! Both enumerations cover the same semantic set of colors: the eight dark
//! ANSI colors followed by their bright variants. What differs between
//! platforms is the numeric encoding, which is why each enumeration exposes
//! two of them: [`Color::sgr`] and [`Background::sgr`] produce the parameter
//! for an ANSI select-graphic-rendition sequence, while [`Color::attribute`]
//! and [`Background::attribute`] produce the 4-bit nibble used by the Windows
//! console's character attribute word. Callers address colors by name only
//! and never see the encodings.

/// A foreground color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    DarkRed,
    DarkGreen,
    DarkYellow,
    DarkBlue,
    DarkMagenta,
    DarkCyan,
    DarkWhite,
    Gray,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// Get the SGR parameter for this foreground color, i.e., 30–37 for the
    /// dark colors and 90–97 for the bright ones.
    pub const fn sgr(self) -> u8 {
        match self {
            Self::Black => 30,
            Self::DarkRed => 31,
            Self::DarkGreen => 32,
            Self::DarkYellow => 33,
            Self::DarkBlue => 34,
            Self::DarkMagenta => 35,
            Self::DarkCyan => 36,
            Self::DarkWhite => 37,
            Self::Gray => 90,
            Self::Red => 91,
            Self::Green => 92,
            Self::Yellow => 93,
            Self::Blue => 94,
            Self::Magenta => 95,
            Self::Cyan => 96,
            Self::White => 97,
        }
    }

    /// Get the Windows console attribute nibble for this color.
    ///
    /// The nibble packs blue, green, and red bits plus an intensity bit, so
    /// the bright variants are the dark value with bit 3 set.
    pub const fn attribute(self) -> u8 {
        match self {
            Self::Black => 0,
            Self::DarkBlue => 1,
            Self::DarkGreen => 2,
            Self::DarkCyan => 3,
            Self::DarkRed => 4,
            Self::DarkMagenta => 5,
            Self::DarkYellow => 6,
            Self::DarkWhite => 7,
            Self::Gray => 8,
            Self::Blue => 9,
            Self::Green => 10,
            Self::Cyan => 11,
            Self::Red => 12,
            Self::Magenta => 13,
            Self::Yellow => 14,
            Self::White => 15,
        }
    }
}

/// A background color.
///
/// Covers the same sixteen colors as [`Color`] under a different encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Background {
    Black,
    DarkRed,
    DarkGreen,
    DarkYellow,
    DarkBlue,
    DarkMagenta,
    DarkCyan,
    DarkWhite,
    Gray,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Background {
    /// Get the SGR parameter for this background color, i.e., 40–47 for the
    /// dark colors and 100–107 for the bright ones.
    pub const fn sgr(self) -> u8 {
        match self {
            Self::Black => 40,
            Self::DarkRed => 41,
            Self::DarkGreen => 42,
            Self::DarkYellow => 43,
            Self::DarkBlue => 44,
            Self::DarkMagenta => 45,
            Self::DarkCyan => 46,
            Self::DarkWhite => 47,
            Self::Gray => 100,
            Self::Red => 101,
            Self::Green => 102,
            Self::Yellow => 103,
            Self::Blue => 104,
            Self::Magenta => 105,
            Self::Cyan => 106,
            Self::White => 107,
        }
    }

    /// Get the Windows console attribute nibble for this color.
    ///
    /// The caller shifts the nibble into bits 4–7 of the attribute word.
    pub const fn attribute(self) -> u8 {
        match self {
            Self::Black => 0,
            Self::DarkBlue => 1,
            Self::DarkGreen => 2,
            Self::DarkCyan => 3,
            Self::DarkRed => 4,
            Self::DarkMagenta => 5,
            Self::DarkYellow => 6,
            Self::DarkWhite => 7,
            Self::Gray => 8,
            Self::Blue => 9,
            Self::Green => 10,
            Self::Cyan => 11,
            Self::Red => 12,
            Self::Magenta => 13,
            Self::Yellow => 14,
            Self::White => 15,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Background, Color};

    #[test]
    fn test_sgr_encodings() {
        assert_eq!(Color::Black.sgr(), 30);
        assert_eq!(Color::DarkWhite.sgr(), 37);
        assert_eq!(Color::Gray.sgr(), 90);
        assert_eq!(Color::White.sgr(), 97);

        assert_eq!(Background::Black.sgr(), 40);
        assert_eq!(Background::DarkWhite.sgr(), 47);
        assert_eq!(Background::Gray.sgr(), 100);
        assert_eq!(Background::White.sgr(), 107);
    }

    #[test]
    fn test_attribute_encodings() {
        // The console nibble is BGR order plus intensity, not RGB.
        assert_eq!(Color::DarkBlue.attribute(), 1);
        assert_eq!(Color::DarkRed.attribute(), 4);
        assert_eq!(Color::DarkWhite.attribute(), 7);
        assert_eq!(Color::Gray.attribute(), 8);
        assert_eq!(Color::Blue.attribute(), 9);
        assert_eq!(Color::White.attribute(), 15);

        // Bright is dark plus the intensity bit.
        assert_eq!(
            Background::Red.attribute(),
            Background::DarkRed.attribute() | 8,
            "bright background must be dark value with intensity bit"
        );
    }
}
