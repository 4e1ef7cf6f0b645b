//! Byte classification.

use crate::peeve::PeeveKind;

/// What a single byte is, as far as the scanner cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteClass {
    /// C0 controls other than tab, LF, FF, CR; also DEL
    Control,
    Tab,
    Newline,
    FormFeed,
    CarriageReturn,
    Space,
    /// Printable ASCII, `0x21..=0x7E`
    Visible,
    /// `0x80..=0xFF`, passed through untouched
    HighBit,
}

impl ByteClass {
    pub fn of(byte: u8) -> Self {
        match byte {
            0x09 => ByteClass::Tab,
            0x0A => ByteClass::Newline,
            0x0C => ByteClass::FormFeed,
            0x0D => ByteClass::CarriageReturn,
            0x20 => ByteClass::Space,
            0x00..=0x1F | 0x7F => ByteClass::Control,
            0x21..=0x7E => ByteClass::Visible,
            0x80..=0xFF => ByteClass::HighBit,
        }
    }

    /// The peeve reported for this byte wherever it appears, if any.
    pub fn peeve(self) -> Option<PeeveKind> {
        match self {
            ByteClass::Control => Some(PeeveKind::AsciiControl),
            ByteClass::FormFeed => Some(PeeveKind::FormFeed),
            ByteClass::CarriageReturn => Some(PeeveKind::CarriageReturn),
            _ => None,
        }
    }

    /// Tab or space.
    pub fn is_blank(self) -> bool {
        matches!(self, ByteClass::Tab | ByteClass::Space)
    }
}
