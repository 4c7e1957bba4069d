//! The character unit a [`Buffer`](crate::Buffer) is generic over.
//!
//! An [`Element`] has a zero value that doubles as the terminator written
//! one slot past the logical end of every buffer, and an integer ordinal used
//! by the three-way comparisons to report a signed difference.

use core::fmt::{self, Write as _};

use bstr::BStr;

/// A code unit that can be stored in a [`Buffer`](crate::Buffer).
///
/// Implemented for the common code-unit widths: `u8` (bytes / UTF-8),
/// `u16` (UTF-16), `u32` (UTF-32) and `char`.
pub trait Element: Copy + Eq + Ord + fmt::Debug {
    /// Sentinel stored at `storage[len]`. Always the zero value.
    const TERMINATOR: Self;

    /// Integer value of the code unit, used for signed comparison results.
    fn ordinal(self) -> i64;

    /// Returns `true` for the terminator value.
    #[inline]
    fn is_terminator(self) -> bool {
        self == Self::TERMINATOR
    }

    /// Signed difference `self - other` over the ordinals.
    #[inline]
    fn diff(self, other: Self) -> i64 {
        self.ordinal() - other.ordinal()
    }

    /// Writes a `Debug` rendering of a run of elements.
    ///
    /// The default renders a plain list; text-like widths override this to
    /// print a quoted string.
    ///
    /// # Errors
    ///
    /// Propagates formatter errors.
    fn fmt_debug(content: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(content).finish()
    }
}

impl Element for u8 {
    const TERMINATOR: Self = 0;

    #[inline]
    fn ordinal(self) -> i64 {
        i64::from(self)
    }

    fn fmt_debug(content: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(BStr::new(content), f)
    }
}

impl Element for u16 {
    const TERMINATOR: Self = 0;

    #[inline]
    fn ordinal(self) -> i64 {
        i64::from(self)
    }

    fn fmt_debug(content: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for ch in char::decode_utf16(content.iter().copied()) {
            let ch = ch.unwrap_or(char::REPLACEMENT_CHARACTER);
            for escaped in ch.escape_debug() {
                f.write_char(escaped)?;
            }
        }
        f.write_char('"')
    }
}

impl Element for u32 {
    const TERMINATOR: Self = 0;

    #[inline]
    fn ordinal(self) -> i64 {
        i64::from(self)
    }
}

impl Element for char {
    const TERMINATOR: Self = '\0';

    #[inline]
    fn ordinal(self) -> i64 {
        i64::from(u32::from(self))
    }

    fn fmt_debug(content: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for ch in content {
            for escaped in ch.escape_debug() {
                f.write_char(escaped)?;
            }
        }
        f.write_char('"')
    }
}

/// Length of a null-terminated sequence: the index of the first terminator,
/// or the whole slice when it carries none.
#[must_use]
pub fn terminated_len<T: Element>(seq: &[T]) -> usize {
    seq.iter()
        .position(|&el| el.is_terminator())
        .unwrap_or(seq.len())
}
