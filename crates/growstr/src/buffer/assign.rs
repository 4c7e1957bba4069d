//! Replacing a buffer's whole content.
//!
//! Every assignment builds the new storage first and swaps it in only once
//! it is complete, so a refused allocation keeps the old content. Assigning
//! an empty fragment is a no-op; use [`Buffer::clear`] to empty a buffer.
//! The resulting capacity is `len() + 1`.

use super::{Buffer, fragment, storage::Slots};
use crate::{
    element::{Element, terminated_len},
    error::AllocError,
};

impl<T: Element> Buffer<T> {
    /// Replaces the content with a copy of `source`.
    ///
    /// No-op when `source` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the new storage cannot be allocated.
    pub fn assign<S: AsRef<[T]> + ?Sized>(&mut self, source: &S) -> Result<(), AllocError> {
        self.adopt(source.as_ref())
    }

    /// Replaces the content with the first `count` elements of `source`.
    ///
    /// No-op when `count == 0` or `source` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the new storage cannot be allocated.
    pub fn assign_n<S: AsRef<[T]> + ?Sized>(
        &mut self,
        source: &S,
        count: usize,
    ) -> Result<(), AllocError> {
        let source = source.as_ref();
        self.adopt(&source[..count.min(source.len())])
    }

    /// Replaces the content with `count` elements of `source` starting at
    /// `start`, clamping `count` to what is available.
    ///
    /// No-op when `count == 0` or `start > source.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the new storage cannot be allocated.
    pub fn assign_range<S: AsRef<[T]> + ?Sized>(
        &mut self,
        source: &S,
        start: usize,
        count: usize,
    ) -> Result<(), AllocError> {
        let source = source.as_ref();
        match fragment(source.len(), start, count) {
            Some(range) => self.adopt(&source[range]),
            None => Ok(()),
        }
    }

    /// Replaces the content with `count` copies of `value`.
    ///
    /// No-op when `count == 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the new storage cannot be allocated.
    pub fn assign_fill(&mut self, value: T, count: usize) -> Result<(), AllocError> {
        if count == 0 {
            return Ok(());
        }
        let cap = crate::error::checked_extend(count, 1)?;
        self.slots = Slots::try_filled(value, count, cap)?;
        self.len = count;
        Ok(())
    }

    /// Replaces the content with the single element `value`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the new storage cannot be allocated.
    pub fn assign_elem(&mut self, value: T) -> Result<(), AllocError> {
        self.assign_fill(value, 1)
    }

    /// Replaces the content with a null-terminated sequence, read up to its
    /// first terminator.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the new storage cannot be allocated.
    pub fn assign_terminated(&mut self, seq: &[T]) -> Result<(), AllocError> {
        self.adopt(&seq[..terminated_len(seq)])
    }

    /// Replaces the content with its own `count` elements starting at
    /// `start`.
    ///
    /// Assigning the whole buffer to itself is detected and skipped; other
    /// fragments are copied into fresh storage before the old one is
    /// released.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the new storage cannot be allocated.
    pub fn assign_within(&mut self, start: usize, count: usize) -> Result<(), AllocError> {
        let Some(range) = fragment(self.len, start, count) else {
            return Ok(());
        };
        if range.is_empty() || range == (0..self.len) {
            return Ok(());
        }
        let slots = Slots::try_with_content(&self.as_slice()[range.clone()], range.len() + 1)?;
        self.slots = slots;
        self.len = range.len();
        Ok(())
    }

    fn adopt(&mut self, content: &[T]) -> Result<(), AllocError> {
        if content.is_empty() {
            return Ok(());
        }
        let slots = Slots::try_with_content(content, content.len() + 1)?;
        self.slots = slots;
        self.len = content.len();
        self.debug_check();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Buffer, ByteBuffer, CharBuffer};

    #[test]
    fn assign_replaces_and_tightens() {
        let mut buf = ByteBuffer::from("something long");
        buf.reserve(100).unwrap();
        buf.assign("short").unwrap();
        assert_eq!(buf, "short");
        assert_eq!(buf.capacity(), 6);
        assert_eq!(buf.compare("short"), 0);
    }

    #[test]
    fn assign_empty_is_noop() {
        let mut buf = ByteBuffer::from("keep");
        buf.assign("").unwrap();
        assert_eq!(buf, "keep");
        buf.assign_n("abc", 0).unwrap();
        assert_eq!(buf, "keep");
        buf.assign_fill(b'x', 0).unwrap();
        assert_eq!(buf, "keep");
        buf.assign_terminated(b"\0abc").unwrap();
        assert_eq!(buf, "keep");
    }

    #[test]
    fn assign_from_other_buffer() {
        let source = CharBuffer::from("pear");
        let mut buf = CharBuffer::from("apple");
        buf.assign(&source).unwrap();
        assert_eq!(buf, source);
        assert_eq!(buf.compare(&source), 0);
    }

    #[test]
    fn assign_n_clamps() {
        let mut buf = ByteBuffer::new();
        buf.assign_n("abcdef", 3).unwrap();
        assert_eq!(buf, "abc");
        buf.assign_n("xy", 10).unwrap();
        assert_eq!(buf, "xy");
    }

    #[test]
    fn assign_range_rules() {
        let mut buf = ByteBuffer::from("old");
        buf.assign_range("Hello world", 6, 50).unwrap();
        assert_eq!(buf, "world");

        buf.assign_range("Hello", 6, 2).unwrap();
        assert_eq!(buf, "world", "start past the end is a no-op");

        buf.assign_range("Hello", 1, 0).unwrap();
        assert_eq!(buf, "world", "zero count is a no-op");
    }

    #[test]
    fn assign_fill_and_elem() {
        let mut buf = Buffer::<u16>::new();
        buf.assign_fill(7, 3).unwrap();
        assert_eq!(buf.as_slice(), &[7, 7, 7]);
        assert_eq!(buf.capacity(), 4);
        buf.assign_elem(9).unwrap();
        assert_eq!(buf.as_slice(), &[9]);
    }

    #[test]
    fn assign_terminated_stops_at_zero() {
        let mut buf = ByteBuffer::new();
        buf.assign_terminated(b"abc\0def").unwrap();
        assert_eq!(buf, "abc");
    }

    #[test]
    fn assign_within_guards_self_assignment() {
        let mut buf = ByteBuffer::from("Hello world");
        buf.reserve(10).unwrap();
        let cap = buf.capacity();

        buf.assign_within(0, buf.len()).unwrap();
        assert_eq!(buf, "Hello world");
        assert_eq!(buf.capacity(), cap, "whole-buffer self assignment must not reallocate");

        buf.assign_within(6, 5).unwrap();
        assert_eq!(buf, "world");
        assert_eq!(buf.capacity(), 6);

        buf.assign_within(9, 1).unwrap();
        assert_eq!(buf, "world");
    }

    #[test]
    fn failed_fill_assignment_keeps_content() {
        let mut buf = ByteBuffer::from("intact");
        assert!(buf.assign_fill(b'x', usize::MAX).is_err());
        assert!(buf.assign_fill(b'x', usize::MAX / 2).is_err());
        assert_eq!(buf, "intact");
        assert!(buf.invariants_hold());
    }
}
