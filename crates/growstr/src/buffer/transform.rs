//! Whole-buffer transformations and capacity control.
//!
//! Reversal and swapping never allocate. `reserve` and a growing `resize`
//! go through the same fallible growth as the edits, while truncation and
//! `clear` keep the capacity and refill vacated slots with the terminator.

use core::mem;

use super::Buffer;
use crate::{element::Element, error::AllocError};

impl<T: Element> Buffer<T> {
    /// Reverses the content in place.
    pub fn reverse(&mut self) {
        self.as_mut_slice().reverse();
    }

    /// Reverses the elements in `start..=end` in place.
    ///
    /// No-op unless `start < end < len()`.
    pub fn reverse_range(&mut self, start: usize, end: usize) {
        if start >= end || end >= self.len {
            return;
        }
        self.as_mut_slice()[start..=end].reverse();
    }

    /// Exchanges the full state of two buffers.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Grows the capacity by exactly `extra` slots. Content is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the storage cannot grow.
    pub fn reserve(&mut self, extra: usize) -> Result<(), AllocError> {
        if extra == 0 {
            return Ok(());
        }
        self.slots.grow(extra)
    }

    /// Releases every slot past the terminator.
    pub fn shrink(&mut self) {
        if self.capacity() == self.len + 1 {
            return;
        }
        self.slots.shrink_to(self.len + 1);
    }

    /// Sets the length to `new_len`.
    ///
    /// Shrinking truncates and keeps the capacity. Growing appends copies of
    /// `value`, allocating by the growth policy.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer needs to grow and cannot.
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), AllocError> {
        if new_len <= self.len {
            self.truncate_len(new_len);
            return Ok(());
        }
        let added = new_len - self.len;
        self.ensure_room(added)?;
        self.slots.fill(self.len..new_len, value);
        self.len = new_len;
        self.debug_check();
        Ok(())
    }

    /// [`Buffer::resize`] with the terminator as the fill value.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer needs to grow and cannot.
    pub fn resize_default(&mut self, new_len: usize) -> Result<(), AllocError> {
        self.resize(new_len, T::TERMINATOR)
    }

    /// Empties the buffer, keeping its capacity.
    pub fn clear(&mut self) {
        self.truncate_len(0);
    }

    /// Drops the content and storage and starts over as a new buffer with
    /// the same growth policy.
    pub fn reset(&mut self) {
        log::debug!(
            "resetting buffer of {} elements and {} slots",
            self.len,
            self.capacity()
        );
        *self = Self::with_policy(self.policy);
    }
}

#[cfg(test)]
mod tests {
    use crate::{ByteBuffer, GrowthPolicy, WideBuffer};

    #[test]
    fn reverse_range_inclusive() {
        let mut buf = ByteBuffer::from("Hello");
        buf.reverse_range(0, 4);
        assert_eq!(buf, "olleH");
        buf.reverse_range(1, 3);
        assert_eq!(buf, "oellH");
        buf.reverse_range(0, 1);
        assert_eq!(buf, "eollH");
    }

    #[test]
    fn reverse_range_noops() {
        let mut buf = ByteBuffer::from("abc");
        buf.reverse_range(2, 2);
        buf.reverse_range(2, 1);
        buf.reverse_range(0, 3);
        assert_eq!(buf, "abc");

        let mut one = ByteBuffer::from("x");
        one.reverse();
        one.reverse_range(0, 0);
        assert_eq!(one, "x");
    }

    #[test]
    fn reverse_is_an_involution() {
        let mut buf = ByteBuffer::from("stressed");
        buf.reverse();
        assert_eq!(buf, "desserts");
        buf.reverse();
        assert_eq!(buf, "stressed");
        assert_eq!(buf.as_terminated(), b"stressed\0");
    }

    #[test]
    fn swap_exchanges_everything() {
        let mut a = ByteBuffer::from("left");
        let mut b = ByteBuffer::with_policy(GrowthPolicy::compact());
        b.append("right side").unwrap();
        let (cap_a, cap_b) = (a.capacity(), b.capacity());
        a.swap(&mut b);
        assert_eq!(a, "right side");
        assert_eq!(b, "left");
        assert_eq!((a.capacity(), b.capacity()), (cap_b, cap_a));
        assert_eq!(a.policy(), GrowthPolicy::compact());
    }

    #[test]
    fn reserve_adds_exact_slots() {
        let mut buf = ByteBuffer::from("abc");
        buf.reserve(0).unwrap();
        assert_eq!(buf.capacity(), 4);
        buf.reserve(10).unwrap();
        assert_eq!(buf.capacity(), 14);
        assert_eq!(buf, "abc");
        assert!(buf.reserve(usize::MAX).is_err());
        assert_eq!(buf.capacity(), 14);
    }

    #[test]
    fn shrink_to_fit_content() {
        let mut buf = ByteBuffer::new();
        buf.append("growing").unwrap();
        buf.append("!").unwrap();
        assert!(buf.capacity() > 9);
        buf.shrink();
        assert_eq!(buf.capacity(), 9);
        assert_eq!(buf.as_terminated(), b"growing!\0");
        buf.shrink();
        assert_eq!(buf.capacity(), 9);
    }

    #[test]
    fn resize_both_directions() {
        let mut buf = ByteBuffer::from("abcdef");
        let cap = buf.capacity();
        buf.resize(3, b'?').unwrap();
        assert_eq!(buf, "abc");
        assert_eq!(buf.capacity(), cap);
        buf.resize(3, b'?').unwrap();
        assert_eq!(buf, "abc");
        buf.resize(5, b'?').unwrap();
        assert_eq!(buf, "abc??");
        assert!(buf.invariants_hold());
    }

    #[test]
    fn resize_default_pads_with_terminators() {
        let mut buf = WideBuffer::from_slice(&[1, 2]);
        buf.resize_default(4).unwrap();
        assert_eq!(buf.len(), 4);
        assert_eq!(buf.as_slice(), &[1, 2, 0, 0]);
        assert_eq!(buf.as_terminated(), &[1, 2, 0, 0, 0]);
    }

    #[test]
    fn failed_resize_keeps_length() {
        let mut buf = ByteBuffer::from("abc");
        assert!(buf.resize(usize::MAX, b'x').is_err());
        assert_eq!(buf, "abc");
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buf = ByteBuffer::from("content");
        let cap = buf.capacity();
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), cap);
        assert!(buf.invariants_hold());
        buf.resize_default(3).unwrap();
        assert_eq!(buf.as_slice(), &[0, 0, 0], "no stale content after clear");
    }

    #[test]
    fn reset_restores_policy_defaults() {
        let policy = GrowthPolicy {
            default_capacity: 32,
            ..GrowthPolicy::default()
        };
        let mut buf = ByteBuffer::with_policy(policy);
        buf.append_fill(b'x', 100).unwrap();
        buf.reset();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 32);
        assert_eq!(buf.policy(), policy);
    }
}
