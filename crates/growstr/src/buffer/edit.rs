//! Structural edits: append, insert, erase, remove and replace.
//!
//! Inserts open a gap with one direction-aware block move of the tail and
//! then copy the fragment in. Erases move the tail back over the hole. A
//! fallible edit reserves everything it needs before the first element
//! moves, so `Err` always means "nothing happened".

use super::{Buffer, fragment, storage::try_snapshot};
use crate::{
    element::{Element, terminated_len},
    error::AllocError,
};

impl<T: Element> Buffer<T> {
    /// Appends a copy of `source`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer needs to grow and cannot.
    pub fn append<S: AsRef<[T]> + ?Sized>(&mut self, source: &S) -> Result<(), AllocError> {
        self.splice_in(self.len, source.as_ref())
    }

    /// Appends the first `count` elements of `source`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer needs to grow and cannot.
    pub fn append_n<S: AsRef<[T]> + ?Sized>(
        &mut self,
        source: &S,
        count: usize,
    ) -> Result<(), AllocError> {
        let source = source.as_ref();
        self.splice_in(self.len, &source[..count.min(source.len())])
    }

    /// Appends `count` elements of `source` starting at `start`.
    ///
    /// `count` is clamped to what `source` holds; a `start` past its end is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer needs to grow and cannot.
    pub fn append_range<S: AsRef<[T]> + ?Sized>(
        &mut self,
        source: &S,
        start: usize,
        count: usize,
    ) -> Result<(), AllocError> {
        self.insert_range(source, self.len, start, count)
    }

    /// Appends one element.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer needs to grow and cannot.
    pub fn append_elem(&mut self, value: T) -> Result<(), AllocError> {
        self.splice_in(self.len, &[value])
    }

    /// Appends `count` copies of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer needs to grow and cannot.
    pub fn append_fill(&mut self, value: T, count: usize) -> Result<(), AllocError> {
        self.insert_fill(value, self.len, count)
    }

    /// Appends a null-terminated sequence, read up to its first terminator.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer needs to grow and cannot.
    pub fn append_terminated(&mut self, seq: &[T]) -> Result<(), AllocError> {
        self.splice_in(self.len, &seq[..terminated_len(seq)])
    }

    /// Appends a copy of this buffer's own `count` elements from `start`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the snapshot or the growth cannot be
    /// allocated.
    pub fn append_within(&mut self, start: usize, count: usize) -> Result<(), AllocError> {
        self.insert_within(self.len, start, count)
    }

    /// Alias of [`Buffer::append_elem`].
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer needs to grow and cannot.
    pub fn push_back(&mut self, value: T) -> Result<(), AllocError> {
        self.append_elem(value)
    }

    /// Inserts `value` at the front.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer needs to grow and cannot.
    pub fn push_front(&mut self, value: T) -> Result<(), AllocError> {
        self.insert_elem(value, 0)
    }

    /// Drops the last `count` elements (all of them if fewer remain).
    pub fn pop_back(&mut self, count: usize) {
        let count = count.min(self.len);
        self.erase(self.len - count, count);
    }

    /// Drops the first `count` elements (all of them if fewer remain).
    pub fn pop_front(&mut self, count: usize) {
        self.erase(0, count);
    }

    /// Inserts a copy of `source` before position `pos`.
    ///
    /// No-op when `pos > len()` or `source` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer needs to grow and cannot.
    pub fn insert<S: AsRef<[T]> + ?Sized>(
        &mut self,
        source: &S,
        pos: usize,
    ) -> Result<(), AllocError> {
        if pos > self.len {
            return Ok(());
        }
        self.splice_in(pos, source.as_ref())
    }

    /// Inserts the first `count` elements of `source` before `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer needs to grow and cannot.
    pub fn insert_n<S: AsRef<[T]> + ?Sized>(
        &mut self,
        source: &S,
        pos: usize,
        count: usize,
    ) -> Result<(), AllocError> {
        let source = source.as_ref();
        self.insert(&source[..count.min(source.len())], pos)
    }

    /// Inserts `count` elements of `source` starting at `start` before
    /// `pos`.
    ///
    /// `count` is clamped to the source; no-op when `pos > len()`,
    /// `start > source.len()`, or nothing is left to copy.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer needs to grow and cannot.
    pub fn insert_range<S: AsRef<[T]> + ?Sized>(
        &mut self,
        source: &S,
        pos: usize,
        start: usize,
        count: usize,
    ) -> Result<(), AllocError> {
        let source = source.as_ref();
        match fragment(source.len(), start, count) {
            Some(range) => self.insert(&source[range], pos),
            None => Ok(()),
        }
    }

    /// Inserts one element before `pos`; no-op when `pos > len()`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer needs to grow and cannot.
    pub fn insert_elem(&mut self, value: T, pos: usize) -> Result<(), AllocError> {
        self.insert(&[value], pos)
    }

    /// Inserts `count` copies of `value` before `pos`.
    ///
    /// No-op when `pos > len()` or `count == 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer needs to grow and cannot.
    pub fn insert_fill(&mut self, value: T, pos: usize, count: usize) -> Result<(), AllocError> {
        if pos > self.len || count == 0 {
            return Ok(());
        }
        self.open_gap(pos, count)?;
        self.slots.fill(pos..pos + count, value);
        Ok(())
    }

    /// Inserts a copy of this buffer's own `count` elements from `start`
    /// before `pos`.
    ///
    /// The fragment is copied aside first: opening the gap moves the very
    /// elements it would otherwise be read from.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the snapshot or the growth cannot be
    /// allocated.
    pub fn insert_within(&mut self, pos: usize, start: usize, count: usize) -> Result<(), AllocError> {
        if pos > self.len {
            return Ok(());
        }
        let Some(range) = fragment(self.len, start, count) else {
            return Ok(());
        };
        if range.is_empty() {
            return Ok(());
        }
        let snapshot = try_snapshot(&self.as_slice()[range])?;
        self.splice_in(pos, &snapshot)
    }

    /// Removes `count` elements starting at `pos`, clamping `count` to the
    /// end of the buffer. Capacity is unchanged.
    ///
    /// No-op when `pos >= len()`.
    pub fn erase(&mut self, pos: usize, count: usize) {
        if pos >= self.len || count == 0 {
            return;
        }
        let count = count.min(self.len - pos);
        self.slots.shift(pos + count..self.len, pos);
        self.truncate_len(self.len - count);
    }

    /// Removes the element at `pos`; no-op when `pos >= len()`.
    pub fn erase_at(&mut self, pos: usize) {
        self.erase(pos, 1);
    }

    /// Keeps only `count` elements starting at `start`, in place.
    ///
    /// No-op when `start >= len()` or `count == 0`. Capacity is unchanged.
    pub fn retain_range(&mut self, start: usize, count: usize) {
        if start >= self.len || count == 0 {
            return;
        }
        let count = count.min(self.len - start);
        self.slots.shift(start..start + count, 0);
        self.truncate_len(count);
    }

    /// Removes every occurrence of `value`, preserving the order of the
    /// rest. Returns how many elements were removed.
    pub fn remove(&mut self, value: T) -> usize {
        self.remove_in(value, 0, self.len)
    }

    /// Removes every occurrence of `value` among `count` elements starting
    /// at `start`, in a single stable left-to-right pass.
    ///
    /// No-op (returning 0) when the buffer is empty, `count == 0`, `value`
    /// is the terminator, or `start >= len()`.
    pub fn remove_in(&mut self, value: T, start: usize, count: usize) -> usize {
        if self.is_empty() || count == 0 || value.is_terminator() || start >= self.len {
            return 0;
        }
        let end = start + count.min(self.len - start);
        let content = self.slots.as_mut_slice();
        let mut write = start;
        for read in start..end {
            let el = content[read];
            if el != value {
                content[write] = el;
                write += 1;
            }
        }
        let removed = end - write;
        if removed > 0 {
            self.slots.shift(end..self.len, write);
            self.truncate_len(self.len - removed);
        }
        removed
    }

    /// Overwrites the element at `pos`; no-op when `pos >= len()`.
    pub fn replace_at(&mut self, pos: usize, value: T) {
        if let Some(slot) = self.as_mut_slice().get_mut(pos) {
            *slot = value;
        }
    }

    /// Replaces `count` elements starting at `start` with a copy of
    /// `replacement`.
    ///
    /// No-op when `start >= len()` or the range runs past the end.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer needs to grow and cannot; the
    /// content is then unchanged.
    pub fn replace_range<S: AsRef<[T]> + ?Sized>(
        &mut self,
        start: usize,
        count: usize,
        replacement: &S,
    ) -> Result<(), AllocError> {
        if !self.range_is_valid(start, count) {
            return Ok(());
        }
        self.splice_over(start, count, replacement.as_ref())
    }

    /// Replaces `count` elements starting at `start` with a copy of this
    /// buffer's own `src_count` elements from `src_start`.
    ///
    /// Same validity rules as [`Buffer::replace_range`]; the source fragment
    /// is clamped and snapshotted before anything moves.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the snapshot or the growth cannot be
    /// allocated.
    pub fn replace_range_within(
        &mut self,
        start: usize,
        count: usize,
        src_start: usize,
        src_count: usize,
    ) -> Result<(), AllocError> {
        if !self.range_is_valid(start, count) {
            return Ok(());
        }
        let Some(src) = fragment(self.len, src_start, src_count) else {
            return Ok(());
        };
        let snapshot = try_snapshot(&self.as_slice()[src])?;
        self.splice_over(start, count, &snapshot)
    }

    /// Replaces the first occurrence of `needle` with `replacement`.
    ///
    /// Returns whether a match was found.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the buffer needs to grow and cannot.
    pub fn replace_first<N, R>(&mut self, needle: &N, replacement: &R) -> Result<bool, AllocError>
    where
        N: AsRef<[T]> + ?Sized,
        R: AsRef<[T]> + ?Sized,
    {
        let needle = needle.as_ref();
        let pos = self.find(needle);
        if pos == self.len {
            return Ok(false);
        }
        self.splice_over(pos, needle.len(), replacement.as_ref())?;
        Ok(true)
    }

    /// Overwrites every `from` with `to`. Returns the number of changes.
    pub fn replace_elem(&mut self, from: T, to: T) -> usize {
        self.replace_elem_from(from, to, 0)
    }

    /// Overwrites every `from` at or after `start` with `to`.
    ///
    /// No-op when `start >= len()`.
    pub fn replace_elem_from(&mut self, from: T, to: T, start: usize) -> usize {
        self.replace_elem_in(from, to, start, self.len.saturating_sub(start))
    }

    /// Overwrites every `from` among `count` elements starting at `start`
    /// with `to`.
    ///
    /// No-op when `start >= len()` or the range runs past the end.
    pub fn replace_elem_in(&mut self, from: T, to: T, start: usize, count: usize) -> usize {
        if !self.range_is_valid(start, count) {
            return 0;
        }
        let mut replaced = 0;
        for el in &mut self.as_mut_slice()[start..start + count] {
            if *el == from {
                *el = to;
                replaced += 1;
            }
        }
        replaced
    }

    fn range_is_valid(&self, start: usize, count: usize) -> bool {
        start < self.len && count <= self.len - start
    }

    /// Copies `content` into a gap opened at `pos`.
    fn splice_in(&mut self, pos: usize, content: &[T]) -> Result<(), AllocError> {
        if content.is_empty() {
            return Ok(());
        }
        self.open_gap(pos, content.len())?;
        self.slots.write(pos, content);
        Ok(())
    }

    /// Erases `removed` elements at `pos` and inserts `content` there.
    ///
    /// Growth happens up front, so the erase never runs unless the insert is
    /// guaranteed to fit.
    fn splice_over(&mut self, pos: usize, removed: usize, content: &[T]) -> Result<(), AllocError> {
        if content.len() > removed {
            self.ensure_room(content.len() - removed)?;
        }
        self.erase(pos, removed);
        self.splice_in(pos, content)
    }
}
