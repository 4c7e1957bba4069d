//! The growable, null-terminated [`Buffer`] and its construction and access
//! API.
//!
//! # Invariants
//!
//! After every public operation returns:
//!
//! - `capacity() >= len() + 1`;
//! - the slot at index `len()` holds [`Element::TERMINATOR`];
//! - every slot past `len()` holds the terminator as well, so growing the
//!   logical length never exposes stale content.
//!
//! Operations given invalid positions or empty operands are defined no-ops.
//! Operations that may allocate return `Result<_, AllocError>` and leave the
//! buffer untouched on failure.
//!
//! # Sources and aliasing
//!
//! Sequence arguments are any `S: AsRef<[T]> + ?Sized`: slices, arrays,
//! other buffers, or `str` for byte buffers. A buffer can never be passed as
//! the source of its own `&mut self` method, so operations that copy from the
//! buffer into itself have dedicated `*_within` forms which snapshot the
//! fragment before the destination is touched.

mod assign;
mod edit;
mod ops;
mod search;
mod storage;
mod transform;

use alloc::vec::Vec;
use core::{mem, ops::Range, slice};

use self::storage::Slots;
use crate::{element::Element, error::AllocError, options::GrowthPolicy};

/// A growable sequence of `T` that always keeps a terminator one slot past
/// its content.
///
/// # Examples
///
/// ```rust
/// use growstr::ByteBuffer;
///
/// let mut buf = ByteBuffer::from("Hello world!");
/// buf.replace_first("Hello", "Goodbye").unwrap();
/// assert_eq!(buf, "Goodbye world!");
/// assert_eq!(buf.as_terminated().last(), Some(&0));
/// ```
pub struct Buffer<T: Element> {
    slots: Slots<T>,
    len: usize,
    policy: GrowthPolicy,
}

impl<T: Element> Buffer<T> {
    /// Creates an empty buffer with the default [`GrowthPolicy`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    /// Creates an empty buffer that allocates and grows according to
    /// `policy`.
    #[must_use]
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            slots: Slots::new(policy.initial_slots()),
            len: 0,
            policy,
        }
    }

    /// Creates an empty buffer with `capacity` slots, terminator included.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Slots::new(capacity.max(1)),
            len: 0,
            policy: GrowthPolicy::default(),
        }
    }

    /// Fallible form of [`Buffer::with_capacity`].
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the storage cannot be allocated.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        Ok(Self {
            slots: Slots::try_with_content(&[], capacity.max(1))?,
            len: 0,
            policy: GrowthPolicy::default(),
        })
    }

    /// Creates a buffer holding the single element `value`.
    #[must_use]
    pub fn from_elem(value: T) -> Self {
        let policy = GrowthPolicy::default();
        let mut slots = Slots::new(policy.initial_slots().max(2));
        slots.write(0, &[value]);
        Self {
            slots,
            len: 1,
            policy,
        }
    }

    /// Creates a buffer holding `count` copies of `value`, with capacity
    /// `count + 1`.
    ///
    /// # Panics
    ///
    /// Panics if the capacity overflows, like `Vec` does.
    #[must_use]
    pub fn filled(value: T, count: usize) -> Self {
        let mut data = Vec::with_capacity(count.saturating_add(1));
        data.resize(count, value);
        data.push(T::TERMINATOR);
        Self::from_terminated_vec(data)
    }

    /// Fallible form of [`Buffer::filled`].
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the capacity overflows or the storage cannot
    /// be allocated.
    pub fn try_filled(value: T, count: usize) -> Result<Self, AllocError> {
        let cap = crate::error::checked_extend(count, 1)?;
        Ok(Self {
            slots: Slots::try_filled(value, count, cap)?,
            len: count,
            policy: GrowthPolicy::default(),
        })
    }

    /// Creates a buffer holding a copy of `seq`, with capacity
    /// `seq.len() + 1`.
    ///
    /// Elements equal to the terminator are copied like any other; use
    /// [`Buffer::from_terminated`] to stop at the first one.
    #[must_use]
    pub fn from_slice(seq: &[T]) -> Self {
        let mut data = Vec::with_capacity(seq.len() + 1);
        data.extend_from_slice(seq);
        data.push(T::TERMINATOR);
        Self::from_terminated_vec(data)
    }

    /// Fallible form of [`Buffer::from_slice`].
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the storage cannot be allocated.
    pub fn try_from_slice(seq: &[T]) -> Result<Self, AllocError> {
        Ok(Self {
            slots: Slots::try_with_content(seq, seq.len() + 1)?,
            len: seq.len(),
            policy: GrowthPolicy::default(),
        })
    }

    /// Creates a buffer from a null-terminated sequence: everything before
    /// the first terminator, or all of `seq` when it contains none.
    #[must_use]
    pub fn from_terminated(seq: &[T]) -> Self {
        Self::from_slice(&seq[..crate::element::terminated_len(seq)])
    }

    /// Creates a buffer from `count` elements of `source` starting at
    /// `start`.
    ///
    /// `count` is clamped to what `source` holds past `start`. A `start`
    /// beyond the end of `source` yields a default empty buffer.
    #[must_use]
    pub fn from_range<S: AsRef<[T]> + ?Sized>(source: &S, start: usize, count: usize) -> Self {
        let source = source.as_ref();
        match fragment(source.len(), start, count) {
            Some(range) => Self::from_slice(&source[range]),
            None => Self::new(),
        }
    }

    /// Copies `count` elements starting at `start` into a new buffer.
    ///
    /// Same clamping rules as [`Buffer::from_range`].
    #[must_use]
    pub fn substring(&self, start: usize, count: usize) -> Self {
        Self::from_range(self, start, count)
    }

    fn from_terminated_vec(data: Vec<T>) -> Self {
        debug_assert_eq!(data.last(), Some(&T::TERMINATOR));
        let len = data.len() - 1;
        Self {
            slots: Slots::from_vec(data),
            len,
            policy: GrowthPolicy::default(),
        }
    }

    /// Number of logical elements, terminator excluded.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total allocated slots, terminator included. Always `> len()`.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Bytes occupied by the logical content.
    #[inline]
    #[must_use]
    pub fn size_in_bytes(&self) -> usize {
        self.len * mem::size_of::<T>()
    }

    /// The growth policy this buffer allocates with.
    #[inline]
    #[must_use]
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Replaces the growth policy used by future allocations.
    pub fn set_policy(&mut self, policy: GrowthPolicy) {
        self.policy = policy;
    }

    /// The logical content.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.slots.as_slice()[..self.len]
    }

    /// The logical content, mutably. The terminator is not reachable.
    #[inline]
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots.as_mut_slice()[..self.len]
    }

    /// The content followed by its terminator, for callers that expect a
    /// null-terminated sequence.
    #[inline]
    #[must_use]
    pub fn as_terminated(&self) -> &[T] {
        &self.slots.as_slice()[..=self.len]
    }

    /// Iterates over the logical content.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Index-saturation policy shared by every saturating accessor: any
    /// `pos` past the last element maps to the last element, and an empty
    /// buffer maps everything to the terminator slot at 0.
    #[inline]
    #[must_use]
    pub fn saturate(&self, pos: usize) -> usize {
        pos.min(self.len.saturating_sub(1))
    }

    /// Element at `pos`, saturated by [`Buffer::saturate`].
    #[inline]
    #[must_use]
    pub fn at(&self, pos: usize) -> &T {
        &self.slots.as_slice()[self.saturate(pos)]
    }

    /// Mutable element at `pos`, saturated by [`Buffer::saturate`].
    ///
    /// Returns `None` only for an empty buffer, whose sole slot is the
    /// terminator.
    #[must_use]
    pub fn at_mut(&mut self, pos: usize) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        let pos = self.saturate(pos);
        Some(&mut self.slots.as_mut_slice()[pos])
    }

    /// Checked access: `None` when `pos >= len()`.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: usize) -> Option<&T> {
        self.as_slice().get(pos)
    }

    /// Whether the element at the saturated position `pos` equals `value`.
    #[must_use]
    pub fn is_at(&self, value: T, pos: usize) -> bool {
        *self.at(pos) == value
    }

    /// First element, or the terminator when empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> &T {
        &self.slots.as_slice()[0]
    }

    /// Last element, or the terminator when empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> &T {
        self.at(self.len)
    }

    /// First element, mutably; `None` when empty.
    #[must_use]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Last element, mutably; `None` when empty.
    #[must_use]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Makes room for `additional` more elements, growing by the needed
    /// amount plus the policy increment once `len + additional` reaches the
    /// capacity. An increment too large to add grows by the needed amount
    /// only.
    fn ensure_room(&mut self, additional: usize) -> Result<(), AllocError> {
        let required = crate::error::checked_extend(self.len, additional)?;
        if required < self.capacity() {
            return Ok(());
        }
        let extra = additional
            .checked_add(self.policy.growth_increment)
            .unwrap_or(additional);
        self.slots.grow(extra)
    }

    /// Opens `count` slots at `pos` by moving the tail forward. The gap keeps
    /// whatever the move left there; callers overwrite it.
    fn open_gap(&mut self, pos: usize, count: usize) -> Result<(), AllocError> {
        debug_assert!(pos <= self.len);
        self.ensure_room(count)?;
        self.slots.shift(pos..self.len, pos + count);
        self.len += count;
        self.debug_check();
        Ok(())
    }

    /// Drops everything from `new_len` on, restoring terminators in the
    /// vacated slots.
    fn truncate_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.len);
        self.slots.fill(new_len..self.len, T::TERMINATOR);
        self.len = new_len;
        self.debug_check();
    }

    /// Whether the documented invariants hold.
    pub(crate) fn invariants_hold(&self) -> bool {
        self.capacity() > self.len
            && self.slots.as_slice()[self.len..]
                .iter()
                .all(|el| el.is_terminator())
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(self.invariants_hold(), "buffer invariants violated");
    }
}

/// Clamps `count` elements from `start` to a sequence of length `len`.
///
/// `None` when `start` lies past the end; an empty range when it sits
/// exactly at the end.
pub(crate) fn fragment(len: usize, start: usize, count: usize) -> Option<Range<usize>> {
    if start > len {
        return None;
    }
    Some(start..start + count.min(len - start))
}
