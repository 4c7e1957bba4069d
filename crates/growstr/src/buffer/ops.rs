//! Standard trait impls: conversions, comparison, formatting, iteration and
//! the operator shorthands.
//!
//! Trait methods cannot report [`AllocError`], so the impls that may grow a
//! buffer (`Clone`, `Extend`, `FromIterator`, `AddAssign`, `From`) panic on
//! allocation failure the way `Vec` does. Use the fallible inherent methods
//! when that matters.

use alloc::vec::Vec;
use core::{
    cmp::Ordering,
    fmt::{self, Write as _},
    hash::{Hash, Hasher},
    ops::{AddAssign, Index, Not, SubAssign},
    slice,
};

use bstr::BStr;

use super::{Buffer, storage::Slots};
use crate::{element::Element, error::AllocError};

#[track_caller]
fn infallible<R>(result: Result<R, AllocError>) -> R {
    match result {
        Ok(value) => value,
        Err(err) => panic!("buffer allocation failed: {err}"),
    }
}

impl<T: Element> Buffer<T> {
    /// Fallible [`Clone`]: same content, capacity and policy.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the copy cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, AllocError> {
        Ok(Self {
            slots: Slots::try_with_content(self.as_slice(), self.capacity())?,
            len: self.len,
            policy: self.policy,
        })
    }
}

impl<T: Element> Default for Buffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Clone for Buffer<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            len: self.len,
            policy: self.policy,
        }
    }
}

impl<T: Element> fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::fmt_debug(self.as_slice(), f)
    }
}

impl fmt::Display for Buffer<u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(BStr::new(self.as_slice()), f)
    }
}

impl fmt::Display for Buffer<u16> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        char::decode_utf16(self.iter().copied())
            .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
            .try_for_each(|c| f.write_char(c))
    }
}

impl fmt::Display for Buffer<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|&c| f.write_char(c))
    }
}

impl<T: Element> PartialEq for Buffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Element> Eq for Buffer<T> {}

impl<T: Element> PartialOrd for Buffer<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders by the sign of [`Buffer::compare`].
impl<T: Element> Ord for Buffer<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other).cmp(&0)
    }
}

impl<T: Element + Hash> Hash for Buffer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Element> PartialEq<[T]> for Buffer<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Element> PartialEq<&[T]> for Buffer<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: Element, const N: usize> PartialEq<[T; N]> for Buffer<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<str> for Buffer<u8> {
    fn eq(&self, other: &str) -> bool {
        self.as_slice() == other.as_bytes()
    }
}

impl PartialEq<&str> for Buffer<u8> {
    fn eq(&self, other: &&str) -> bool {
        self.as_slice() == other.as_bytes()
    }
}

impl PartialEq<str> for Buffer<char> {
    fn eq(&self, other: &str) -> bool {
        self.iter().copied().eq(other.chars())
    }
}

impl PartialEq<&str> for Buffer<char> {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

/// Saturating access, see [`Buffer::saturate`].
impl<T: Element> Index<usize> for Buffer<T> {
    type Output = T;

    fn index(&self, pos: usize) -> &T {
        self.at(pos)
    }
}

impl<T: Element> AsRef<[T]> for Buffer<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Element> From<&[T]> for Buffer<T> {
    fn from(seq: &[T]) -> Self {
        Self::from_slice(seq)
    }
}

impl<T: Element> From<Vec<T>> for Buffer<T> {
    fn from(mut data: Vec<T>) -> Self {
        data.push(T::TERMINATOR);
        Self::from_terminated_vec(data)
    }
}

impl From<&str> for Buffer<u8> {
    fn from(s: &str) -> Self {
        Self::from_slice(s.as_bytes())
    }
}

impl From<&str> for Buffer<u16> {
    fn from(s: &str) -> Self {
        s.encode_utf16().collect()
    }
}

impl From<&str> for Buffer<char> {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl<T: Element> Extend<T> for Buffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        infallible(self.ensure_room(iter.size_hint().0));
        for value in iter {
            infallible(self.append_elem(value));
        }
    }
}

impl<'a, T: Element> Extend<&'a T> for Buffer<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Element> FromIterator<T> for Buffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buf = Self::new();
        buf.extend(iter);
        buf
    }
}

impl<'a, T: Element> IntoIterator for &'a Buffer<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Element> AddAssign<T> for Buffer<T> {
    fn add_assign(&mut self, value: T) {
        infallible(self.append_elem(value));
    }
}

impl<T: Element> AddAssign<&[T]> for Buffer<T> {
    fn add_assign(&mut self, seq: &[T]) {
        infallible(self.append(seq));
    }
}

impl<T: Element> AddAssign<&Buffer<T>> for Buffer<T> {
    fn add_assign(&mut self, other: &Buffer<T>) {
        infallible(self.append(other));
    }
}

impl AddAssign<&str> for Buffer<u8> {
    fn add_assign(&mut self, s: &str) {
        infallible(self.append(s));
    }
}

impl AddAssign<&str> for Buffer<char> {
    fn add_assign(&mut self, s: &str) {
        self.extend(s.chars());
    }
}

/// Removes every occurrence of the element.
impl<T: Element> SubAssign<T> for Buffer<T> {
    fn sub_assign(&mut self, value: T) {
        self.remove(value);
    }
}

/// Reverses the content.
impl<T: Element> Not for Buffer<T> {
    type Output = Self;

    fn not(mut self) -> Self {
        self.reverse();
        self
    }
}

impl fmt::Write for Buffer<u8> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s).map_err(|_| fmt::Error)
    }
}

impl fmt::Write for Buffer<char> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.ensure_room(s.chars().count()).map_err(|_| fmt::Error)?;
        s.chars()
            .try_for_each(|c| self.append_elem(c))
            .map_err(|_| fmt::Error)
    }
}
