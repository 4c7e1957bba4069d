//! Owned slot array backing a [`Buffer`](super::Buffer).
//!
//! Every slot is initialized: slots past the logical length hold the
//! terminator value, so the vector length *is* the buffer capacity. All
//! allocation goes through [`Vec::try_reserve_exact`]; a refused request
//! leaves the slots untouched.

use alloc::{vec, vec::Vec};
use core::ops::Range;

use crate::{
    element::Element,
    error::{AllocError, checked_extend},
};

#[derive(Clone)]
pub(crate) struct Slots<T> {
    data: Vec<T>,
}

impl<T: Element> Slots<T> {
    /// `cap` terminator-filled slots. Aborts on allocation failure like `vec!`.
    pub(crate) fn new(cap: usize) -> Self {
        Self {
            data: vec![T::TERMINATOR; cap],
        }
    }

    /// Adopts `data` as-is; its length becomes the capacity.
    pub(crate) fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// `cap` slots holding `content` followed by terminators.
    ///
    /// `cap` must exceed `content.len()`.
    pub(crate) fn try_with_content(content: &[T], cap: usize) -> Result<Self, AllocError> {
        debug_assert!(cap > content.len(), "no room for terminator");
        let mut data = Vec::new();
        reserve_exact(&mut data, cap)?;
        data.extend_from_slice(content);
        data.resize(cap, T::TERMINATOR);
        Ok(Self { data })
    }

    /// `cap` slots holding `count` copies of `value` followed by terminators.
    pub(crate) fn try_filled(value: T, count: usize, cap: usize) -> Result<Self, AllocError> {
        debug_assert!(cap > count, "no room for terminator");
        let mut data = Vec::new();
        reserve_exact(&mut data, cap)?;
        data.resize(count, value);
        data.resize(cap, T::TERMINATOR);
        Ok(Self { data })
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Adds exactly `extra` terminator slots at the end.
    pub(crate) fn grow(&mut self, extra: usize) -> Result<(), AllocError> {
        let old = self.data.len();
        let new = checked_extend(old, extra)?;
        reserve_exact(&mut self.data, extra)?;
        self.data.resize(new, T::TERMINATOR);
        log::trace!("buffer storage grew from {old} to {new} slots");
        Ok(())
    }

    /// Drops every slot at or past `cap` and returns the spare allocation.
    pub(crate) fn shrink_to(&mut self, cap: usize) {
        let old = self.data.len();
        self.data.truncate(cap);
        self.data.shrink_to_fit();
        log::debug!("buffer storage shrunk from {old} to {} slots", self.data.len());
    }

    /// Direction-aware block move inside the slots.
    ///
    /// Source and destination may overlap in either direction.
    #[inline]
    pub(crate) fn shift(&mut self, src: Range<usize>, dest: usize) {
        self.data.copy_within(src, dest);
    }

    #[inline]
    pub(crate) fn write(&mut self, at: usize, content: &[T]) {
        self.data[at..at + content.len()].copy_from_slice(content);
    }

    #[inline]
    pub(crate) fn fill(&mut self, range: Range<usize>, value: T) {
        self.data[range].fill(value);
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

/// Private copy of `content`, taken before the slots it came from are
/// rearranged.
pub(crate) fn try_snapshot<T: Copy>(content: &[T]) -> Result<Vec<T>, AllocError> {
    let mut copy = Vec::new();
    reserve_exact(&mut copy, content.len())?;
    copy.extend_from_slice(content);
    Ok(copy)
}

fn reserve_exact<T>(data: &mut Vec<T>, additional: usize) -> Result<(), AllocError> {
    data.try_reserve_exact(additional).map_err(|source| {
        let requested = data.len().saturating_add(additional);
        log::warn!("buffer storage request for {requested} slots refused: {source}");
        AllocError::Exhausted { requested, source }
    })
}
