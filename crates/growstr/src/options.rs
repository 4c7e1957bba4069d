/// Allocation policy shared by every growing operation of a buffer.
///
/// The policy is carried by each buffer (and copied by `Clone`), so buffers
/// built for different workloads can coexist.
///
/// # Examples
///
/// ```rust
/// use growstr::{ByteBuffer, GrowthPolicy};
///
/// let policy = GrowthPolicy {
///     growth_increment: 64,
///     ..Default::default()
/// };
/// let mut buf = ByteBuffer::with_policy(policy);
/// buf.append("hello, growing world").unwrap();
/// assert_eq!(buf.capacity(), 8 + 20 + 64);
/// ```
///
/// # Default
///
/// `default_capacity = 8`, `growth_increment = 8192`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Slot count of a default-constructed or reset buffer, terminator
    /// included.
    ///
    /// Values below 1 are raised to 1 so the terminator always fits.
    ///
    /// # Default
    ///
    /// `8`
    pub default_capacity: usize,

    /// Extra slots added on top of the strictly needed amount whenever an
    /// append or insert outgrows the current capacity.
    ///
    /// A large increment keeps many small edits on a long buffer from
    /// reallocating each time, at the cost of slack memory.
    ///
    /// # Default
    ///
    /// `8192`
    pub growth_increment: usize,
}

impl GrowthPolicy {
    /// Default slot count for new buffers.
    pub const DEFAULT_CAPACITY: usize = 8;
    /// Default growth increment.
    pub const DEFAULT_INCREMENT: usize = 8192;

    /// A policy that grows by small steps, for many short-lived buffers.
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            default_capacity: Self::DEFAULT_CAPACITY,
            growth_increment: 16,
        }
    }

    /// Slot count used for an empty buffer under this policy.
    #[inline]
    pub(crate) fn initial_slots(self) -> usize {
        self.default_capacity.max(1)
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            default_capacity: Self::DEFAULT_CAPACITY,
            growth_increment: Self::DEFAULT_INCREMENT,
        }
    }
}
