use alloc::collections::TryReserveError;

use thiserror::Error;

/// Failure to obtain storage for a growing or reassigned buffer.
///
/// This is the only error any buffer operation reports. When it is returned
/// the buffer is exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocError {
    /// The requested slot count does not fit in `usize`.
    #[error("capacity overflow: cannot extend {len} slots by {additional}")]
    CapacityOverflow {
        /// Slot or element count the operation started from.
        len: usize,
        /// Amount that was to be added.
        additional: usize,
    },
    /// The allocator refused the request.
    #[error("could not reserve {requested} element slots")]
    Exhausted {
        /// Total slot count that was requested.
        requested: usize,
        /// Underlying reservation failure.
        #[source]
        source: TryReserveError,
    },
}

/// Checked `len + additional`, reported as [`AllocError::CapacityOverflow`].
pub(crate) fn checked_extend(len: usize, additional: usize) -> Result<usize, AllocError> {
    len.checked_add(additional)
        .ok_or(AllocError::CapacityOverflow { len, additional })
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn checked_extend_reports_overflow() {
        assert_eq!(checked_extend(3, 4), Ok(7));
        let err = checked_extend(usize::MAX, 1).unwrap_err();
        assert_eq!(
            err,
            AllocError::CapacityOverflow {
                len: usize::MAX,
                additional: 1
            }
        );
        assert!(err.to_string().starts_with("capacity overflow"));
    }
}
