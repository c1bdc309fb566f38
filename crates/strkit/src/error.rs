use alloc::{collections::TryReserveError, vec::Vec};

use thiserror::Error;

/// Result alias used by every constructor that allocates.
pub type Result<T, E = TextError> = core::result::Result<T, E>;

/// Failure to build an owned buffer or container.
///
/// Absent input is not an error; it is reported as `None` by the operation
/// itself. The only failures are those of obtaining memory.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// The allocator refused a reservation.
    #[error("failed to reserve {requested} elements: {source}")]
    Alloc {
        /// Number of elements the operation tried to reserve.
        requested: usize,
        /// Error reported by the allocator.
        #[source]
        source: TryReserveError,
    },
    /// The length of the result exceeds what any buffer can hold.
    #[error("result length exceeds the maximum buffer size")]
    CapacityOverflow,
}

/// Reserve exactly `additional` more elements, reporting failure instead of
/// aborting.
///
/// A total that no allocation can satisfy (more than `isize::MAX` bytes) is
/// [`TextError::CapacityOverflow`] and never reaches the allocator.
pub(crate) fn try_reserve<T>(buffer: &mut Vec<T>, additional: usize) -> Result<()> {
    let max_len = isize::MAX.unsigned_abs() / size_of::<T>().max(1);
    if buffer
        .len()
        .checked_add(additional)
        .is_none_or(|total| total > max_len)
    {
        return Err(TextError::CapacityOverflow);
    }
    buffer.try_reserve_exact(additional).map_err(|source| {
        tracing::warn!(requested = additional, "allocation refused");
        TextError::Alloc {
            requested: additional,
            source,
        }
    })
}
