//! The single failure mode of the iteration kernels.
//!
//! A kernel either succeeds, or reports [`OutOfMemory`] when an internally
//! required scratch buffer cannot be allocated. There is deliberately no
//! input-validation error kind: inconsistent offsets, out-of-range targets or
//! negative weights violate the caller contract and are not reported failures.

use std::error::Error;
use std::fmt;

/// An internally required scratch buffer could not be allocated.
///
/// When a kernel returns this error, every partial allocation it made has
/// already been released and the caller's value vector is untouched (the
/// failure occurs before any sweep runs).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct OutOfMemory;

impl fmt::Display for OutOfMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot allocate iteration scratch buffer")
    }
}

impl Error for OutOfMemory {}

/// Allocate a zero-initialized scratch buffer of `len` values, surfacing
/// allocation failure as [`OutOfMemory`] instead of aborting.
pub(crate) fn try_zeroed(len: usize) -> Result<Vec<f64>, OutOfMemory> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len).map_err(|_| OutOfMemory)?;
    buffer.resize(len, 0.0);
    Ok(buffer)
}

/// Allocate a scratch buffer holding a copy of `values`.
pub(crate) fn try_copied(values: &[f64]) -> Result<Vec<f64>, OutOfMemory> {
    let mut buffer = try_zeroed(values.len())?;
    buffer.copy_from_slice(values);
    Ok(buffer)
}
