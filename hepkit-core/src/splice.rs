//! Ordered-List Block Relocation
//!
//! Moves a contiguous block of elements to a new position inside a slice,
//! keeping the order of the block and of everything else. Used to reorder
//! cut-flow steps or histogram stacks in place.
//!
//! ```text
//! relocate(&mut [a, b, c, d, e], from = 3, count = 2, to = 0)
//!   -> [d, e, a, b, c]
//! ```
//!
//! Works on any `&mut [T]` through `rotate_left`/`rotate_right` on the
//! affected sub-slice, so it never allocates.

use crate::errors::{HepkitError, HepkitResult};

/// Move `items[from..from + count]` so that the block starts at index `to`
/// of the result.
///
/// Both `from + count` and `to + count` must not exceed `items.len()`.
///
/// ```rust
/// use hepkit_core::splice::relocate;
///
/// let mut steps = ["trigger", "lepton", "jets", "met", "btag"];
/// relocate(&mut steps, 3, 2, 1).unwrap();
/// assert_eq!(steps, ["trigger", "met", "btag", "lepton", "jets"]);
/// ```
pub fn relocate<T>(items: &mut [T], from: usize, count: usize, to: usize) -> HepkitResult<()> {
    let len = items.len();
    let src_end = block_end(from, count, len)?;
    let dst_end = block_end(to, count, len)?;

    if count == 0 || from == to {
        log_debug!("relocate: nothing to move (from={}, count={}, to={})", from, count, to);
        return Ok(());
    }

    if to < from {
        items[to..src_end].rotate_right(count);
    } else {
        items[from..dst_end].rotate_left(count);
    }

    Ok(())
}

/// Move a single element from `from` to `to`
pub fn relocate_one<T>(items: &mut [T], from: usize, to: usize) -> HepkitResult<()> {
    relocate(items, from, 1, to)
}

fn block_end(start: usize, count: usize, len: usize) -> HepkitResult<usize> {
    match start.checked_add(count) {
        Some(end) if end <= len => Ok(end),
        _ => Err(HepkitError::IndexOutOfBounds {
            index: start.saturating_add(count),
            len,
        }),
    }
}
