//! Tuning constants shared by every vector.

/// Number of slots allocated by the first growth of an empty vector.
///
/// Compaction never shrinks the allocation below this many slots.
pub const INITIAL_CAPACITY: usize = 8;

/// Size in bytes of the on-stack scratch area used by element swaps.
pub const SWAP_SCRATCH_SIZE: usize = 24;

/// Next capacity in the geometric growth sequence (`capacity * 1.5`).
///
/// Always grows by at least one slot. Returns `None` on overflow.
#[must_use]
pub const fn next_capacity(capacity: usize) -> Option<usize> {
    let step = if capacity < 2 { 1 } else { capacity / 2 };
    capacity.checked_add(step)
}

/// Next hole-growth step (`step * 2.5`). Returns `None` on overflow.
#[must_use]
pub const fn next_hole_step(step: usize) -> Option<usize> {
    match step.checked_mul(2) {
        Some(doubled) => doubled.checked_add(step / 2),
        None => None,
    }
}
