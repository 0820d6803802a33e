use std::num::NonZeroUsize;

/// Percentage of `total` sections that are visited, rounded half up and clamped to 100.
///
/// Computed on the exact rational `100 * visited / total` in integer arithmetic, so
/// `visited == total` is always exactly 100.
pub fn completion_percentage(visited: usize, total: NonZeroUsize) -> u8 {
    let visited = visited as u128;
    let total = total.get() as u128;
    let rounded = (200 * visited + total) / (2 * total);
    rounded.min(100) as u8
}
