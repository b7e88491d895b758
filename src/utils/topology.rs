/// Reduces a raw coordinate onto an axis of extent `n` whose ends are stitched together.
///
/// Returns the non-negative remainder, so the result is always in `0..n`.
pub fn wrap(c: isize, n: usize) -> usize {
    debug_assert!(n >= 1);
    c.rem_euclid(n as isize) as usize
}
