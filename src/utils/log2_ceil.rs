use crate::error::LayoutError;

/// Returns `ceil(log2(n))`, i.e. the number of bits needed to distinguish
/// `n` different states.
///
/// Uses integer arithmetic only, so exact powers of two never pick up an
/// extra bit from floating-point rounding.
///
/// # Errors
/// - [`LayoutError::Domain`] if `n <= 0`.
///
/// # Examples
/// ```
/// use morton_layout::utils::log2_ceil;
///
/// assert_eq!(log2_ceil(1).unwrap(), 0);
/// assert_eq!(log2_ceil(3).unwrap(), 2);
/// assert_eq!(log2_ceil(4).unwrap(), 2);
/// assert_eq!(log2_ceil(5).unwrap(), 3);
/// assert!(log2_ceil(0).is_err());
/// ```
#[inline]
pub fn log2_ceil(n: i64) -> Result<u32, LayoutError> {
    match n {
        n if n <= 0 => Err(LayoutError::Domain { value: n }),
        1 => Ok(0),
        n => Ok((n - 1).ilog2() + 1),
    }
}
