use crate::error::LayoutError;

/// Returns the smallest integer greater than or equal to `n`.
///
/// # Errors
/// - [`LayoutError::NonFiniteInput`] if `n` is NaN or infinite.
/// - [`LayoutError::OutOfRange`] if the ceiling does not fit into an `i64`.
///
/// # Examples
/// ```
/// use morton_layout::utils::int_ceil;
///
/// assert_eq!(int_ceil(46.0).unwrap(), 46);
/// assert_eq!(int_ceil(45.125).unwrap(), 46);
/// assert_eq!(int_ceil(-1.5).unwrap(), -1);
/// assert!(int_ceil(f64::NAN).is_err());
/// ```
pub fn int_ceil(n: f64) -> Result<i64, LayoutError> {
    if !n.is_finite() {
        return Err(LayoutError::NonFiniteInput { value: n });
    }

    let ceiled = n.ceil();

    // `i64::MAX as f64` rounds up to 2^63, which is already out of range
    if ceiled < i64::MIN as f64 || ceiled >= i64::MAX as f64 {
        return Err(LayoutError::OutOfRange { value: n });
    }

    Ok(ceiled as i64)
}
