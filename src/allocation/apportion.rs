//! Largest-remainder (Hamilton) apportionment.
//!
//! # Algorithm
//!
//! 1. Floor every ideal share; sum the floors.
//! 2. `leftover = target - sum(floors)`.
//! 3. Sort slots by fractional remainder descending, index ascending.
//! 4. Hand out `leftover` single units in that order, wrapping around
//!    the slot list when `leftover` exceeds the slot count.
//!
//! # Complexity
//! O(n log n) for n slots.
//!
//! # Reference
//! Balinski & Young (2001), "Fair Representation", Ch. 2

use crate::error::{AllocError, Result};

/// Tolerance absorbed when flooring, so `28.999999999999996` floors to 29.
pub(crate) const FLOOR_EPSILON: f64 = 1e-9;

/// Floors `x`, treating values within [`FLOOR_EPSILON`] below an integer
/// as that integer. Returns the base and its non-negative remainder.
pub(crate) fn floor_with_remainder(x: f64) -> (i64, f64) {
    let base = (x + FLOOR_EPSILON).floor();
    (base as i64, (x - base).max(0.0))
}

/// Apportions real-valued `ideals` into integers summing exactly to `target`.
///
/// Each slot receives its floor plus at most one extra unit per wrap of the
/// leftover distribution; for ideals consistent with `target` every value
/// lies in `[floor(ideal), ceil(ideal)]`.
///
/// # Errors
/// `InvalidInput` when `target` is negative, an ideal is negative or not
/// finite, `ideals` is empty but `target > 0`, or the floors already
/// exceed `target`.
///
/// # Example
///
/// ```
/// use u_tos::allocation::apportion;
///
/// let seats = apportion(&[3.3333, 6.6667], 10).unwrap();
/// assert_eq!(seats, vec![3, 7]);
/// ```
pub fn apportion(ideals: &[f64], target: i64) -> Result<Vec<i64>> {
    if target < 0 {
        return Err(AllocError::invalid_input(format!(
            "apportion target {target} is negative"
        )));
    }
    if let Some((i, x)) = ideals
        .iter()
        .enumerate()
        .find(|(_, x)| !x.is_finite() || **x < 0.0)
    {
        return Err(AllocError::invalid_input(format!(
            "ideal share {x} at slot {i} is not a non-negative number"
        )));
    }
    if ideals.is_empty() {
        return if target == 0 {
            Ok(Vec::new())
        } else {
            Err(AllocError::invalid_input(format!(
                "cannot apportion {target} units across zero slots"
            )))
        };
    }

    let n = ideals.len();
    let (mut result, remainders): (Vec<i64>, Vec<f64>) =
        ideals.iter().map(|&x| floor_with_remainder(x)).unzip();

    let assigned: i64 = result.iter().sum();
    let leftover = target - assigned;
    if leftover < 0 {
        return Err(AllocError::invalid_input(format!(
            "ideal shares floor to {assigned}, above target {target}"
        )));
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| remainders[b].total_cmp(&remainders[a]).then(a.cmp(&b)));

    for k in 0..leftover as usize {
        result[order[k % n]] += 1;
    }

    Ok(result)
}
