//! Row/column-consistent integer matrix allocation.
//!
//! Two-dimensional generalization of largest-remainder rounding: the
//! resulting matrix matches per-row and per-column integer targets exactly.
//!
//! # Algorithm
//!
//! 1. Ideal matrix `raw[i][j] = row_targets[i] * col_weights[j]`.
//! 2. Floor every cell; track row and column sums.
//! 3. Rank all cells by fractional remainder descending, then `(row, col)`
//!    ascending.
//! 4. Greedy passes over the ranking: add one unit to a cell whose row and
//!    column are both below target. Stop at the grand total or when a pass
//!    makes no progress.
//! 5. Fallback sweeps in row-major order: fill any cell while its row and
//!    column both have capacity.
//! 6. Verify every row and column sum.
//!
//! Greedy passes and fallback sweeps are each bounded by
//! `rows × cols × iteration_factor`.
//!
//! # Reference
//! Cox & Ernst (1982), "Controlled Rounding", INFOR 20(4)

use tracing::{trace, warn};

use super::apportion::floor_with_remainder;
use crate::error::{AllocError, Axis, Result};

/// Default multiplier for the pass cap.
pub const DEFAULT_ITERATION_FACTOR: usize = 2;

/// Integer matrix allocator.
///
/// # Example
///
/// ```
/// use u_tos::allocation::MatrixAllocator;
///
/// let allocator = MatrixAllocator::new();
/// let matrix = allocator
///     .allocate(&[3, 7], &[4, 3, 2, 1], &[0.4, 0.3, 0.2, 0.1])
///     .unwrap();
/// assert_eq!(matrix, vec![vec![1, 1, 1, 0], vec![3, 2, 1, 1]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixAllocator {
    iteration_factor: usize,
}

struct Cell {
    remainder: f64,
    row: usize,
    col: usize,
}

impl MatrixAllocator {
    /// Creates an allocator with the default pass cap.
    pub fn new() -> Self {
        Self {
            iteration_factor: DEFAULT_ITERATION_FACTOR,
        }
    }

    /// Sets the pass-cap multiplier (clamped to at least 1).
    pub fn with_iteration_factor(mut self, factor: usize) -> Self {
        self.iteration_factor = factor.max(1);
        self
    }

    /// Returns the pass-cap multiplier.
    pub fn iteration_factor(&self) -> usize {
        self.iteration_factor
    }

    /// Allocates an integer matrix matching `row_targets` and `col_targets`.
    ///
    /// `col_weights` are the column proportions (normally summing to 1) used
    /// to build the ideal matrix.
    ///
    /// # Errors
    /// - `InvalidInput` for a weight/target length mismatch, negative
    ///   targets, or negative/non-finite weights.
    /// - `AllocationInfeasible` when a row or column sum misses its target
    ///   after both passes. Rows are reported before columns.
    pub fn allocate(
        &self,
        row_targets: &[i64],
        col_targets: &[i64],
        col_weights: &[f64],
    ) -> Result<Vec<Vec<i64>>> {
        check_inputs(row_targets, col_targets, col_weights)?;

        let n_rows = row_targets.len();
        let n_cols = col_targets.len();

        // Floor the ideal matrix and rank its remainders
        let mut matrix = vec![vec![0i64; n_cols]; n_rows];
        let mut cells = Vec::with_capacity(n_rows * n_cols);
        for (i, &target) in row_targets.iter().enumerate() {
            for (j, &w) in col_weights.iter().enumerate() {
                let (base, remainder) = floor_with_remainder(target as f64 * w);
                matrix[i][j] = base;
                cells.push(Cell {
                    remainder,
                    row: i,
                    col: j,
                });
            }
        }
        cells.sort_by(|a, b| {
            b.remainder
                .total_cmp(&a.remainder)
                .then(a.row.cmp(&b.row))
                .then(a.col.cmp(&b.col))
        });

        let mut row_sum: Vec<i64> = matrix.iter().map(|r| r.iter().sum()).collect();
        let mut col_sum: Vec<i64> = (0..n_cols)
            .map(|j| matrix.iter().map(|r| r[j]).sum())
            .collect();

        let total_target: i64 = row_targets.iter().sum();
        let mut assigned: i64 = row_sum.iter().sum();
        let pass_cap = (n_rows * n_cols * self.iteration_factor).max(1);

        // Greedy passes by remainder rank
        let mut passes = 0;
        let mut made_progress = true;
        while assigned < total_target && made_progress && passes < pass_cap {
            made_progress = false;
            passes += 1;
            for cell in &cells {
                if assigned >= total_target {
                    break;
                }
                let (i, j) = (cell.row, cell.col);
                if row_sum[i] < row_targets[i] && col_sum[j] < col_targets[j] {
                    matrix[i][j] += 1;
                    row_sum[i] += 1;
                    col_sum[j] += 1;
                    assigned += 1;
                    made_progress = true;
                }
            }
            trace!(pass = passes, assigned, total_target, "greedy pass");
        }
        if assigned < total_target && made_progress {
            warn!(pass_cap, assigned, total_target, "greedy pass cap reached");
        }

        // Fallback: fill remaining deficit wherever row and column allow
        if assigned < total_target {
            warn!(
                deficit = total_target - assigned,
                "greedy allocation stalled, running fallback"
            );
            let mut sweeps = 0;
            made_progress = true;
            while assigned < total_target && made_progress && sweeps < pass_cap {
                made_progress = false;
                sweeps += 1;
                for i in 0..n_rows {
                    for j in 0..n_cols {
                        while assigned < total_target
                            && row_sum[i] < row_targets[i]
                            && col_sum[j] < col_targets[j]
                        {
                            matrix[i][j] += 1;
                            row_sum[i] += 1;
                            col_sum[j] += 1;
                            assigned += 1;
                            made_progress = true;
                        }
                    }
                }
            }
        }

        // Consistency check
        for (i, (&achieved, &expected)) in row_sum.iter().zip(row_targets).enumerate() {
            if achieved != expected {
                return Err(AllocError::AllocationInfeasible {
                    axis: Axis::Row,
                    index: i,
                    achieved,
                    expected,
                });
            }
        }
        for (j, (&achieved, &expected)) in col_sum.iter().zip(col_targets).enumerate() {
            if achieved != expected {
                return Err(AllocError::AllocationInfeasible {
                    axis: Axis::Column,
                    index: j,
                    achieved,
                    expected,
                });
            }
        }

        Ok(matrix)
    }
}

impl Default for MatrixAllocator {
    fn default() -> Self {
        Self::new()
    }
}

fn check_inputs(row_targets: &[i64], col_targets: &[i64], col_weights: &[f64]) -> Result<()> {
    if col_weights.len() != col_targets.len() {
        return Err(AllocError::invalid_input(format!(
            "{} column weights for {} column targets",
            col_weights.len(),
            col_targets.len()
        )));
    }
    if let Some(t) = row_targets.iter().chain(col_targets).find(|t| **t < 0) {
        return Err(AllocError::invalid_input(format!(
            "target {t} is negative"
        )));
    }
    if let Some(w) = col_weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(AllocError::invalid_input(format!(
            "column weight {w} is not a non-negative number"
        )));
    }
    Ok(())
}
