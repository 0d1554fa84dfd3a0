//! Allocation quality metrics.
//!
//! Measures how far an integer allocation strays from the ideal
//! real-valued allocation it approximates.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Max cell error | max \|matrix[i][j] - row_target[i] × w_j\| |
//! | Total cell error | Σ \|matrix[i][j] - row_target[i] × w_j\| |
//! | Max column error | max \|col_target[j] - total × w_j\| |

use serde::{Deserialize, Serialize};

use crate::models::{AllocationResult, ColumnSpec};

/// Rounding error of an allocation against its ideal matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationQuality {
    /// Largest absolute deviation of any cell.
    pub max_cell_error: f64,
    /// Sum of absolute cell deviations.
    pub total_cell_error: f64,
    /// Largest absolute deviation of a column target.
    pub max_column_error: f64,
}

impl AllocationQuality {
    /// Computes quality metrics for a result.
    ///
    /// # Arguments
    /// * `result` - The allocation to measure.
    /// * `column_spec` - The percentages the allocation was built from.
    pub fn calculate(result: &AllocationResult, column_spec: &ColumnSpec) -> Self {
        let weights = column_spec.weights();
        let mut max_cell_error: f64 = 0.0;
        let mut total_cell_error = 0.0;

        for (row, &target) in result.matrix.iter().zip(&result.row_targets) {
            for (&value, w) in row.iter().zip(weights) {
                let err = (value as f64 - target as f64 * w).abs();
                max_cell_error = max_cell_error.max(err);
                total_cell_error += err;
            }
        }

        let ideals = column_spec.ideal_counts(result.total_items());
        let max_column_error = result
            .col_targets
            .iter()
            .zip(ideals)
            .map(|(&t, ideal)| (t as f64 - ideal).abs())
            .fold(0.0, f64::max);

        Self {
            max_cell_error,
            total_cell_error,
            max_column_error,
        }
    }

    /// Whether no cell deviates more than `max_cell_error` from its ideal.
    pub fn meets_threshold(&self, max_cell_error: f64) -> bool {
        self.max_cell_error <= max_cell_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::TosAllocationBuilder;
    use crate::models::TopicWeight;

    #[test]
    fn test_exact_allocation_has_no_error() {
        let spec = ColumnSpec::new(30, 30, 20, 20);
        let topics = vec![TopicWeight::new("A", 2.0), TopicWeight::new("B", 2.0)];
        let result = TosAllocationBuilder::new().build(100, &spec, &topics).unwrap();

        let q = AllocationQuality::calculate(&result, &spec);
        assert!(q.max_cell_error < 1e-9);
        assert!(q.total_cell_error < 1e-9);
        assert!(q.max_column_error < 1e-9);
    }

    #[test]
    fn test_rounded_allocation() {
        let spec = ColumnSpec::new(40, 30, 20, 10);
        let result = AllocationResult {
            row_targets: vec![3, 7],
            col_targets: [4, 3, 2, 1],
            matrix: vec![[1, 1, 1, 0], [3, 2, 1, 1]],
            row_percents: vec![33, 67],
        };

        let q = AllocationQuality::calculate(&result, &spec);
        // Row 0 ideal [1.2 0.9 0.6 0.3], row 1 ideal [2.8 2.1 1.4 0.7]
        assert!((q.max_cell_error - 0.4).abs() < 1e-9);
        assert!((q.total_cell_error - 2.0).abs() < 1e-9);
        assert!(q.max_column_error < 1e-9);
        assert!(q.meets_threshold(0.5));
        assert!(!q.meets_threshold(0.3));
    }

    #[test]
    fn test_empty_result() {
        let result = AllocationResult {
            row_targets: vec![],
            col_targets: [0; 4],
            matrix: vec![],
            row_percents: vec![],
        };
        let q = AllocationQuality::calculate(&result, &ColumnSpec::new(25, 25, 25, 25));
        assert_eq!(q.max_cell_error, 0.0);
        assert_eq!(q.total_cell_error, 0.0);
        assert_eq!(q.max_column_error, 0.0);
    }
}
