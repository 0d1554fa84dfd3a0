//! TOS allocation orchestration.
//!
//! # Algorithm
//!
//! 1. Validate the column spec and topics.
//! 2. Row shares `hours[i] / Σ hours`, apportioned to 100 (row percents)
//!    and to `total_items` (row targets).
//! 3. Column ideals `total_items × p_j / 100`, apportioned to `total_items`.
//! 4. Integerize `row_target × p_j / 100` with [`MatrixAllocator`].
//!
//! Both the create and the update path of a TOS call [`TosAllocationBuilder::build`];
//! every call recomputes from scratch.

use tracing::debug;

use super::{apportion, MatrixAllocator};
use crate::error::{AllocError, Result};
use crate::models::{
    total_hours, AllocationRequest, AllocationResult, ColumnSpec, TopicWeight, COLUMN_COUNT,
};
use crate::validation::{validate_column_spec, validate_topics};

/// Builds TOS allocations.
///
/// Holds only allocator configuration; `build` is a pure function of its
/// arguments.
///
/// # Example
///
/// ```
/// use u_tos::allocation::TosAllocationBuilder;
/// use u_tos::models::{ColumnSpec, TopicWeight};
///
/// let topics = vec![TopicWeight::new("A", 2.0), TopicWeight::new("B", 2.0)];
/// let result = TosAllocationBuilder::new()
///     .build(100, &ColumnSpec::new(30, 30, 20, 20), &topics)
///     .unwrap();
///
/// assert_eq!(result.row_targets, vec![50, 50]);
/// assert_eq!(result.col_targets, [30, 30, 20, 20]);
/// assert_eq!(result.matrix[0], [15, 15, 10, 10]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TosAllocationBuilder {
    allocator: MatrixAllocator,
}

impl TosAllocationBuilder {
    /// Creates a builder with the default allocator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the matrix allocator.
    pub fn with_allocator(mut self, allocator: MatrixAllocator) -> Self {
        self.allocator = allocator;
        self
    }

    /// Allocates `total_items` across topics and cognitive-level columns.
    ///
    /// # Errors
    /// - `InvalidColumnSpec` when percentages are out of range, do not sum
    ///   to 100, or exceed the knowledge cap.
    /// - `InvalidTopics` when topics are empty or have no positive hours.
    /// - `InvalidInput` when `total_items` is negative.
    /// - `AllocationInfeasible` if the matrix fails its consistency check.
    pub fn build(
        &self,
        total_items: i64,
        column_spec: &ColumnSpec,
        topics: &[TopicWeight],
    ) -> Result<AllocationResult> {
        debug!(total_items, topics = topics.len(), "building TOS allocation");

        validate_column_spec(column_spec).map_err(|e| AllocError::column_spec(&e))?;
        validate_topics(topics).map_err(|e| AllocError::topics(&e))?;
        if total_items < 0 {
            return Err(AllocError::invalid_input(format!(
                "total items {total_items} is negative"
            )));
        }

        // Row shares
        let hours_total = total_hours(topics);
        let shares: Vec<f64> = topics.iter().map(|t| t.hours / hours_total).collect();

        let percent_ideals: Vec<f64> = shares.iter().map(|s| s * 100.0).collect();
        let row_percents = apportion(&percent_ideals, 100)?;

        let item_ideals: Vec<f64> = shares.iter().map(|s| s * total_items as f64).collect();
        let row_targets = apportion(&item_ideals, total_items)?;

        // Column targets
        let col_targets = to_columns(apportion(
            &column_spec.ideal_counts(total_items),
            total_items,
        )?)?;

        let matrix = self
            .allocator
            .allocate(&row_targets, &col_targets, &column_spec.weights())?
            .into_iter()
            .map(to_columns)
            .collect::<Result<Vec<_>>>()?;

        debug!(
            ?row_targets,
            ?col_targets,
            ?row_percents,
            "TOS allocation complete"
        );

        Ok(AllocationResult {
            row_targets,
            col_targets,
            matrix,
            row_percents,
        })
    }

    /// Allocates from a request.
    pub fn build_request(&self, request: &AllocationRequest) -> Result<AllocationResult> {
        self.build(request.total_items, &request.column_spec, &request.topics)
    }
}

fn to_columns(values: Vec<i64>) -> Result<[i64; COLUMN_COUNT]> {
    <[i64; COLUMN_COUNT]>::try_from(values).map_err(|v| {
        AllocError::invalid_input(format!(
            "expected {COLUMN_COUNT} columns, got {}",
            v.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics(hours: &[(&str, f64)]) -> Vec<TopicWeight> {
        hours
            .iter()
            .map(|&(name, h)| TopicWeight::new(name, h))
            .collect()
    }

    fn assert_consistent(result: &AllocationResult, total_items: i64) {
        assert_eq!(result.row_targets.iter().sum::<i64>(), total_items);
        assert_eq!(result.col_targets.iter().sum::<i64>(), total_items);
        for i in 0..result.row_count() {
            assert_eq!(result.row_sum(i), result.row_targets[i], "row {i}");
        }
        for j in 0..COLUMN_COUNT {
            assert_eq!(result.column_sum(j), result.col_targets[j], "col {j}");
        }
        assert!(result.matrix.iter().flatten().all(|&v| v >= 0));
    }

    #[test]
    fn test_equal_topics() {
        let result = TosAllocationBuilder::new()
            .build(
                100,
                &ColumnSpec::new(30, 30, 20, 20),
                &topics(&[("A", 2.0), ("B", 2.0)]),
            )
            .unwrap();

        assert_eq!(result.row_targets, vec![50, 50]);
        assert_eq!(result.col_targets, [30, 30, 20, 20]);
        assert_eq!(result.matrix, vec![[15, 15, 10, 10], [15, 15, 10, 10]]);
        assert_eq!(result.row_percents, vec![50, 50]);
    }

    #[test]
    fn test_one_to_two_hours() {
        let result = TosAllocationBuilder::new()
            .build(
                10,
                &ColumnSpec::new(40, 30, 20, 10),
                &topics(&[("A", 1.0), ("B", 2.0)]),
            )
            .unwrap();

        assert_eq!(result.row_targets, vec![3, 7]);
        assert_eq!(result.col_targets, [4, 3, 2, 1]);
        assert_eq!(result.row_percents, vec![33, 67]);
        assert_consistent(&result, 10);
        assert_eq!(result.matrix, vec![[1, 1, 1, 0], [3, 2, 1, 1]]);
    }

    #[test]
    fn test_percent_sum_101() {
        let err = TosAllocationBuilder::new()
            .build(
                50,
                &ColumnSpec::new(31, 30, 20, 20),
                &topics(&[("A", 1.0)]),
            )
            .unwrap_err();
        assert!(matches!(err, AllocError::InvalidColumnSpec { .. }));
        assert!(err.is_user_error());
    }

    #[test]
    fn test_knowledge_over_cap() {
        let err = TosAllocationBuilder::new()
            .build(
                50,
                &ColumnSpec::new(55, 25, 10, 10),
                &topics(&[("A", 1.0)]),
            )
            .unwrap_err();
        assert!(err.to_string().contains("Knowledge must not go beyond 50%"));
    }

    #[test]
    fn test_zero_hours() {
        let err = TosAllocationBuilder::new()
            .build(
                50,
                &ColumnSpec::new(30, 30, 20, 20),
                &topics(&[("A", 0.0), ("B", 0.0)]),
            )
            .unwrap_err();
        assert!(matches!(err, AllocError::InvalidTopics { .. }));
    }

    #[test]
    fn test_empty_topics() {
        let err = TosAllocationBuilder::new()
            .build(50, &ColumnSpec::new(30, 30, 20, 20), &[])
            .unwrap_err();
        assert!(matches!(err, AllocError::InvalidTopics { .. }));
    }

    #[test]
    fn test_negative_total_items() {
        let err = TosAllocationBuilder::new()
            .build(-5, &ColumnSpec::new(30, 30, 20, 20), &topics(&[("A", 1.0)]))
            .unwrap_err();
        assert!(matches!(err, AllocError::InvalidInput { .. }));
    }

    #[test]
    fn test_column_spec_checked_before_topics() {
        let err = TosAllocationBuilder::new()
            .build(10, &ColumnSpec::new(60, 60, 0, 0), &[])
            .unwrap_err();
        assert!(matches!(err, AllocError::InvalidColumnSpec { .. }));
    }

    #[test]
    fn test_zero_items() {
        let result = TosAllocationBuilder::new()
            .build(
                0,
                &ColumnSpec::new(40, 30, 20, 10),
                &topics(&[("A", 1.0), ("B", 1.0), ("C", 1.0)]),
            )
            .unwrap();

        assert_eq!(result.row_targets, vec![0, 0, 0]);
        assert_eq!(result.col_targets, [0, 0, 0, 0]);
        assert!(result.matrix.iter().flatten().all(|&v| v == 0));
        // Percent split is independent of the item count
        assert_eq!(result.row_percents, vec![34, 33, 33]);
    }

    #[test]
    fn test_zero_hour_topic_gets_nothing() {
        let result = TosAllocationBuilder::new()
            .build(
                20,
                &ColumnSpec::new(50, 30, 20, 0),
                &topics(&[("A", 3.0), ("Review", 0.0), ("B", 1.0)]),
            )
            .unwrap();

        assert_eq!(result.row_targets, vec![15, 0, 5]);
        assert_eq!(result.row_percents, vec![75, 0, 25]);
        assert_eq!(result.matrix[1], [0, 0, 0, 0]);
        assert_eq!(result.col_targets, [10, 6, 4, 0]);
        assert_consistent(&result, 20);
    }

    #[test]
    fn test_typical_syllabus() {
        let hours = [
            ("Orientation", 1.5),
            ("Number Systems", 4.5),
            ("Boolean Algebra", 6.0),
            ("Logic Gates", 7.5),
            ("Combinational Circuits", 9.0),
            ("Sequential Circuits", 7.5),
        ];
        let spec = ColumnSpec::new(30, 30, 25, 15);
        let result = TosAllocationBuilder::new()
            .build(60, &spec, &topics(&hours))
            .unwrap();

        assert_consistent(&result, 60);
        assert_eq!(result.row_percents.iter().sum::<i64>(), 100);
        assert_eq!(result.col_targets, [18, 18, 15, 9]);
    }

    #[test]
    fn test_deterministic() {
        let spec = ColumnSpec::new(35, 25, 25, 15);
        let t = topics(&[("A", 1.0), ("B", 3.0), ("C", 5.0), ("D", 2.0)]);
        let builder = TosAllocationBuilder::new();
        let a = builder.build(37, &spec, &t).unwrap();
        let b = builder.build(37, &spec, &t).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_build_request() {
        let request = AllocationRequest::new(10, ColumnSpec::new(40, 30, 20, 10))
            .with_topic("A", 1.0)
            .with_topic("B", 2.0);
        let builder = TosAllocationBuilder::new()
            .with_allocator(MatrixAllocator::new().with_iteration_factor(4));
        let from_request = builder.build_request(&request).unwrap();
        let direct = builder
            .build(10, &request.column_spec, &request.topics)
            .unwrap();
        assert_eq!(from_request, direct);
    }
}
