//! TOS table view.
//!
//! Pairs each topic with its allocated row and appends the document
//! totals row. This is the shape callers persist and render.

use serde::{Deserialize, Serialize};

use super::{AllocationResult, ColumnSpec, TopicWeight, COLUMN_COUNT};
use crate::error::{AllocError, Result};

/// One persisted TOS row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TosRow {
    /// Topic label.
    pub topic: String,
    /// Instructional hours.
    pub hours: f64,
    /// Share of 100.
    pub percent: i64,
    /// Items allocated to the topic.
    pub items: i64,
    /// Items per cognitive-level column.
    pub values: [i64; COLUMN_COUNT],
}

/// The totals row of a TOS document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TosTotals {
    pub total_hours: f64,
    pub total_percent: i64,
    pub total_items: i64,
    pub total_columns: [i64; COLUMN_COUNT],
}

/// Rows plus totals for one allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TosTable {
    pub column_spec: ColumnSpec,
    pub rows: Vec<TosRow>,
    pub totals: TosTotals,
}

impl TosTable {
    /// Builds the table from the topics an allocation was computed for.
    ///
    /// # Errors
    /// `InvalidInput` if the topic count differs from the result's row count.
    pub fn assemble(
        column_spec: ColumnSpec,
        topics: &[TopicWeight],
        result: &AllocationResult,
    ) -> Result<Self> {
        let n = result.row_count();
        if topics.len() != n || result.row_targets.len() != n || result.row_percents.len() != n {
            return Err(AllocError::invalid_input(format!(
                "{} topics for an allocation with {} rows",
                topics.len(),
                n
            )));
        }

        let mut totals = TosTotals::default();
        let mut rows = Vec::with_capacity(n);

        for (i, topic) in topics.iter().enumerate() {
            let row = TosRow {
                topic: topic.topic.clone(),
                hours: topic.hours,
                percent: result.row_percents[i],
                items: result.row_targets[i],
                values: result.matrix[i],
            };

            totals.total_hours += row.hours;
            totals.total_percent += row.percent;
            totals.total_items += row.items;
            for (total, value) in totals.total_columns.iter_mut().zip(row.values) {
                *total += value;
            }

            rows.push(row);
        }

        Ok(Self {
            column_spec,
            rows,
            totals,
        })
    }

    /// Row for a topic label, if present.
    pub fn row_for_topic(&self, topic: &str) -> Option<&TosRow> {
        self.rows.iter().find(|r| r.topic == topic)
    }
}
