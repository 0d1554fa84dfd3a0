//! Input validation for TOS allocations.
//!
//! Checks the column spec and topic list before allocation. Detects:
//! - Percentages outside 0..=100
//! - Percentages not summing to 100
//! - Knowledge column above the cap
//! - Empty topic selection
//! - Negative or non-finite hours
//! - Topics whose hours sum to zero
//!
//! All problems are collected, not just the first one found.

use crate::models::{total_hours, ColumnSpec, TopicWeight, KNOWLEDGE_CAP};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A column percentage lies outside 0..=100.
    PercentageOutOfRange,
    /// Column percentages do not sum to 100.
    PercentageSum,
    /// Knowledge column exceeds its cap.
    KnowledgeCapExceeded,
    /// No topics selected.
    EmptyTopics,
    /// A topic has negative, NaN, or infinite hours.
    InvalidHours,
    /// Topic hours sum to zero, so proportions are undefined.
    ZeroTotalHours,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates cognitive-level column percentages.
///
/// Checks:
/// 1. Each percentage is within 0..=100
/// 2. Percentages sum to exactly 100
/// 3. The knowledge column does not exceed [`KNOWLEDGE_CAP`]
pub fn validate_column_spec(spec: &ColumnSpec) -> ValidationResult {
    let mut errors = Vec::new();

    for (j, &p) in spec.percentages.iter().enumerate() {
        if !(0..=100).contains(&p) {
            errors.push(ValidationError::new(
                ValidationErrorKind::PercentageOutOfRange,
                format!("Column {} percentage {p} is outside 0..=100", j + 1),
            ));
        }
    }

    let total = spec.total();
    if total != 100 {
        errors.push(ValidationError::new(
            ValidationErrorKind::PercentageSum,
            format!("Percentages must sum to 100 (got {total})"),
        ));
    }

    if spec.knowledge() > KNOWLEDGE_CAP {
        errors.push(ValidationError::new(
            ValidationErrorKind::KnowledgeCapExceeded,
            format!("Knowledge must not go beyond {KNOWLEDGE_CAP}%"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the topic list.
///
/// Checks:
/// 1. At least one topic is present
/// 2. Every topic has finite, non-negative hours
/// 3. Total hours are positive
pub fn validate_topics(topics: &[TopicWeight]) -> ValidationResult {
    if topics.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyTopics,
            "You must select at least one topic",
        )]);
    }

    let mut errors = Vec::new();

    for t in topics {
        if !t.hours.is_finite() || t.hours < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidHours,
                format!("Topic '{}' has invalid hours {}", t.topic, t.hours),
            ));
        }
    }

    // Only meaningful once every hour value is usable
    if errors.is_empty() && total_hours(topics) <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroTotalHours,
            "Selected topics have no allotted hours",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
