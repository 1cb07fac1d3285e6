//! Domain types for exam items
//!
//! An [`Item`] is created once from an edited template and never mutated
//! afterwards. Its `points` total is fixed at creation time.

mod difficulty;
mod item;

pub use difficulty::Difficulty;
pub use item::{CourseAssignment, Courses, Criterion, Item, ItemId, sum_points};

use thiserror::Error;

/// Errors raised while constructing domain values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid difficulty '{0}': must be one of: {valid}", valid = Difficulty::valid_values())]
    InvalidDifficulty(String),

    #[error("Criterion description must not be empty")]
    EmptyDescription,

    #[error("Item body must not be empty")]
    EmptyBody,

    #[error("Criterion points total does not fit in a 64-bit integer")]
    PointsOverflow,
}
