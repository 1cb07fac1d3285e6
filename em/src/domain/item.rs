//! Exam item records
//!
//! Items are serialized field by field in declaration order, so the order of
//! the struct fields here is the order of keys in a stored record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;
use uuid::Uuid;

use super::ValidationError;
use super::difficulty::Difficulty;

/// Course code -> assignment, ordered by code
pub type Courses = BTreeMap<String, CourseAssignment>;

/// Length of a generated item ID in hex characters
const ID_LEN: usize = 8;

/// Short opaque identifier for an item
///
/// Generated IDs are the first 8 hex characters of a random UUID. Collisions
/// against existing records are not checked.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generate a fresh random ID
    pub fn generate() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        Self(hex[..ID_LEN].to_string())
    }

    /// Get the full ID string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One scored line of a grading rubric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    description: String,
    points: i64,
}

impl Criterion {
    /// Create a criterion; the description must contain non-whitespace text
    pub fn new(description: impl Into<String>, points: i64) -> Result<Self, ValidationError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(Self { description, points })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Points awarded; zero and negative values are allowed
    pub fn points(&self) -> i64 {
        self.points
    }
}

/// Sum criterion points, or `None` if the total overflows `i64`
pub fn sum_points(criteria: &[Criterion]) -> Option<i64> {
    criteria.iter().try_fold(0i64, |acc, c| acc.checked_add(c.points()))
}

/// Difficulty and optional topic of an item within one course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseAssignment {
    difficulty: Difficulty,
    topic: Option<String>,
}

impl CourseAssignment {
    /// Create an assignment; a blank topic is stored as absent
    pub fn new(difficulty: Difficulty, topic: Option<String>) -> Self {
        let topic = topic.map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
        Self { difficulty, topic }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }
}

/// A stored exam question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    body: String,
    points: i64,
    courses: Courses,
    criteria: Vec<Criterion>,
    solution: Option<String>,
}

impl Item {
    /// Create a new item with a generated ID
    ///
    /// `points` is computed from the criteria. A blank body or a points
    /// total outside `i64` is rejected.
    pub fn new(
        body: impl Into<String>,
        criteria: Vec<Criterion>,
        courses: Courses,
        solution: Option<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(ItemId::generate(), body, criteria, courses, solution)
    }

    /// Create an item with a caller-provided ID
    pub fn with_id(
        id: ItemId,
        body: impl Into<String>,
        criteria: Vec<Criterion>,
        courses: Courses,
        solution: Option<String>,
    ) -> Result<Self, ValidationError> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(ValidationError::EmptyBody);
        }
        let points = sum_points(&criteria).ok_or(ValidationError::PointsOverflow)?;
        debug!(%id, points, criteria = criteria.len(), courses = courses.len(), "Item::with_id: built item");
        Ok(Self {
            id,
            body,
            points,
            courses,
            criteria,
            solution,
        })
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Points total recorded when the item was created
    pub fn points(&self) -> i64 {
        self.points
    }

    pub fn courses(&self) -> &Courses {
        &self.courses
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn solution(&self) -> Option<&str> {
        self.solution.as_deref()
    }

    /// Recompute the criteria sum, which may differ from `points` for
    /// records edited by hand
    pub fn total_points(&self) -> Option<i64> {
        sum_points(&self.criteria)
    }
}
