//! Item template: blank document, markup grammar and parser
//!
//! # Markup
//!
//! ```text
//! % @@BEGIN_BODY          free-form LaTeX, kept verbatim
//! % @@BEGIN_SOLUTION      optional LaTeX
//! % @@BEGIN_CRITERIA      \criterion{description}{points}
//! % @@BEGIN_COURSES       \course{code}{difficulty}{topic}
//! ```
//!
//! Each region ends with the matching `% @@END_<NAME>` line.

mod markup;
mod parser;

pub use markup::{COMMENT_PREFIX, ITEM_TEMPLATE, Marker, Region};
pub use parser::{ParsedTemplate, parse_template};

use thiserror::Error;

use crate::domain::Difficulty;

/// Errors produced while parsing an edited template
///
/// Messages quote the offending line or value so they can be shown to the
/// user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Body section is empty: write the question text between the BODY markers")]
    EmptyBody,

    #[error(r"Bad criterion line: '{line}', expected format: \criterion{{description}}{{points}}")]
    BadCriterionLine { line: String },

    #[error("Criterion points must be an integer, got: '{value}'")]
    BadPoints { value: String },

    #[error("Criterion points out of range, got: '{value}' (must fit in a 64-bit signed integer)")]
    PointsOutOfRange { value: String },

    #[error(r"Bad course line: '{line}', expected format: \course{{course_code}}{{difficulty}}{{topic}}")]
    BadCourseLine { line: String },

    #[error("Invalid difficulty '{value}' for course '{code}': must be one of: {valid}", valid = Difficulty::valid_values())]
    InvalidDifficulty { value: String, code: String },
}
