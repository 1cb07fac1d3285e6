//! Line-scan parser for edited item templates

use regex::Regex;
use std::num::IntErrorKind;
use std::sync::LazyLock;
use tracing::debug;

use super::TemplateError;
use super::markup::{COMMENT_PREFIX, Marker, Region};
use crate::domain::{CourseAssignment, Courses, Criterion, Difficulty, sum_points};

/// `\criterion{description}{points}`, no nested braces
static CRITERION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\\criterion\{([^}]*)\}\{([^}]*)\}\s*$").expect("criterion pattern is valid"));

/// `\course{code}{difficulty}{topic}`, no nested braces
static COURSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\\course\{([^}]*)\}\{([^}]*)\}\{([^}]*)\}\s*$").expect("course pattern is valid")
});

/// Structured fields extracted from a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTemplate {
    pub body: String,
    pub solution: Option<String>,
    pub criteria: Vec<Criterion>,
    pub courses: Courses,
}

impl ParsedTemplate {
    /// Sum of all criterion points, `None` if it overflows `i64`
    pub fn total_points(&self) -> Option<i64> {
        sum_points(&self.criteria)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Outside,
    In(Region),
}

/// Raw lines captured per region during the scan
#[derive(Debug, Default)]
struct Captured<'a> {
    body: Vec<&'a str>,
    solution: Vec<&'a str>,
    criteria: Vec<&'a str>,
    courses: Vec<&'a str>,
}

impl<'a> Captured<'a> {
    fn lines_mut(&mut self, region: Region) -> &mut Vec<&'a str> {
        match region {
            Region::Body => &mut self.body,
            Region::Solution => &mut self.solution,
            Region::Criteria => &mut self.criteria,
            Region::Courses => &mut self.courses,
        }
    }
}

/// Parse an edited template into item fields
///
/// Marker lines switch the active section; a begin marker can appear again
/// later and its lines are appended to what was already captured. Body lines
/// are kept verbatim. In the other sections blank lines and `%` comments are
/// dropped and the remaining lines are trimmed.
///
/// Validation stops at the first error: body, then criteria, then courses.
pub fn parse_template(content: &str) -> Result<ParsedTemplate, TemplateError> {
    let captured = scan(content);

    let body = captured.body.join("\n").trim().to_string();
    if body.is_empty() {
        return Err(TemplateError::EmptyBody);
    }

    let solution = Some(captured.solution.join("\n").trim().to_string()).filter(|s| !s.is_empty());

    let criteria = captured
        .criteria
        .iter()
        .map(|line| parse_criterion(line))
        .collect::<Result<Vec<_>, _>>()?;

    let mut courses = Courses::new();
    for line in &captured.courses {
        let (code, assignment) = parse_course(line)?;
        if courses.insert(code.clone(), assignment).is_some() {
            debug!(%code, "parse_template: duplicate course code, keeping later line");
        }
    }

    debug!(
        body_len = body.len(),
        has_solution = solution.is_some(),
        criteria = criteria.len(),
        courses = courses.len(),
        "parse_template: parsed"
    );

    Ok(ParsedTemplate {
        body,
        solution,
        criteria,
        courses,
    })
}

fn scan(content: &str) -> Captured<'_> {
    let mut section = Section::Outside;
    let mut captured = Captured::default();

    for line in content.lines() {
        let trimmed = line.trim();

        match Marker::from_trimmed(trimmed) {
            Some(Marker::Begin(region)) => {
                debug!(region = region.name(), "scan: entering section");
                section = Section::In(region);
            }
            Some(Marker::End(_)) => section = Section::Outside,
            None => match section {
                Section::Outside => {}
                Section::In(Region::Body) => captured.body.push(line),
                Section::In(region) => {
                    if !trimmed.is_empty() && !trimmed.starts_with(COMMENT_PREFIX) {
                        captured.lines_mut(region).push(trimmed);
                    }
                }
            },
        }
    }

    captured
}

fn parse_criterion(line: &str) -> Result<Criterion, TemplateError> {
    let bad_line = || TemplateError::BadCriterionLine { line: line.to_string() };

    let caps = CRITERION_RE.captures(line).ok_or_else(bad_line)?;
    let description = caps[1].trim();
    let points_str = caps[2].trim();

    let value = points_str.to_string();
    let points = points_str.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => TemplateError::PointsOutOfRange { value },
        _ => TemplateError::BadPoints { value },
    })?;

    Criterion::new(description, points).map_err(|_| bad_line())
}

fn parse_course(line: &str) -> Result<(String, CourseAssignment), TemplateError> {
    let caps = COURSE_RE
        .captures(line)
        .ok_or_else(|| TemplateError::BadCourseLine { line: line.to_string() })?;
    let code = caps[1].trim().to_string();
    let difficulty_str = caps[2].trim();
    let topic = caps[3].trim();

    // Matching is case-insensitive; the error quotes the value as written
    let difficulty = difficulty_str
        .parse::<Difficulty>()
        .map_err(|_| TemplateError::InvalidDifficulty {
            value: difficulty_str.to_string(),
            code: code.clone(),
        })?;

    let topic = (!topic.is_empty()).then(|| topic.to_string());
    Ok((code, CourseAssignment::new(difficulty, topic)))
}
