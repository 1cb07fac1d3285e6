//! Property tests for the template parser

use exammaker::{Difficulty, TemplateError, parse_template};
use proptest::prelude::*;

fn template(body: &str, criteria: &str, courses: &str) -> String {
    format!(
        "% @@BEGIN_BODY\n{body}\n% @@END_BODY\n\
         % @@BEGIN_CRITERIA\n{criteria}\n% @@END_CRITERIA\n\
         % @@BEGIN_COURSES\n{courses}\n% @@END_COURSES\n"
    )
}

/// Single-line text without braces or line breaks, not starting with `%`
fn field() -> impl Strategy<Value = String> {
    "[A-Za-z0-9$^=+| ]{0,20}"
}

fn difficulty_spelling() -> impl Strategy<Value = (Difficulty, String)> {
    (prop::sample::select(Difficulty::ALL.to_vec()), any::<bool>()).prop_map(|(d, upper)| {
        let spelling = if upper { d.as_str().to_uppercase() } else { d.as_str().to_string() };
        (d, spelling)
    })
}

proptest! {
    #[test]
    fn prop_body_is_trimmed_region(lines in prop::collection::vec("[ a-z%\\\\{}]{0,12}", 1..6)) {
        let body = lines.join("\n");
        prop_assume!(!body.trim().is_empty());
        prop_assume!(lines.iter().all(|l| !l.trim().starts_with("% @@")));

        let parsed = parse_template(&template(&body, "", "")).unwrap();
        prop_assert_eq!(parsed.body, body.trim());
    }

    #[test]
    fn prop_blank_body_always_fails(body in "[ \t\n]{0,10}", criteria in ".{0,20}") {
        prop_assume!(!criteria.contains('\n') && !criteria.contains('\r'));
        let result = parse_template(&template(&body, &criteria, ""));
        prop_assert_eq!(result.unwrap_err(), TemplateError::EmptyBody);
    }

    #[test]
    fn prop_criteria_parsed_in_order(entries in prop::collection::vec(("[A-Za-z][A-Za-z ]{0,15}", -1000i64..1000), 0..8)) {
        let mut lines: Vec<String> = Vec::new();
        for (description, points) in &entries {
            lines.push(format!("\\criterion{{ {} }}{{{}}}", description, points));
            lines.push("% comment".to_string());
            lines.push(String::new());
        }

        let parsed = parse_template(&template("Q", &lines.join("\n"), "")).unwrap();
        prop_assert_eq!(parsed.criteria.len(), entries.len());
        for (criterion, (description, points)) in parsed.criteria.iter().zip(&entries) {
            prop_assert_eq!(criterion.description(), description.trim());
            prop_assert_eq!(criterion.points(), *points);
        }
        prop_assert_eq!(parsed.total_points(), Some(entries.iter().map(|(_, p)| p).sum::<i64>()));
    }

    #[test]
    fn prop_non_integer_points_rejected(points in "[a-z][a-z0-9.]{0,6}") {
        let line = format!("\\criterion{{Answer}}{{{}}}", points);
        let err = parse_template(&template("Q", &line, "")).unwrap_err();
        prop_assert_eq!(err, TemplateError::BadPoints { value: points });
    }

    #[test]
    fn prop_course_parsed(code in "[A-Z]{2,4}[0-9]{3}", (difficulty, spelling) in difficulty_spelling(), topic in field()) {
        let line = format!("\\course{{{}}}{{{}}}{{{}}}", code, spelling, topic);
        let parsed = parse_template(&template("Q", "", &line)).unwrap();

        let course = &parsed.courses[&code];
        prop_assert_eq!(course.difficulty(), difficulty);
        let expected_topic = Some(topic.trim()).filter(|t| !t.is_empty());
        prop_assert_eq!(course.topic(), expected_topic);
    }

    #[test]
    fn prop_two_argument_course_rejected(code in "[A-Z]{2,4}[0-9]{3}", (_, spelling) in difficulty_spelling()) {
        let line = format!("\\course{{{}}}{{{}}}", code, spelling);
        let err = parse_template(&template("Q", "", &line)).unwrap_err();
        prop_assert_eq!(err, TemplateError::BadCourseLine { line });
    }

    #[test]
    fn prop_unknown_difficulty_rejected(code in "[A-Z]{2,4}[0-9]{3}", value in "[a-z]{1,10}") {
        prop_assume!(value.parse::<Difficulty>().is_err());
        let line = format!("\\course{{{}}}{{{}}}{{}}", code, value);
        let err = parse_template(&template("Q", "", &line)).unwrap_err();
        prop_assert_eq!(err, TemplateError::InvalidDifficulty { value, code });
    }
}
