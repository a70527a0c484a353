//! The psychometric quiz catalog. Static content served to the profile form;
//! the answers come back through the report endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub id: &'static str,
    pub text: &'static str,
    pub options: Vec<QuizOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// GET /api/v1/quiz
pub async fn quiz_handler() -> Json<Vec<QuizQuestion>> {
    Json(quiz_questions())
}

pub(crate) fn quiz_questions() -> Vec<QuizQuestion> {
    vec![
        question(
            "q1",
            "When tackling a complex project, you prefer to:",
            [
                ("a", "Work independently to find a solution"),
                ("b", "Collaborate closely with a small, focused team"),
                ("c", "Lead and coordinate a larger group effort"),
            ],
        ),
        question(
            "q2",
            "You find yourself most energized by tasks that involve:",
            [
                ("a", "Solving intricate, abstract problems"),
                ("b", "Creating visually appealing and user-friendly designs"),
                ("c", "Building robust, scalable, and efficient systems"),
            ],
        ),
        question(
            "q3",
            "Which type of task do you enjoy the most?",
            [
                ("a", "Creative and open-ended challenges"),
                ("b", "Logical, structured, and data-driven work"),
                ("c", "Hands-on, practical, and tangible building"),
            ],
        ),
        question(
            "q4",
            "When faced with a new technology or environment, you tend to:",
            [
                ("a", "Analyze and understand the fundamentals before diving in"),
                ("b", "Jump in, experiment, and learn by doing"),
                ("c", "Seek out documentation and expert guidance"),
            ],
        ),
        question(
            "q5",
            "Ideally, your future career would offer:",
            [
                ("a", "Stability, security, and a well-defined career path"),
                ("b", "Continuous learning, new challenges, and innovation"),
                ("c", "High-impact leadership and strategic decision-making"),
            ],
        ),
    ]
}

fn question(
    id: &'static str,
    text: &'static str,
    options: [(&'static str, &'static str); 3],
) -> QuizQuestion {
    QuizQuestion {
        id,
        text,
        options: options
            .into_iter()
            .map(|(value, label)| QuizOption { value, label })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_has_five_questions_with_three_options() {
        let questions = quiz_questions();
        assert_eq!(questions.len(), 5);
        for q in &questions {
            assert_eq!(q.options.len(), 3);
        }
    }

    #[test]
    fn test_question_ids_match_report_form_fields() {
        let ids: Vec<&str> = quiz_questions().iter().map(|q| q.id).collect();
        assert_eq!(ids, ["q1", "q2", "q3", "q4", "q5"]);
    }
}
