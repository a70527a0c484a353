//! Axum route handlers for the Report API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::report::models::{CareerReport, ReportInput, StudentProfile};
use crate::state::AppState;

/// The profile form as submitted by the frontend: academic profile plus the
/// five psychometric quiz answers.
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub degree: String,
    pub year: String,
    pub skills: String,
    pub q1: String,
    pub q2: String,
    pub q3: String,
    pub q4: String,
    pub q5: String,
}

/// POST /api/v1/report
///
/// Validates the profile form and generates the career report. Never fails
/// on LLM trouble — the configured backend degrades to the fallback report.
pub async fn handle_generate_report(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<CareerReport>, AppError> {
    let input = validate(request)?;
    let report = state.report_generator.generate(&input).await?;
    Ok(Json(report))
}

/// Mirrors the frontend form rules: degree and skills need at least two
/// characters, year and every quiz answer must be present.
fn validate(request: ReportRequest) -> Result<ReportInput, AppError> {
    if request.degree.trim().len() < 2 {
        return Err(AppError::Validation(
            "degree must be at least 2 characters".to_string(),
        ));
    }
    if request.year.trim().is_empty() {
        return Err(AppError::Validation("year is required".to_string()));
    }
    if request.skills.trim().len() < 2 {
        return Err(AppError::Validation(
            "please list at least one skill".to_string(),
        ));
    }

    let answers = [
        &request.q1,
        &request.q2,
        &request.q3,
        &request.q4,
        &request.q5,
    ];
    if answers.iter().any(|a| a.trim().is_empty()) {
        return Err(AppError::Validation(
            "all quiz questions must be answered".to_string(),
        ));
    }

    Ok(ReportInput {
        profile: StudentProfile {
            degree: request.degree.trim().to_string(),
            year: request.year.trim().to_string(),
            skills: request.skills.trim().to_string(),
        },
        quiz_answers: answers.into_iter().map(|a| a.trim().to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ReportRequest {
        ReportRequest {
            degree: "B.Tech Computer Science".to_string(),
            year: "3rd Year".to_string(),
            skills: "Python, SQL".to_string(),
            q1: "a".to_string(),
            q2: "b".to_string(),
            q3: "c".to_string(),
            q4: "a".to_string(),
            q5: "b".to_string(),
        }
    }

    #[test]
    fn test_valid_request_builds_input() {
        let input = validate(request()).unwrap();
        assert_eq!(input.profile.degree, "B.Tech Computer Science");
        assert_eq!(input.quiz_answers.len(), 5);
        assert_eq!(input.quiz_answers[2], "c");
    }

    #[test]
    fn test_short_degree_rejected() {
        let mut r = request();
        r.degree = "B".to_string();
        assert!(validate(r).is_err());
    }

    #[test]
    fn test_missing_year_rejected() {
        let mut r = request();
        r.year = "  ".to_string();
        assert!(validate(r).is_err());
    }

    #[test]
    fn test_short_skills_rejected() {
        let mut r = request();
        r.skills = "x".to_string();
        assert!(validate(r).is_err());
    }

    #[test]
    fn test_unanswered_quiz_question_rejected() {
        let mut r = request();
        r.q4 = String::new();
        assert!(validate(r).is_err());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut r = request();
        r.degree = "  B.Tech  ".to_string();
        r.q1 = " a ".to_string();
        let input = validate(r).unwrap();
        assert_eq!(input.profile.degree, "B.Tech");
        assert_eq!(input.quiz_answers[0], "a");
    }
}
