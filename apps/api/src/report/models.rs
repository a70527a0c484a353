//! Wire types for the career report. Field names stay camelCase on the wire
//! so the existing frontend contract is unchanged.

use serde::{Deserialize, Serialize};

/// The student's academic profile as submitted by the profile form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentProfile {
    pub degree: String,
    pub year: String,
    pub skills: String,
}

/// Validated input to the report generator.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportInput {
    pub profile: StudentProfile,
    pub quiz_answers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecommendation {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitReasoning {
    pub title: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDay {
    pub day: u32,
    pub task: String,
}

/// A 7-day learning plan for one skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPlan {
    pub skill: String,
    pub plan: Vec<PlanDay>,
}

/// One node of the hierarchical skill tree. Recursive: categories carry
/// children, leaf skills usually carry a project idea instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTreeNode {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "projectIdea", skip_serializing_if = "Option::is_none")]
    pub project_idea: Option<String>,
    #[serde(rename = "proTip", skip_serializing_if = "Option::is_none")]
    pub pro_tip: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SkillTreeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTree {
    pub title: String,
    pub root: SkillTreeNode,
}

/// The full report payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerReport {
    pub career_recommendations: Vec<CareerRecommendation>,
    pub fit_reasoning: Vec<FitReasoning>,
    pub learning_plans: Vec<LearningPlan>,
    pub skill_tree: SkillTree,
}
