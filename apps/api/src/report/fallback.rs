//! Deterministic fallback report — served when no LLM key is configured or
//! when the LLM is unavailable, so the report endpoint keeps working.

use crate::report::models::{
    CareerRecommendation, CareerReport, FitReasoning, LearningPlan, PlanDay, ReportInput,
    SkillTree, SkillTreeNode,
};

/// Builds the canned report. Pure function of the input: the student's first
/// listed skill ("Problem Solving" when none) personalizes the reasoning and
/// the first learning plan; everything else is fixed.
pub fn build_fallback_report(input: &ReportInput) -> CareerReport {
    let first_skill = first_skill(&input.profile.skills);

    CareerReport {
        career_recommendations: vec![
            recommendation(
                "AI Engineer",
                "Apply machine learning to build intelligent systems.",
            ),
            recommendation(
                "Data Analyst",
                "Analyze data to inform decisions and strategy.",
            ),
            recommendation(
                "Cloud Solutions Architect",
                "Design scalable cloud infrastructure.",
            ),
        ],
        fit_reasoning: vec![
            FitReasoning {
                title: "AI Engineer".to_string(),
                reason: format!(
                    "Your background and interest in {first_skill} align with AI-focused roles."
                ),
            },
            FitReasoning {
                title: "Data Analyst".to_string(),
                reason: "Strong analytical thinking and curiosity suit data analysis.".to_string(),
            },
            FitReasoning {
                title: "Cloud Solutions Architect".to_string(),
                reason: "You show aptitude for systems design and tooling.".to_string(),
            },
        ],
        learning_plans: vec![
            seven_day_plan(&first_skill, |day| format!("Study {first_skill} topic {day}.")),
            seven_day_plan("SQL", |day| format!("Practice SQL queries set {day}.")),
            seven_day_plan("Terraform", |day| format!("Build an IaC module part {day}.")),
        ],
        skill_tree: fallback_skill_tree(),
    }
}

fn first_skill(skills: &str) -> String {
    skills
        .split(',')
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or("Problem Solving")
        .to_string()
}

fn recommendation(title: &str, description: &str) -> CareerRecommendation {
    CareerRecommendation {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn seven_day_plan(skill: &str, task: impl Fn(u32) -> String) -> LearningPlan {
    LearningPlan {
        skill: skill.to_string(),
        plan: (1..=7).map(|day| PlanDay {
            day,
            task: task(day),
        }).collect(),
    }
}

fn fallback_skill_tree() -> SkillTree {
    SkillTree {
        title: "Skill Tree for AI Engineer".to_string(),
        root: SkillTreeNode {
            name: "AI Engineer Skills".to_string(),
            description: Some(
                "Essential skills from fundamentals to applied ML to get started.".to_string(),
            ),
            project_idea: None,
            pro_tip: None,
            children: vec![
                SkillTreeNode {
                    name: "Programming & Foundations".to_string(),
                    description: Some(
                        "Python and SQL are foundational for data and ML workflows.".to_string(),
                    ),
                    project_idea: None,
                    pro_tip: None,
                    children: vec![
                        leaf("Python", "Build a CLI that analyzes CSVs and summarizes stats."),
                        leaf("SQL", "Write queries to explore a sample e-commerce dataset."),
                    ],
                },
                SkillTreeNode {
                    name: "Machine Learning Basics".to_string(),
                    description: Some(
                        "Core ML concepts and classic models before deep learning.".to_string(),
                    ),
                    project_idea: None,
                    pro_tip: None,
                    children: vec![leaf(
                        "Regression & Classification",
                        "Predict house prices using scikit-learn.",
                    )],
                },
            ],
        },
    }
}

fn leaf(name: &str, project_idea: &str) -> SkillTreeNode {
    SkillTreeNode {
        name: name.to_string(),
        description: None,
        project_idea: Some(project_idea.to_string()),
        pro_tip: None,
        children: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::models::StudentProfile;

    fn input(skills: &str) -> ReportInput {
        ReportInput {
            profile: StudentProfile {
                degree: "B.Tech Computer Science".to_string(),
                year: "3rd Year".to_string(),
                skills: skills.to_string(),
            },
            quiz_answers: vec!["a".into(), "b".into(), "c".into(), "a".into(), "b".into()],
        }
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let i = input("Python, SQL");
        assert_eq!(build_fallback_report(&i), build_fallback_report(&i));
    }

    #[test]
    fn test_fallback_has_three_recommendations_with_reasoning() {
        let report = build_fallback_report(&input("Python"));
        assert_eq!(report.career_recommendations.len(), 3);
        assert_eq!(report.fit_reasoning.len(), 3);
        for (rec, fit) in report
            .career_recommendations
            .iter()
            .zip(&report.fit_reasoning)
        {
            assert_eq!(rec.title, fit.title);
        }
    }

    #[test]
    fn test_fallback_plans_cover_seven_days() {
        let report = build_fallback_report(&input("Python"));
        assert_eq!(report.learning_plans.len(), 3);
        for plan in &report.learning_plans {
            let days: Vec<u32> = plan.plan.iter().map(|d| d.day).collect();
            assert_eq!(days, (1..=7).collect::<Vec<u32>>());
        }
    }

    #[test]
    fn test_first_skill_personalizes_report() {
        let report = build_fallback_report(&input("Rust, Go"));
        assert!(report.fit_reasoning[0].reason.contains("Rust"));
        assert_eq!(report.learning_plans[0].skill, "Rust");
    }

    #[test]
    fn test_blank_skills_default_to_problem_solving() {
        let report = build_fallback_report(&input("  , "));
        assert_eq!(report.learning_plans[0].skill, "Problem Solving");
    }

    #[test]
    fn test_skill_tree_categories_have_descriptions() {
        let report = build_fallback_report(&input("Python"));
        let root = &report.skill_tree.root;
        assert!(!root.children.is_empty());
        for category in &root.children {
            assert!(category.description.is_some());
            assert!(!category.children.is_empty());
        }
    }
}
