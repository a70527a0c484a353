// All LLM prompt constants for the Report module.

/// System prompt for report generation — sets the coaching persona and
/// enforces JSON-only output.
pub const REPORT_SYSTEM: &str =
    "You are an expert career coach and curriculum designer specializing in \
    guiding university students in India towards their dream tech careers. \
    Your tone is motivational, encouraging, and knowledgeable. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Report generation prompt template.
/// Replace `{degree}`, `{year}`, `{skills}` and `{quiz_answers}` before sending.
pub const REPORT_PROMPT_TEMPLATE: &str = r#"Generate a comprehensive, personalized career report. The centerpiece is a hierarchical "Skill Tree" for the student's top career recommendation.

Instructions for the Skill Tree:

1. Hierarchical structure: start with broad foundational domains (like "Core CS Fundamentals", "Programming Languages") and break them down into specific technologies, libraries and individual concepts.
2. For each major category (any node that has children), include a brief `description` explaining why this skill area is crucial for the career path.
3. For specific, learnable skills (usually leaf nodes), provide a practical `projectIdea` — a small, tangible project that helps the student apply the skill and build their portfolio.
4. Where appropriate, add a `proTip` offering advice, a best practice or a type of resource.
5. Personalize: tailor the emphasis of the tree to the student's existing skills.

Student Profile:
- Degree: {degree}
- Year of Study: {year}
- Existing Skills: {skills}
- Quiz Answers: {quiz_answers}

Return a JSON object with this EXACT schema (no extra fields):
{
  "careerRecommendations": [
    {"title": "Career Title", "description": "Career Description"},
    {"title": "Career Title", "description": "Career Description"},
    {"title": "Career Title", "description": "Career Description"}
  ],
  "fitReasoning": [
    {"title": "Career Title", "reason": "Why this career fits the student"},
    {"title": "Career Title", "reason": "Why this career fits the student"},
    {"title": "Career Title", "reason": "Why this career fits the student"}
  ],
  "learningPlans": [
    {
      "skill": "Skill to develop",
      "plan": [
        {"day": 1, "task": "Task for day 1"},
        {"day": 2, "task": "Task for day 2"},
        {"day": 3, "task": "Task for day 3"},
        {"day": 4, "task": "Task for day 4"},
        {"day": 5, "task": "Task for day 5"},
        {"day": 6, "task": "Task for day 6"},
        {"day": 7, "task": "Task for day 7"}
      ]
    }
  ],
  "skillTree": {
    "title": "Skill Tree for <Top Career>",
    "root": {
      "name": "<Root Name>",
      "description": "<Root description>",
      "children": [
        {"name": "...", "description": "...", "projectIdea": "...", "proTip": "...", "children": []}
      ]
    }
  }
}"#;
