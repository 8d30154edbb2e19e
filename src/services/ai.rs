use std::sync::Arc;

use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{Difficulty, GeneratedGuidance, IdeaQuery, ProjectIdea},
    services::{providers::LanguageModel, scoring},
};

/// Score used when the model omits `success_percentage`
const DEFAULT_AI_SCORE: f64 = 70.0;

/// Generates ideas, guidance and scores with a language model
///
/// Every method either returns usable content or an error; callers decide how
/// to fall back. `estimate_success` is the exception and never fails.
#[derive(Clone)]
pub struct AiAdvisor {
    model: Arc<dyn LanguageModel>,
}

/// Project idea as the model writes it; every field is optional
#[derive(Debug, Deserialize)]
struct GeneratedIdea {
    #[serde(default = "default_title")]
    title: String,
    #[serde(default = "default_difficulty")]
    difficulty: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tech_stack: Vec<String>,
    #[serde(default = "default_hardware")]
    hardware: String,
    #[serde(default)]
    software: Vec<String>,
    #[serde(default)]
    implementation_steps: Vec<String>,
    #[serde(default = "default_estimated_time")]
    estimated_time: String,
    #[serde(default)]
    job_relevance: String,
}

fn default_title() -> String {
    "Untitled Project".to_string()
}

fn default_difficulty() -> String {
    Difficulty::Beginner.label().to_string()
}

fn default_hardware() -> String {
    "None".to_string()
}

fn default_estimated_time() -> String {
    "N/A".to_string()
}

#[derive(Debug, Deserialize)]
struct ScoreReply {
    #[serde(default)]
    success_percentage: Option<f64>,
}

/// Removes a Markdown code fence the model may wrap around its JSON
pub(crate) fn strip_code_fences(response: &str) -> &str {
    let mut text = response.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    }
    if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

fn excerpt(text: &str) -> String {
    text.chars().take(200).collect()
}

impl AiAdvisor {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    pub fn provider_name(&self) -> &'static str {
        self.model.name()
    }

    /// Asks the model for `count` project ideas matching the query
    pub async fn generate_ideas(&self, query: &IdeaQuery, count: usize) -> AppResult<Vec<ProjectIdea>> {
        let prompt = ideas_prompt(query, count);
        let response = self.model.generate(&prompt).await?;
        let cleaned = strip_code_fences(&response);

        tracing::debug!(response = %cleaned, provider = self.provider_name(), "Raw idea response");

        let values: Vec<serde_json::Value> = serde_json::from_str(cleaned).map_err(|e| {
            AppError::AiResponse(format!(
                "expected a JSON array of ideas ({}): {}...",
                e,
                excerpt(cleaned)
            ))
        })?;

        let mut ideas = Vec::new();
        for value in values.into_iter().filter(|v| v.is_object()) {
            if ideas.len() >= count {
                break;
            }

            let generated: GeneratedIdea = match serde_json::from_value(value) {
                Ok(idea) => idea,
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping malformed generated idea");
                    continue;
                }
            };

            let success_percentage = self
                .estimate_success(
                    &query.course,
                    &generated.title,
                    &generated.difficulty,
                    &generated.description,
                    &generated.tech_stack,
                )
                .await;

            ideas.push(ProjectIdea {
                difficulty: Difficulty::parse(&generated.difficulty).unwrap_or(Difficulty::Beginner),
                title: generated.title,
                success_percentage,
                description: generated.description,
                tech_stack: generated.tech_stack,
                hardware: generated.hardware,
                software: generated.software,
                implementation_steps: generated.implementation_steps,
                estimated_time: generated.estimated_time,
                job_relevance: generated.job_relevance,
            });
        }

        tracing::info!(
            course = %query.course,
            ideas = ideas.len(),
            provider = self.provider_name(),
            "Generated project ideas"
        );

        Ok(ideas)
    }

    /// Asks the model for a full implementation guide
    pub async fn generate_guidance(
        &self,
        project_title: &str,
        course: &str,
        description: &str,
    ) -> AppResult<GeneratedGuidance> {
        let prompt = guidance_prompt(project_title, course, description);
        let response = self.model.generate(&prompt).await?;
        let cleaned = strip_code_fences(&response);

        let mut guidance: GeneratedGuidance = serde_json::from_str(cleaned).map_err(|e| {
            AppError::AiResponse(format!("expected a JSON guidance object: {}", e))
        })?;

        guidance.project_title = project_title.to_string();
        guidance.description = description.to_string();

        Ok(guidance)
    }

    /// Model-estimated success percentage, falling back to the heuristic
    pub async fn estimate_success(
        &self,
        course: &str,
        project_title: &str,
        difficulty: &str,
        description: &str,
        tech_stack: &[String],
    ) -> f64 {
        let prompt = score_prompt(course, project_title, difficulty, description, tech_stack);

        match self.request_score(&prompt).await {
            Ok(score) => score,
            Err(e) => {
                tracing::debug!(
                    error = %e,
                    project_title = %project_title,
                    "AI scoring failed, using heuristic"
                );
                scoring::predict_success(course, project_title, difficulty, "None")
            }
        }
    }

    async fn request_score(&self, prompt: &str) -> AppResult<f64> {
        let response = self.model.generate(prompt).await?;
        let reply: ScoreReply = serde_json::from_str(strip_code_fences(&response))
            .map_err(|e| AppError::AiResponse(format!("expected a JSON score object: {}", e)))?;

        let score = reply.success_percentage.unwrap_or(DEFAULT_AI_SCORE);
        if !score.is_finite() {
            return Err(AppError::AiResponse(format!("non-finite score {}", score)));
        }

        Ok(score.clamp(0.0, 100.0))
    }
}

fn ideas_prompt(query: &IdeaQuery, count: usize) -> String {
    let difficulty_text = query
        .difficulty_filter()
        .unwrap_or("Beginner, Medium, and Advanced");
    let year_text = match query.academic_year {
        Some(year) => format!("for {} year students", year),
        None => "for all academic years".to_string(),
    };
    let type_text = match query.project_type.as_deref() {
        Some(project_type) if !project_type.is_empty() => format!("for {}", project_type),
        _ => "for both hackathon and academic projects".to_string(),
    };

    format!(
        r#"Generate {count} unique and innovative project ideas for a student pursuing {course} {year_text}.

Requirements:
- Difficulty levels: {difficulty_text}
- Project type: {type_text}
- Each project should be practical and implementable
- Include projects suitable for hackathons and academic submissions

For each project, provide:
1. title: A catchy project title
2. difficulty: One of "Beginner", "Medium", or "Advanced"
3. description: A detailed 2-3 sentence description
4. tech_stack: List of 5-7 relevant technologies/tools
5. hardware: Hardware requirements (or "None" if software-only)
6. software: List of 3-5 software tools/IDEs needed
7. implementation_steps: List of 6-8 step-by-step implementation steps
8. estimated_time: Time estimate (e.g., "3-4 weeks", "2 months")
9. job_relevance: How this project helps in job preparation (1-2 sentences)

Return ONLY a valid JSON array. Each project should be a JSON object with these exact keys:
title, difficulty, description, tech_stack (array), hardware, software (array), implementation_steps (array), estimated_time, job_relevance

Generate {count} unique projects now:"#,
        course = query.course,
    )
}

fn guidance_prompt(project_title: &str, course: &str, description: &str) -> String {
    let description = if description.is_empty() {
        "Not provided"
    } else {
        description
    };

    format!(
        r#"Generate comprehensive implementation guidance for a project: "{project_title}"

Student's course: {course}
Project description: {description}

Provide detailed guidance including:

1. hardware_setup: Detailed steps for hardware setup (if hardware is needed, otherwise explain it's software-only)
2. software_setup: Step-by-step software installation and environment setup
3. implementation_steps: Detailed 8-10 step implementation guide
4. best_practices: List of 5-7 best practices for this project
5. common_challenges: List of 5-7 common challenges students might face
6. resources: List of 3-5 helpful resources (tutorials, documentation, etc.)
7. testing_strategy: How to test the project
8. deployment_guide: How to deploy the project

Return ONLY a valid JSON object with these exact keys:
hardware_setup, software_setup, implementation_steps (array), best_practices (array), common_challenges (array), resources (array), testing_strategy, deployment_guide

Generate the guidance now:"#
    )
}

fn score_prompt(
    course: &str,
    project_title: &str,
    difficulty: &str,
    description: &str,
    tech_stack: &[String],
) -> String {
    format!(
        r#"Analyze this project idea and calculate its success percentage (0-100):

Course: {course}
Project Title: {project_title}
Difficulty: {difficulty}
Description: {description}
Tech Stack: {tech_stack}

Consider factors:
- Difficulty level appropriateness for the course
- Project feasibility
- Tech stack relevance and learning curve
- Market demand and job relevance
- Implementation complexity
- Hackathon/portfolio appeal

Return ONLY a JSON object with this format:
{{"success_percentage": 75.5, "reasoning": "Brief explanation of the score"}}

Calculate now:"#,
        tech_stack = tech_stack.join(", "),
    )
}
