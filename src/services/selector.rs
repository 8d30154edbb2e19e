use rand::{seq::SliceRandom, Rng};

use crate::{
    models::{AcademicProjects, Category, Difficulty, IdeaQuery, ProjectIdea},
    services::{ai::AiAdvisor, bank, scoring},
};

/// Picks project ideas for a course
///
/// Tries the AI delegate first when one is configured. Any failure there
/// degrades to the static project bank scored with the heuristic.
#[derive(Clone)]
pub struct IdeaSelector {
    ai: Option<AiAdvisor>,
    ai_idea_count: usize,
    max_ideas: usize,
}

impl IdeaSelector {
    pub fn new(ai: Option<AiAdvisor>, ai_idea_count: usize, max_ideas: usize) -> Self {
        Self {
            ai,
            ai_idea_count,
            max_ideas,
        }
    }

    /// Selector that only ever uses the static bank
    pub fn offline(max_ideas: usize) -> Self {
        Self::new(None, 0, max_ideas)
    }

    pub fn ai_enabled(&self) -> bool {
        self.ai.is_some()
    }

    pub async fn get_project_ideas(&self, query: &IdeaQuery) -> Vec<ProjectIdea> {
        if let Some(ai) = &self.ai {
            match ai.generate_ideas(query, self.ai_idea_count).await {
                Ok(ideas) => return ideas,
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        course = %query.course,
                        provider = ai.provider_name(),
                        "AI idea generation failed, falling back to project bank"
                    );
                }
            }
        }

        self.static_ideas(query, &mut rand::rng())
    }

    /// Ideas from the project bank, filtered, scored and shuffled
    pub fn static_ideas<R: Rng + ?Sized>(&self, query: &IdeaQuery, rng: &mut R) -> Vec<ProjectIdea> {
        let category = Category::from_course(&query.course);

        let tiers: Vec<Difficulty> = match query.difficulty_filter() {
            Some(level) => vec![Difficulty::parse(level).unwrap_or(Difficulty::Beginner)],
            None => Difficulty::ALL.to_vec(),
        };

        let year_tiers = query.academic_year.and_then(Difficulty::for_academic_year);

        let mut ideas: Vec<ProjectIdea> = tiers
            .into_iter()
            .filter(|tier| year_tiers.map_or(true, |allowed| allowed.contains(tier)))
            .flat_map(|tier| {
                bank::projects(category, tier).iter().map(move |project| {
                    let score = scoring::predict_success(
                        &query.course,
                        project.title,
                        tier.label(),
                        project.hardware,
                    );
                    project.to_idea(tier, score)
                })
            })
            .collect();

        ideas.shuffle(rng);
        ideas.truncate(self.max_ideas);

        tracing::info!(
            course = %query.course,
            category = ?category,
            ideas = ideas.len(),
            "Selected ideas from project bank"
        );

        ideas
    }

    /// Year-based ideas geared towards job preparation or a portfolio
    pub async fn academic_projects(&self, course: &str, academic_year: u8, focus: &str) -> AcademicProjects {
        let query = IdeaQuery::new(course)
            .with_academic_year(academic_year)
            .with_difficulty("All")
            .with_project_type("academic");

        let mut projects = self.get_project_ideas(&query).await;

        if focus == "job_preparation" || focus == "both" {
            for project in &mut projects {
                let skills: Vec<&str> = project.tech_stack.iter().take(3).map(String::as_str).collect();
                project.job_relevance = format!(
                    "Builds skills in {} - highly valued in industry",
                    skills.join(", ")
                );
            }
        }

        AcademicProjects {
            course: course.to_string(),
            academic_year,
            focus: focus.to_string(),
            projects,
            career_advice: format!(
                "For {} students in year {}, focus on building projects that demonstrate practical skills in your core subjects.",
                course, academic_year
            ),
        }
    }
}
