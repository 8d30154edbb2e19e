use crate::{
    models::{
        guidance::{GeneralAdvice, SetupAdvice},
        CatalogGuidance, Category, GenericGuidance, Guidance,
    },
    services::{
        ai::AiAdvisor,
        bank::{self, to_strings, ProjectTemplate},
    },
};

const BEST_PRACTICES: &[&str] = &[
    "Start with a small prototype",
    "Test each component separately",
    "Use version control (Git)",
    "Document your code",
    "Deploy incrementally",
];

const COMMON_CHALLENGES: &[&str] = &[
    "Integration issues between components",
    "Performance optimization",
    "Error handling and debugging",
    "Scalability concerns",
];

/// Produces step-by-step implementation guidance for a project title
#[derive(Clone)]
pub struct GuidanceComposer {
    ai: Option<AiAdvisor>,
}

impl GuidanceComposer {
    pub fn new(ai: Option<AiAdvisor>) -> Self {
        Self { ai }
    }

    /// AI guidance when available, otherwise the bank entry or generic advice
    pub async fn get_implementation_guidance(
        &self,
        project_title: &str,
        course: &str,
        description: &str,
    ) -> Guidance {
        if let Some(ai) = &self.ai {
            match ai.generate_guidance(project_title, course, description).await {
                Ok(guidance) => return Guidance::Generated(guidance),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        project_title = %project_title,
                        provider = ai.provider_name(),
                        "AI guidance failed, falling back to project bank"
                    );
                }
            }
        }

        let category = Category::for_guidance(course);
        match find_project(category, project_title) {
            Some(project) => {
                tracing::info!(project_title = %project.title, "Guidance served from project bank");
                Guidance::Catalog(catalog_guidance(project))
            }
            None => {
                tracing::info!(project_title = %project_title, category = ?category, "No bank entry, serving generic guidance");
                Guidance::Generic(generic_guidance(project_title))
            }
        }
    }
}

/// First bank entry whose title contains the query or is contained in it
fn find_project(category: Category, project_title: &str) -> Option<&'static ProjectTemplate> {
    let wanted = project_title.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }

    bank::all_projects(category)
        .map(|(_, project)| project)
        .find(|project| {
            let title = project.title.to_lowercase();
            title.contains(&wanted) || wanted.contains(&title)
        })
}

fn catalog_guidance(project: &ProjectTemplate) -> CatalogGuidance {
    CatalogGuidance {
        project_title: project.title.to_string(),
        description: project.description.to_string(),
        hardware_requirements: project.hardware.to_string(),
        software_requirements: to_strings(project.software),
        tech_stack: to_strings(project.tech_stack),
        implementation_steps: to_strings(project.implementation_steps),
        estimated_time: project.estimated_time.to_string(),
        job_relevance: project.job_relevance.to_string(),
        guidance: SetupAdvice {
            hardware_setup: format!(
                "For hardware setup: {}. Follow manufacturer documentation for installation.",
                project.hardware
            ),
            software_setup: format!(
                "Install required software: {}. Set up development environment.",
                project.software.join(", ")
            ),
            best_practices: to_strings(BEST_PRACTICES),
            common_challenges: to_strings(COMMON_CHALLENGES),
        },
    }
}

fn generic_guidance(project_title: &str) -> GenericGuidance {
    GenericGuidance {
        project_title: project_title.to_string(),
        message: "Project not found in database. Here's generic guidance:".to_string(),
        general_guidance: GeneralAdvice {
            hardware: "Identify required hardware components, order them, and set up according to specifications.".to_string(),
            software: "Install development tools, set up environment, and configure dependencies.".to_string(),
            implementation: "Break down into modules, implement incrementally, test thoroughly.".to_string(),
            deployment: "Choose appropriate hosting platform, configure deployment pipeline.".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::providers::MockLanguageModel;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_exact_title_match() {
        let composer = GuidanceComposer::new(None);
        let guidance = composer
            .get_implementation_guidance("Task Management App", "BTech CSE", "")
            .await;

        let Guidance::Catalog(catalog) = guidance else {
            panic!("expected catalog guidance");
        };
        assert_eq!(catalog.project_title, "Task Management App");
        assert_eq!(catalog.estimated_time, "3-4 weeks");
        assert_eq!(catalog.guidance.best_practices.len(), 5);
        assert_eq!(
            catalog.guidance.software_setup,
            "Install required software: VS Code, Node.js, MongoDB. Set up development environment."
        );
    }

    #[tokio::test]
    async fn test_partial_title_matches_either_way() {
        let composer = GuidanceComposer::new(None);

        // query inside the bank title
        let guidance = composer.get_implementation_guidance("drone", "ECE", "").await;
        assert_eq!(guidance.project_title(), "Autonomous Drone with Computer Vision");

        // bank title inside the query
        let guidance = composer
            .get_implementation_guidance("My Recommendation System for Books", "AIML", "")
            .await;
        assert_eq!(guidance.project_title(), "Recommendation System");
    }

    #[tokio::test]
    async fn test_search_is_limited_to_course_category() {
        let composer = GuidanceComposer::new(None);
        let guidance = composer.get_implementation_guidance("drone", "BTech CSE", "").await;
        assert!(matches!(guidance, Guidance::Generic(_)));
    }

    #[tokio::test]
    async fn test_first_match_in_tier_order() {
        let composer = GuidanceComposer::new(None);
        // "system" appears in several AI titles; the beginner one wins
        let guidance = composer.get_implementation_guidance("system", "AIML", "").await;
        assert_eq!(guidance.project_title(), "Fake News Detection System");
    }

    #[tokio::test]
    async fn test_unknown_title_gets_generic_guidance() {
        let composer = GuidanceComposer::new(None);
        let guidance = composer
            .get_implementation_guidance("Quantum Toaster", "BTech CSE", "")
            .await;

        let Guidance::Generic(generic) = guidance else {
            panic!("expected generic guidance");
        };
        assert_eq!(generic.project_title, "Quantum Toaster");
        assert!(generic.message.starts_with("Project not found"));
    }

    #[tokio::test]
    async fn test_blank_title_gets_generic_guidance() {
        let composer = GuidanceComposer::new(None);
        let guidance = composer.get_implementation_guidance("   ", "AIML", "").await;
        assert!(matches!(guidance, Guidance::Generic(_)));
    }

    #[tokio::test]
    async fn test_ai_guidance_preferred() {
        let mut mock = MockLanguageModel::new();
        mock.expect_name().return_const("mock");
        mock.expect_generate()
            .returning(|_| Ok(r#"{"testing_strategy": "Pilot with one hostel"}"#.to_string()));

        let composer = GuidanceComposer::new(Some(AiAdvisor::new(Arc::new(mock))));
        let guidance = composer
            .get_implementation_guidance("Task Management App", "BTech CSE", "To-do lists")
            .await;

        let Guidance::Generated(generated) = guidance else {
            panic!("expected generated guidance");
        };
        assert_eq!(generated.project_title, "Task Management App");
        assert_eq!(generated.testing_strategy, "Pilot with one hostel");
    }

    #[tokio::test]
    async fn test_ai_failure_falls_back_to_bank() {
        let mut mock = MockLanguageModel::new();
        mock.expect_name().return_const("mock");
        mock.expect_generate()
            .returning(|_| Err(AppError::ExternalApi("timeout".to_string())));

        let composer = GuidanceComposer::new(Some(AiAdvisor::new(Arc::new(mock))));
        let guidance = composer
            .get_implementation_guidance("Task Management App", "BTech CSE", "")
            .await;
        assert!(matches!(guidance, Guidance::Catalog(_)));
    }

    #[test]
    fn test_guidance_serializes_without_tag() {
        let guidance = Guidance::Generic(generic_guidance("Quantum Toaster"));
        let json = serde_json::to_value(&guidance).unwrap();
        assert_eq!(json["project_title"], "Quantum Toaster");
        assert!(json["general_guidance"]["deployment"].is_string());
    }
}
