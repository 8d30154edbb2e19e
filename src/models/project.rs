use serde::{Deserialize, Serialize};

use super::Difficulty;

/// A single project suggestion returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectIdea {
    pub title: String,
    pub difficulty: Difficulty,
    pub success_percentage: f64,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub hardware: String,
    pub software: Vec<String>,
    pub implementation_steps: Vec<String>,
    pub estimated_time: String,
    pub job_relevance: String,
}

/// Request for project ideas
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdeaQuery {
    pub course: String,
    /// 1-4 for a four year degree
    #[serde(default)]
    pub academic_year: Option<u8>,
    /// Beginner, Medium, Advanced or All
    #[serde(default)]
    pub difficulty_level: Option<String>,
    /// hackathon, academic or both
    #[serde(default)]
    pub project_type: Option<String>,
}

impl IdeaQuery {
    pub fn new(course: impl Into<String>) -> Self {
        Self {
            course: course.into(),
            ..Default::default()
        }
    }

    pub fn with_academic_year(mut self, year: u8) -> Self {
        self.academic_year = Some(year);
        self
    }

    pub fn with_difficulty(mut self, level: impl Into<String>) -> Self {
        self.difficulty_level = Some(level.into());
        self
    }

    pub fn with_project_type(mut self, project_type: impl Into<String>) -> Self {
        self.project_type = Some(project_type.into());
        self
    }

    /// Requested difficulty, unless absent, blank or "All"
    pub fn difficulty_filter(&self) -> Option<&str> {
        self.difficulty_level
            .as_deref()
            .filter(|level| !level.trim().is_empty())
            .filter(|level| !level.eq_ignore_ascii_case("all"))
    }
}

/// Advice tier derived from a success percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    #[serde(rename = "Highly Recommended")]
    HighlyRecommended,
    #[serde(rename = "Recommended")]
    Recommended,
    #[serde(rename = "Moderate Success Expected")]
    Moderate,
}

impl Recommendation {
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            Recommendation::HighlyRecommended
        } else if score >= 60.0 {
            Recommendation::Recommended
        } else {
            Recommendation::Moderate
        }
    }
}

/// Result of scoring a single project title
#[derive(Debug, Clone, Serialize)]
pub struct SuccessPrediction {
    pub project_title: String,
    pub course: String,
    pub difficulty: String,
    pub success_percentage: f64,
    pub recommendation: Recommendation,
}

/// Year-based project plan aimed at job preparation
#[derive(Debug, Clone, Serialize)]
pub struct AcademicProjects {
    pub course: String,
    pub academic_year: u8,
    pub focus: String,
    pub projects: Vec<ProjectIdea>,
    pub career_advice: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_thresholds() {
        assert_eq!(Recommendation::from_score(95.0), Recommendation::HighlyRecommended);
        assert_eq!(Recommendation::from_score(75.0), Recommendation::HighlyRecommended);
        assert_eq!(Recommendation::from_score(74.0), Recommendation::Recommended);
        assert_eq!(Recommendation::from_score(60.0), Recommendation::Recommended);
        assert_eq!(Recommendation::from_score(59.0), Recommendation::Moderate);
    }

    #[test]
    fn test_recommendation_serialization() {
        let json = serde_json::to_string(&Recommendation::Moderate).unwrap();
        assert_eq!(json, "\"Moderate Success Expected\"");
    }

    #[test]
    fn test_difficulty_filter_ignores_all() {
        assert_eq!(IdeaQuery::new("CSE").difficulty_filter(), None);
        assert_eq!(IdeaQuery::new("CSE").with_difficulty("ALL").difficulty_filter(), None);
        assert_eq!(IdeaQuery::new("CSE").with_difficulty("").difficulty_filter(), None);
        assert_eq!(IdeaQuery::new("CSE").with_difficulty("  ").difficulty_filter(), None);
        assert_eq!(
            IdeaQuery::new("CSE").with_difficulty("Medium").difficulty_filter(),
            Some("Medium")
        );
    }

    #[test]
    fn test_idea_query_deserialization() {
        let json = r#"{
            "course": "BTech CSE",
            "academic_year": 3,
            "difficulty_level": "All",
            "project_type": "both"
        }"#;

        let query: IdeaQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.course, "BTech CSE");
        assert_eq!(query.academic_year, Some(3));
        assert_eq!(query.project_type.as_deref(), Some("both"));

        let minimal: IdeaQuery = serde_json::from_str(r#"{"course": "ECE"}"#).unwrap();
        assert_eq!(minimal.academic_year, None);
        assert_eq!(minimal.difficulty_level, None);
    }
}
