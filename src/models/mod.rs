use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod guidance;
pub mod listing;
pub mod project;

pub use guidance::{CatalogGuidance, GeneratedGuidance, GenericGuidance, Guidance};
pub use listing::{Hackathon, NewHackathon, SihProblem};
pub use project::{
    AcademicProjects, IdeaQuery, ProjectIdea, Recommendation, SuccessPrediction,
};

const FIRST_YEAR_TIERS: &[Difficulty] = &[Difficulty::Beginner];
const SECOND_YEAR_TIERS: &[Difficulty] = &[Difficulty::Beginner, Difficulty::Medium];
const SENIOR_YEAR_TIERS: &[Difficulty] = &[Difficulty::Medium, Difficulty::Advanced];

/// Project difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Medium,
    Advanced,
}

impl Difficulty {
    /// All tiers, easiest first
    pub const ALL: [Difficulty; 3] = [Difficulty::Beginner, Difficulty::Medium, Difficulty::Advanced];

    /// Parses a tier name, ignoring case and surrounding whitespace
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "beginner" => Some(Difficulty::Beginner),
            "medium" => Some(Difficulty::Medium),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Medium => "Medium",
            Difficulty::Advanced => "Advanced",
        }
    }

    /// Tiers suitable for a given academic year
    ///
    /// Returns `None` when the year does not narrow the selection.
    pub fn for_academic_year(year: u8) -> Option<&'static [Difficulty]> {
        match year {
            1 => Some(FIRST_YEAR_TIERS),
            2 => Some(SECOND_YEAR_TIERS),
            3 | 4 => Some(SENIOR_YEAR_TIERS),
            _ => None,
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

const AI_MARKERS: &[&str] = &["ai", "artificial", "aiml"];
const CSE_MARKERS: &[&str] = &["cse", "computer science", "cs"];
const ECE_MARKERS: &[&str] = &["ece", "electronics"];

const GUIDANCE_AI_MARKERS: &[&str] = &["ai", "artificial intelligence"];
const GUIDANCE_CSE_MARKERS: &[&str] = &["cse", "computer science"];

/// Broad discipline a course belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Artificial intelligence / machine learning
    Ai,
    /// Computer science
    Cse,
    /// Electronics and communication
    Ece,
}

impl Category {
    /// Classifies free-form course text such as "BTech CSE" or "AIML"
    ///
    /// Markers are plain substrings, checked AI, then CSE, then ECE, so
    /// "Electronics" lands in CSE through its trailing "cs". Anything
    /// unrecognised falls back to [`Category::Cse`].
    pub fn from_course(course: &str) -> Self {
        Self::classify(course, AI_MARKERS, CSE_MARKERS)
    }

    /// Classifier for looking up bank entries by title
    ///
    /// Same as [`Category::from_course`] without the bare "cs" marker, so
    /// electronics courses search the ECE projects.
    pub fn for_guidance(course: &str) -> Self {
        Self::classify(course, GUIDANCE_AI_MARKERS, GUIDANCE_CSE_MARKERS)
    }

    fn classify(course: &str, ai_markers: &[&str], cse_markers: &[&str]) -> Self {
        let course = course.to_lowercase();
        let mentions = |markers: &[&str]| markers.iter().any(|m| course.contains(*m));

        if mentions(ai_markers) {
            Category::Ai
        } else if mentions(cse_markers) {
            Category::Cse
        } else if mentions(ECE_MARKERS) {
            Category::Ece
        } else {
            Category::Cse
        }
    }

    /// Title keywords that signal a project fits this discipline
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Ai => &[
                "ai",
                "artificial intelligence",
                "machine learning",
                "deep learning",
                "neural",
                "nlp",
                "computer vision",
            ],
            Category::Cse => &["web", "app", "software", "system", "database", "api", "cloud"],
            Category::Ece => &[
                "iot", "sensor", "arduino", "raspberry", "embedded", "hardware", "circuit",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse("Beginner"), Some(Difficulty::Beginner));
        assert_eq!(Difficulty::parse("MEDIUM"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::parse(" advanced "), Some(Difficulty::Advanced));
        assert_eq!(Difficulty::parse("expert"), None);
        assert_eq!(Difficulty::parse("All"), None);
    }

    #[test]
    fn test_difficulty_serializes_capitalized() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"Medium\"");
    }

    #[test]
    fn test_academic_year_tiers() {
        assert_eq!(Difficulty::for_academic_year(1), Some(&[Difficulty::Beginner][..]));
        assert_eq!(
            Difficulty::for_academic_year(2),
            Some(&[Difficulty::Beginner, Difficulty::Medium][..])
        );
        assert_eq!(
            Difficulty::for_academic_year(4),
            Some(&[Difficulty::Medium, Difficulty::Advanced][..])
        );
        assert_eq!(Difficulty::for_academic_year(0), None);
        assert_eq!(Difficulty::for_academic_year(5), None);
    }

    #[test]
    fn test_category_ai_courses() {
        assert_eq!(Category::from_course("AIML"), Category::Ai);
        assert_eq!(Category::from_course("BTech AI"), Category::Ai);
        assert_eq!(Category::from_course("CSE (AI & DS)"), Category::Ai);
        assert_eq!(Category::from_course("Artificial Intelligence"), Category::Ai);
    }

    #[test]
    fn test_category_cse_courses() {
        assert_eq!(Category::from_course("BTech CSE"), Category::Cse);
        assert_eq!(Category::from_course("BSc CS"), Category::Cse);
        assert_eq!(Category::from_course("Computer Science"), Category::Cse);
    }

    #[test]
    fn test_category_ece_courses() {
        assert_eq!(Category::from_course("ECE"), Category::Ece);
        assert_eq!(Category::from_course("BTech ECE"), Category::Ece);
    }

    #[test]
    fn test_category_markers_match_inside_words() {
        // "electronics" ends in "cs", "maintenance" contains "ai"
        assert_eq!(Category::from_course("Electronics and Communication"), Category::Cse);
        assert_eq!(Category::from_course("Maintenance Engineering"), Category::Ai);
        assert_eq!(Category::from_course("Physics"), Category::Cse);
    }

    #[test]
    fn test_category_default_is_cse() {
        assert_eq!(Category::from_course("Mechanical"), Category::Cse);
        assert_eq!(Category::from_course(""), Category::Cse);
    }

    #[test]
    fn test_guidance_category_keeps_electronics() {
        assert_eq!(Category::for_guidance("Electronics and Communication"), Category::Ece);
        assert_eq!(Category::for_guidance("AIML"), Category::Ai);
        assert_eq!(Category::for_guidance("BTech CSE"), Category::Cse);
        assert_eq!(Category::for_guidance("BSc CS"), Category::Cse);
    }
}
