use crate::models::{Category, Difficulty, Recommendation, SuccessPrediction};

/// Score bounds, in percent
const MIN_SCORE: u32 = 30;
const MAX_SCORE: u32 = 95;

/// Base score when the difficulty is not a known tier
const UNKNOWN_DIFFICULTY_BASE: u32 = 50;

const COURSE_MATCH_BONUS: u32 = 10;

const HACKATHON_KEYWORD_BONUS: u32 = 5;
const HACKATHON_BONUS_CAP: u32 = 15;

const SOFTWARE_ONLY_BONUS: u32 = 5;

const INDUSTRY_KEYWORD_BONUS: u32 = 2;
const INDUSTRY_BONUS_CAP: u32 = 10;

/// Themes that tend to do well at hackathons
const HACKATHON_KEYWORDS: &[&str] = &[
    "smart",
    "ai",
    "ml",
    "automation",
    "health",
    "traffic",
    "security",
    "iot",
    "blockchain",
    "ar",
    "vr",
    "sustainability",
    "education",
    "agriculture",
    "finance",
];

/// Technologies employers look for
const INDUSTRY_KEYWORDS: &[&str] = &[
    "cloud",
    "microservices",
    "api",
    "rest",
    "docker",
    "kubernetes",
    "react",
    "angular",
    "node",
    "python",
    "java",
    "spring",
    "tensorflow",
    "pytorch",
    "aws",
    "azure",
    "gcp",
];

fn base_score(difficulty: &str) -> u32 {
    match Difficulty::parse(difficulty) {
        Some(Difficulty::Beginner) => 75,
        Some(Difficulty::Medium) => 60,
        Some(Difficulty::Advanced) => 45,
        None => UNKNOWN_DIFFICULTY_BASE,
    }
}

/// Number of distinct keywords that occur anywhere in `text`
fn count_matches(text: &str, keywords: &[&str]) -> u32 {
    keywords.iter().filter(|kw| text.contains(*kw)).count() as u32
}

/// Estimates how likely a student is to complete a project successfully
///
/// A deterministic heuristic over the project title:
///
/// 1. Base score by difficulty (Beginner 75, Medium 60, Advanced 45, otherwise 50)
/// 2. +10 if the title mentions a keyword of the course's discipline
/// 3. +5 per hackathon-friendly keyword, capped at 15
/// 4. +5 when no hardware is required
/// 5. +2 per industry technology keyword, capped at 10
///
/// The result is clamped to 30..=95.
pub fn predict_success(course: &str, project_title: &str, difficulty: &str, hardware: &str) -> f64 {
    let title = project_title.to_lowercase();
    let category = Category::from_course(course);

    let mut score = base_score(difficulty);

    if count_matches(&title, category.keywords()) > 0 {
        score += COURSE_MATCH_BONUS;
    }

    score += (HACKATHON_KEYWORD_BONUS * count_matches(&title, HACKATHON_KEYWORDS))
        .min(HACKATHON_BONUS_CAP);

    let hardware = hardware.to_lowercase();
    if hardware.is_empty() || hardware == "none" {
        score += SOFTWARE_ONLY_BONUS;
    }

    score += (INDUSTRY_KEYWORD_BONUS * count_matches(&title, INDUSTRY_KEYWORDS))
        .min(INDUSTRY_BONUS_CAP);

    f64::from(score.clamp(MIN_SCORE, MAX_SCORE))
}

/// Scores a title and attaches a recommendation tier
pub fn predict(course: &str, project_title: &str, difficulty: &str, hardware: &str) -> SuccessPrediction {
    let success_percentage = predict_success(course, project_title, difficulty, hardware);

    SuccessPrediction {
        project_title: project_title.to_string(),
        course: course.to_string(),
        difficulty: difficulty.to_string(),
        success_percentage,
        recommendation: Recommendation::from_score(success_percentage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beginner_software_only() {
        // 75 base + 5 software-only, no keyword hits
        let score = predict_success("BTech AI", "Fake News Detection System", "Beginner", "None");
        assert_eq!(score, 80.0);
    }

    #[test]
    fn test_course_keyword_bonus() {
        // "web" is a CSE keyword: 75 + 10 + 5
        let score = predict_success("BTech CSE", "E-Commerce Website", "Beginner", "None");
        assert_eq!(score, 90.0);
    }

    #[test]
    fn test_course_keyword_requires_matching_discipline() {
        // Same title, but "web" is not an ECE keyword
        let score = predict_success("ECE", "E-Commerce Website", "Beginner", "None");
        assert_eq!(score, 80.0);
    }

    #[test]
    fn test_electronics_course_scores_with_cse_keywords() {
        // "electronics" contains "cs": 60 + 10 (system) + 15
        let score = predict_success(
            "Electronics and Communication",
            "Smart Health Monitoring System",
            "Medium",
            "Arduino",
        );
        assert_eq!(score, 85.0);
    }

    #[test]
    fn test_hackathon_bonus_is_capped() {
        // smart, health and "ar" (inside "smart") hit: 60 + 15, hardware required
        let score = predict_success(
            "ECE",
            "Smart Health Monitoring System",
            "Medium",
            "Arduino, Heart Rate Sensor, Temperature Sensor, ESP32",
        );
        assert_eq!(score, 75.0);

        // four hackathon keywords still give only 15
        let score = predict_success("Mechanical", "Smart Traffic Health Finance", "Medium", "Sensors");
        assert_eq!(score, 75.0);
    }

    #[test]
    fn test_ai_course_and_hackathon_keywords() {
        // 60 + 10 (ai) + 5 (ai) + 5 (traffic)
        let score = predict_success(
            "AIML",
            "AI-Based Traffic Management System",
            "Medium",
            "Cameras, Raspberry Pi (optional for demo)",
        );
        assert_eq!(score, 80.0);
    }

    #[test]
    fn test_industry_keywords() {
        // 45 + 5 ("ar" in "architecture") + 2 (microservices)
        let score = predict_success(
            "BTech CSE",
            "Microservices Architecture Platform",
            "Advanced",
            "Cloud infrastructure (AWS/GCP)",
        );
        assert_eq!(score, 52.0);
    }

    #[test]
    fn test_industry_bonus_is_capped() {
        // python, java, docker, kubernetes, aws, azure: 12 capped to 10
        let score = predict_success(
            "Mechanical",
            "python java docker kubernetes aws azure",
            "Advanced",
            "Servers",
        );
        assert_eq!(score, 55.0);
    }

    #[test]
    fn test_unknown_difficulty_uses_default_base() {
        let score = predict_success("Mechanical", "Bridge Load Estimator", "Expert", "Strain gauges");
        assert_eq!(score, 50.0);
    }

    #[test]
    fn test_difficulty_is_case_insensitive() {
        assert_eq!(
            predict_success("Civil", "Bridge Load Estimator", "advanced", "Strain gauges"),
            45.0
        );
        assert_eq!(
            predict_success("Civil", "Bridge Load Estimator", "MEDIUM", "Strain gauges"),
            60.0
        );
    }

    #[test]
    fn test_empty_hardware_counts_as_software_only() {
        let with_none = predict_success("Civil", "Bridge Load Estimator", "Medium", "NONE");
        let with_empty = predict_success("Civil", "Bridge Load Estimator", "Medium", "");
        assert_eq!(with_none, 65.0);
        assert_eq!(with_empty, 65.0);
    }

    #[test]
    fn test_score_is_clamped_to_max() {
        let score = predict_success(
            "BTech CSE",
            "Smart AI IoT cloud api rest docker kubernetes react",
            "Beginner",
            "None",
        );
        assert_eq!(score, 95.0);
    }

    #[test]
    fn test_score_stays_within_bounds() {
        for difficulty in ["Beginner", "Medium", "Advanced", "", "unknown"] {
            for title in ["", "x", "Smart AI Security Blockchain VR cloud api rest node"] {
                let score = predict_success("CSE", title, difficulty, "Custom rig");
                assert!((30.0..=95.0).contains(&score), "{} out of bounds", score);
            }
        }
    }

    #[test]
    fn test_predict_attaches_recommendation() {
        let prediction = predict("BTech CSE", "E-Commerce Website", "Beginner", "None");
        assert_eq!(prediction.success_percentage, 90.0);
        assert_eq!(prediction.recommendation, Recommendation::HighlyRecommended);

        let prediction = predict("BTech CSE", "Microservices Architecture Platform", "Advanced", "Cloud");
        assert_eq!(prediction.recommendation, Recommendation::Moderate);
    }
}
