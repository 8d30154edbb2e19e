use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppError, AppResult};

/// Date format used for hackathon listings
pub const HACKATHON_DATE_FORMAT: &str = "%Y-%m-%d";

/// A hackathon listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hackathon {
    pub name: String,
    pub organizer: String,
    /// Event date as `YYYY-MM-DD`
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub registration_link: Option<String>,
    #[serde(default)]
    pub prize_pool: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Hackathon {
    /// Parsed event date, if well formed
    pub fn event_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), HACKATHON_DATE_FORMAT).ok()
    }
}

/// Submission of a new hackathon by an organizer
#[derive(Debug, Clone, Deserialize)]
pub struct NewHackathon {
    pub name: String,
    pub organizer: String,
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub registration_link: Option<String>,
    #[serde(default)]
    pub prize_pool: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewHackathon {
    /// Checks required fields and the date format
    pub fn validate(self) -> AppResult<Hackathon> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidInput("Hackathon name cannot be empty".to_string()));
        }

        if NaiveDate::parse_from_str(self.date.trim(), HACKATHON_DATE_FORMAT).is_err() {
            return Err(AppError::InvalidInput(format!(
                "Invalid hackathon date '{}', expected YYYY-MM-DD",
                self.date
            )));
        }

        Ok(Hackathon {
            name: self.name,
            organizer: self.organizer,
            date: self.date.trim().to_string(),
            location: self.location,
            registration_link: self.registration_link,
            prize_pool: self.prize_pool,
            description: self.description,
        })
    }
}

/// A Smart India Hackathon problem statement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SihProblem {
    pub year: i32,
    pub problem_statement: String,
    pub domain: String,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default, deserialize_with = "deserialize_tech_stack")]
    pub tech_stack: Option<Vec<String>>,
}

/// Accepts either a list or a comma-separated string
fn deserialize_tech_stack<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTechStack {
        List(Vec<String>),
        Joined(String),
    }

    let raw = Option::<RawTechStack>::deserialize(deserializer)?;
    Ok(raw.map(|raw| match raw {
        RawTechStack::List(items) => items,
        RawTechStack::Joined(joined) => joined
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_hackathon(name: &str, date: &str) -> NewHackathon {
        NewHackathon {
            name: name.to_string(),
            organizer: "IIT Bombay".to_string(),
            date: date.to_string(),
            location: "Mumbai".to_string(),
            registration_link: None,
            prize_pool: Some("INR 1,00,000".to_string()),
            description: None,
        }
    }

    #[test]
    fn test_new_hackathon_valid() {
        let hackathon = new_hackathon("Techfest Hack", " 2026-12-05 ").validate().unwrap();
        assert_eq!(hackathon.date, "2026-12-05");
        assert_eq!(hackathon.event_date(), NaiveDate::from_ymd_opt(2026, 12, 5));
    }

    #[test]
    fn test_new_hackathon_rejects_bad_date() {
        let result = new_hackathon("Techfest Hack", "05/12/2026").validate();
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_new_hackathon_rejects_blank_name() {
        let result = new_hackathon("  ", "2026-12-05").validate();
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_sih_tech_stack_from_string() {
        let json = r#"{
            "year": 2024,
            "problem_statement": "Crop disease detection from leaf images",
            "domain": "AI",
            "tech_stack": "Python, TensorFlow, , OpenCV"
        }"#;

        let problem: SihProblem = serde_json::from_str(json).unwrap();
        assert_eq!(
            problem.tech_stack,
            Some(vec![
                "Python".to_string(),
                "TensorFlow".to_string(),
                "OpenCV".to_string()
            ])
        );
        assert_eq!(problem.difficulty, None);
    }

    #[test]
    fn test_sih_tech_stack_from_list_or_missing() {
        let json = r#"{
            "year": 2023,
            "problem_statement": "Smart irrigation",
            "domain": "IoT",
            "tech_stack": ["ESP32", "MQTT"]
        }"#;
        let problem: SihProblem = serde_json::from_str(json).unwrap();
        assert_eq!(problem.tech_stack, Some(vec!["ESP32".to_string(), "MQTT".to_string()]));

        let json = r#"{"year": 2023, "problem_statement": "Smart irrigation", "domain": "IoT"}"#;
        let problem: SihProblem = serde_json::from_str(json).unwrap();
        assert_eq!(problem.tech_stack, None);
    }
}
