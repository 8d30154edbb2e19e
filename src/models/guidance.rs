use serde::{Deserialize, Serialize};

/// Implementation guidance for a project
///
/// Serialized without a tag; each variant has its own shape.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Guidance {
    /// Produced by the language model
    Generated(GeneratedGuidance),
    /// Built from a matching entry in the project bank
    Catalog(CatalogGuidance),
    /// Fallback when the title matches nothing
    Generic(GenericGuidance),
}

/// Guidance as returned by the language model
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneratedGuidance {
    #[serde(default)]
    pub project_title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hardware_setup: String,
    #[serde(default)]
    pub software_setup: String,
    #[serde(default)]
    pub implementation_steps: Vec<String>,
    #[serde(default)]
    pub best_practices: Vec<String>,
    #[serde(default)]
    pub common_challenges: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub testing_strategy: String,
    #[serde(default)]
    pub deployment_guide: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatalogGuidance {
    pub project_title: String,
    pub description: String,
    pub hardware_requirements: String,
    pub software_requirements: Vec<String>,
    pub tech_stack: Vec<String>,
    pub implementation_steps: Vec<String>,
    pub estimated_time: String,
    pub job_relevance: String,
    pub guidance: SetupAdvice,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SetupAdvice {
    pub hardware_setup: String,
    pub software_setup: String,
    pub best_practices: Vec<String>,
    pub common_challenges: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenericGuidance {
    pub project_title: String,
    pub message: String,
    pub general_guidance: GeneralAdvice,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GeneralAdvice {
    pub hardware: String,
    pub software: String,
    pub implementation: String,
    pub deployment: String,
}

impl Guidance {
    /// Title the guidance is for
    pub fn project_title(&self) -> &str {
        match self {
            Guidance::Generated(g) => &g.project_title,
            Guidance::Catalog(g) => &g.project_title,
            Guidance::Generic(g) => &g.project_title,
        }
    }
}
