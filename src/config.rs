use serde::Deserialize;

/// Which hosted model backs the AI delegate
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum AiProvider {
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "huggingface")]
    HuggingFace,
    /// Any other value; AI generation is disabled
    #[serde(other)]
    Unknown,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whether to try the AI delegate before the static project bank
    #[serde(default = "default_use_ai")]
    pub use_ai: bool,

    #[serde(default = "default_ai_provider")]
    pub ai_provider: AiProvider,

    pub openai_api_key: Option<String>,

    #[serde(default = "default_openai_api_url")]
    pub openai_api_url: String,

    #[serde(default = "default_openai_model")]
    pub openai_model: String,

    pub huggingface_api_key: Option<String>,

    #[serde(default = "default_huggingface_api_url")]
    pub huggingface_api_url: String,

    #[serde(default = "default_huggingface_model")]
    pub huggingface_model: String,

    /// Timeout for a single model call, in seconds
    #[serde(default = "default_ai_timeout_secs")]
    pub ai_timeout_secs: u64,

    /// Number of ideas requested from the model per query
    #[serde(default = "default_ai_idea_count")]
    pub ai_idea_count: usize,

    /// Upper bound on ideas returned from the static bank
    #[serde(default = "default_max_ideas")]
    pub max_ideas: usize,

    /// JSON file holding hackathon listings
    #[serde(default = "default_hackathons_path")]
    pub hackathons_path: String,

    /// JSON file holding SIH problem statements
    #[serde(default = "default_sih_path")]
    pub sih_path: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_use_ai() -> bool {
    true
}

fn default_ai_provider() -> AiProvider {
    AiProvider::OpenAi
}

fn default_openai_api_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_huggingface_api_url() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_huggingface_model() -> String {
    "mistralai/Mistral-7B-Instruct-v0.2".to_string()
}

fn default_ai_timeout_secs() -> u64 {
    30
}

fn default_ai_idea_count() -> usize {
    5
}

fn default_max_ideas() -> usize {
    10
}

fn default_hackathons_path() -> String {
    "hackathons.json".to_string()
}

fn default_sih_path() -> String {
    "sih.json".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
