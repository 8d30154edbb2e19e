use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::error::AppResult;
use crate::services::{providers, AiAdvisor, GuidanceComposer, IdeaSelector, ListingStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub selector: Arc<IdeaSelector>,
    pub guidance: Arc<GuidanceComposer>,
    pub listings: Arc<RwLock<ListingStore>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::offline()
    }
}

impl AppState {
    pub fn new(selector: IdeaSelector, guidance: GuidanceComposer, listings: ListingStore) -> Self {
        Self {
            selector: Arc::new(selector),
            guidance: Arc::new(guidance),
            listings: Arc::new(RwLock::new(listings)),
        }
    }

    /// State with no AI delegate and empty, unpersisted listings
    pub fn offline() -> Self {
        Self::new(
            IdeaSelector::offline(10),
            GuidanceComposer::new(None),
            ListingStore::default(),
        )
    }

    /// Wires the AI delegate and listings described by the configuration
    pub async fn from_config(config: &Config) -> AppResult<Self> {
        let advisor = providers::from_config(config).map(AiAdvisor::new);

        if let Some(advisor) = &advisor {
            tracing::info!(provider = advisor.provider_name(), "AI generation enabled");
        }

        let selector = IdeaSelector::new(advisor.clone(), config.ai_idea_count, config.max_ideas);
        let guidance = GuidanceComposer::new(advisor);
        let listings = ListingStore::load(&config.hackathons_path, &config.sih_path).await?;

        Ok(Self::new(selector, guidance, listings))
    }
}
