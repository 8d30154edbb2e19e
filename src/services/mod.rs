pub mod ai;
pub mod bank;
pub mod guidance;
pub mod listings;
pub mod providers;
pub mod scoring;
pub mod selector;

pub use ai::AiAdvisor;
pub use guidance::GuidanceComposer;
pub use listings::ListingStore;
pub use selector::IdeaSelector;
