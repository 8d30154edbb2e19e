use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};
use serde::de::DeserializeOwned;

use crate::{
    error::AppResult,
    models::{Hackathon, SihProblem},
};

/// Days counted per month when looking ahead for hackathons
const DAYS_PER_MONTH: u64 = 30;

/// Hackathon listings and SIH problem statements
///
/// Both lists are seeded from JSON files. New hackathons are written back to
/// their file when the store has one.
#[derive(Debug, Default)]
pub struct ListingStore {
    hackathons: Vec<Hackathon>,
    sih_problems: Vec<SihProblem>,
    hackathons_path: Option<PathBuf>,
}

impl ListingStore {
    /// Store backed by nothing; additions live only in memory
    pub fn in_memory(hackathons: Vec<Hackathon>, sih_problems: Vec<SihProblem>) -> Self {
        Self {
            hackathons,
            sih_problems,
            hackathons_path: None,
        }
    }

    /// Loads both lists; a missing file means an empty list
    pub async fn load(hackathons_path: impl AsRef<Path>, sih_path: impl AsRef<Path>) -> AppResult<Self> {
        let hackathons_path = hackathons_path.as_ref().to_path_buf();
        let hackathons: Vec<Hackathon> = load_list(&hackathons_path).await?;
        let sih_problems: Vec<SihProblem> = load_list(sih_path.as_ref()).await?;

        tracing::info!(
            hackathons = hackathons.len(),
            sih_problems = sih_problems.len(),
            "Loaded listings"
        );

        Ok(Self {
            hackathons,
            sih_problems,
            hackathons_path: Some(hackathons_path),
        })
    }

    pub fn hackathons(&self) -> &[Hackathon] {
        &self.hackathons
    }

    /// Hackathons dated from `today` through `months_ahead` months later
    ///
    /// Listings with an unparsable date are skipped. A window reaching past
    /// the last representable date has no upper bound.
    pub fn upcoming_hackathons(&self, today: NaiveDate, months_ahead: u32) -> Vec<Hackathon> {
        let horizon = today
            .checked_add_days(Days::new(DAYS_PER_MONTH * u64::from(months_ahead)))
            .unwrap_or(NaiveDate::MAX);

        self.hackathons
            .iter()
            .filter(|hackathon| match hackathon.event_date() {
                Some(date) => today <= date && date <= horizon,
                None => {
                    tracing::debug!(name = %hackathon.name, date = %hackathon.date, "Skipping hackathon with bad date");
                    false
                }
            })
            .cloned()
            .collect()
    }

    /// Appends a hackathon and persists the list
    ///
    /// The in-memory list is left unchanged when saving fails.
    pub async fn add_hackathon(&mut self, hackathon: Hackathon) -> AppResult<()> {
        self.hackathons.push(hackathon);

        if let Err(e) = self.save_hackathons().await {
            self.hackathons.pop();
            return Err(e);
        }

        Ok(())
    }

    async fn save_hackathons(&self) -> AppResult<()> {
        let Some(path) = &self.hackathons_path else {
            return Ok(());
        };

        let json = serde_json::to_string_pretty(&self.hackathons)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, json).await?;

        tracing::info!(path = %path.display(), total = self.hackathons.len(), "Saved hackathons");
        Ok(())
    }

    /// SIH problems, optionally narrowed by domain (case-insensitive) and year
    pub fn sih_problems(&self, domain: Option<&str>, year: Option<i32>) -> Vec<SihProblem> {
        self.sih_problems
            .iter()
            .filter(|p| domain.map_or(true, |d| p.domain.eq_ignore_ascii_case(d)))
            .filter(|p| year.map_or(true, |y| p.year == y))
            .cloned()
            .collect()
    }
}

async fn load_list<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "Listing file not found, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(serde_json::from_str(&content)?)
}
