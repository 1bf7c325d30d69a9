use crate::constants;
use crate::prelude::*;

use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Scan stops once this many unique matches are collected.
    pub max_candidates: usize,
    /// Matches rendered into the results panel.
    pub max_shown: usize,
    pub title_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_candidates: constants::MAX_SEARCH_CANDIDATES,
            max_shown: constants::MAX_SEARCH_SHOWN,
            title_limit: constants::SEARCH_TITLE_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    pub container_id: String,
    pub cards_per_section: usize,
    pub description_limit: usize,
    pub section_title_prefix: String,
    pub author_label: String,
    pub offer_text: String,
    pub cta_text: String,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            container_id: constants::CONTENT_CONTAINER_ID.to_string(),
            cards_per_section: constants::CARDS_PER_SECTION,
            description_limit: constants::DESCRIPTION_LIMIT,
            section_title_prefix: constants::SECTION_TITLE_PREFIX.to_string(),
            author_label: constants::AUTHOR_LABEL.to_string(),
            offer_text: constants::OFFER_TEXT.to_string(),
            cta_text: constants::CTA_TEXT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IncludeSlot {
    pub container_id: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_base: String,
    /// Explicit feed location; blank means `{site_base}/data/default.json`.
    pub json_path: String,
    pub force_home: bool,
    pub category_order: Vec<String>,
    pub search: SearchConfig,
    pub home: HomeConfig,
    pub includes: Vec<IncludeSlot>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_base: String::new(),
            json_path: String::new(),
            force_home: false,
            category_order: constants::DEFAULT_CATEGORY_ORDER.iter().map(ToString::to_string).collect(),
            search: SearchConfig::default(),
            home: HomeConfig::default(),
            includes: constants::DEFAULT_INCLUDES
                .iter()
                .map(|(container_id, path)| IncludeSlot {
                    container_id: (*container_id).to_string(),
                    path: (*path).to_string(),
                })
                .collect(),
        }
    }
}

impl SiteConfig {

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid site configuration")
    }

    /// Reads `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else { return Ok(Self::default()) };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("Failed to load config {}", path.display()))
    }

    /// Site base, trimmed and without its trailing slash.
    #[must_use]
    pub fn base(&self) -> &str {
        let base = self.site_base.trim();
        base.strip_suffix('/').unwrap_or(base)
    }

    fn with_base(&self, path: &str) -> String {
        format!("{}{path}", self.base())
    }

    #[must_use]
    pub fn feed_path(&self) -> String {
        let explicit = self.json_path.trim();
        if explicit.is_empty() {
            self.with_base(constants::DEFAULT_FEED_PATH)
        } else {
            explicit.to_string()
        }
    }

    #[must_use]
    pub fn placeholder_image(&self) -> String {
        self.with_base(constants::PLACEHOLDER_IMAGE_PATH)
    }

    /// Page path relative to the site base; empty becomes `/`.
    #[must_use]
    pub fn route<'a>(&self, pathname: &'a str) -> &'a str {
        let route = pathname.strip_prefix(self.base()).unwrap_or(pathname);
        if route.is_empty() { "/" } else { route }
    }

    #[must_use]
    pub fn is_home(&self, pathname: &str) -> bool {
        self.force_home || constants::HOME_ROUTES.contains(&self.route(pathname))
    }
}
