//! Configuration handling for the TUI
//!
//! The portfolio content (owner, about text, project cards, contact
//! address) is data, not code: it loads from a JSON file under the
//! platform config dir and falls back to bundled sample content.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// One project card shown in the projects section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCard {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One headline stat shown on the home section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Portfolio content rendered by the TUI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioConfig {
    /// Name shown on the splash banner and home section
    pub owner: String,
    /// One-line pitch under the name
    pub tagline: String,
    /// About paragraphs
    #[serde(default)]
    pub about: Vec<String>,
    /// Headline stats
    #[serde(default)]
    pub stats: Vec<Stat>,
    /// Project cards
    #[serde(default)]
    pub projects: Vec<ProjectCard>,
    /// Address offered on the contact section (also the copy target)
    pub contact_address: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            owner: "Felix Kaboto".to_string(),
            tagline: "Software engineer building delightful tools".to_string(),
            about: vec![
                "I design and build software with a focus on developer \
                 experience and robust, observable systems."
                    .to_string(),
                "Away from the keyboard I write about engineering practice \
                 and mentor early-career developers."
                    .to_string(),
            ],
            stats: vec![
                Stat {
                    value: "8+".to_string(),
                    label: "Years experience".to_string(),
                },
                Stat {
                    value: "30+".to_string(),
                    label: "Projects shipped".to_string(),
                },
            ],
            projects: vec![
                ProjectCard {
                    name: "Flowboard".to_string(),
                    description: "Kanban board with realtime sync and offline support".to_string(),
                    tags: vec!["web".to_string(), "realtime".to_string()],
                },
                ProjectCard {
                    name: "Lanternfish".to_string(),
                    description: "Log aggregation pipeline with structured querying".to_string(),
                    tags: vec!["infrastructure".to_string()],
                },
                ProjectCard {
                    name: "Paperknife".to_string(),
                    description: "Static site generator for long-form writing".to_string(),
                    tags: vec!["cli".to_string()],
                },
            ],
            contact_address: "hello@example.dev".to_string(),
        }
    }
}

impl PortfolioConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "folio", "folio-tui")
            .map(|dirs| dirs.config_dir().join("portfolio.json"))
    }

    /// Load configuration from file, falling back to the sample content
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: PortfolioConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_content() {
        let config = PortfolioConfig::default();
        assert!(!config.owner.is_empty());
        assert!(!config.about.is_empty());
        assert!(!config.projects.is_empty());
        assert!(!config.contact_address.is_empty());
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = PortfolioConfig::default();

        let json = serde_json::to_string(&config).unwrap();
        let parsed: PortfolioConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.owner, config.owner);
        assert_eq!(parsed.projects.len(), config.projects.len());
        assert_eq!(parsed.contact_address, config.contact_address);
    }

    #[test]
    fn test_deserialize_with_missing_lists() {
        let json = r#"{
            "owner": "A",
            "tagline": "B",
            "contact_address": "a@b.co"
        }"#;
        let parsed: PortfolioConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.about.is_empty());
        assert!(parsed.projects.is_empty());
        assert!(parsed.stats.is_empty());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{
            "owner": "A",
            "tagline": "B",
            "contact_address": "a@b.co",
            "unknown_field": "value"
        }"#;
        let parsed: PortfolioConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.owner, "A");
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = PortfolioConfig::config_path();
    }
}
