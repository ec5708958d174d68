//! CV/profile data, loaded once at startup.
//!
//! The profile is inert configuration, not logic: a YAML document parsed
//! into immutable structures and passed by reference to whatever renders
//! it. There is no mutation API and no caching layer.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The full CV/profile data set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub general: General,

    #[serde(default)]
    pub contact: Contact,

    /// Work history, most sites list it newest first
    #[serde(default)]
    pub work: Vec<CvItem>,

    #[serde(default)]
    pub certificates: Vec<CvItem>,

    #[serde(default)]
    pub education: Vec<CvItem>,

    #[serde(default)]
    pub projects: Vec<CvItem>,

    #[serde(default)]
    pub publications: Vec<CvItem>,

    #[serde(default)]
    pub talks: Vec<CvItem>,

    #[serde(default)]
    pub volunteering: Vec<CvItem>,

    #[serde(default)]
    pub languages: Vec<Language>,

    #[serde(default)]
    pub interests: Vec<Interest>,
}

/// Who the profile is about
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct General {
    pub name: String,

    #[serde(default)]
    pub position: String,

    #[serde(default)]
    pub description: String,
}

/// Contact channels; unset channels stay empty
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub mail: String,

    #[serde(default)]
    pub linkedin: String,

    #[serde(default)]
    pub github: String,

    #[serde(default)]
    pub stackoverflow: String,

    #[serde(default)]
    pub twitter: String,

    /// Additional links that don't fit a named channel
    #[serde(default)]
    pub other: Vec<ContactLink>,
}

/// A labelled link in the contact section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactLink {
    pub title: String,

    #[serde(default)]
    pub icon: String,

    pub link: String,
}

/// One CV line item (a job, a degree, a project, a talk, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvItem {
    pub title: String,

    #[serde(default)]
    pub subtitle: String,

    /// Start of the period, e.g. "2019-05"; empty for point-in-time items
    #[serde(default)]
    pub begin: String,

    /// End of the period; empty means ongoing
    #[serde(default)]
    pub end: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}

impl CvItem {
    /// Human-readable period, e.g. "2019-05 – present" or "2016-05"
    pub fn period(&self) -> String {
        match (self.begin.is_empty(), self.end.is_empty()) {
            (false, false) => format!("{} – {}", self.begin, self.end),
            (false, true) => format!("{} – present", self.begin),
            (true, false) => self.end.clone(),
            (true, true) => String::new(),
        }
    }
}

/// Self-rated language proficiency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    pub title: String,

    /// 0–100; 100 is native
    pub level: u8,
}

/// A personal interest with a display icon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interest {
    pub title: String,

    #[serde(default)]
    pub icon: String,
}

impl Profile {
    /// Parse a profile from YAML text
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("Failed to parse profile YAML")
    }

    /// Load a profile from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile: {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Invalid profile: {}", path.display()))
    }
}
