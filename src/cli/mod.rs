//! Command-line interface for folio.
//!
//! Provides commands for listing published entries, fetching an entry body,
//! printing the CV/profile and inspecting the resolved configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::catalog::CatalogClient;
use crate::config::ResolvedConfig;
use crate::profile::{CvItem, Profile};
use crate::render;

/// folio - reader for a statically hosted portfolio site
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List published catalog entries
    Entries {
        /// Maximum number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Fetch one entry body and print it
    Show {
        /// File name of the entry, as listed by `entries`
        file: String,

        /// Render the Markdown body to HTML
        #[arg(long)]
        html: bool,

        /// Abandon the retrieval after this many seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    /// Print the CV/profile
    Profile {
        /// Only print one section (work, education, projects, publications,
        /// talks, certificates, volunteering, languages, interests)
        #[arg(short, long)]
        section: Option<String>,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let config = ResolvedConfig::load()?;

        match self.command {
            Commands::Entries { limit } => list_entries(&config, limit).await,
            Commands::Show {
                file,
                html,
                timeout_secs,
            } => show_entry(&config, &file, html, timeout_secs).await,
            Commands::Profile { section } => show_profile(&config, section.as_deref()),
            Commands::Config => show_config(&config),
        }
    }
}

/// Build a catalog client from the resolved configuration
fn client_for(config: &ResolvedConfig) -> Result<CatalogClient> {
    let origin = config.require_origin()?;

    Ok(CatalogClient::new(origin)
        .with_content_root(&config.content_root)
        .with_catalog_index(&config.catalog_index))
}

/// List catalog entries in store order
async fn list_entries(config: &ResolvedConfig, limit: Option<usize>) -> Result<()> {
    let client = client_for(config)?;
    let mut entries = client
        .list_entries()
        .await
        .context("Failed to fetch the catalog")?;

    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    if entries.is_empty() {
        println!("No entries published");
        return Ok(());
    }

    println!("{:<12} {:<40} {}", "DATE", "NAME", "FILE");
    println!("{}", "-".repeat(75));

    for entry in &entries {
        println!(
            "{:<12} {:<40} {}",
            entry.publish_date.format("%Y-%m-%d"),
            entry.name,
            entry.file_name
        );
    }

    Ok(())
}

/// Fetch one body and print it, raw or rendered
async fn show_entry(
    config: &ResolvedConfig,
    file: &str,
    html: bool,
    timeout_secs: Option<u64>,
) -> Result<()> {
    let client = client_for(config)?;
    let deadline = timeout_secs.map(Duration::from_secs);

    let body = client
        .get_body_within(file, deadline)
        .await
        .with_context(|| format!("Failed to fetch '{}'", file))?;

    if html {
        println!("{}", render::render_markdown(&body));
    } else {
        println!("{}", body);
    }

    Ok(())
}

/// Print the profile, or one section of it
fn show_profile(config: &ResolvedConfig, section: Option<&str>) -> Result<()> {
    let path = config.profile.as_deref().context(
        "No profile configured. Set FOLIO_PROFILE or add `profile:` to folio.yaml",
    )?;
    let profile = Profile::from_file(path)?;

    match section {
        None => print_full_profile(&profile),
        Some("work") => print_items("WORK", &profile.work),
        Some("certificates") => print_items("CERTIFICATES", &profile.certificates),
        Some("education") => print_items("EDUCATION", &profile.education),
        Some("projects") => print_items("PROJECTS", &profile.projects),
        Some("publications") => print_items("PUBLICATIONS", &profile.publications),
        Some("talks") => print_items("TALKS", &profile.talks),
        Some("volunteering") => print_items("VOLUNTEERING", &profile.volunteering),
        Some("languages") => print_languages(&profile),
        Some("interests") => print_interests(&profile),
        Some(other) => anyhow::bail!("Unknown profile section: {}", other),
    }

    Ok(())
}

fn print_full_profile(profile: &Profile) {
    println!("{}", profile.general.name);
    if !profile.general.position.is_empty() {
        println!("{}", profile.general.position);
    }
    if !profile.general.description.is_empty() {
        println!("\n{}", profile.general.description);
    }

    print_items("WORK", &profile.work);
    print_items("EDUCATION", &profile.education);
    print_items("PROJECTS", &profile.projects);
    print_items("PUBLICATIONS", &profile.publications);
    print_items("TALKS", &profile.talks);
    print_items("CERTIFICATES", &profile.certificates);
    print_items("VOLUNTEERING", &profile.volunteering);
    print_languages(profile);
    print_interests(profile);
}

fn print_items(heading: &str, items: &[CvItem]) {
    if items.is_empty() {
        return;
    }

    println!("\n{}", heading);
    println!("{}", "-".repeat(heading.len()));

    for item in items {
        let period = item.period();
        if period.is_empty() {
            println!("{}", item.title);
        } else {
            println!("{}  ({})", item.title, period);
        }
        if !item.subtitle.is_empty() {
            println!("  {}", item.subtitle);
        }
        if !item.tags.is_empty() {
            println!("  [{}]", item.tags.join(", "));
        }
    }
}

fn print_languages(profile: &Profile) {
    if profile.languages.is_empty() {
        return;
    }

    println!("\nLANGUAGES");
    println!("---------");
    for language in &profile.languages {
        println!("{}  ({}%)", language.title, language.level);
    }
}

fn print_interests(profile: &Profile) {
    if profile.interests.is_empty() {
        return;
    }

    println!("\nINTERESTS");
    println!("---------");
    for interest in &profile.interests {
        println!("{}", interest.title);
    }
}

/// Show resolved configuration
fn show_config(config: &ResolvedConfig) -> Result<()> {
    println!(
        "Origin:        {}",
        config.origin.as_deref().unwrap_or("(not configured)")
    );
    println!("Content root:  {}", config.content_root);
    println!("Catalog index: {}", config.catalog_index);
    println!(
        "Profile:       {}",
        config
            .profile
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not configured)".to_string())
    );
    println!(
        "Config file:   {}",
        config
            .config_file
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none found)".to_string())
    );

    Ok(())
}
