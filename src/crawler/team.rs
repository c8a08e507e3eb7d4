// src/crawler/team.rs
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use tracing::debug;

use super::contact_extractor::ContactPatterns;
use super::types::TeamMember;
use crate::models::Result;

const SECTION_CLASS_KEYWORDS: [&str; 5] = ["team", "member", "employee", "staff", "person"];
const MANAGER_KEYWORDS: [&str; 10] = [
    "manager",
    "director",
    "head of",
    "ceo",
    "cmo",
    "coo",
    "e-commerce",
    "marketing",
    "logistics",
    "operations",
];

// Bounds work on pages that tag every card with a "team" class.
const MAX_SECTIONS: usize = 20;

pub struct TeamPageScraper {
    client: Client,
    timeout: Duration,
    patterns: ContactPatterns,
    section_selector: Selector,
    name_selector: Selector,
}

impl TeamPageScraper {
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self {
            client,
            timeout,
            patterns: ContactPatterns::new(),
            section_selector: Selector::parse("div, section, article").unwrap(),
            name_selector: Selector::parse("h2, h3, h4, strong, b").unwrap(),
        }
    }

    /// Scrape a team/about page for people of interest. Any fetch failure
    /// yields an empty list; the page simply contributes nothing.
    pub async fn scrape(&self, url: &str) -> Vec<TeamMember> {
        let html = match self.fetch(url).await {
            Ok(html) => html,
            Err(e) => {
                debug!("Error scraping team page {}: {}", url, e);
                return Vec::new();
            }
        };

        let document = Html::parse_document(&html);
        self.extract_members(&document)
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).timeout(self.timeout).send().await?;
        if !response.status().is_success() {
            return Err(format!("HTTP error: {}", response.status()).into());
        }
        Ok(response.text().await?)
    }

    fn extract_members(&self, document: &Html) -> Vec<TeamMember> {
        let sections = document
            .select(&self.section_selector)
            .filter(has_team_class)
            .take(MAX_SECTIONS);

        sections
            .filter_map(|section| self.extract_member(&section))
            .collect()
    }

    fn extract_member(&self, section: &ElementRef) -> Option<TeamMember> {
        let name = section
            .select(&self.name_selector)
            .next()
            .map(element_text)
            .filter(|name| !name.is_empty());

        let lines: Vec<String> = section
            .text()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        let full_text = lines.join("\n");
        let text_lower = full_text.to_lowercase();

        if !MANAGER_KEYWORDS
            .iter()
            .any(|keyword| text_lower.contains(keyword))
        {
            return None;
        }

        // Assumes the name sits on its own line.
        let position = if lines.len() >= 2 {
            if name.as_deref() == Some(lines[0].as_str()) {
                Some(lines[1].clone())
            } else {
                Some(lines[0].clone())
            }
        } else {
            None
        };

        let email = self.patterns.first_email(&full_text);

        let name = name?;
        Some(TeamMember {
            name: Some(name),
            position,
            email,
        })
    }
}

fn has_team_class(element: &ElementRef) -> bool {
    match element.value().attr("class") {
        Some(class) => {
            let class = class.to_lowercase();
            SECTION_CLASS_KEYWORDS
                .iter()
                .any(|keyword| class.contains(keyword))
        }
        None => false,
    }
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
