// src/crawler/site.rs
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::debug;

use super::contact_extractor::ContactPatterns;
use super::links::classify_anchors;
use super::team::TeamPageScraper;
use super::types::{CompanyContactRecord, SearchCandidate, TeamMember};
use crate::config::CrawlConfig;
use crate::models::Result;

pub struct CompanySiteScraper {
    client: Client,
    patterns: ContactPatterns,
    team_scraper: TeamPageScraper,
    politeness_delay: Duration,
    link_selector: Selector,
}

impl CompanySiteScraper {
    pub fn new(client: Client, crawl: &CrawlConfig) -> Self {
        let team_timeout = Duration::from_secs(crawl.team_page_timeout_seconds);
        Self {
            team_scraper: TeamPageScraper::new(client.clone(), team_timeout),
            client,
            patterns: ContactPatterns::new(),
            politeness_delay: Duration::from_millis(crawl.politeness_delay_ms),
            link_selector: Selector::parse("a[href]").unwrap(),
        }
    }

    /// Visit one company homepage and assemble its contact record. Returns
    /// `None` on fetch failure or when the visit produced no contact data.
    pub async fn scrape(&self, candidate: &SearchCandidate) -> Option<CompanyContactRecord> {
        let html = match self.fetch(&candidate.url).await {
            Ok(html) => html,
            Err(e) => {
                debug!("Error scraping {}: {}", candidate.url, e);
                return None;
            }
        };

        // Parse in a scope of its own: the document is not Send and must not
        // live across the team-page await below.
        let (page_text, anchors) = {
            let document = Html::parse_document(&html);
            let anchors: Vec<(String, String)> = document
                .select(&self.link_selector)
                .filter_map(|element| {
                    element
                        .value()
                        .attr("href")
                        .map(|href| (href.to_string(), element.text().collect::<String>()))
                })
                .collect();
            (visible_text(&document), anchors)
        };

        let emails = self.patterns.extract_emails(&page_text);
        let phones = self.patterns.extract_phones(&page_text);

        let linkedin = self
            .patterns
            .first_linkedin_company(anchors.iter().map(|(href, _)| href.as_str()));

        let links = classify_anchors(&anchors, &candidate.url);

        let team_members = match links.about_url.as_deref() {
            Some(about_url) => self.scrape_team_page(about_url).await,
            None => Vec::new(),
        };

        let record = CompanyContactRecord {
            company_name: candidate.name.clone(),
            website: candidate.url.clone(),
            emails,
            phones,
            linkedin,
            team_members,
            about_url: links.about_url,
            contact_url: links.contact_url,
            scraped_at: chrono::Utc::now().to_rfc3339(),
        };

        if record.has_contacts() {
            Some(record)
        } else {
            None
        }
    }

    async fn scrape_team_page(&self, url: &str) -> Vec<TeamMember> {
        tokio::time::sleep(self.politeness_delay).await;
        self.team_scraper.scrape(url).await
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(format!("HTTP error: {}", response.status()).into());
        }
        Ok(response.text().await?)
    }
}

fn visible_text(document: &Html) -> String {
    let joined = document.root_element().text().collect::<Vec<_>>().join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}
