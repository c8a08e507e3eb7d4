// src/crawler/search.rs
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{info, warn};
use url::Url;

use super::types::SearchCandidate;
use crate::models::Result;

// Search engine's own properties and the major social networks are not
// e-commerce companies, whatever the query.
const SKIP_DOMAINS: [&str; 6] = [
    "google.",
    "youtube.",
    "facebook.",
    "linkedin.",
    "twitter.",
    "instagram.",
];

pub struct SearchHarvester {
    client: Client,
    base_url: String,
    max_results: usize,
    result_selector: Selector,
    anchor_selector: Selector,
    heading_selector: Selector,
}

impl SearchHarvester {
    /// `base_url` is the search engine origin; injectable so tests can point
    /// the harvester at a local server.
    pub fn new(client: Client, base_url: String, max_results: usize) -> Self {
        Self {
            client,
            base_url,
            max_results,
            result_selector: Selector::parse("div.g").unwrap(),
            anchor_selector: Selector::parse("a[href]").unwrap(),
            heading_selector: Selector::parse("h3").unwrap(),
        }
    }

    /// Issue one search query and harvest company candidates from the result
    /// page. A failed request yields an empty list, never an error.
    pub async fn search(&self, query: &str) -> Vec<SearchCandidate> {
        match self.request(query).await {
            Ok(html) => {
                let candidates = self.parse_results(&html);
                info!("Found {} potential companies for query: {}", candidates.len(), query);
                candidates
            }
            Err(e) => {
                warn!("Search request failed for '{}': {}", query, e);
                Vec::new()
            }
        }
    }

    async fn request(&self, query: &str) -> Result<String> {
        let url = format!("{}/search", self.base_url);
        let num = self.max_results.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("num", num.as_str())])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(format!("HTTP error: {}", response.status()).into());
        }
        Ok(response.text().await?)
    }

    fn parse_results(&self, html: &str) -> Vec<SearchCandidate> {
        let document = Html::parse_document(html);
        document
            .select(&self.result_selector)
            .take(self.max_results)
            .filter_map(|block| self.parse_block(&block))
            .collect()
    }

    fn parse_block(&self, block: &ElementRef) -> Option<SearchCandidate> {
        let href = block
            .select(&self.anchor_selector)
            .next()?
            .value()
            .attr("href")?;

        if !href.starts_with("http") {
            return None;
        }

        let host = Url::parse(href).ok()?.host_str()?.to_lowercase();
        if SKIP_DOMAINS.iter().any(|skip| host.contains(skip)) {
            return None;
        }

        let name = block
            .select(&self.heading_selector)
            .next()
            .map(|heading| heading.text().collect::<String>().trim().to_string())
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| host.clone());

        Some(SearchCandidate {
            name,
            url: href.to_string(),
        })
    }
}
