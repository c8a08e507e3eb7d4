// src/driver.rs
use std::collections::HashSet;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::config::Config;
use crate::crawler::{CompanySiteScraper, SearchHarvester};
use crate::models::Result;
use crate::sink::RecordSink;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Owns the state of one run: the visited-domain set, the record sink and
/// the scrapers sharing one HTTP client.
pub struct Driver {
    config: Config,
    harvester: SearchHarvester,
    site_scraper: CompanySiteScraper,
    sink: RecordSink,
    visited_domains: HashSet<String>,
    politeness_delay: Duration,
}

impl Driver {
    pub fn new(config: Config, sink: RecordSink) -> Result<Self> {
        let client = build_client(&config)?;
        let harvester = SearchHarvester::new(
            client.clone(),
            config.search.base_url.clone(),
            config.search.max_results_per_query,
        );
        let site_scraper = CompanySiteScraper::new(client, &config.crawl);
        let politeness_delay = Duration::from_millis(config.crawl.politeness_delay_ms);

        Ok(Self {
            config,
            harvester,
            site_scraper,
            sink,
            visited_domains: HashSet::new(),
            politeness_delay,
        })
    }

    /// Run all configured queries to completion or to the record cap, and
    /// return the number of records produced.
    pub async fn run(mut self) -> Result<usize> {
        let queries = self.config.search.queries.clone();
        let max_companies = self.config.search.max_companies;

        'queries: for query in queries {
            if self.sink.count() >= max_companies {
                break;
            }
            info!("Searching: {}", query);

            for candidate in self.harvester.search(&query).await {
                if self.sink.count() >= max_companies {
                    break 'queries;
                }

                let domain = match netloc_of(&candidate.url) {
                    Some(domain) => domain,
                    None => {
                        debug!("Skipping candidate with unparsable url: {}", candidate.url);
                        continue;
                    }
                };
                if !self.visited_domains.insert(domain) {
                    continue;
                }

                info!("🕷️  Scraping: {} - {}", candidate.name, candidate.url);
                tokio::time::sleep(self.politeness_delay).await;

                if let Some(record) = self.site_scraper.scrape(&candidate).await {
                    self.sink.append(&record)?;
                }
            }
        }

        Ok(self.sink.count())
    }
}

fn build_client(config: &Config) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.9,nl;q=0.8"),
    );

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(Duration::from_secs(config.crawl.request_timeout_seconds))
        .build()?;
    Ok(client)
}

// Host plus port, so differently-numbered ports on one host count as
// distinct sites.
fn netloc_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    Some(match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}
