use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub search: SearchConfig,
    pub crawl: CrawlConfig,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub queries: Vec<String>,
    pub max_companies: usize,
    pub max_results_per_query: usize,
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CrawlConfig {
    pub request_timeout_seconds: u64,
    pub team_page_timeout_seconds: u64,
    pub politeness_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub directory: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchConfig {
                queries: vec![
                    "e-commerce manager Netherlands".to_string(),
                    "logistics manager Netherlands webshop".to_string(),
                    "marketing manager online retail Netherlands".to_string(),
                    "e-commerce bedrijf Nederland contact".to_string(),
                    "webshop Nederland team".to_string(),
                ],
                max_companies: 50,
                max_results_per_query: 20,
                base_url: "https://www.google.com".to_string(),
            },
            crawl: CrawlConfig {
                request_timeout_seconds: 30,
                team_page_timeout_seconds: 20,
                politeness_delay_ms: 1000,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            output: OutputConfig {
                directory: "out".to_string(),
            },
        }
    }
}

pub async fn load_config(
    path: &str,
) -> std::result::Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_run_contract() {
        let config = Config::default();
        assert_eq!(config.search.queries.len(), 5);
        assert_eq!(config.search.max_companies, 50);
        assert_eq!(config.search.max_results_per_query, 20);
        assert_eq!(config.crawl.politeness_delay_ms, 1000);
        assert_eq!(config.output.directory, "out");
    }

    #[test]
    fn parses_full_yaml() {
        let yaml = r#"
search:
  queries:
    - "webshop Nederland team"
  max_companies: 10
  max_results_per_query: 5
  base_url: "https://www.google.com"
crawl:
  request_timeout_seconds: 15
  team_page_timeout_seconds: 10
  politeness_delay_ms: 500
logging:
  level: "debug"
output:
  directory: "results"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.search.max_companies, 10);
        assert_eq!(config.crawl.politeness_delay_ms, 500);
        assert_eq!(config.logging.level, "debug");
    }
}
