pub mod contact_extractor;
pub mod links;
pub mod search;
pub mod site;
pub mod team;
pub mod types;

// Re-export the main types for easy importing
pub use search::SearchHarvester;
pub use site::CompanySiteScraper;
pub use types::{CompanyContactRecord, SearchCandidate, TeamMember};
