// src/crawler/types.rs
use serde::{Deserialize, Serialize};

/// A search result not yet verified to carry any contact data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCandidate {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: Option<String>,
    pub position: Option<String>,
    pub email: Option<String>,
}

/// Per-company extraction result, the unit of output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyContactRecord {
    pub company_name: String,
    pub website: String,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub linkedin: Option<String>,
    pub team_members: Vec<TeamMember>,
    pub about_url: Option<String>,
    pub contact_url: Option<String>,
    pub scraped_at: String,
}

impl CompanyContactRecord {
    /// A record is only worth emitting when at least one extraction hit.
    pub fn has_contacts(&self) -> bool {
        !self.emails.is_empty() || !self.phones.is_empty() || !self.team_members.is_empty()
    }
}
