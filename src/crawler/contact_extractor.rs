// src/crawler/contact_extractor.rs
use regex::Regex;
use std::collections::HashSet;

const MAX_EMAILS: usize = 10;
const MAX_PHONES: usize = 5;

pub struct ContactPatterns {
    email_regex: Regex,
    phone_regex: Regex,
    linkedin_regex: Regex,
}

impl ContactPatterns {
    pub fn new() -> Self {
        Self {
            email_regex: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").unwrap(),
            phone_regex: Regex::new(r"(\+31|0031|0)[\s.-]?(\d[\s.-]?){8,9}\d").unwrap(),
            linkedin_regex: Regex::new(r"(?i)linkedin\.com/company/").unwrap(),
        }
    }

    /// Unique emails in discovery order, capped at 10 per page.
    pub fn extract_emails(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut emails = Vec::new();

        for m in self.email_regex.find_iter(text) {
            let email = m.as_str().to_string();
            if seen.insert(email.clone()) {
                emails.push(email);
                if emails.len() >= MAX_EMAILS {
                    break;
                }
            }
        }

        emails
    }

    pub fn first_email(&self, text: &str) -> Option<String> {
        self.email_regex.find(text).map(|m| m.as_str().to_string())
    }

    /// Dutch-format phone numbers, capped at 5 per page. The value kept per
    /// match is the concatenation of the capture groups; the repeated digit
    /// group only retains its final repetition.
    pub fn extract_phones(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut phones = Vec::new();

        for caps in self.phone_regex.captures_iter(text) {
            let phone: String = caps
                .iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str())
                .collect();
            if seen.insert(phone.clone()) {
                phones.push(phone);
                if phones.len() >= MAX_PHONES {
                    break;
                }
            }
        }

        phones
    }

    /// First anchor href pointing at a LinkedIn company page, if any.
    pub fn first_linkedin_company<'a, I>(&self, hrefs: I) -> Option<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        hrefs
            .into_iter()
            .find(|href| self.linkedin_regex.is_match(href))
            .map(|href| href.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_all_emails_from_mixed_text() {
        let patterns = ContactPatterns::new();
        let text = "Reach us at jane.doe@example.com or info@example.com, call 06-12345678";

        let emails = patterns.extract_emails(text);
        assert_eq!(
            emails,
            vec!["jane.doe@example.com".to_string(), "info@example.com".to_string()]
        );

        let phones = patterns.extract_phones(text);
        assert_eq!(phones.len(), 1);
        assert!(phones[0].starts_with('0'));
    }

    #[test]
    fn email_extraction_is_idempotent() {
        let patterns = ContactPatterns::new();
        let text = "mail info@webshop.nl, mail info@webshop.nl again, or sales@webshop.nl";

        let first = patterns.extract_emails(text);
        let second = patterns.extract_emails(text);
        assert_eq!(first, second);
        assert_eq!(first, vec!["info@webshop.nl", "sales@webshop.nl"]);
    }

    #[test]
    fn email_cap_keeps_first_ten_in_discovery_order() {
        let patterns = ContactPatterns::new();
        let text: String = (0..12)
            .map(|i| format!("user{}@example.com ", i))
            .collect();

        let emails = patterns.extract_emails(&text);
        assert_eq!(emails.len(), 10);
        assert_eq!(emails[0], "user0@example.com");
        assert_eq!(emails[9], "user9@example.com");
    }

    #[test]
    fn phone_value_concatenates_capture_groups() {
        let patterns = ContactPatterns::new();

        // Prefix group plus the last repetition of the digit group.
        let phones = patterns.extract_phones("call 06-12345678");
        assert_eq!(phones, vec!["07".to_string()]);
    }

    #[test]
    fn phone_extraction_dedups_repeats() {
        let patterns = ContactPatterns::new();
        let phones = patterns.extract_phones("bel 06-12345678 of 06-12345678");
        assert_eq!(phones.len(), 1);
    }

    #[test]
    fn first_linkedin_company_ignores_profiles() {
        let patterns = ContactPatterns::new();
        let hrefs = [
            "https://linkedin.com/in/jane-doe",
            "https://www.LinkedIn.com/company/webshop-bv",
            "https://linkedin.com/company/other",
        ];

        let first = patterns.first_linkedin_company(hrefs.iter().copied());
        assert_eq!(first.as_deref(), Some("https://www.LinkedIn.com/company/webshop-bv"));
    }

    #[test]
    fn no_matches_yield_empty_results() {
        let patterns = ContactPatterns::new();
        assert!(patterns.extract_emails("no contact data here").is_empty());
        assert!(patterns.extract_phones("no contact data here").is_empty());
        assert!(patterns.first_email("nothing").is_none());
    }
}
