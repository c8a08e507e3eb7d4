// src/crawler/links.rs
use url::Url;

const ABOUT_KEYWORDS: [&str; 4] = ["team", "about", "over-ons", "about-us"];
const CONTACT_KEYWORDS: [&str; 2] = ["contact", "contacteer"];

/// The at-most-one about/team and contact URL classified from a page.
#[derive(Debug, Clone, Default)]
pub struct PageLinks {
    pub about_url: Option<String>,
    pub contact_url: Option<String>,
}

/// Classify a page's anchors into about/team and contact links. The first
/// anchor matching a category wins; hrefs are resolved against the page URL.
pub fn classify_anchors(anchors: &[(String, String)], base_url: &str) -> PageLinks {
    let base = Url::parse(base_url).ok();
    let mut links = PageLinks::default();

    for (href, text) in anchors {
        if links.about_url.is_some() && links.contact_url.is_some() {
            break;
        }

        let href_lower = href.to_lowercase();
        let text_lower = text.to_lowercase();

        if links.about_url.is_none() && matches_any(&ABOUT_KEYWORDS, &href_lower, &text_lower) {
            links.about_url = resolve_url(href, base.as_ref());
        }

        if links.contact_url.is_none() && matches_any(&CONTACT_KEYWORDS, &href_lower, &text_lower) {
            links.contact_url = resolve_url(href, base.as_ref());
        }
    }

    links
}

fn matches_any(keywords: &[&str], href: &str, text: &str) -> bool {
    keywords
        .iter()
        .any(|keyword| href.contains(keyword) || text.contains(keyword))
}

fn resolve_url(href: &str, base: Option<&Url>) -> Option<String> {
    match Url::parse(href) {
        Ok(url) => Some(url.to_string()),
        Err(_) => base.and_then(|b| b.join(href).ok()).map(|u| u.to_string()),
    }
}
