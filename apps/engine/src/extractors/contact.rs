//! Contact extractor.
//!
//! Runs against the full text, not the located contact section: names,
//! emails, and profile links usually live in the top-of-page header without
//! sitting under a "Contact" heading.

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub full_address: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub portfolio: Option<String>,
    pub website: Option<String>,
    pub other_links: Vec<String>,
}

/// Evidence-based contact fields: `None` means the heuristic found nothing,
/// not that the resume lacks the information.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Location,
    pub social_media: SocialMedia,
}

pub struct ContactExtractor {
    email_re: Regex,
    phone_re: Regex,
    linkedin_re: Regex,
    github_re: Regex,
    twitter_re: Regex,
    url_re: Regex,
    digit_run_re: Regex,
    location_res: Vec<Regex>,
}

impl ContactExtractor {
    pub fn new() -> Self {
        ContactExtractor {
            email_re: Regex::new(r"[\w.\-]+@[\w.\-]+\.\w+").expect("valid regex"),
            phone_re: Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
                .expect("valid regex"),
            linkedin_re: Regex::new(r"(?i)linkedin\.com/in/[\w\-]+").expect("valid regex"),
            github_re: Regex::new(r"(?i)github\.com/[\w\-]+").expect("valid regex"),
            twitter_re: Regex::new(r"(?i)twitter\.com/[\w\-]+").expect("valid regex"),
            url_re: Regex::new(r"https?://[^\s]+").expect("valid regex"),
            digit_run_re: Regex::new(r"\d{3}").expect("valid regex"),
            location_res: vec![
                // City, ST
                Regex::new(r"([A-Z][a-z]+,\s*[A-Z]{2})").expect("valid regex"),
                // City, State
                Regex::new(r"([A-Z][a-z]+,\s*[A-Z][a-z]+)").expect("valid regex"),
                // City, State ZIP
                Regex::new(r"([A-Z][a-z]+,\s*[A-Z][a-z]+\s*\d{5})").expect("valid regex"),
            ],
        }
    }

    pub fn extract(&self, text: &str) -> ContactDetails {
        let email = self.first_match(&self.email_re, text);
        let phone = self.first_match(&self.phone_re, text);
        let linkedin = self.first_match(&self.linkedin_re, text);
        let github = self.first_match(&self.github_re, text);
        let twitter = self.first_match(&self.twitter_re, text);

        let other_links: Vec<String> = self
            .url_re
            .find_iter(text)
            .map(|m| m.as_str().trim_end_matches([')', '.', ',']).to_string())
            .filter(|url| {
                let lower = url.to_lowercase();
                !lower.contains("linkedin.com")
                    && !lower.contains("github.com")
                    && !lower.contains("twitter.com")
            })
            .collect();

        ContactDetails {
            full_name: self.extract_name(text),
            email,
            phone,
            location: Location {
                full_address: self.extract_location(text),
                ..Location::default()
            },
            social_media: SocialMedia {
                linkedin: linkedin.map(|l| ensure_https(&l)),
                github: github.map(|g| ensure_https(&g)),
                twitter: twitter.map(|t| ensure_https(&t)),
                portfolio: None,
                website: None,
                other_links,
            },
        }
    }

    /// Name heuristic: first non-empty line shorter than 50 chars with no
    /// `@` and no 3-digit run. Cheap and fragile — a company name or a job
    /// title at the top of the page matches just as well.
    fn extract_name(&self, text: &str) -> Option<String> {
        text.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .find(|l| {
                l.len() < 50 && l.len() > 5 && !l.contains('@') && !self.digit_run_re.is_match(l)
            })
            .map(|l| l.to_string())
    }

    fn extract_location(&self, text: &str) -> Option<String> {
        self.location_res
            .iter()
            .find_map(|re| re.captures(text).map(|c| c[1].to_string()))
    }

    fn first_match(&self, re: &Regex, text: &str) -> Option<String> {
        re.find(text).map(|m| m.as_str().to_string())
    }
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_https(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "John Doe\nSeattle, WA\njohn.doe@example.com | 555-123-4567\nlinkedin.com/in/johndoe | github.com/johndoe\nhttps://johndoe.dev";

    #[test]
    fn test_extracts_email_and_phone() {
        let contact = ContactExtractor::new().extract(HEADER);
        assert_eq!(contact.email.as_deref(), Some("john.doe@example.com"));
        assert_eq!(contact.phone.as_deref(), Some("555-123-4567"));
    }

    #[test]
    fn test_extracts_name_from_first_clean_line() {
        let contact = ContactExtractor::new().extract(HEADER);
        assert_eq!(contact.full_name.as_deref(), Some("John Doe"));
    }

    #[test]
    fn test_name_skips_lines_with_digit_runs() {
        let text = "555-123-4567\nJane Smith\njane@example.com";
        let contact = ContactExtractor::new().extract(text);
        assert_eq!(contact.full_name.as_deref(), Some("Jane Smith"));
    }

    #[test]
    fn test_social_links_get_https_prefix() {
        let contact = ContactExtractor::new().extract(HEADER);
        assert_eq!(
            contact.social_media.linkedin.as_deref(),
            Some("https://linkedin.com/in/johndoe")
        );
        assert_eq!(
            contact.social_media.github.as_deref(),
            Some("https://github.com/johndoe")
        );
    }

    #[test]
    fn test_other_links_exclude_known_hosts() {
        let contact = ContactExtractor::new().extract(HEADER);
        assert_eq!(contact.social_media.other_links, vec!["https://johndoe.dev"]);
    }

    #[test]
    fn test_location_city_state_form() {
        let contact = ContactExtractor::new().extract(HEADER);
        assert_eq!(contact.location.full_address.as_deref(), Some("Seattle, WA"));
    }

    #[test]
    fn test_location_spelled_out_state_drops_trailing_zip() {
        let contact = ContactExtractor::new().extract("Jane Smith\nSeattle, Washington 98101");
        assert_eq!(
            contact.location.full_address.as_deref(),
            Some("Seattle, Washington")
        );
    }

    #[test]
    fn test_empty_text_yields_defaults() {
        let contact = ContactExtractor::new().extract("");
        assert!(contact.full_name.is_none());
        assert!(contact.email.is_none());
        assert!(contact.social_media.other_links.is_empty());
    }

    #[test]
    fn test_phone_with_country_code_and_parens() {
        let contact = ContactExtractor::new().extract("Call +1 (425) 555-0199 anytime");
        assert!(contact.phone.is_some());
    }
}
