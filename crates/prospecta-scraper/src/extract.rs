//! Pure extraction helpers over fetched HTML.
//!
//! Everything here assumes French company pages: national `0X XX XX XX XX`
//! and `+33` phone formats, French phone labels.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

/// Name used when neither the page title nor the domain yields one.
pub const FALLBACK_COMPANY_NAME: &str = "Entreprise";

/// Exclusive bounds on the length (in characters) of a title-derived name.
const TITLE_NAME_MIN_LEN: usize = 3;
const TITLE_NAME_MAX_LEN: usize = 50;

static NATIONAL_PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"0[1-9](?:[\s.-]?[0-9]{2}){4}").expect("valid regex"));
static INTERNATIONAL_PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+33[\s.-]?[1-9](?:[\s.-]?[0-9]{2}){4}").expect("valid regex"));
static LABELED_PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:tel|téléphone|phone)[\s:]*([0-9\s.-]{10,})").expect("valid regex")
});
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").expect("valid email regex"));
static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("valid title selector"));

/// Elements whose text content never renders.
const HIDDEN_TEXT_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

const PLACEHOLDER_EMAIL_MARKERS: [&str; 3] = ["spam", "noreply", "example"];

/// Title and visible text of one HTML page, with every character reference
/// already decoded by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageText {
    /// Text of the first `<title>` element, `None` when absent or blank.
    pub title: Option<String>,
    /// Rendered text of the whole document, whitespace collapsed.
    pub text: String,
}

impl PageText {
    #[must_use]
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        Self {
            title: title_of(&document),
            text: visible_text_of(&document),
        }
    }
}

fn title_of(document: &Html) -> Option<String> {
    let title = document.select(&TITLE_SELECTOR).next()?;
    let title = clean_text(&title.text().collect::<Vec<_>>().join(" "));
    (!title.is_empty()).then_some(title)
}

// Comments are separate node kinds and never reach the text.
fn visible_text_of(document: &Html) -> String {
    let parts: Vec<&str> = document
        .root_element()
        .descendants()
        .filter(|node| {
            !node.ancestors().any(|parent| {
                parent
                    .value()
                    .as_element()
                    .is_some_and(|el| HIDDEN_TEXT_ELEMENTS.contains(&el.name()))
            })
        })
        .filter_map(|node| node.value().as_text().map(|text| &**text))
        .collect();
    clean_text(&parts.join(" "))
}

/// First French phone number in `text`.
///
/// Candidates are collected from the national format, then the `+33`
/// format, then `tel:`/`téléphone:` labels; only candidates starting with
/// `0` or `+33` survive, which drops postal codes and IDs caught by the
/// labeled pattern.
#[must_use]
pub fn extract_phone(text: &str) -> Option<String> {
    let national = NATIONAL_PHONE_RE.find_iter(text).map(|m| m.as_str());
    let international = INTERNATIONAL_PHONE_RE.find_iter(text).map(|m| m.as_str());
    let labeled = LABELED_PHONE_RE
        .captures_iter(text)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()));

    national
        .chain(international)
        .chain(labeled)
        .map(str::trim)
        .find(|candidate| candidate.starts_with('0') || candidate.starts_with("+33"))
        .map(str::to_owned)
}

/// First email address in `text` that is not a placeholder or honeypot.
#[must_use]
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|email| {
            let lower = email.to_lowercase();
            !PLACEHOLDER_EMAIL_MARKERS
                .iter()
                .any(|marker| lower.contains(marker))
        })
        .map(str::to_owned)
}

/// Company name taken from a page title: the segment before the first `|`
/// or dash (`-`, `–`, `—`), kept only when its length is strictly between 3
/// and 50 characters.
#[must_use]
pub fn name_from_title(title: &str) -> Option<String> {
    let segment = title
        .split(['|', '-', '\u{2013}', '\u{2014}'])
        .next()
        .unwrap_or("")
        .trim();
    let len = segment.chars().count();
    (len > TITLE_NAME_MIN_LEN && len < TITLE_NAME_MAX_LEN).then(|| segment.to_owned())
}

/// Company name derived from the URL's host: first label after stripping a
/// leading `www.`, title-cased. `https://www.boulangerie-dupont.fr` gives
/// `Boulangerie-Dupont`.
#[must_use]
pub fn domain_fallback_name(url: &str) -> String {
    let label = reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_lowercase))
        .map(|host| {
            let host = host.strip_prefix("www.").unwrap_or(&host);
            host.split('.').next().unwrap_or("").to_owned()
        })
        .unwrap_or_default();

    if label.is_empty() {
        FALLBACK_COMPANY_NAME.to_string()
    } else {
        title_case(&label)
    }
}

/// Capitalizes the first letter of every alphabetic run and lower-cases the
/// rest: `"ACME plomberie-paris"` becomes `"Acme Plomberie-Paris"`.
#[must_use]
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alpha = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

fn clean_text(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
