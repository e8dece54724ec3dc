use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::domain::company::{detail_from_label, CompanyRecord};

use super::{fetch_page, FetchOutcome};

// Positional paths into the public company page. These mirror the page's
// structure as served to logged-out visitors and break if it changes.
const COMPANY_NAME_PATH: &str = "#main-content > section:first-of-type > section > div > div:nth-of-type(2) > div:first-of-type > h1";
const ABOUT_PATH: &str =
    "#main-content > section:first-of-type > div > section:first-of-type > div > p";
const DETAIL_GROUP_PATH: &str =
    "#main-content > section:first-of-type > div > section:first-of-type > div > dl > div";
const WEBSITE_ANCHOR_PATH: &str =
    "main > section:first-of-type > div > section:first-of-type > div > dl > div:first-of-type > dd > a";
const AVATAR_PATH: &str =
    "#main-content > section:first-of-type > section > div > div:first-of-type > img";
const AVATAR_SRC_ATTR: &str = "data-delayed-url";

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ScrapeOutcome {
    Record(CompanyRecord),
    // Failures ship as a bare error key with no url, still HTTP 200;
    // callers branch on the key, not the status
    Failure { error: String },
}

pub async fn scrape_company_record(url: &str) -> ScrapeOutcome {
    match fetch_page(url).await {
        FetchOutcome::Success { body, status_code } => {
            log::info!("Fetched company page from {} ({})", url, status_code);
            ScrapeOutcome::Record(extract_company_record(url, &body))
        }
        FetchOutcome::HttpError { status_code } => ScrapeOutcome::Failure {
            error: format!("Failed to fetch company data. Status code: {}", status_code),
        },
        FetchOutcome::NetworkError { message } => ScrapeOutcome::Failure { error: message },
    }
}

pub fn extract_company_record(url: &str, html: &str) -> CompanyRecord {
    /*
    1. Always include the input url
    2. Singleton fields: company name and about text, empty when missing
    3. Walk the overview description list, keeping groups where both the
       label and the value matched and the label is a known field
    4. The first group's anchor href wins over whatever the walk stored
       for website
    5. Avatar from the hero image's delayed-load source
    */
    let company_name_selector = Selector::parse(COMPANY_NAME_PATH).unwrap();
    let about_selector = Selector::parse(ABOUT_PATH).unwrap();
    let detail_group_selector = Selector::parse(DETAIL_GROUP_PATH).unwrap();
    let label_selector = Selector::parse("dt").unwrap();
    let value_selector = Selector::parse("dd").unwrap();
    let website_anchor_selector = Selector::parse(WEBSITE_ANCHOR_PATH).unwrap();
    let avatar_selector = Selector::parse(AVATAR_PATH).unwrap();

    let document = Html::parse_document(html);
    let mut record = CompanyRecord::new(url);

    record.company_name = first_text(&document, &company_name_selector);
    record.about = first_text(&document, &about_selector);

    for group in document.select(&detail_group_selector) {
        let label = group.select(&label_selector).next();
        let value = group.select(&value_selector).next();

        match (label, value) {
            (Some(label), Some(value)) => {
                let label = element_text(label);
                match detail_from_label(&label) {
                    Some(detail) => record.set_detail(detail, element_text(value)),
                    None => log::info!("Skipping unrecognized detail label: {}", label),
                }
            }
            // A lone label or lone value doesn't count as a field
            _ => {}
        }
    }

    if let Some(anchor) = document.select(&website_anchor_selector).next() {
        if let Some(href) = anchor.attr("href") {
            record.website = Some(href.to_string());
        }
    }

    if let Some(avatar) = document.select(&avatar_selector).last() {
        let src = avatar.attr(AVATAR_SRC_ATTR).unwrap_or("");
        record.avatar_url = Some(src.to_string());
    }

    record
}

/// Fetch a page and return the outer html of every node the selector
/// matches. Fetch failures and invalid selectors are logged and yield an
/// empty list rather than an error.
pub async fn scrape_elements(url: &str, selector: &str) -> Vec<String> {
    match fetch_page(url).await {
        FetchOutcome::Success { body, .. } => select_elements(&body, selector),
        FetchOutcome::HttpError { status_code } => {
            log::error!("Failed to fetch data. Status code: {}", status_code);
            vec![]
        }
        FetchOutcome::NetworkError { message } => {
            log::error!("Error fetching data: {}", message);
            vec![]
        }
    }
}

pub fn select_elements(html: &str, selector: &str) -> Vec<String> {
    let selector = match Selector::parse(selector) {
        Ok(selector) => selector,
        Err(e) => {
            log::error!("Invalid css selector: {:?}", e);
            return vec![];
        }
    };

    Html::parse_document(html)
        .select(&selector)
        .map(|element| element.html())
        .collect()
}

fn first_text(document: &Html, selector: &Selector) -> String {
    match document.select(selector).next() {
        Some(element) => element_text(element),
        None => String::new(),
    }
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
