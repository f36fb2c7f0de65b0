pub mod dates;
pub mod labels;
pub mod links;
pub mod tags;

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::page::Page;
use crate::record::Opportunity;

static DETAIL_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/search-results-detail/(\d+)").unwrap());
static HEX_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/opportunity/([0-9a-fA-F-]{16,})").unwrap());
static LISTING_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{2}\.\d{3}\b").unwrap());

/// Opportunity id from the page URL: numeric detail id, else long hex id.
pub fn opportunity_id_from_url(url: &str) -> Option<String> {
    if let Some(caps) = DETAIL_ID_RE.captures(url) {
        return Some(caps[1].to_string());
    }
    HEX_ID_RE.captures(url).map(|caps| caps[1].to_string())
}

/// Assemble one record from a parsed page: labeled fields → typed fields →
/// link selection → tags. Extraction never fails; a miss leaves its field
/// absent.
pub fn process_page(url: &str, page: &Page) -> Opportunity {
    let text = &page.text;
    let mut opp = Opportunity::new(opportunity_id_from_url(url), page.title.clone());

    opp.agency_name = labels::find_label(text, "Agency");
    opp.opportunity_number = labels::find_label(text, "Funding opportunity number");

    let posted_raw = labels::find_label(text, "Posted date");
    let close_raw = labels::find_label(text, "Closing")
        .or_else(|| labels::find_label(text, "Close date"))
        .or_else(|| labels::find_label(text, "Closing date"));
    let archive_raw = labels::find_label(text, "Archive date");

    opp.post_date = posted_raw.as_deref().and_then(dates::first_date_token);
    opp.close_date = close_raw.as_deref().and_then(dates::first_date_token);
    opp.archive_date = archive_raw.as_deref().and_then(dates::first_date_token);

    if let Some(cost) = labels::find_label(text, "Cost sharing or matching requirement") {
        opp.is_cost_sharing = Some(cost.to_lowercase().starts_with('y'));
    }

    if let Some(instrument) = labels::find_label(text, "Funding instrument type") {
        opp.funding_instruments = Some(vec![instrument]);
    }

    opp.category = labels::find_label(text, "Opportunity Category");
    opp.category_explanation = labels::find_label(text, "Opportunity Category Explanation");

    if let Some(activity) = labels::find_label(text, "Category of Funding Activity") {
        opp.funding_categories = Some(vec![activity]);
    }

    if let Some(listings) = labels::find_label(text, "Assistance Listings") {
        let codes: BTreeSet<String> = LISTING_CODE_RE
            .find_iter(&listings)
            .map(|m| m.as_str().to_string())
            .collect();
        if !codes.is_empty() {
            opp.opportunity_assistance_listings = Some(codes.into_iter().collect());
        }
    }

    let buckets = links::classify_links(&page.anchors);
    if let Some(document) = buckets.documents.first() {
        opp.additional_info_url = Some(document.clone());
        opp.additional_info_url_description = Some("primary_pdf".to_string());
    } else if let Some(link) = buckets.external.first() {
        opp.additional_info_url = Some(link.clone());
        opp.additional_info_url_description = Some("external_link".to_string());
    }

    tags::apply_tags(&mut opp);
    opp
}
