use std::collections::HashSet;

use crate::record::Opportunity;

/// Topic tag rules, applied in table order. A tag fires when any keyword is a
/// case-insensitive substring of the record's searchable text.
pub const TAG_RULES: &[(&str, &[&str])] = &[
    ("health_biomed", &["health", "cdc", "nih", "disease", "registry"]),
    (
        "ai_ml",
        &["ai", "machine learning", "artificial intelligence", "deep learning", "llm", "nlp"],
    ),
    ("cybersecurity", &["cyber", "ransomware", "phishing", "zero trust", "infosec"]),
    ("education", &["education", "teacher", "school", "curriculum"]),
    ("climate_environment", &["climate", "environment", "sustainability", "emissions"]),
    ("energy", &["energy", "renewable", "solar", "wind", "grid", "battery"]),
];

/// Classify a fully populated record. Rule-table tags come first, then the
/// derived `has_deadline` and `cost_sharing` tags; duplicates collapse to the
/// first occurrence. Tags are only ever added, never removed.
pub fn apply_tags(opp: &mut Opportunity) {
    let haystack = [
        opp.opportunity_title.as_deref().unwrap_or(""),
        opp.agency_name.as_deref().unwrap_or(""),
        opp.category.as_deref().unwrap_or(""),
        &opp
            .funding_categories
            .as_deref()
            .unwrap_or_default()
            .join(" "),
        opp.applicant_eligibility_description.as_deref().unwrap_or(""),
    ]
    .join(" ")
    .to_lowercase();

    let mut tags: Vec<String> = Vec::new();
    for (tag, keywords) in TAG_RULES {
        if keywords.iter().any(|kw| haystack.contains(kw)) {
            tags.push((*tag).to_string());
        }
    }

    if opp.close_date.is_some() {
        tags.push("has_deadline".to_string());
    }
    if opp.is_cost_sharing == Some(true) {
        tags.push("cost_sharing".to_string());
    }

    let mut seen = HashSet::new();
    tags.retain(|t| seen.insert(t.clone()));
    opp.tags = tags;
}
