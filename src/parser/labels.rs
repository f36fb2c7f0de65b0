use std::sync::LazyLock;

use regex::Regex;

use crate::text::clean_text;

/// Known field labels on an opportunity detail page. Values have no delimiter
/// of their own once the page text is flattened, so the only stop condition
/// for one label's value is the next occurrence of another label in this set.
pub const LABELS: &[&str] = &[
    "Agency",
    "Assistance Listings",
    "Posted date",
    "Closing",
    "Close date",
    "Closing date",
    "Archive date",
    "Funding opportunity number",
    "Cost sharing or matching requirement",
    "Funding instrument type",
    "Opportunity Category",
    "Opportunity Category Explanation",
    "Category of Funding Activity",
    "Category Explanation",
    "Last Updated",
];

static LABEL_SET: LazyLock<LabelSet> = LazyLock::new(|| LabelSet::new(LABELS));

/// A label vocabulary compiled for scanning flattened page text.
pub struct LabelSet {
    patterns: Vec<(String, Regex)>,
}

impl LabelSet {
    pub fn new(labels: &[&str]) -> Self {
        let patterns = labels
            .iter()
            .map(|label| {
                // Escaped and anchored so "Closing" never matches inside
                // "Closing date", and vice versa.
                let re = Regex::new(&format!(r"(?i)\b{}\s*:", regex::escape(label))).unwrap();
                ((*label).to_string(), re)
            })
            .collect();
        LabelSet { patterns }
    }

    /// Value following the first `<label>:` occurrence, cut at the earliest
    /// following occurrence of any other label in the set. Closed world: an
    /// unknown label can never terminate a value, so two known labels with
    /// unrelated text between them will swallow that text. Empty values are
    /// absent.
    pub fn value_after(&self, text: &str, label: &str) -> Option<String> {
        let (_, target) = self
            .patterns
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(label))?;
        let m = target.find(text)?;
        let rest = &text[m.end()..];

        let end = self
            .patterns
            .iter()
            .filter(|(name, _)| !name.eq_ignore_ascii_case(label))
            .filter_map(|(_, re)| re.find(rest).map(|stop| stop.start()))
            .min()
            .unwrap_or(rest.len());

        let value = clean_text(&rest[..end]);
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}

/// Extract one labeled value from flattened page text using the default
/// vocabulary.
pub fn find_label(text: &str, label: &str) -> Option<String> {
    LABEL_SET.value_after(text, label)
}
