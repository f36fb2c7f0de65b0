use std::collections::BTreeSet;

use crate::page::Anchor;

/// Absolute-URL anchors partitioned into PDF documents and everything else.
/// Both lists are deduplicated and lexicographically sorted, so the result is
/// independent of anchor order on the page.
pub struct LinkBuckets {
    pub documents: Vec<String>,
    pub external: Vec<String>,
}

pub fn classify_links(anchors: &[Anchor]) -> LinkBuckets {
    let mut documents = BTreeSet::new();
    let mut external = BTreeSet::new();

    for anchor in anchors {
        let href = anchor.href.trim();
        if !href.starts_with("http") {
            continue;
        }
        let lower = href.to_lowercase();
        if lower.ends_with(".pdf") || lower.contains(".pdf?") {
            documents.insert(href.to_string());
        } else {
            external.insert(href.to_string());
        }
    }

    LinkBuckets {
        documents: documents.into_iter().collect(),
        external: external.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(href: &str) -> Anchor {
        Anchor {
            href: href.to_string(),
            text: String::new(),
        }
    }

    #[test]
    fn partitions_and_drops_relative() {
        let anchors = vec![
            anchor("https://a.gov/x.pdf"),
            anchor("https://a.gov/page"),
            anchor("/relative"),
        ];
        let buckets = classify_links(&anchors);
        assert_eq!(buckets.documents, vec!["https://a.gov/x.pdf"]);
        assert_eq!(buckets.external, vec!["https://a.gov/page"]);
    }

    #[test]
    fn empty_href_dropped() {
        let buckets = classify_links(&[anchor(""), anchor("  ")]);
        assert!(buckets.documents.is_empty());
        assert!(buckets.external.is_empty());
    }

    #[test]
    fn pdf_detection_case_insensitive_and_query() {
        let anchors = vec![
            anchor("https://a.gov/nofo.PDF"),
            anchor("https://a.gov/doc.pdf?version=2"),
            anchor("https://a.gov/pdf-guide"),
        ];
        let buckets = classify_links(&anchors);
        assert_eq!(
            buckets.documents,
            vec!["https://a.gov/doc.pdf?version=2", "https://a.gov/nofo.PDF"]
        );
        assert_eq!(buckets.external, vec!["https://a.gov/pdf-guide"]);
    }

    #[test]
    fn order_independent_and_deduplicated() {
        let forward = vec![
            anchor("https://b.gov/two"),
            anchor("https://a.gov/one"),
            anchor("https://b.gov/two"),
            anchor("https://c.gov/guide.pdf"),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = classify_links(&forward);
        let b = classify_links(&reversed);
        assert_eq!(a.external, b.external);
        assert_eq!(a.documents, b.documents);
        assert_eq!(a.external, vec!["https://a.gov/one", "https://b.gov/two"]);
    }
}
