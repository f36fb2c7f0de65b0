use scraper::{Html, Selector};

use crate::text::clean_text;

/// One anchor element: raw href plus visible text.
#[derive(Debug, Clone)]
pub struct Anchor {
    pub href: String,
    pub text: String,
}

/// A parsed page reduced to the three inputs extraction needs. Holds plain
/// strings only, so it stays `Send` and pages can be processed on worker
/// threads.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: Option<String>,
    pub text: String,
    pub anchors: Vec<Anchor>,
}

impl Page {
    pub fn parse(html: &str) -> Page {
        let document = Html::parse_document(html);

        let h1 = Selector::parse("h1").unwrap();
        let title_tag = Selector::parse("title").unwrap();
        let anchor_sel = Selector::parse("a[href]").unwrap();

        // Page title: first non-empty <h1>, else <title>.
        let title = document
            .select(&h1)
            .map(|el| clean_text(&el.text().collect::<Vec<_>>().join(" ")))
            .find(|t| !t.is_empty())
            .or_else(|| {
                document
                    .select(&title_tag)
                    .map(|el| clean_text(&el.text().collect::<Vec<_>>().join(" ")))
                    .find(|t| !t.is_empty())
            });

        // Flattened text of every text node, whitespace-joined. Field values
        // survive only as "Label: value" runs in this stream.
        let text = clean_text(
            &document
                .root_element()
                .text()
                .collect::<Vec<_>>()
                .join(" "),
        );

        let anchors = document
            .select(&anchor_sel)
            .filter_map(|el| {
                let href = el.value().attr("href")?.trim().to_string();
                if href.is_empty() {
                    return None;
                }
                let text = clean_text(&el.text().collect::<Vec<_>>().join(" "));
                Some(Anchor { href, text })
            })
            .collect();

        Page { title, text, anchors }
    }
}
