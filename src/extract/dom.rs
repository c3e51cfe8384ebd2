// src/extract/dom.rs
//! Typed accessors over a parsed HTML document.

use scraper::{ElementRef, Html, Node, Selector};

use crate::error::{Result, ScrapeError};

/// A child of an element, split by kind. Comments and the like are skipped.
#[derive(Debug, Clone, Copy)]
pub enum DomNode<'a> {
    Element(ElementRef<'a>),
    Text(&'a str),
}

/// Owned, parsed page.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// All elements of type `tag`, in document order.
    pub fn find_elements_by_tag(&self, tag: &str) -> Result<Vec<ElementRef<'_>>> {
        let sel = tag_selector(tag)?;
        Ok(self.html.select(&sel).collect())
    }

    /// First element of type `tag` whose `id` attribute equals `id`.
    pub fn find_element(&self, tag: &str, id: &str) -> Result<Option<ElementRef<'_>>> {
        Ok(self
            .find_elements_by_tag(tag)?
            .into_iter()
            .find(|el| attribute(*el, "id") == Some(id)))
    }
}

/// Descendants of `el` (not `el` itself) of type `tag`, in document order.
pub fn descendants_by_tag<'a>(el: ElementRef<'a>, tag: &str) -> Result<Vec<ElementRef<'a>>> {
    let sel = tag_selector(tag)?;
    Ok(el.select(&sel).collect())
}

/// Direct children of `el`.
pub fn children(el: ElementRef<'_>) -> impl Iterator<Item = DomNode<'_>> {
    el.children().filter_map(|node| match node.value() {
        Node::Element(_) => ElementRef::wrap(node).map(DomNode::Element),
        Node::Text(text) => Some(DomNode::Text(&**text)),
        _ => None,
    })
}

/// Direct element children of `el` of type `tag`.
pub fn child_elements<'a>(el: ElementRef<'a>, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> {
    children(el).filter_map(move |node| match node {
        DomNode::Element(child) if child.value().name().eq_ignore_ascii_case(tag) => Some(child),
        _ => None,
    })
}

pub fn attribute<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// Concatenated text of every descendant text node.
pub fn text_content(el: ElementRef<'_>) -> String {
    el.text().collect()
}

fn tag_selector(tag: &str) -> Result<Selector> {
    Selector::parse(tag)
        .map_err(|e| ScrapeError::Extraction(format!("invalid element type {tag:?}: {e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <p>intro</p>
        <table id="other"><tr><td>x</td></tr></table>
        <table id="target" class="wikitable"><tr><td> a <b>bold</b> </td></tr></table>
    </body></html>"#;

    #[test]
    fn finds_by_tag_and_id() -> anyhow::Result<()> {
        let doc = Document::parse(PAGE);
        assert_eq!(doc.find_elements_by_tag("table")?.len(), 2);

        let table = doc.find_element("table", "target")?.expect("target table");
        assert_eq!(attribute(table, "class"), Some("wikitable"));
        assert!(doc.find_element("table", "missing")?.is_none());
        Ok(())
    }

    #[test]
    fn text_content_includes_nested_elements() -> anyhow::Result<()> {
        let doc = Document::parse(PAGE);
        let table = doc.find_element("table", "target")?.expect("target table");
        let td = descendants_by_tag(table, "td")?[0];
        assert_eq!(text_content(td), " a bold ");
        Ok(())
    }

    #[test]
    fn children_split_text_and_elements() -> anyhow::Result<()> {
        let doc = Document::parse(PAGE);
        let table = doc.find_element("table", "target")?.expect("target table");
        let td = descendants_by_tag(table, "td")?[0];
        let kinds: Vec<&str> = children(td)
            .map(|n| match n {
                DomNode::Element(_) => "element",
                DomNode::Text(_) => "text",
            })
            .collect();
        assert_eq!(kinds, vec!["text", "element", "text"]);
        Ok(())
    }

    #[test]
    fn parser_inserts_tbody() -> anyhow::Result<()> {
        let doc = Document::parse(PAGE);
        let table = doc.find_element("table", "target")?.expect("target table");
        assert_eq!(child_elements(table, "tbody").count(), 1);
        Ok(())
    }

    #[test]
    fn bad_element_type_is_extraction_error() {
        let doc = Document::parse(PAGE);
        let err = doc.find_elements_by_tag("<<").unwrap_err();
        assert!(matches!(err, ScrapeError::Extraction(_)));
    }
}
