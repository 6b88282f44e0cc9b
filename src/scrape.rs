use crate::RawEntry;
use failure::{Error, ResultExt, bail, ensure};
use log::info;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use select::document::Document;
use select::node::Node;
use select::predicate::{Class, Name, Predicate};

pub fn fetch_entries(client: &Client, url: &str, selector: &Selector) -> Result<Vec<RawEntry>, Error> {
    info!("Downloading {}", url);
    let resp = client.get(url).send()
        .with_context(|_| format!("could not download page `{}`", url))?;
    if resp.status() != StatusCode::OK {
        bail!("Can't get page {}. Status: {}", url, resp.status());
    }
    let doc = Document::from_read(resp)
        .with_context(|_| format!("could not read page `{}`", url))?;
    let entries = parse_entries(&doc, selector)?;
    info!("Found {} entries on {}", entries.len(), url);
    Ok(entries)
}

/// Text and href of every node matching `selector`, in document order.
pub fn parse_entries(doc: &Document, selector: &Selector) -> Result<Vec<RawEntry>, Error> {
    let mut entries = Vec::new();
    for link in doc.find(selector.clone()) {
        let text = link.text();
        let href = match link.attr("href") {
            Some(href) => href,
            None => bail!("Could not find link of `{}`.", text)
        };
        entries.push(RawEntry { text, href: href.to_string() });
    }
    Ok(entries)
}

/// A small subset of CSS selectors: descendant steps separated by
/// whitespace, each one `tag`, `.class` or `tag.class.other`.
#[derive(Debug, PartialEq, Clone)]
pub struct Selector {
    steps: Vec<Step>
}

#[derive(Debug, PartialEq, Clone)]
struct Step {
    tag: Option<String>,
    classes: Vec<String>
}

impl Selector {
    pub fn parse(selector: &str) -> Result<Selector, Error> {
        let steps = selector
            .split_whitespace()
            .map(Step::parse)
            .collect::<Result<Vec<_>, _>>()?;
        ensure!(!steps.is_empty(), "Empty selector.");
        Ok(Selector { steps })
    }
}

impl Step {
    fn parse(step: &str) -> Result<Step, Error> {
        let mut parts = step.split('.');
        let tag = match parts.next() {
            Some("") | None => None,
            Some(tag) => Some(tag.to_string())
        };
        let classes: Vec<String> = parts.map(String::from).collect();
        if let Some(tag) = &tag {
            ensure!(is_identifier(tag), "Unsupported selector step `{}`.", step);
        }
        ensure!(classes.iter().all(|c| is_identifier(c)), "Unsupported selector step `{}`.", step);
        ensure!(tag.is_some() || !classes.is_empty(), "Unsupported selector step `{}`.", step);
        Ok(Step { tag, classes })
    }

    fn matches(&self, node: &Node) -> bool {
        if let Some(tag) = &self.tag {
            if !Name(tag.as_str()).matches(node) {
                return false;
            }
        }
        self.classes.iter().all(|c| Class(c.as_str()).matches(node))
    }
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl Predicate for Selector {
    fn matches(&self, node: &Node) -> bool {
        let (last, ancestors) = match self.steps.split_last() {
            Some(split) => split,
            None => return false
        };
        if !last.matches(node) {
            return false;
        }
        // walk up, satisfying the remaining steps right to left
        let mut remaining = ancestors.len();
        let mut current = node.parent();
        while remaining > 0 {
            let parent = match current {
                Some(parent) => parent,
                None => break
            };
            if ancestors[remaining - 1].matches(&parent) {
                remaining -= 1;
            }
            current = parent.parent();
        }
        remaining == 0
    }
}
