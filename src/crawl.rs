use crate::{Corpus, Result};
use regex::Regex;
use std::{collections::BTreeSet, path::Path, sync::LazyLock};
use walkdir::WalkDir;

static ANCHOR_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("invalid regex"));

/// `href` targets of every anchor tag in `html`.
pub fn extract_links(html: &str) -> BTreeSet<String> {
    ANCHOR_HREF
        .captures_iter(html)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Builds a corpus from the `.html` files directly inside `dir`, keyed by
/// file name.
pub fn crawl<P: AsRef<Path>>(dir: P) -> Result<Corpus> {
    let mut pages = Vec::new();
    for entry in WalkDir::new(dir.as_ref()).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(".html") {
            continue;
        }
        let contents = std::fs::read_to_string(entry.path())?;
        let links = extract_links(&contents);
        tracing::debug!(page = %name, links = links.len(), "crawled page");
        pages.push((name, links));
    }
    Corpus::from_links(pages)
}
