use crate::{common::*, Corpus, Result};
use algograph::graph::VertexId;
use std::collections::BTreeMap;

/// Probability of each page being visited next, keyed in vertex order so
/// that draws from it are reproducible under a seeded generator.
pub type Distribution = BTreeMap<VertexId, f64>;

/// One step of the random surfer standing on `page`.
///
/// With outlinks `L` (`k = |L|`), every outlink gets `d/k + (1-d)/(k+1)` and
/// `page` itself keeps `(1-d)/(k+1)`. A dangling page teleports uniformly
/// over the whole corpus.
pub fn transition_model(corpus: &Corpus, page: VertexId, damping: f64) -> Result<Distribution> {
    check_damping(damping)?;
    corpus.check_page(&page)?;

    let mut dist = Distribution::new();
    let k = corpus.out_degree(&page);
    if k == 0 {
        let unit = 1.0 / corpus.page_size() as f64;
        for v in corpus.iter_vertices() {
            dist.insert(v, unit);
        }
    } else {
        let k = k as f64;
        let follow = damping / k;
        let jump = (1.0 - damping) / (k + 1.0);
        for v in corpus.out_links(&page) {
            dist.insert(v, follow + jump);
        }
        dist.insert(page, jump);
    }
    renormalize(dist.values_mut());
    Ok(dist)
}
