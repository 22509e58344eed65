use crate::{Error, Ranks, Result};
use algograph::graph::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// An immutable link graph over named pages.
///
/// Every outlink target is itself a page of the corpus, and no page links to
/// itself. Pages are always enumerated in ascending name order.
#[derive(Debug, Clone)]
pub struct Corpus {
    graph: directed::TreeBackedGraph,
    vertices: BTreeMap<String, VertexId>,
    names: HashMap<VertexId, String, ahash::RandomState>,
}

impl Corpus {
    /// Builds a corpus from `(page, outlinks)` pairs.
    ///
    /// Repeated pages merge their outlinks. Self-links and links to pages
    /// outside the corpus are dropped.
    pub fn from_links<I, P, L>(links: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        let pages = {
            let mut pages: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
            for (page, outlinks) in links {
                pages
                    .entry(page.into())
                    .or_default()
                    .extend(outlinks.into_iter().map(Into::into));
            }
            pages
        };
        if pages.is_empty() {
            return Err(Error::InvalidCorpus("corpus has no pages".to_string()));
        }

        let mut graph = directed::TreeBackedGraph::new();
        let vertices: BTreeMap<String, VertexId> = pages
            .keys()
            .map(|name| (name.clone(), graph.add_vertex()))
            .collect();
        let mut dropped = 0usize;
        for (page, outlinks) in pages.iter() {
            let u = *vertices.get(page).unwrap();
            for link in outlinks.iter() {
                match vertices.get(link) {
                    Some(v) if *v != u => {
                        graph.add_edge(u, *v);
                    }
                    _ => {
                        tracing::debug!(%page, %link, "dropping link");
                        dropped += 1;
                    }
                }
            }
        }
        let names = vertices
            .iter()
            .map(|(name, v)| (*v, name.clone()))
            .collect();
        tracing::info!(
            pages = graph.vertex_size(),
            links = graph.edge_size(),
            dropped,
            "built corpus"
        );
        Ok(Self {
            graph,
            vertices,
            names,
        })
    }

    pub fn graph(&self) -> &directed::TreeBackedGraph {
        &self.graph
    }

    pub fn page_size(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertex(&self, name: &str) -> Option<VertexId> {
        self.vertices.get(name).copied()
    }

    pub fn name(&self, v: &VertexId) -> Option<&str> {
        self.names.get(v).map(String::as_str)
    }

    pub fn contains(&self, v: &VertexId) -> bool {
        self.names.contains_key(v)
    }

    /// Pages in ascending name order.
    pub fn iter_pages(&self) -> impl Iterator<Item = (&str, VertexId)> + '_ {
        self.vertices.iter().map(|(name, v)| (name.as_str(), *v))
    }

    /// Vertices in ascending page-name order.
    pub fn iter_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.values().copied()
    }

    pub fn out_links<'a>(&'a self, v: &VertexId) -> impl Iterator<Item = VertexId> + 'a {
        self.graph.out_edges(v).map(|e| e.sink)
    }

    pub fn in_links<'a>(&'a self, v: &VertexId) -> impl Iterator<Item = VertexId> + 'a {
        self.graph.in_edges(v).map(|e| e.source)
    }

    pub fn out_degree(&self, v: &VertexId) -> usize {
        self.graph.out_edges(v).count()
    }

    pub fn is_dangling(&self, v: &VertexId) -> bool {
        self.graph.out_edges(v).next().is_none()
    }

    /// Re-keys `ranks` by page name. Pages absent from `ranks` get 0.
    pub fn named(&self, ranks: &Ranks) -> BTreeMap<&str, f64> {
        self.iter_pages()
            .map(|(name, v)| (name, ranks.get(&v).copied().unwrap_or(0.0)))
            .collect()
    }

    pub(crate) fn check_page(&self, v: &VertexId) -> Result<()> {
        if self.contains(v) {
            Ok(())
        } else {
            Err(Error::UnknownPage(format!("{v:?}")))
        }
    }
}
