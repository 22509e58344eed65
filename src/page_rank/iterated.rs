use super::*;
use crate::{common::*, Corpus, Error, Ranks};
use algograph::graph::VertexId;
use std::collections::HashMap;

/// Power iteration of the PageRank equation
///
/// ```text
/// r'(p) = (1 - d) / N
///       + d * sum(r(q) / out(q) for q linking to p)
///       + d * sum(r(q) / N for dangling q)
/// ```
///
/// applied synchronously until no page moves by `epsilon` or more.
pub struct IteratedPageRank<'a> {
    corpus: &'a Corpus,
    damping: f64,
    epsilon: f64,
    max_iterations: usize,
    inbound: HashMap<VertexId, Vec<(VertexId, f64)>, ahash::RandomState>,
    dangling: Vec<VertexId>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub epsilon: f64,
    pub max_iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            epsilon: DEFAULT_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: Ranks,
    pub delta: Ranks,
    pub iterations: usize,
    pub converged: bool,
}

impl<'a> IteratedPageRank<'a> {
    pub fn new(corpus: &'a Corpus, config: &Config) -> crate::Result<Self> {
        let damping = config.damping;
        check_damping(damping)?;
        let epsilon = config.epsilon;
        if epsilon.is_nan() || epsilon <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "epsilon={epsilon}, expected positive"
            )));
        }
        if config.max_iterations == 0 {
            return Err(Error::InvalidParameter(
                "max_iterations=0, expected at least 1".to_string(),
            ));
        }
        let inbound = corpus
            .iter_vertices()
            .map(|v| {
                let sources: Vec<_> = corpus
                    .in_links(&v)
                    .map(|u| (u, 1.0 / corpus.out_degree(&u) as f64))
                    .collect();
                (v, sources)
            })
            .collect();
        let dangling = corpus
            .iter_vertices()
            .filter(|v| corpus.is_dangling(v))
            .collect();
        Ok(Self {
            corpus,
            damping,
            epsilon,
            max_iterations: config.max_iterations,
            inbound,
            dangling,
        })
    }
}

impl PageRank for IteratedPageRank<'_> {
    type Result = self::Result;

    fn calc(&self, start: &Ranks) -> crate::Result<Self::Result> {
        let damping = self.damping;
        let n = self.corpus.page_size() as f64;
        let mut p: Ranks = start_vector(self.corpus, start)?.into_iter().collect();
        let mut r = HashMap::with_hasher(ahash::RandomState::new());
        let mut delta = HashMap::with_hasher(ahash::RandomState::new());
        let mut iterations = 0;
        let mut converged = false;
        while iterations < self.max_iterations {
            iterations += 1;
            let dangling_mass: f64 = self.dangling.iter().map(|q| p.get(q).unwrap()).sum();
            let base = (1.0 - damping) / n + damping * dangling_mass / n;
            for (v, sources) in self.inbound.iter() {
                let linked: f64 = sources
                    .iter()
                    .map(|(u, w)| p.get(u).unwrap() * w)
                    .sum();
                r.insert(*v, base + damping * linked);
            }

            delta.clear();
            let mut max_delta = 0.0f64;
            for v in self.corpus.iter_vertices() {
                let a = p.get(&v).unwrap();
                let b = r.get(&v).unwrap();
                max_delta = max_delta.max((a - b).abs());
                delta.insert(v, a - b);
            }
            tracing::debug!(iterations, max_delta, "page rank sweep");

            std::mem::swap(&mut p, &mut r);
            if max_delta < self.epsilon {
                converged = true;
                break;
            }
        }
        if !converged {
            tracing::warn!(
                iterations,
                epsilon = self.epsilon,
                "page rank iteration hit its cap before converging"
            );
        }
        renormalize(p.values_mut());
        tracing::info!(iterations, converged, damping, "iterated page rank");
        Ok(Self::Result {
            page_rank: p,
            delta,
            iterations,
            converged,
        })
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &Ranks {
        &self.page_rank
    }

    fn debug<'a>(&'a self, corpus: &'a Corpus) -> impl std::fmt::Debug + 'a {
        ResultDebug {
            corpus,
            result: self,
        }
    }
}

pub struct ResultDebug<'a> {
    corpus: &'a Corpus,
    result: &'a self::Result,
}

impl std::fmt::Debug for ResultDebug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, v) in self.corpus.iter_pages() {
            let p = self.result.page_rank.get(&v).copied().unwrap_or(0.0);
            let d = self.result.delta.get(&v).copied().unwrap_or(0.0);
            writeln!(f, "{name}: {p:?}, {d:?}")?;
        }
        Ok(())
    }
}
