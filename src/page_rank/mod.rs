//! Two estimators of the same stationary distribution: a random-surfer
//! simulation ([`sampled`]) and power iteration ([`iterated`]).

pub mod iterated;
pub mod sampled;
mod traits;
mod transition;

pub use self::traits::*;
pub use self::transition::*;

use crate::{common::*, Corpus, Error, Ranks, Result};
use algograph::graph::VertexId;
use rand::Rng;

pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_SAMPLES: usize = 10000;
pub const DEFAULT_EPSILON: f64 = 0.001;
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// The uniform distribution over all pages of `corpus`.
pub fn uniform(corpus: &Corpus) -> Ranks {
    let n = corpus.page_size() as f64;
    corpus.iter_vertices().map(|v| (v, 1.0 / n)).collect()
}

/// Ranks by a random walk of `n` steps starting from a uniformly chosen page.
pub fn sample_pagerank<R: Rng>(
    corpus: &Corpus,
    damping: f64,
    n: usize,
    rng: R,
) -> Result<Ranks> {
    let cfg = sampled::Config {
        damping,
        samples: n,
    };
    let spr = sampled::SampledPageRank::new(corpus, &cfg, rng)?;
    Ok(spr.calc(&uniform(corpus))?.page_rank)
}

/// Ranks by iterating the PageRank equation from the uniform distribution.
pub fn iterate_pagerank(corpus: &Corpus, damping: f64) -> Result<Ranks> {
    let cfg = iterated::Config {
        damping,
        ..iterated::Config::default()
    };
    let ipr = iterated::IteratedPageRank::new(corpus, &cfg)?;
    Ok(ipr.calc(&uniform(corpus))?.page_rank)
}

/// Expands `start` over every page of `corpus` in page-name order, filling
/// missing pages with 0.
fn start_vector(corpus: &Corpus, start: &Ranks) -> Result<Vec<(VertexId, f64)>> {
    for (v, w) in start.iter() {
        corpus.check_page(v)?;
        if w.is_nan() || *w < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "start weight {w} for {v:?} is negative"
            )));
        }
    }
    let p_sum = norm_1(start.values());
    if (p_sum - 1.0).abs() >= 1e-7 {
        return Err(Error::InvalidParameter(format!(
            "start distribution sums to {p_sum}"
        )));
    }
    Ok(corpus
        .iter_vertices()
        .map(|v| (v, start.get(&v).copied().unwrap_or(0.0)))
        .collect())
}
