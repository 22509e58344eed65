use super::*;
use crate::{common::*, Corpus, Error, Ranks};
use algograph::graph::VertexId;
use rand::{
    distr::{weighted::WeightedIndex, Distribution as _},
    Rng,
};
use std::{cell::RefCell, collections::HashMap};

/// Random-surfer simulation: walks `samples` steps along the transition
/// model and ranks pages by visit frequency.
pub struct SampledPageRank<'a, R>
where
    R: Rng,
{
    corpus: &'a Corpus,
    damping: f64,
    samples: usize,
    rng: RefCell<R>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: Ranks,
    pub visits: HashMap<VertexId, usize, ahash::RandomState>,
}

impl<'a, R: Rng> SampledPageRank<'a, R> {
    pub fn new(corpus: &'a Corpus, config: &Config, rng: R) -> crate::Result<Self> {
        check_damping(config.damping)?;
        if config.samples == 0 {
            return Err(Error::InvalidParameter(
                "samples=0, expected at least 1".to_string(),
            ));
        }
        Ok(Self {
            corpus,
            damping: config.damping,
            samples: config.samples,
            rng: RefCell::new(rng),
        })
    }
}

impl<R: Rng> PageRank for SampledPageRank<'_, R> {
    type Result = self::Result;

    fn calc(&self, start: &Ranks) -> crate::Result<Self::Result> {
        let start: Distribution = start_vector(self.corpus, start)?.into_iter().collect();
        let mut rng = self.rng.borrow_mut();
        let mut visits: HashMap<_, _, ahash::RandomState> =
            self.corpus.iter_vertices().map(|v| (v, 0usize)).collect();

        let mut cur = draw(&start, &mut *rng)?;
        *visits.get_mut(&cur).unwrap() += 1;
        for _ in 1..self.samples {
            let dist = transition_model(self.corpus, cur, self.damping)?;
            cur = draw(&dist, &mut *rng)?;
            *visits.get_mut(&cur).unwrap() += 1;
        }

        let n = self.samples as f64;
        let mut page_rank: Ranks = visits
            .iter()
            .map(|(v, count)| (*v, *count as f64 / n))
            .collect();
        renormalize(page_rank.values_mut());
        tracing::info!(
            samples = self.samples,
            damping = self.damping,
            "sampled page rank"
        );
        Ok(Self::Result { page_rank, visits })
    }
}

/// Draws one page with probability proportional to its weight in `dist`.
fn draw<R: Rng + ?Sized>(dist: &Distribution, rng: &mut R) -> crate::Result<VertexId> {
    let (pages, weights): (Vec<VertexId>, Vec<f64>) = dist.iter().map(|(v, w)| (*v, *w)).unzip();
    let index = WeightedIndex::new(&weights)?;
    Ok(pages[index.sample(rng)])
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
            let c = self.result.visits.get(&v).copied().unwrap_or(0);
            writeln!(f, "{name}: {p:?}, {c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use quickcheck_macros::quickcheck;
    use rand::{rngs::StdRng, SeedableRng};

    fn sampled<'a>(corpus: &'a Corpus, samples: usize, seed: u64) -> SampledPageRank<'a, StdRng> {
        let cfg = Config {
            damping: 0.85,
            samples,
        };
        SampledPageRank::new(corpus, &cfg, StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn zero_samples() {
        let corpus = cycle(3);
        let cfg = Config {
            damping: 0.85,
            samples: 0,
        };
        let res = SampledPageRank::new(&corpus, &cfg, StdRng::seed_from_u64(3407));
        assert!(matches!(res, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn bad_damping() {
        let corpus = cycle(3);
        let cfg = Config {
            damping: -0.1,
            samples: 10,
        };
        let res = SampledPageRank::new(&corpus, &cfg, StdRng::seed_from_u64(3407));
        assert!(matches!(res, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn one_sample() {
        let corpus = corpus0();
        let spr = sampled(&corpus, 1, 3407);
        let res = spr.calc(&uniform(&corpus)).unwrap();
        let ones: Vec<_> = res.page_rank.values().filter(|p| **p == 1.0).collect();
        let zeros: Vec<_> = res.page_rank.values().filter(|p| **p == 0.0).collect();
        assert_eq!(ones.len(), 1, "{:?}", res.debug(&corpus));
        assert_eq!(zeros.len(), corpus.page_size() - 1);
    }

    #[test]
    fn visits_add_up() {
        let corpus = corpus0();
        let spr = sampled(&corpus, 1000, 3407);
        let res = spr.calc(&uniform(&corpus)).unwrap();
        assert_eq!(res.visits.values().sum::<usize>(), 1000);
        assert!((norm_1(res.page_rank.values()) - 1.0).abs() < 1e-6);
        assert_eq!(res.page_rank.len(), corpus.page_size());
    }

    #[test]
    fn start_is_respected() {
        let corpus = corpus0();
        let v3 = corpus.vertex("3.html").unwrap();
        let start: Ranks = [(v3, 1.0)].into_iter().collect();
        for seed in 0..10 {
            let res = sampled(&corpus, 1, seed).calc(&start).unwrap();
            assert_eq!(res.page_rank.get(&v3), Some(&1.0));
        }
    }

    #[test]
    fn reproducible() {
        let corpus = corpus0();
        let a = sampled(&corpus, 500, 42).calc(&uniform(&corpus)).unwrap();
        let b = sampled(&corpus, 500, 42).calc(&uniform(&corpus)).unwrap();
        assert_eq!(a.visits, b.visits);
    }

    #[test]
    fn symmetric_cycle() {
        let corpus = cycle(3);
        let res = sampled(&corpus, 30000, 3407)
            .calc(&uniform(&corpus))
            .unwrap();
        for p in res.page_rank.values() {
            assert!((p - 1.0 / 3.0).abs() < 0.02, "{:?}", res.debug(&corpus));
        }
    }

    #[test]
    fn dangling_only() {
        let corpus = Corpus::from_links([("a", Vec::<&str>::new()), ("b", vec![])]).unwrap();
        let res = sampled(&corpus, 20000, 3407)
            .calc(&uniform(&corpus))
            .unwrap();
        for p in res.page_rank.values() {
            assert!((p - 0.5).abs() < 0.03, "{:?}", res.debug(&corpus));
        }
    }

    #[quickcheck]
    fn random_corpus(c: RandomCorpus) {
        let corpus = &c.corpus;
        let res = sampled(corpus, 200, 3407).calc(&uniform(corpus)).unwrap();
        assert!((norm_1(res.page_rank.values()) - 1.0).abs() < 1e-6);
        assert!(res.page_rank.values().all(|p| *p >= 0.0));
    }
}
