use crate::{Corpus, Ranks, Result};

pub trait PageRank {
    type Result: PageRankResult;

    /// Runs the estimator from the `start` distribution over pages.
    fn calc(&self, start: &Ranks) -> Result<Self::Result>;
}

pub trait PageRankResult {
    fn page_rank(&self) -> &Ranks;
    fn debug<'a>(&'a self, corpus: &'a Corpus) -> impl std::fmt::Debug + 'a;
}
