use crate::{Corpus, Ranks};
use std::io::{self, Write};

pub const ITERATION_TITLE: &str = "PageRank Results from Iteration";

pub fn sampling_title(samples: usize) -> String {
    format!("PageRank Results from Sampling (n = {samples})")
}

/// Writes `title` followed by one `name: rank` line per page, in name order.
pub fn report<W: Write>(out: &mut W, title: &str, corpus: &Corpus, ranks: &Ranks) -> io::Result<()> {
    writeln!(out, "{title}")?;
    for (name, rank) in corpus.named(ranks) {
        writeln!(out, "  {name}: {rank:.4}")?;
    }
    Ok(())
}
