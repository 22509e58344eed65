use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::{io::Write, path::PathBuf};
use surfer_rank::{
    page_rank::{self, iterated, sampled, PageRank, PageRankResult},
    report,
};
use tracing_subscriber::EnvFilter;

/// Estimate PageRank of a directory of HTML pages, by sampling and by iteration.
#[derive(Parser, Debug)]
#[command(name = "surfer-rank", version, about)]
struct Cli {
    /// Directory holding the `.html` pages
    corpus: PathBuf,

    /// Probability of following a link rather than jumping to a random page
    #[arg(long, env = "SURFER_RANK_DAMPING", default_value_t = page_rank::DEFAULT_DAMPING)]
    damping: f64,

    /// Number of pages visited by the random surfer
    #[arg(long, env = "SURFER_RANK_SAMPLES", default_value_t = page_rank::DEFAULT_SAMPLES)]
    samples: usize,

    /// Iteration stops once no rank moves by this much
    #[arg(long, env = "SURFER_RANK_EPSILON", default_value_t = page_rank::DEFAULT_EPSILON)]
    epsilon: f64,

    #[arg(long, env = "SURFER_RANK_MAX_ITERATIONS", default_value_t = page_rank::DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Seed for the random surfer; seeded from the OS when absent
    #[arg(long, env = "SURFER_RANK_SEED")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let corpus = surfer_rank::crawl(&cli.corpus)
        .with_context(|| format!("failed to crawl {}", cli.corpus.display()))?;
    let start = page_rank::uniform(&corpus);

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let cfg = sampled::Config {
        damping: cli.damping,
        samples: cli.samples,
    };
    let by_sampling = sampled::SampledPageRank::new(&corpus, &cfg, rng)?.calc(&start)?;

    let cfg = iterated::Config {
        damping: cli.damping,
        epsilon: cli.epsilon,
        max_iterations: cli.max_iterations,
    };
    let by_iteration = iterated::IteratedPageRank::new(&corpus, &cfg)?.calc(&start)?;
    tracing::debug!("iteration deltas:\n{:?}", by_iteration.debug(&corpus));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::report(
        &mut out,
        &report::sampling_title(cli.samples),
        &corpus,
        by_sampling.page_rank(),
    )?;
    report::report(&mut out, report::ITERATION_TITLE, &corpus, by_iteration.page_rank())?;
    out.flush()?;
    Ok(())
}
