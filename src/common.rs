use crate::{Error, Result};
use algograph::graph::*;
use std::collections::{HashMap, HashSet};

/// Largest deviation of a distribution's sum from 1.0 that is left uncorrected.
pub const DRIFT_TOLERANCE: f64 = 1e-12;

pub type Ranks = HashMap<VertexId, f64, ahash::RandomState>;

pub fn norm_1<'a, I: IntoIterator<Item = &'a f64>>(v: I) -> f64 {
    v.into_iter().map(|x| x.abs()).sum()
}

pub fn support<'a, I>(p: I) -> HashSet<VertexId, ahash::RandomState>
where
    I: IntoIterator<Item = (&'a VertexId, &'a f64)>,
{
    p.into_iter()
        .filter_map(|(vert, val)| {
            if *val < -1e-7 || *val > 1e-7 {
                Some(*vert)
            } else {
                None
            }
        })
        .collect()
}

/// Rescales `values` so they sum to 1.0 when they have drifted beyond
/// [`DRIFT_TOLERANCE`]. Returns whether a correction was applied.
pub fn renormalize<'a, I>(values: I) -> bool
where
    I: IntoIterator<Item = &'a mut f64>,
{
    let mut values: Vec<_> = values.into_iter().collect();
    let sum = norm_1(values.iter().map(|x| &**x));
    if sum <= 0.0 || (sum - 1.0).abs() <= DRIFT_TOLERANCE {
        return false;
    }
    tracing::debug!(sum, "renormalizing drifted distribution");
    for x in values.iter_mut() {
        **x /= sum;
    }
    true
}

pub fn check_damping(damping: f64) -> Result<()> {
    if (0.0..=1.0).contains(&damping) {
        Ok(())
    } else {
        Err(Error::InvalidParameter(format!(
            "damping={damping}, expected within [0, 1]"
        )))
    }
}
