use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::LocatorError;

pub trait Crossover: Sync {
    /// Recombine two parents in place.
    fn mate<R: Rng>(&self, a: &mut [f64], b: &mut [f64], rng: &mut R);
}

pub trait Mutation: Sync {
    fn mutate<R: Rng>(&self, genes: &mut [f64], rng: &mut R);
}

/// Swap the genes between two random cut points.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoPointCrossover;

impl Crossover for TwoPointCrossover {
    fn mate<R: Rng>(&self, a: &mut [f64], b: &mut [f64], rng: &mut R) {
        let size = a.len().min(b.len());
        if size < 2 {
            return;
        }

        let (lo, hi) = cut_points(size, rng);
        a[lo..hi].swap_with_slice(&mut b[lo..hi]);
    }
}

/// Two distinct cut points `1 <= lo < hi <= size`.
fn cut_points<R: Rng>(size: usize, rng: &mut R) -> (usize, usize) {
    let first = rng.gen_range(1..=size);
    let mut second = rng.gen_range(1..size);
    if second >= first {
        second += 1;
        (first, second)
    } else {
        (second, first)
    }
}

/// Add N(mu, sigma) noise to each gene independently with probability `gene_prob`.
#[derive(Debug, Clone, Copy)]
pub struct GaussianMutation {
    noise: Normal<f64>,
    gene_prob: f64,
}

impl GaussianMutation {
    pub fn new(mu: f64, sigma: f64, gene_prob: f64) -> Result<Self, LocatorError> {
        if sigma < 0.0 {
            return Err(LocatorError::InvalidConfig(format!(
                "gaussian mutation: sigma {sigma} is negative"
            )));
        }
        let noise = Normal::new(mu, sigma)
            .map_err(|e| LocatorError::InvalidConfig(format!("gaussian mutation: {e}")))?;
        Ok(GaussianMutation { noise, gene_prob })
    }
}

impl Mutation for GaussianMutation {
    fn mutate<R: Rng>(&self, genes: &mut [f64], rng: &mut R) {
        for gene in genes.iter_mut() {
            if rng.gen::<f64>() < self.gene_prob {
                *gene += self.noise.sample(rng);
            }
        }
    }
}
