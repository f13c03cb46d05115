//! Samplers over an injected random source
//!
//! Nothing here owns a generator. Every function borrows the caller's
//! `RngCore + CryptoRng` for the duration of the call, so there is no shared
//! state between calls and tests can drive the samplers deterministically.

use rand::{CryptoRng, Rng, RngCore};

use super::{Matrix, ModQ};
use crate::params::NoiseDistribution;

/// Uniform vector in Z_q^len
pub fn uniform_vec<R: RngCore + CryptoRng>(len: usize, q: u64, rng: &mut R) -> Vec<u64> {
    (0..len).map(|_| rng.gen_range(0..q)).collect()
}

/// Uniform rows × cols matrix over Z_q
pub fn uniform_matrix<R: RngCore + CryptoRng>(
    rows: usize,
    cols: usize,
    q: u64,
    rng: &mut R,
) -> Matrix {
    Matrix::from_fn(rows, cols, q, |_, _| rng.gen_range(0..q))
}

/// Vector with entries uniform in {-1, 0, 1}, represented in Z_q
pub fn ternary_vec<R: RngCore + CryptoRng>(len: usize, q: u64, rng: &mut R) -> Vec<u64> {
    (0..len)
        .map(|_| ModQ::from_signed(rng.gen_range(-1i64..=1), q))
        .collect()
}

/// Noise sampler supported on [-bound, bound]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseSampler {
    bound: i64,
    distribution: NoiseDistribution,
}

impl NoiseSampler {
    /// `bound` must fit in an i64; any bound below q/4 for a u64 q does
    pub fn new(bound: u64, distribution: NoiseDistribution) -> Self {
        Self {
            bound: i64::try_from(bound).unwrap_or(i64::MAX),
            distribution,
        }
    }

    /// Uniform over [-bound, bound]
    pub fn uniform(bound: u64) -> Self {
        Self::new(bound, NoiseDistribution::Uniform)
    }

    pub fn bound(&self) -> i64 {
        self.bound
    }

    /// Sample a single signed noise value
    pub fn sample<R: RngCore + CryptoRng>(&self, rng: &mut R) -> i64 {
        match self.distribution {
            NoiseDistribution::Uniform => rng.gen_range(-self.bound..=self.bound),
            NoiseDistribution::TruncatedGaussian { sigma } => self.sample_gaussian(sigma, rng),
        }
    }

    /// Sample `len` values, mapped into Z_q
    pub fn sample_vec_mod<R: RngCore + CryptoRng>(
        &self,
        len: usize,
        q: u64,
        rng: &mut R,
    ) -> Vec<u64> {
        (0..len)
            .map(|_| ModQ::from_signed(self.sample(rng), q))
            .collect()
    }

    /// Rejection sampling: draw x uniform in [-tail, tail] and accept with
    /// probability exp(-x²/(2σ²))
    ///
    /// The tail is `ceil(6σ)`, cut at `bound`.
    fn sample_gaussian<R: RngCore + CryptoRng>(&self, sigma: f64, rng: &mut R) -> i64 {
        let tail = ((sigma * 6.0).ceil() as i64).clamp(0, self.bound);
        let sigma_sq_2 = 2.0 * sigma * sigma;

        loop {
            let x = rng.gen_range(-tail..=tail);
            if x == 0 {
                return 0;
            }

            let x_sq = (x as f64) * (x as f64);
            let prob = (-x_sq / sigma_sq_2).exp();

            let u: f64 = rng.gen();
            if u < prob {
                return x;
            }
        }
    }
}
