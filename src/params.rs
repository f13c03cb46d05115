//! Parameter sets for the LWE core
//!
//! These are toy parameters for experimenting with the encrypt/decrypt round
//! trip. None of them is derived from a security estimate.

use serde::{Deserialize, Serialize};

use crate::error::{invalid_param, Result};

/// Distribution of the key-generation noise vector e
///
/// Both variants are supported on `[-noise_bound, noise_bound]`, so the
/// decryption bound `|e·r| <= n * noise_bound` holds either way.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum NoiseDistribution {
    /// Uniform over `[-noise_bound, noise_bound]`
    #[default]
    Uniform,

    /// Discrete Gaussian with standard deviation `sigma`, rejected outside
    /// `[-noise_bound, noise_bound]`
    TruncatedGaussian { sigma: f64 },
}

/// Core parameters for key generation and encryption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LweParams {
    /// Dimension n: length of the secret and side of the public matrix
    pub n: usize,

    /// Modulus q
    pub q: u64,

    /// Bound on the magnitude of each noise entry
    /// Must satisfy 0 < noise_bound < q/4
    pub noise_bound: u64,

    /// Noise distribution used at key generation
    #[serde(default)]
    pub noise: NoiseDistribution,
}

impl LweParams {
    /// Parameters with uniform noise
    pub fn new(n: usize, q: u64, noise_bound: u64) -> Self {
        Self {
            n,
            q,
            noise_bound,
            noise: NoiseDistribution::Uniform,
        }
    }

    /// n = 4, q = 257, noise_bound = 8
    ///
    /// Worst-case noise is 32 < 257/4, so decryption never fails.
    pub fn toy() -> Self {
        Self::new(4, 257, 8)
    }

    /// n = 64, q = 65521 (largest prime below 2^16), noise_bound = 4
    pub fn demo() -> Self {
        Self::new(64, 65521, 4)
    }

    /// Switch to truncated Gaussian noise
    pub fn with_gaussian_noise(mut self, sigma: f64) -> Self {
        self.noise = NoiseDistribution::TruncatedGaussian { sigma };
        self
    }

    /// Message encoding offset ⌊q/2⌋
    pub fn half_q(&self) -> u64 {
        self.q / 2
    }

    /// Largest possible |e·r| for a ternary r: n * noise_bound
    pub fn worst_case_noise(&self) -> u128 {
        self.n as u128 * self.noise_bound as u128
    }

    /// True when the worst-case noise stays below q/4, i.e. decryption can
    /// never return the wrong bit
    pub fn is_always_correct(&self) -> bool {
        4 * self.worst_case_noise() < self.q as u128
    }

    /// Check that the parameters can produce a usable key pair
    pub fn validate(&self) -> Result<()> {
        if self.n < 1 {
            return Err(invalid_param!("n must be >= 1, got {}", self.n));
        }
        check_modulus(self.q)?;
        check_noise_bound(self.noise_bound, self.q)?;

        if let NoiseDistribution::TruncatedGaussian { sigma } = self.noise {
            if sigma <= 0.0 || !(2.0 * sigma * sigma).is_normal() {
                return Err(invalid_param!(
                    "sigma must be positive with a representable 2σ², got {}",
                    sigma
                ));
            }
        }

        Ok(())
    }
}

impl Default for LweParams {
    fn default() -> Self {
        Self::toy()
    }
}

pub(crate) fn check_modulus(q: u64) -> Result<()> {
    if q < 2 {
        return Err(invalid_param!("q must be >= 2, got {}", q));
    }
    Ok(())
}

/// 0 < noise_bound < q/4, tested without rounding as 4 * noise_bound < q
pub(crate) fn check_noise_bound(noise_bound: u64, q: u64) -> Result<()> {
    if noise_bound == 0 {
        return Err(invalid_param!("noise_bound must be positive"));
    }
    if 4 * noise_bound as u128 >= q as u128 {
        return Err(invalid_param!(
            "noise_bound {} must be below q/4 for q = {}",
            noise_bound,
            q
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_valid() {
        assert!(LweParams::toy().validate().is_ok());
        assert!(LweParams::demo().validate().is_ok());
        assert_eq!(LweParams::default(), LweParams::toy());
    }

    #[test]
    fn test_toy_always_correct() {
        let params = LweParams::toy();
        assert_eq!(params.half_q(), 128);
        assert_eq!(params.worst_case_noise(), 32);
        assert!(params.is_always_correct());
    }

    #[test]
    fn test_always_correct_depends_on_dimension() {
        // 64 * 4 = 256 and 4 * 256 < 65521
        assert!(LweParams::demo().is_always_correct());
        assert!(!LweParams::new(64, 257, 8).is_always_correct());
    }

    #[test]
    fn test_rejects_zero_dimension() {
        let err = LweParams::new(0, 257, 8).validate().unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_rejects_small_modulus() {
        for q in [0, 1] {
            let err = LweParams::new(4, q, 1).validate().unwrap_err();
            assert!(err.is_invalid_parameter());
        }
    }

    #[test]
    fn test_noise_bound_quarter_boundary() {
        // q = 257: q/4 = 64.25, so 64 is allowed and 65 is not
        assert!(LweParams::new(4, 257, 64).validate().is_ok());
        assert!(LweParams::new(4, 257, 65).validate().is_err());

        // q = 256: q/4 = 64 exactly, so 64 is rejected
        assert!(LweParams::new(4, 256, 63).validate().is_ok());
        assert!(LweParams::new(4, 256, 64).validate().is_err());

        assert!(LweParams::new(4, 257, 0).validate().is_err());
    }

    #[test]
    fn test_gaussian_sigma_checked() {
        assert!(LweParams::toy().with_gaussian_noise(2.0).validate().is_ok());
        assert!(LweParams::toy().with_gaussian_noise(0.0).validate().is_err());
        assert!(LweParams::toy()
            .with_gaussian_noise(f64::NAN)
            .validate()
            .is_err());
        // 2σ² underflows to zero
        assert!(LweParams::toy()
            .with_gaussian_noise(1e-200)
            .validate()
            .is_err());
        // 2σ² overflows to infinity
        assert!(LweParams::toy()
            .with_gaussian_noise(1e200)
            .validate()
            .is_err());
    }
}
