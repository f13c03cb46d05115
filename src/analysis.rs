//! Empirical decryption-failure estimation
//!
//! Decryption fails whenever |e·r| reaches q/4. For parameters where
//! [`LweParams::is_always_correct`] is false this happens with some small
//! probability, and the only practical way to see how small is to count.

use rand::{CryptoRng, Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{invalid_param, Result};
use crate::lwe::{decrypt, encrypt, generate_keys_with};
use crate::params::LweParams;

/// Outcome of a failure-rate run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReport {
    pub trials: usize,
    pub failures: usize,
}

impl FailureReport {
    /// Fraction of trials that decrypted to the wrong bit
    pub fn rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.failures as f64 / self.trials as f64
        }
    }

    /// Fraction of trials that decrypted correctly
    pub fn success_rate(&self) -> f64 {
        1.0 - self.rate()
    }
}

/// Run `trials` independent round trips, each with a fresh key pair and a
/// random bit, and count wrong decryptions
pub fn estimate_failure_rate<R: RngCore + CryptoRng>(
    params: &LweParams,
    trials: usize,
    rng: &mut R,
) -> Result<FailureReport> {
    if trials == 0 {
        return Err(invalid_param!("trials must be positive"));
    }
    params.validate()?;

    let mut failures = 0;
    for _ in 0..trials {
        let keys = generate_keys_with(params, rng)?;
        let bit: u8 = rng.gen_range(0..=1);
        let ct = encrypt(keys.public_key(), bit, params.noise_bound, rng)?;
        if decrypt(keys.secret_key(), &ct)? != bit {
            failures += 1;
        }
    }

    let report = FailureReport { trials, failures };
    debug!(
        n = params.n,
        q = params.q,
        noise_bound = params.noise_bound,
        trials,
        failures,
        "estimated decryption failure rate"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_toy_params_never_fail() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let report = estimate_failure_rate(&LweParams::toy(), 500, &mut rng).unwrap();
        assert_eq!(report.trials, 500);
        assert_eq!(report.failures, 0);
        assert_eq!(report.rate(), 0.0);
        assert_eq!(report.success_rate(), 1.0);
    }

    #[test]
    fn test_oversized_noise_fails_often() {
        // n·noise_bound = 64·64 far exceeds q/4, so e·r is close to uniform
        // mod q and about half of the decryptions come back wrong
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let params = LweParams::new(64, 257, 64);
        let report = estimate_failure_rate(&params, 400, &mut rng).unwrap();
        assert!(report.rate() > 0.2, "rate {} unexpectedly low", report.rate());
    }

    #[test]
    fn test_zero_trials_rejected() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        assert!(estimate_failure_rate(&LweParams::toy(), 0, &mut rng).is_err());
    }
}
