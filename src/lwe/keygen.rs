//! Key generation

use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use super::types::{KeyPair, PublicKey, SecretKey};
use crate::error::Result;
use crate::math::sampling::{uniform_matrix, uniform_vec};
use crate::math::{ModQ, NoiseSampler};
use crate::params::LweParams;

/// Generate a key pair with uniform noise in [-noise_bound, noise_bound]
///
/// Fails with `InvalidParameter` when n < 1, q < 2, noise_bound = 0 or
/// noise_bound >= q/4.
pub fn generate_keys<R: RngCore + CryptoRng>(
    n: usize,
    q: u64,
    noise_bound: u64,
    rng: &mut R,
) -> Result<KeyPair> {
    generate_keys_with(&LweParams::new(n, q, noise_bound), rng)
}

/// Generate a key pair for a full parameter set
///
/// Samples s ← U(Z_q^n), A ← U(Z_q^{n×n}) and e from the configured noise
/// distribution, then sets b = A·s + e mod q. The noise vector is wiped
/// before returning.
pub fn generate_keys_with<R: RngCore + CryptoRng>(
    params: &LweParams,
    rng: &mut R,
) -> Result<KeyPair> {
    params.validate()?;
    let (n, q) = (params.n, params.q);

    let secret = SecretKey {
        coeffs: uniform_vec(n, q, rng),
        q,
    };
    let a = uniform_matrix(n, n, q, rng);
    let noise = NoiseSampler::new(params.noise_bound, params.noise);
    let e = Zeroizing::new(noise.sample_vec_mod(n, q, rng));

    let mut b = vec![0u64; n];
    a.mul_vec_into(&secret.coeffs, &mut b)?;
    for (bi, &ei) in b.iter_mut().zip(e.iter()) {
        *bi = ModQ::add(*bi, ei, q);
    }

    debug!(n, q, noise_bound = params.noise_bound, "generated LWE key pair");

    Ok(KeyPair {
        public: PublicKey {
            a,
            b,
            params: params.clone(),
        },
        secret,
    })
}

impl KeyPair {
    /// See [`generate_keys_with`]
    pub fn generate<R: RngCore + CryptoRng>(params: &LweParams, rng: &mut R) -> Result<Self> {
        generate_keys_with(params, rng)
    }
}
