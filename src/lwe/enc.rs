//! LWE encryption and decryption of single bits

use rand::{CryptoRng, RngCore};
use tracing::trace;
use zeroize::Zeroizing;

use super::types::{Ciphertext, PublicKey, SecretKey};
use crate::error::{ensure_dim, invalid_param, Result};
use crate::math::sampling::ternary_vec;
use crate::math::ModQ;
use crate::params::{check_modulus, check_noise_bound};

/// Encrypt one bit under a public key
///
/// Samples an ephemeral r ∈ {-1, 0, 1}^n and computes
///
/// ```text
/// u = Aᵀ·r mod q
/// c = b·r + m·⌊q/2⌋ mod q
/// ```
///
/// The decryption noise is e·r, bounded by n·noise_bound; when that stays
/// below q/4 the bit is always recovered.
///
/// Fails with `InvalidParameter` when `message_bit` is not 0 or 1, when
/// `noise_bound` is 0 or at least q/4, or when the public key is
/// inconsistent.
pub fn encrypt<R: RngCore + CryptoRng>(
    public_key: &PublicKey,
    message_bit: u8,
    noise_bound: u64,
    rng: &mut R,
) -> Result<Ciphertext> {
    if message_bit > 1 {
        return Err(invalid_param!("message_bit must be 0 or 1, got {}", message_bit));
    }
    public_key.validate()?;
    let n = public_key.dim();
    let q = public_key.modulus();
    check_noise_bound(noise_bound, q)?;

    let r = Zeroizing::new(ternary_vec(n, q, rng));

    let mut u = vec![0u64; n];
    public_key.a.transpose_mul_vec_into(&r, &mut u)?;

    let b_r = ModQ::inner_product(&public_key.b, &r, q);
    let offset = ModQ::mul(message_bit as u64, public_key.params.half_q(), q);
    let c = ModQ::add(b_r, offset, q);

    trace!(n, q, "encrypted bit");
    Ok(Ciphertext { u, c, q })
}

/// Decrypt a ciphertext to the bit it encodes
///
/// Computes v = c − s·u mod q, lifts v into (−q/2, q/2] and returns 0 when
/// |v| < q/4, 1 otherwise. If the accumulated noise reaches q/4 the wrong bit
/// comes back; that is not reported as an error.
///
/// Fails with `DimensionMismatch` when |u| ≠ |s|, and with
/// `InvalidParameter` when the ciphertext modulus differs from the key's.
pub fn decrypt(secret_key: &SecretKey, ciphertext: &Ciphertext) -> Result<u8> {
    ensure_dim(secret_key.dim(), ciphertext.dim())?;
    let q = secret_key.q;
    check_modulus(q)?;
    if ciphertext.q != q {
        return Err(invalid_param!(
            "ciphertext modulus {} differs from key modulus {}",
            ciphertext.q,
            q
        ));
    }

    let s_u = ModQ::inner_product(&secret_key.coeffs, &ciphertext.u, q);
    let v = ModQ::sub(ModQ::reduce(ciphertext.c, q), s_u, q);

    trace!(n = secret_key.dim(), q, "decrypted bit");
    Ok(decode_bit(v, q))
}

/// Midpoint rule: 0 if the centered |v| < q/4, else 1
fn decode_bit(v: u64, q: u64) -> u8 {
    let magnitude = ModQ::to_signed(v, q).unsigned_abs() as u128;
    if 4 * magnitude < q as u128 {
        0
    } else {
        1
    }
}

impl PublicKey {
    /// Encrypt under this key's own noise bound
    pub fn encrypt<R: RngCore + CryptoRng>(
        &self,
        message_bit: u8,
        rng: &mut R,
    ) -> Result<Ciphertext> {
        encrypt(self, message_bit, self.params.noise_bound, rng)
    }
}

impl SecretKey {
    /// See [`decrypt`]
    pub fn decrypt(&self, ciphertext: &Ciphertext) -> Result<u8> {
        decrypt(self, ciphertext)
    }
}

impl Ciphertext {
    /// Homomorphic addition
    ///
    /// Since 2·⌊q/2⌋ ≡ 0 or −1 mod q, the sum decrypts to m1 XOR m2 as long
    /// as the combined noise stays below q/4.
    pub fn add(&self, other: &Ciphertext) -> Result<Ciphertext> {
        ensure_dim(self.u.len(), other.u.len())?;
        if self.q != other.q {
            return Err(invalid_param!(
                "cannot add ciphertexts mod {} and mod {}",
                self.q,
                other.q
            ));
        }
        check_modulus(self.q)?;

        let q = self.q;
        let u = self
            .u
            .iter()
            .zip(other.u.iter())
            .map(|(&x, &y)| ModQ::add(ModQ::reduce(x, q), ModQ::reduce(y, q), q))
            .collect();
        let c = ModQ::add(ModQ::reduce(self.c, q), ModQ::reduce(other.c, q), q);

        Ok(Self { u, c, q })
    }
}
