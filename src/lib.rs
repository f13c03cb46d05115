//! lwe-core: a small Learning-With-Errors bit encryption core
//!
//! Key generation, encryption of single bits, and decryption over Z_q,
//! following the textbook LWE construction:
//!
//! - keys: b = A·s + e mod q with A uniform and e small
//! - encryption: u = Aᵀ·r, c = b·r + m·⌊q/2⌋ mod q for an ephemeral ternary r
//! - decryption: midpoint test on c − s·u
//!
//! **This is a didactic primitive, not a post-quantum scheme.** The parameter
//! presets are toys chosen to make the correctness bound easy to see; none
//! comes with a security estimate.
//!
//! Randomness is always injected: every sampling operation borrows a caller
//! supplied `RngCore + CryptoRng`, and the crate holds no generator of its
//! own.
//!
//! # Example
//!
//! ```
//! use lwe_core::{decrypt, encrypt, generate_keys};
//!
//! let mut rng = rand::thread_rng();
//! let keys = generate_keys(4, 257, 8, &mut rng).unwrap();
//!
//! for bit in [0, 1] {
//!     let ct = encrypt(keys.public_key(), bit, 8, &mut rng).unwrap();
//!     assert_eq!(decrypt(keys.secret_key(), &ct).unwrap(), bit);
//! }
//! ```

pub mod analysis;
pub mod error;
pub mod lwe;
pub mod math;
pub mod params;

pub use analysis::{estimate_failure_rate, FailureReport};
pub use error::{LweError, Result};
pub use lwe::{
    decrypt, encrypt, generate_keys, generate_keys_with, Ciphertext, KeyPair, PublicKey, SecretKey,
};
pub use params::{LweParams, NoiseDistribution};
