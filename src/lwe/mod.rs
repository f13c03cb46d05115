//! LWE (Learning With Errors) bit encryption.
//!
//! # Overview
//!
//! Key generation samples a secret s ∈ Z_q^n, a public matrix A ∈ Z_q^{n×n}
//! and a small noise vector e, and publishes
//!
//! ```text
//! b = A·s + e mod q
//! ```
//!
//! A bit m is encrypted with an ephemeral ternary r as
//!
//! ```text
//! u = Aᵀ·r,  c = b·r + m·⌊q/2⌋  (mod q)
//! ```
//!
//! and decrypted by testing whether c − s·u = e·r + m·⌊q/2⌋ lies nearer to 0
//! or to q/2.
//!
//! # Key Types
//!
//! - [`KeyPair`]: the output of [`generate_keys`]
//! - [`SecretKey`]: s, wiped on drop
//! - [`PublicKey`]: (A, b) plus the parameters it was generated under
//! - [`Ciphertext`]: (u, c), supporting homomorphic addition (XOR)
//!
//! # Example
//!
//! ```
//! use lwe_core::lwe::{decrypt, encrypt, generate_keys};
//!
//! let mut rng = rand::thread_rng();
//! let keys = generate_keys(4, 257, 8, &mut rng).unwrap();
//! let ct = encrypt(keys.public_key(), 1, 8, &mut rng).unwrap();
//! assert_eq!(decrypt(keys.secret_key(), &ct).unwrap(), 1);
//! ```

mod enc;
mod keygen;
mod types;

pub use enc::{decrypt, encrypt};
pub use keygen::{generate_keys, generate_keys_with};
pub use types::{Ciphertext, KeyPair, PublicKey, SecretKey};
