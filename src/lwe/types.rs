//! LWE key and ciphertext types

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{invalid_param, Result};
use crate::math::Matrix;
use crate::params::{check_modulus, LweParams};

/// LWE secret key: s uniform in Z_q^n
///
/// The coefficients are wiped when the key is dropped and never appear in
/// `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    pub(crate) coeffs: Vec<u64>,
    pub(crate) q: u64,
}

impl SecretKey {
    /// Create a secret key from existing coefficients
    pub fn from_coeffs(coeffs: Vec<u64>, q: u64) -> Result<Self> {
        check_modulus(q)?;
        if let Some(&bad) = coeffs.iter().find(|&&x| x >= q) {
            return Err(invalid_param!(
                "secret coefficient {} is not reduced mod {}",
                bad,
                q
            ));
        }
        Ok(Self { coeffs, q })
    }

    /// Dimension n
    pub fn dim(&self) -> usize {
        self.coeffs.len()
    }

    pub fn modulus(&self) -> u64 {
        self.q
    }

    /// Secret coefficients in [0, q)
    pub fn coeffs(&self) -> &[u64] {
        &self.coeffs
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("dim", &self.coeffs.len())
            .field("q", &self.q)
            .finish_non_exhaustive()
    }
}

/// LWE public key: (A, b) with b = A·s + e mod q
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicKey {
    /// Uniform n×n matrix
    pub(crate) a: Matrix,
    /// A·s + e mod q
    pub(crate) b: Vec<u64>,
    /// Parameters the key was generated under
    pub(crate) params: LweParams,
}

impl PublicKey {
    /// Assemble a public key from its parts, checking consistency
    pub fn from_parts(a: Matrix, b: Vec<u64>, params: LweParams) -> Result<Self> {
        let pk = Self { a, b, params };
        pk.validate()?;
        Ok(pk)
    }

    /// Check the parameters, then that A is n×n over Z_q and b has n
    /// reduced entries
    pub fn validate(&self) -> Result<()> {
        self.params.validate()?;
        let n = self.params.n;
        let q = self.params.q;

        if self.a.modulus() != q {
            return Err(invalid_param!(
                "public matrix modulus {} differs from q = {}",
                self.a.modulus(),
                q
            ));
        }
        if self.a.rows() != n || self.a.cols() != n {
            return Err(invalid_param!(
                "public matrix is {}x{}, expected {}x{}",
                self.a.rows(),
                self.a.cols(),
                n,
                n
            ));
        }
        if self.b.len() != n {
            return Err(invalid_param!("b has length {}, expected {}", self.b.len(), n));
        }
        self.a.validate().map_err(|e| invalid_param!("public matrix: {}", e))?;
        if let Some(&bad) = self.b.iter().find(|&&x| x >= q) {
            return Err(invalid_param!("b entry {} is not reduced mod {}", bad, q));
        }
        Ok(())
    }

    /// Dimension n
    pub fn dim(&self) -> usize {
        self.params.n
    }

    pub fn modulus(&self) -> u64 {
        self.params.q
    }

    pub fn params(&self) -> &LweParams {
        &self.params
    }

    pub fn matrix(&self) -> &Matrix {
        &self.a
    }

    pub fn b(&self) -> &[u64] {
        &self.b
    }
}

/// Key pair produced by one key-generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyPair {
    pub(crate) public: PublicKey,
    pub(crate) secret: SecretKey,
}

impl KeyPair {
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.secret
    }

    pub fn params(&self) -> &LweParams {
        &self.public.params
    }

    /// Split into (secret key, public key)
    pub fn into_parts(self) -> (SecretKey, PublicKey) {
        (self.secret, self.public)
    }
}

/// LWE ciphertext: (u, c) with u = Aᵀ·r and c = b·r + m·⌊q/2⌋ mod q
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ciphertext {
    /// Aᵀ·r mod q
    pub(crate) u: Vec<u64>,
    /// b·r + m·⌊q/2⌋ mod q
    pub(crate) c: u64,
    /// Ciphertext modulus
    pub(crate) q: u64,
}

impl Ciphertext {
    /// Create a ciphertext from raw components
    pub fn from_parts(u: Vec<u64>, c: u64, q: u64) -> Self {
        Self { u, c, q }
    }

    pub fn u(&self) -> &[u64] {
        &self.u
    }

    pub fn c(&self) -> u64 {
        self.c
    }

    pub fn modulus(&self) -> u64 {
        self.q
    }

    /// Length of u
    pub fn dim(&self) -> usize {
        self.u.len()
    }
}
