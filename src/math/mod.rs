//! Arithmetic primitives for the LWE core.
//!
//! - **Modular arithmetic** over Z_q with `u128` intermediates
//! - **Flat matrices** over Z_q with allocation-free `A·x` and `Aᵀ·x`
//! - **Sampling** of uniform, ternary and bounded-noise values from an
//!   injected random source
//!
//! # Example
//!
//! ```
//! use lwe_core::math::{Matrix, ModQ};
//!
//! let a = Matrix::from_flat(2, 2, vec![1, 2, 3, 4], 257).unwrap();
//! assert_eq!(a.mul_vec(&[1, ModQ::from_signed(-1, 257)]).unwrap(), vec![256, 256]);
//! ```

pub mod matrix;
pub mod modular;
pub mod sampling;

pub use matrix::Matrix;
pub use modular::ModQ;
pub use sampling::NoiseSampler;
