//! Arithmetic in Z_q on canonical representatives
//!
//! Every operand is expected in `[0, q)` and every result lands there too.
//! Addition and subtraction use carry/borrow flags and multiplication widens
//! to `u128`, so any `u64` modulus works.

/// Stateless helpers over Z_q
pub struct ModQ;

impl ModQ {
    /// a + b mod q
    #[inline]
    pub fn add(a: u64, b: u64, q: u64) -> u64 {
        let (sum, carry) = a.overflowing_add(b);
        if carry || sum >= q {
            sum.wrapping_sub(q)
        } else {
            sum
        }
    }

    /// a − b mod q
    #[inline]
    pub fn sub(a: u64, b: u64, q: u64) -> u64 {
        let (diff, borrow) = a.overflowing_sub(b);
        if borrow {
            diff.wrapping_add(q)
        } else {
            diff
        }
    }

    /// a·b mod q
    #[inline]
    pub fn mul(a: u64, b: u64, q: u64) -> u64 {
        (u128::from(a) * u128::from(b) % u128::from(q)) as u64
    }

    /// −a mod q
    #[inline]
    pub fn negate(a: u64, q: u64) -> u64 {
        Self::sub(0, a, q)
    }

    /// Convert a signed integer to its representation in Z_q
    #[inline]
    pub fn from_signed(val: i64, q: u64) -> u64 {
        let abs = val.unsigned_abs() % q;
        if val >= 0 {
            abs
        } else {
            Self::negate(abs, q)
        }
    }

    /// Centred lift into (−q/2, q/2]
    #[inline]
    pub fn to_signed(val: u64, q: u64) -> i64 {
        if val > q / 2 {
            -((q - val) as i64)
        } else {
            val as i64
        }
    }

    /// Canonical representative of an arbitrary `u64`
    #[inline]
    pub fn reduce(a: u64, q: u64) -> u64 {
        a % q
    }

    /// Inner product of two equal-length vectors modulo q
    #[inline]
    pub fn inner_product(a: &[u64], b: &[u64], q: u64) -> u64 {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b.iter())
            .fold(0u64, |acc, (&x, &y)| Self::add(acc, Self::mul(x, y, q), q))
    }
}
