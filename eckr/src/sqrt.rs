//! Square roots in the base field.
//!
//! The exponents used here are derived at runtime from the field modulus, so
//! any prime field whose canonical representation is big endian is supported.

use crate::{Error, Result};
use alloc::vec::Vec;
use elliptic_curve::{Field, PrimeField};

/// Algorithm used to compute square roots modulo `p`.
#[derive(Clone, Debug)]
pub(crate) enum SqrtStrategy<F: PrimeField> {
    /// `p ≡ 3 (mod 4)`: a single exponentiation by `(p + 1) / 4`.
    ///
    /// Stores `(p - 1) >> 2`, since `w^((p + 1) / 4) = w · w^((p - 1) >> 2)`
    /// when `p ≡ 3 (mod 4)`.
    ThreeModFour { exp: Vec<u64> },

    /// General case: Tonelli-Shanks with `p - 1 = t · 2^s`, `t` odd.
    ///
    /// Stores `(t - 1) / 2 = (p - 1) >> (s + 1)` and a primitive `2^s`-th
    /// root of unity.
    TonelliShanks {
        s: u32,
        exp: Vec<u64>,
        root_of_unity: F,
    },
}

impl<F: PrimeField> SqrtStrategy<F> {
    /// Select the algorithm for the field `F`, validating the field constants
    /// it relies upon.
    pub(crate) fn new() -> Result<Self> {
        let p_minus_one = be_bytes_to_limbs((-F::ONE).to_repr().as_ref());
        let s = trailing_zeros(&p_minus_one);

        match s {
            // `p` is even, or `p - 1` is zero
            0 | u32::MAX => Err(Error::InvalidCurveConfig),
            1 => Ok(SqrtStrategy::ThreeModFour {
                exp: shr(&p_minus_one, 2),
            }),
            _ => {
                if s != F::S || !is_primitive_root(F::ROOT_OF_UNITY, s) {
                    return Err(Error::InvalidCurveConfig);
                }

                Ok(SqrtStrategy::TonelliShanks {
                    s,
                    exp: shr(&p_minus_one, s + 1),
                    root_of_unity: F::ROOT_OF_UNITY,
                })
            }
        }
    }

    /// Is the field modulus congruent to 3 modulo 4?
    pub(crate) fn is_three_mod_four(&self) -> bool {
        matches!(self, SqrtStrategy::ThreeModFour { .. })
    }

    /// Compute a square root of `w`, or `None` if `w` is a quadratic
    /// non-residue.
    ///
    /// Variable time: only ever applied to public values.
    pub(crate) fn sqrt(&self, w: &F) -> Option<F> {
        if bool::from(w.is_zero()) {
            return Some(F::ZERO);
        }

        let y = match self {
            SqrtStrategy::ThreeModFour { exp } => *w * w.pow_vartime(exp),
            SqrtStrategy::TonelliShanks {
                s,
                exp,
                root_of_unity,
            } => tonelli_shanks(w, *s, exp, *root_of_unity)?,
        };

        (y.square() == *w).then_some(y)
    }
}

#[allow(clippy::many_single_char_names)]
fn tonelli_shanks<F: PrimeField>(a: &F, s: u32, exp: &[u64], root_of_unity: F) -> Option<F> {
    let w = a.pow_vartime(exp);
    let mut x = *a * w;
    let mut b = x * w;
    let mut z = root_of_unity;
    let mut v = s;

    while b != F::ONE {
        // Least `k` such that `b^(2^k) = 1`
        let mut k = 0;
        let mut b2k = b;
        while b2k != F::ONE {
            b2k = b2k.square();
            k += 1;
            if k >= v {
                return None;
            }
        }

        let mut t = z;
        for _ in 0..(v - k - 1) {
            t = t.square();
        }

        z = t.square();
        b *= z;
        x *= t;
        v = k;
    }

    Some(x)
}

/// Does `root` have multiplicative order exactly `2^s`?
fn is_primitive_root<F: Field>(root: F, s: u32) -> bool {
    let mut t = root;
    for _ in 1..s {
        t = t.square();
    }
    t == -F::ONE
}

/// Convert a big endian byte string into little endian 64-bit limbs.
///
/// The modulus `p` is only reachable through the field element encoding, and
/// `pow_vartime` takes `u64` limbs regardless of the target's `Word` size, so
/// exponents are derived on limbs here rather than through `C::Uint`.
fn be_bytes_to_limbs(bytes: &[u8]) -> Vec<u64> {
    bytes
        .rchunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
        })
        .collect()
}

/// Number of trailing zero bits, or `u32::MAX` if every limb is zero.
fn trailing_zeros(limbs: &[u64]) -> u32 {
    let mut zeros = 0;
    for &limb in limbs {
        if limb != 0 {
            return zeros + limb.trailing_zeros();
        }
        zeros += 64;
    }
    u32::MAX
}

/// Shift little endian limbs right by `shift` bits.
fn shr(limbs: &[u64], shift: u32) -> Vec<u64> {
    let words = (shift / 64) as usize;
    let bits = shift % 64;

    (words..limbs.len())
        .map(|i| {
            let lo = limbs[i] >> bits;
            let hi = match limbs.get(i + 1) {
                Some(&next) if bits != 0 => next << (64 - bits),
                _ => 0,
            };
            lo | hi
        })
        .collect()
}
