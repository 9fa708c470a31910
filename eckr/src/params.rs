//! Curve parameters supplied to the recovery engine.

use crate::{Error, Result, sqrt::SqrtStrategy};
use elliptic_curve::{Group, PrimeField, ProjectivePoint, Scalar};
use primeorder::PrimeCurveParams;

/// Validated parameters of a short Weierstrass curve `y² = x³ + a·x + b`
/// over the prime field `𝔽p`, with a base point `G` of prime order `n`.
///
/// The group law itself is provided by the curve type `C`; this value pins
/// down the equation coefficients and generator the recovery is performed
/// against, and caches the data needed to take square roots modulo `p`.
///
/// Constructed once and shared read-only between any number of recoveries.
#[derive(Clone, Debug)]
pub struct CurveParameters<C: PrimeCurveParams> {
    a: C::FieldElement,
    b: C::FieldElement,
    generator: (C::FieldElement, C::FieldElement),
    sqrt: SqrtStrategy<C::FieldElement>,
}

impl<C> CurveParameters<C>
where
    C: PrimeCurveParams,
{
    /// Parameters of the curve `C` as defined by its own constants.
    pub fn new() -> Result<Self> {
        Self::from_parts(C::EQUATION_A, C::EQUATION_B, C::GENERATOR)
    }

    /// Parameters from explicitly supplied coefficients and generator.
    ///
    /// Returns [`Error::InvalidCurveConfig`] unless the generator lies on the
    /// curve they describe and all of them agree with the arithmetic of `C`.
    pub fn from_parts(
        a: C::FieldElement,
        b: C::FieldElement,
        generator: (C::FieldElement, C::FieldElement),
    ) -> Result<Self> {
        if Scalar::<C>::NUM_BITS == 0 {
            return Err(Error::InvalidCurveConfig);
        }

        if a != C::EQUATION_A || b != C::EQUATION_B {
            debug!("curve coefficients disagree with the group law");
            return Err(Error::InvalidCurveConfig);
        }

        let (gx, gy) = generator;
        if !is_on_curve(&a, &b, &gx, &gy) {
            debug!("generator does not satisfy the curve equation");
            return Err(Error::InvalidCurveConfig);
        }

        if (gx, gy) != C::GENERATOR {
            debug!("generator disagrees with the group law");
            return Err(Error::InvalidCurveConfig);
        }

        Ok(Self {
            a,
            b,
            generator,
            sqrt: SqrtStrategy::new()?,
        })
    }

    /// Coefficient `a` in the curve equation.
    pub fn equation_a(&self) -> &C::FieldElement {
        &self.a
    }

    /// Coefficient `b` in the curve equation.
    pub fn equation_b(&self) -> &C::FieldElement {
        &self.b
    }

    /// Affine coordinates of the generator `G`.
    pub fn generator(&self) -> &(C::FieldElement, C::FieldElement) {
        &self.generator
    }

    /// Bit length of the group order `n`.
    pub fn order_bits(&self) -> u32 {
        Scalar::<C>::NUM_BITS
    }

    /// Is `p ≡ 3 (mod 4)`, allowing square roots with a single exponentiation?
    pub fn is_three_mod_four(&self) -> bool {
        self.sqrt.is_three_mod_four()
    }

    /// Evaluate the right hand side of the curve equation, `x³ + a·x + b`.
    pub fn rhs(&self, x: &C::FieldElement) -> C::FieldElement {
        rhs(&self.a, &self.b, x)
    }

    /// Square root of `w` modulo `p`, or `None` if `w` is not a quadratic
    /// residue.
    pub fn sqrt(&self, w: &C::FieldElement) -> Option<C::FieldElement> {
        self.sqrt.sqrt(w)
    }

    /// The generator as a group element.
    pub(crate) fn generator_point(&self) -> ProjectivePoint<C> {
        ProjectivePoint::<C>::generator()
    }
}

fn rhs<F: PrimeField>(a: &F, b: &F, x: &F) -> F {
    (x.square() + a) * x + b
}

fn is_on_curve<F: PrimeField>(a: &F, b: &F, x: &F, y: &F) -> bool {
    y.square() == rhs(a, b, x)
}
