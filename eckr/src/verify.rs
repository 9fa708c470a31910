//! Replay of the ECDSA verification equation for recovered candidates.

use crate::{CurveParameters, Signature};
use elliptic_curve::{
    AffinePoint, Field, Group, ProjectivePoint, Scalar,
    ops::{LinearCombination, Reduce},
    point::AffineCoordinates,
};
use primeorder::PrimeCurveParams;

/// Check the ECDSA verification equation for the public key `q`:
///
/// ```text
/// w  = s⁻¹ mod n
/// u₁ = z·w mod n
/// u₂ = r·w mod n
/// P  = u₁·G + u₂·Q
/// ```
///
/// and accept iff `P` is not the identity and `P.x mod n = r`.
pub(crate) fn verify_prehashed<C>(
    curve: &CurveParameters<C>,
    z: &Scalar<C>,
    signature: &Signature<C>,
    q: &AffinePoint<C>,
) -> bool
where
    C: PrimeCurveParams,
{
    let (r, s) = (signature.r(), signature.s());
    let Some(w) = Option::<Scalar<C>>::from(<Scalar<C> as Field>::invert(s)) else {
        return false;
    };

    let u1 = *z * w;
    let u2 = *r * w;
    let p = ProjectivePoint::<C>::lincomb(
        &curve.generator_point(),
        &u1,
        &ProjectivePoint::<C>::from(*q),
        &u2,
    );

    if bool::from(p.is_identity()) {
        return false;
    }

    let x = p.to_affine().x();
    <Scalar<C> as Reduce<C::Uint>>::reduce_bytes(&x) == *r
}
