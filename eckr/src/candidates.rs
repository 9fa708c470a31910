//! Candidate ephemeral points `R` whose x-coordinate reduces to `r`.

use crate::{CurveParameters, Error, Result};
use alloc::vec::Vec;
use elliptic_curve::{
    AffinePoint, Field, FieldBytesEncoding, FieldBytesSize, PrimeField, Scalar,
    bigint::CheckedAdd,
    sec1::{EncodedPoint, FromEncodedPoint, ModulusSize},
};
use primeorder::PrimeCurveParams;

/// Affine x-coordinate which may have been reduced modulo `n` to produce `r`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct XCandidate<F> {
    /// The x-coordinate.
    pub(crate) x: F,

    /// Is this `r + n` rather than `r` itself?
    pub(crate) is_x_reduced: bool,
}

/// Enumerate the x-coordinates `r + k·n < p`, in increasing order.
///
/// Since `r < n` and Hasse's bound keeps `n` within `2·√p` of `p`, only
/// `k ∈ {0, 1}` can ever yield a field element.
///
/// Returns [`Error::InvalidSignature`] if neither value is less than `p`.
pub(crate) fn x_candidates<C>(r: &Scalar<C>) -> Result<Vec<XCandidate<C::FieldElement>>>
where
    C: PrimeCurveParams,
{
    let r_bytes = r.to_repr();
    let mut candidates = Vec::with_capacity(2);

    if let Some(x) = Option::<C::FieldElement>::from(C::FieldElement::from_repr(r_bytes.clone())) {
        candidates.push(XCandidate {
            x,
            is_x_reduced: false,
        });
    }

    let r_uint = C::Uint::decode_field_bytes(&r_bytes);
    if let Some(restored) = Option::<C::Uint>::from(r_uint.checked_add(&C::ORDER)) {
        let x_bytes = restored.encode_field_bytes();

        // `r + n` must also fit in the encoding of a field element
        if C::Uint::decode_field_bytes(&x_bytes) == restored {
            if let Some(x) = Option::<C::FieldElement>::from(C::FieldElement::from_repr(x_bytes)) {
                candidates.push(XCandidate {
                    x,
                    is_x_reduced: true,
                });
            }
        }
    }

    if candidates.is_empty() {
        debug!("no x-coordinate candidate is less than the field modulus");
        return Err(Error::InvalidSignature);
    }

    Ok(candidates)
}

/// Reconstruct the points `(x, y)` and `(x, p - y)` lying on the curve.
///
/// The root with an even `y` comes first; each point is paired with the
/// parity of its y-coordinate. Returns no points if `x³ + a·x + b` is not a
/// quadratic residue, and a single point if its square root is zero.
pub(crate) fn lift_x<C>(
    curve: &CurveParameters<C>,
    x: &C::FieldElement,
) -> Vec<(AffinePoint<C>, bool)>
where
    C: PrimeCurveParams,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C>,
{
    let w = curve.rhs(x);
    let Some(y) = curve.sqrt(&w) else {
        trace!("x-coordinate candidate is not on the curve");
        return Vec::new();
    };

    let (even, odd) = if bool::from(y.is_odd()) {
        (-y, y)
    } else {
        (y, -y)
    };

    let roots = [(even, false), (odd, true)];
    let count = if bool::from(y.is_zero()) { 1 } else { 2 };

    roots[..count]
        .iter()
        .filter_map(|(y, is_y_odd)| {
            let point = point_from_coordinates::<C>(x, y)?;
            Some((point, *is_y_odd))
        })
        .collect()
}

fn point_from_coordinates<C>(x: &C::FieldElement, y: &C::FieldElement) -> Option<AffinePoint<C>>
where
    C: PrimeCurveParams,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C>,
{
    let encoded = EncodedPoint::<C>::from_affine_coordinates(&x.to_repr(), &y.to_repr(), false);
    AffinePoint::<C>::from_encoded_point(&encoded).into()
}
