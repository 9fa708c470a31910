//! ECDSA signature components.

use crate::{Error, Result};
use core::fmt::{self, Debug};
use elliptic_curve::{
    CurveArithmetic, Field, FieldBytes, PrimeCurve, PrimeField, Scalar, generic_array::ArrayLength,
};

/// ECDSA signature `(r, s)` with both components in `[1, n - 1]`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Signature<C: CurveArithmetic> {
    r: Scalar<C>,
    s: Scalar<C>,
}

impl<C> Signature<C>
where
    C: CurveArithmetic,
{
    /// Parse a signature from the big endian encodings of `r` and `s`.
    ///
    /// Returns [`Error::InvalidSignature`] if either component is zero or is
    /// not less than the order of the curve.
    pub fn from_scalars(r: impl Into<FieldBytes<C>>, s: impl Into<FieldBytes<C>>) -> Result<Self> {
        Ok(Self {
            r: parse_component::<C>(r.into())?,
            s: parse_component::<C>(s.into())?,
        })
    }

    /// Parse a signature from the concatenation `r ‖ s` of two big endian
    /// integers, each the size of a field element.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let field_len = FieldBytes::<C>::default().len();
        if bytes.len() != field_len * 2 {
            return Err(Error::InvalidSignature);
        }

        let (r, s) = bytes.split_at(field_len);
        Self::from_scalars(
            FieldBytes::<C>::clone_from_slice(r),
            FieldBytes::<C>::clone_from_slice(s),
        )
    }

    /// The `r` component.
    pub fn r(&self) -> &Scalar<C> {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &Scalar<C> {
        &self.s
    }

    /// Big endian encodings of `r` and `s`.
    pub fn split_bytes(&self) -> (FieldBytes<C>, FieldBytes<C>) {
        (self.r.to_repr(), self.s.to_repr())
    }
}

fn parse_component<C: CurveArithmetic>(bytes: FieldBytes<C>) -> Result<Scalar<C>> {
    let scalar = Option::<Scalar<C>>::from(Scalar::<C>::from_repr(bytes))
        .ok_or(Error::InvalidSignature)?;

    if bool::from(scalar.is_zero()) {
        return Err(Error::InvalidSignature);
    }

    Ok(scalar)
}

impl<C> Debug for Signature<C>
where
    C: CurveArithmetic,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("r", &self.r)
            .field("s", &self.s)
            .finish()
    }
}

impl<C> TryFrom<&ecdsa_core::Signature<C>> for Signature<C>
where
    C: PrimeCurve + CurveArithmetic,
    ecdsa_core::SignatureSize<C>: ArrayLength<u8>,
{
    type Error = Error;

    fn try_from(signature: &ecdsa_core::Signature<C>) -> Result<Self> {
        let (r, s) = signature.split_bytes();
        Self::from_scalars(r, s)
    }
}

impl<C> TryFrom<ecdsa_core::Signature<C>> for Signature<C>
where
    C: PrimeCurve + CurveArithmetic,
    ecdsa_core::SignatureSize<C>: ArrayLength<u8>,
{
    type Error = Error;

    fn try_from(signature: ecdsa_core::Signature<C>) -> Result<Self> {
        Self::try_from(&signature)
    }
}
