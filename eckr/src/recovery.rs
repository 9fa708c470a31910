//! Public key recovery.

use crate::{
    CurveParameters, Error, Result, Signature,
    candidates::{XCandidate, lift_x, x_candidates},
    prehash::scalar_from_prehash,
    verify::verify_prehashed,
};
use alloc::vec::Vec;
use digest::Digest;
use ecdsa_core::RecoveryId;
use elliptic_curve::{
    AffinePoint, Field, FieldBytesSize, Group, ProjectivePoint, PublicKey, Scalar,
    sec1::{FromEncodedPoint, ModulusSize},
};
use primeorder::PrimeCurveParams;

/// Public key recovered from a signature, along with the [`RecoveryId`]
/// identifying the ephemeral point candidate it was derived from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Recovered<C: PrimeCurveParams> {
    public_key: PublicKey<C>,
    recovery_id: RecoveryId,
}

impl<C> Recovered<C>
where
    C: PrimeCurveParams,
{
    /// The recovered public key.
    pub fn public_key(&self) -> &PublicKey<C> {
        &self.public_key
    }

    /// Recovery ID of the candidate which produced this key.
    pub fn recovery_id(&self) -> RecoveryId {
        self.recovery_id
    }

    /// Consume this value, returning the public key.
    pub fn into_public_key(self) -> PublicKey<C> {
        self.public_key
    }
}

/// Recover the public keys which could have produced `signature` over the
/// message digest `prehash`.
///
/// Every returned key satisfies the ECDSA verification equation for
/// `(prehash, signature)`. Keys are ordered by the candidate which produced
/// them: the x-coordinate `r` before `r + n`, and for each x-coordinate the
/// even `y` before the odd one. This is the order of their [`RecoveryId`]s.
///
/// # Errors
///
/// - [`Error::InvalidSignature`] if no x-coordinate derived from `r` is a
///   field element
/// - [`Error::NonInvertibleScalar`] if `r` has no inverse modulo `n`
/// - [`Error::RecoveryFailed`] if every candidate was discarded
pub fn recover_public_keys<C>(
    curve: &CurveParameters<C>,
    prehash: &[u8],
    signature: &Signature<C>,
) -> Result<Vec<PublicKey<C>>>
where
    C: PrimeCurveParams,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C>,
{
    Ok(recover_with_ids(curve, prehash, signature)?
        .into_iter()
        .map(Recovered::into_public_key)
        .collect())
}

/// Hash `msg` with the digest `D`, then recover the public keys as
/// [`recover_public_keys`] does.
pub fn recover_public_keys_from_msg<C, D>(
    curve: &CurveParameters<C>,
    msg: &[u8],
    signature: &Signature<C>,
) -> Result<Vec<PublicKey<C>>>
where
    C: PrimeCurveParams,
    D: Digest,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C>,
{
    recover_public_keys(curve, &D::digest(msg), signature)
}

/// Recover the public keys which could have produced `signature`, each
/// tagged with its [`RecoveryId`].
///
/// Same ordering and errors as [`recover_public_keys`].
pub fn recover_with_ids<C>(
    curve: &CurveParameters<C>,
    prehash: &[u8],
    signature: &Signature<C>,
) -> Result<Vec<Recovered<C>>>
where
    C: PrimeCurveParams,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C>,
{
    let recovery = Recovery::new(curve, prehash, signature)?;
    let mut recovered: Vec<Recovered<C>> = Vec::with_capacity(4);

    for candidate in &recovery.x_candidates {
        for (public_key, recovery_id) in recovery.keys_for(candidate) {
            if recovered.iter().any(|k| k.public_key == public_key) {
                trace!("discarding duplicate public key");
                continue;
            }

            recovered.push(Recovered {
                public_key,
                recovery_id,
            });
        }
    }

    if recovered.is_empty() {
        debug!("every public key candidate was discarded");
        return Err(Error::RecoveryFailed);
    }

    Ok(recovered)
}

/// Recover the single public key selected by `recovery_id`.
///
/// Returns [`Error::RecoveryFailed`] if the selected candidate does not exist
/// or does not verify.
pub fn recover_public_key<C>(
    curve: &CurveParameters<C>,
    prehash: &[u8],
    signature: &Signature<C>,
    recovery_id: RecoveryId,
) -> Result<PublicKey<C>>
where
    C: PrimeCurveParams,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C>,
{
    let recovery = Recovery::new(curve, prehash, signature)?;

    recovery
        .x_candidates
        .iter()
        .filter(|candidate| candidate.is_x_reduced == recovery_id.is_x_reduced())
        .flat_map(|candidate| recovery.keys_for(candidate))
        .find_map(|(public_key, id)| (id == recovery_id).then_some(public_key))
        .ok_or(Error::RecoveryFailed)
}

/// Determine the [`RecoveryId`] under which `public_key` is recovered from
/// `signature`.
///
/// Returns [`Error::RecoveryFailed`] if no candidate yields `public_key`.
pub fn trial_recovery_id<C>(
    curve: &CurveParameters<C>,
    prehash: &[u8],
    signature: &Signature<C>,
    public_key: &PublicKey<C>,
) -> Result<RecoveryId>
where
    C: PrimeCurveParams,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C>,
{
    recover_with_ids(curve, prehash, signature)?
        .into_iter()
        .find(|recovered| &recovered.public_key == public_key)
        .map(|recovered| recovered.recovery_id)
        .ok_or(Error::RecoveryFailed)
}

/// Values shared by every candidate of a single recovery.
struct Recovery<'a, C: PrimeCurveParams> {
    curve: &'a CurveParameters<C>,
    signature: &'a Signature<C>,
    x_candidates: Vec<XCandidate<C::FieldElement>>,
    z: Scalar<C>,
    r_inv: Scalar<C>,
}

impl<'a, C> Recovery<'a, C>
where
    C: PrimeCurveParams,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C>,
{
    fn new(
        curve: &'a CurveParameters<C>,
        prehash: &[u8],
        signature: &'a Signature<C>,
    ) -> Result<Self> {
        let x_candidates = x_candidates::<C>(signature.r())?;
        let r_inv = Option::<Scalar<C>>::from(<Scalar<C> as Field>::invert(signature.r()))
            .ok_or(Error::NonInvertibleScalar)?;

        Ok(Self {
            curve,
            signature,
            x_candidates,
            z: scalar_from_prehash::<C>(prehash),
            r_inv,
        })
    }

    /// Public keys derived from each point `R` with the given x-coordinate
    /// which pass verification, in recovery ID order.
    fn keys_for(&self, candidate: &XCandidate<C::FieldElement>) -> Vec<(PublicKey<C>, RecoveryId)> {
        lift_x(self.curve, &candidate.x)
            .into_iter()
            .filter_map(|(big_r, is_y_odd)| {
                let public_key = self.derive(&big_r)?;
                Some((public_key, RecoveryId::new(is_y_odd, candidate.is_x_reduced)))
            })
            .collect()
    }

    /// Compute `Q = r⁻¹·(s·R - z·G)`, rejecting the identity and any key
    /// which does not verify.
    #[allow(non_snake_case)]
    fn derive(&self, R: &AffinePoint<C>) -> Option<PublicKey<C>> {
        let s = *self.signature.s();
        let G = self.curve.generator_point();
        let Q = (ProjectivePoint::<C>::from(*R) * s - G * self.z) * self.r_inv;

        if bool::from(Q.is_identity()) {
            trace!("public key candidate is the identity");
            return None;
        }

        let Q = Q.to_affine();
        if !verify_prehashed(self.curve, &self.z, self.signature, &Q) {
            trace!("public key candidate failed verification");
            return None;
        }

        PublicKey::from_affine(Q).ok()
    }
}
