//! Public key recovery on NIST P-384.

use eckr::{CurveParameters, PublicKey, Signature, recover_public_keys, recover_with_ids};
use p384::{
    NistP384,
    ecdsa::{SigningKey, signature::hazmat::PrehashSigner},
};
use proptest::prelude::*;
use sha2::{Digest, Sha256, Sha384};

fn curve() -> CurveParameters<NistP384> {
    CurveParameters::new().unwrap()
}

fn signing_key() -> impl Strategy<Value = SigningKey> {
    any::<[u8; 48]>().prop_filter_map("invalid signing key", |bytes| {
        SigningKey::from_bytes(&bytes.into()).ok()
    })
}

#[test]
fn curve_parameters() {
    let curve = curve();
    assert_eq!(curve.order_bits(), 384);
    assert!(curve.is_three_mod_four());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn recovers_signing_key(sk in signing_key(), msg in any::<[u8; 16]>()) {
        let digest = Sha384::digest(msg);
        let (sig, recid) = sk.sign_prehash_recoverable(&digest).unwrap();
        let signature = Signature::<NistP384>::try_from(&sig).unwrap();
        let expected = PublicKey::from_affine(*sk.verifying_key().as_affine()).unwrap();

        let recovered = recover_with_ids(&curve(), &digest, &signature).unwrap();
        let found = recovered.iter().find(|r| r.public_key() == &expected);
        prop_assert!(found.is_some());
        prop_assert_eq!(found.unwrap().recovery_id(), recid);
    }

    /// Digests shorter than the order are zero-extended on the left.
    #[test]
    fn recovers_with_short_digest(sk in signing_key(), msg in any::<[u8; 16]>()) {
        let digest = Sha256::digest(msg);
        let sig: p384::ecdsa::Signature = sk.sign_prehash(&digest).unwrap();
        let signature = Signature::<NistP384>::try_from(sig).unwrap();

        let keys = recover_public_keys(&curve(), &digest, &signature).unwrap();
        prop_assert!(keys.iter().any(|key| key.as_affine() == sk.verifying_key().as_affine()));
    }
}
