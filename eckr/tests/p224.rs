//! Public key recovery on NIST P-224, where `p ≡ 1 (mod 4)` requires
//! Tonelli-Shanks to reconstruct the ephemeral point.

use eckr::{CurveParameters, PublicKey, Signature, recover_public_keys, trial_recovery_id};
use hex_literal::hex;
use p224::{NistP224, ecdsa::SigningKey};
use proptest::prelude::*;
use sha2::{Digest, Sha224};

fn curve() -> CurveParameters<NistP224> {
    CurveParameters::new().unwrap()
}

fn signing_key() -> impl Strategy<Value = SigningKey> {
    any::<[u8; 28]>().prop_filter_map("invalid signing key", |bytes| {
        SigningKey::from_bytes(&bytes.into()).ok()
    })
}

#[test]
fn curve_parameters() {
    let curve = curve();
    assert_eq!(curve.order_bits(), 224);
    assert!(!curve.is_three_mod_four());
}

#[test]
fn fixed_key() {
    let sk = SigningKey::from_bytes(
        &hex!("d4c5b1ad3b1bc1bd0d8e7a4e4d0e4c5b1a2f3e4d5c6b7a8998a7b6c5").into(),
    )
    .unwrap();
    let digest = Sha224::digest(b"hello world");
    let (sig, recid) = sk.sign_prehash_recoverable(&digest).unwrap();
    let signature = Signature::<NistP224>::try_from(&sig).unwrap();
    let expected = PublicKey::from_affine(*sk.verifying_key().as_affine()).unwrap();

    let keys = recover_public_keys(&curve(), &digest, &signature).unwrap();
    assert_eq!(keys.len(), 2);
    assert_eq!(keys[usize::from(recid.to_byte())], expected);
    assert_eq!(
        trial_recovery_id(&curve(), &digest, &signature, &expected).unwrap(),
        recid
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn recovers_signing_key(sk in signing_key(), msg in any::<[u8; 16]>()) {
        let digest = Sha224::digest(msg);
        let (sig, recid) = sk.sign_prehash_recoverable(&digest).unwrap();
        let signature = Signature::<NistP224>::try_from(&sig).unwrap();
        let expected = PublicKey::from_affine(*sk.verifying_key().as_affine()).unwrap();

        let keys = recover_public_keys(&curve(), &digest, &signature).unwrap();
        prop_assert_eq!(keys.len(), 2);
        prop_assert_eq!(&keys[usize::from(recid.to_byte())], &expected);
    }
}
