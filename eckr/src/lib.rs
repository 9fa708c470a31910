#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

//! ## Usage
//!
//! ```
//! use eckr::{CurveParameters, Signature, recover_public_keys};
//! use hex_literal::hex;
//! use p256::NistP256;
//! use sha2::{Digest, Sha256};
//!
//! let curve = CurveParameters::<NistP256>::new()?;
//! let digest = Sha256::digest(b"hello world");
//! let signature = Signature::<NistP256>::from_scalars(
//!     hex!("350b1572ff1b72831383c1d7c15c5aba106d62af007551d22bd313f25b1dfba8"),
//!     hex!("bf58baa28d760df87db5e069bd2dde2080d4dbd03cd76421bdcd1cc58c82ae69"),
//! )?;
//!
//! let keys = recover_public_keys(&curve, &digest, &signature)?;
//! assert_eq!(keys.len(), 2);
//! # Ok::<(), eckr::Error>(())
//! ```

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

mod candidates;
mod error;
mod params;
mod prehash;
mod recovery;
mod signature;
mod sqrt;
mod verify;

pub use crate::{
    error::{Error, Result},
    params::CurveParameters,
    prehash::{bits2int, scalar_from_prehash},
    recovery::{
        Recovered, recover_public_key, recover_public_keys, recover_public_keys_from_msg,
        recover_with_ids, trial_recovery_id,
    },
    signature::Signature,
};
pub use ecdsa_core::RecoveryId;
pub use elliptic_curve::{self, PublicKey};
pub use primeorder::{self, PrimeCurveParams};
