//! # spx-xmss
//!
//! The XMSS subtree core of the SPHINCS+ (r3.1) stateless hash-based signature scheme: the
//! 32-byte hash address, the tweakable hash functions F, H and T_l in their SHA2 and SHAKE
//! instantiations, W-OTS+ one-time signatures, and the XMSS subtree built on top of them.
//!
//! The outer hypertree, FORS and the randomized message digest are not part of this crate; it
//! exposes what they consume:
//!
//! * [`xmss_node`]: the root of an aligned subtree,
//! * [`xmss_sign`]: W-OTS+ signature and authentication path of a leaf,
//! * [`xmss_pk_from_sig`]: the root reconstructed from such a signature.
//!
//! Every operation is generic over a [`ParameterSet`]; the 24 standard sets live in
//! [`sphincs_plus`]. Working memory is bounded by the subtree height and stays on the stack.
//!
//! ```rust
//! use spx_xmss::sphincs_plus::Sha2_128fSimple;
//! use spx_xmss::{xmss_node, xmss_pk_from_sig, xmss_sign, Adrs, ParameterSet};
//!
//! type P = Sha2_128fSimple;
//!
//! let sk_seed = [0u8; 16];
//! let pk_seed = [1u8; 16];
//! let msg = [2u8; 16];
//! let mut adrs = Adrs::new();
//! adrs.set_layer_addr(0);
//! adrs.set_tree_addr(0);
//!
//! let mut root = [0u8; 16];
//! xmss_node::<P>(&mut root, &sk_seed, 0, P::TREE_HEIGHT, &pk_seed, &adrs);
//!
//! let mut sig = vec![0u8; P::XMSS_BYTES];
//! xmss_sign::<P>(&mut sig, &msg, &sk_seed, 5, &pk_seed, &adrs);
//!
//! let mut recovered = [0u8; 16];
//! xmss_pk_from_sig::<P>(&mut recovered, 5, &sig, &msg, &pk_seed, &adrs);
//! assert_eq!(recovered, root);
//! ```
//!
//! ## Features
//!
//! * `sphincs_{sha2,shake}_{128,192,256}{s,f}`: choose [`SelectedParams`]. If several are
//!   enabled, the first in the order SHA2 before SHAKE, 128 before 256, s before f wins.
//! * `robust`: [`SelectedParams`] uses the robust construction.
//! * `parallel`: authentication paths are computed on the rayon thread pool.
//! * `serialization`: serde support for [`XmssSignature`] and [`XmssPublicKey`].

mod error;
mod utils;

pub mod hash;
pub mod params;
pub mod sphincs_plus;
pub mod types;
pub mod wots_plus;
pub mod xmss;

pub use crate::error::{Error, Result};
pub use crate::hash::TweakableHash;
pub use crate::params::ParameterSet;
pub use crate::types::{SecretSeed, XmssKeyPair, XmssPublicKey, XmssSignature};
pub use crate::wots_plus::adrs::{Adrs, AdrsType};
pub use crate::wots_plus::WotsPlus;
pub use crate::xmss::{xmss_node, xmss_pk_from_sig, xmss_sign, Xmss};

macro_rules! select_params {
    (@after [$($prev: literal),*]) => {};
    (@after [$($prev: literal),*] $feature: literal => $simple: ident, $robust: ident; $($rest: tt)*) => {
        /// The parameter set chosen by the `sphincs_*` and `robust` features.
        #[cfg(all(feature = $feature, not(feature = "robust"), not(any($(feature = $prev),*))))]
        pub type SelectedParams = sphincs_plus::$simple;

        /// The parameter set chosen by the `sphincs_*` and `robust` features.
        #[cfg(all(feature = $feature, feature = "robust", not(any($(feature = $prev),*))))]
        pub type SelectedParams = sphincs_plus::$robust;

        select_params!(@after [$($prev,)* $feature] $($rest)*);
    };
}

select_params!(@after []
    "sphincs_sha2_128s" => Sha2_128sSimple, Sha2_128sRobust;
    "sphincs_sha2_128f" => Sha2_128fSimple, Sha2_128fRobust;
    "sphincs_sha2_192s" => Sha2_192sSimple, Sha2_192sRobust;
    "sphincs_sha2_192f" => Sha2_192fSimple, Sha2_192fRobust;
    "sphincs_sha2_256s" => Sha2_256sSimple, Sha2_256sRobust;
    "sphincs_sha2_256f" => Sha2_256fSimple, Sha2_256fRobust;
    "sphincs_shake_128s" => Shake_128sSimple, Shake_128sRobust;
    "sphincs_shake_128f" => Shake_128fSimple, Shake_128fRobust;
    "sphincs_shake_192s" => Shake_192sSimple, Shake_192sRobust;
    "sphincs_shake_192f" => Shake_192fSimple, Shake_192fRobust;
    "sphincs_shake_256s" => Shake_256sSimple, Shake_256sRobust;
    "sphincs_shake_256f" => Shake_256fSimple, Shake_256fRobust;
);
