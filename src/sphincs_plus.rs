//! # SPHINCS+ parameter sets
//!
//! The 24 standard SPHINCS+ r3.1 parameter sets as [`ParameterSet`] types: every combination of
//! security level and size/speed trade-off, {128, 192, 256} × {s, f}, with the SHA2 or SHAKE hash
//! family in its simple or robust construction.
//!
//! Sizes are shared between the hash families and live in the `params_sphincs_*` modules. The
//! types built from them are zero-sized markers:
//!
//! ```rust
//! use spx_xmss::sphincs_plus::Sha2_128fSimple;
//! use spx_xmss::ParameterSet;
//!
//! assert_eq!(Sha2_128fSimple::N, 16);
//! assert_eq!(Sha2_128fSimple::TREE_HEIGHT, 3);
//! assert_eq!(Sha2_128fSimple::WOTS_LEN, 35);
//! assert_eq!(Sha2_128fSimple::SPX_BYTES, 17088);
//! ```
//!
//! | set  | n  | h  | d  | h′ | FORS a | FORS k | w  |
//! |------|----|----|----|----|--------|--------|----|
//! | 128s | 16 | 63 | 7  | 9  | 12     | 14     | 16 |
//! | 128f | 16 | 66 | 22 | 3  | 6      | 33     | 16 |
//! | 192s | 24 | 63 | 7  | 9  | 14     | 17     | 16 |
//! | 192f | 24 | 66 | 22 | 3  | 8      | 33     | 16 |
//! | 256s | 32 | 64 | 8  | 8  | 14     | 22     | 16 |
//! | 256f | 32 | 68 | 17 | 4  | 9      | 35     | 16 |
//!
//! Every set is checked at compile time against the stack buffer bounds of the XMSS core.

use crate::hash::{Sha2Robust, Sha2Simple, ShakeRobust, ShakeSimple};
use crate::params::{ParameterSet, MAX_N, MAX_TREE_HEIGHT, MAX_WOTS_LEN};

pub mod adrs_offsets;
pub mod params_sphincs_128f;
pub mod params_sphincs_128s;
pub mod params_sphincs_192f;
pub mod params_sphincs_192s;
pub mod params_sphincs_256f;
pub mod params_sphincs_256s;

macro_rules! sphincs_params {
    ($type: ident, $name: literal, $params: ident, $hasher: ty) => {
        #[doc = concat!("The `", $name, "` parameter set.")]
        #[allow(non_camel_case_types)]
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $type;

        impl ParameterSet for $type {
            type Hasher = $hasher;
            const NAME: &'static str = $name;
            const N: usize = $params::SPX_N;
            const FULL_HEIGHT: usize = $params::SPX_FULL_HEIGHT;
            const D: usize = $params::SPX_D;
            const FORS_HEIGHT: usize = $params::SPX_FORS_HEIGHT;
            const FORS_TREES: usize = $params::SPX_FORS_TREES;
            const WOTS_W: usize = $params::SPX_WOTS_W;
        }

        const _: () = assert!(
            <$type as ParameterSet>::N <= MAX_N
                && <$type as ParameterSet>::WOTS_LEN <= MAX_WOTS_LEN
                && <$type as ParameterSet>::TREE_HEIGHT <= MAX_TREE_HEIGHT
                && <$type as ParameterSet>::FULL_HEIGHT % <$type as ParameterSet>::D == 0
        );
    };
}

sphincs_params!(Sha2_128sSimple, "SPHINCS+-SHA2-128s-simple", params_sphincs_128s, Sha2Simple);
sphincs_params!(Sha2_128sRobust, "SPHINCS+-SHA2-128s-robust", params_sphincs_128s, Sha2Robust);
sphincs_params!(Sha2_128fSimple, "SPHINCS+-SHA2-128f-simple", params_sphincs_128f, Sha2Simple);
sphincs_params!(Sha2_128fRobust, "SPHINCS+-SHA2-128f-robust", params_sphincs_128f, Sha2Robust);
sphincs_params!(Sha2_192sSimple, "SPHINCS+-SHA2-192s-simple", params_sphincs_192s, Sha2Simple);
sphincs_params!(Sha2_192sRobust, "SPHINCS+-SHA2-192s-robust", params_sphincs_192s, Sha2Robust);
sphincs_params!(Sha2_192fSimple, "SPHINCS+-SHA2-192f-simple", params_sphincs_192f, Sha2Simple);
sphincs_params!(Sha2_192fRobust, "SPHINCS+-SHA2-192f-robust", params_sphincs_192f, Sha2Robust);
sphincs_params!(Sha2_256sSimple, "SPHINCS+-SHA2-256s-simple", params_sphincs_256s, Sha2Simple);
sphincs_params!(Sha2_256sRobust, "SPHINCS+-SHA2-256s-robust", params_sphincs_256s, Sha2Robust);
sphincs_params!(Sha2_256fSimple, "SPHINCS+-SHA2-256f-simple", params_sphincs_256f, Sha2Simple);
sphincs_params!(Sha2_256fRobust, "SPHINCS+-SHA2-256f-robust", params_sphincs_256f, Sha2Robust);

sphincs_params!(Shake_128sSimple, "SPHINCS+-SHAKE-128s-simple", params_sphincs_128s, ShakeSimple);
sphincs_params!(Shake_128sRobust, "SPHINCS+-SHAKE-128s-robust", params_sphincs_128s, ShakeRobust);
sphincs_params!(Shake_128fSimple, "SPHINCS+-SHAKE-128f-simple", params_sphincs_128f, ShakeSimple);
sphincs_params!(Shake_128fRobust, "SPHINCS+-SHAKE-128f-robust", params_sphincs_128f, ShakeRobust);
sphincs_params!(Shake_192sSimple, "SPHINCS+-SHAKE-192s-simple", params_sphincs_192s, ShakeSimple);
sphincs_params!(Shake_192sRobust, "SPHINCS+-SHAKE-192s-robust", params_sphincs_192s, ShakeRobust);
sphincs_params!(Shake_192fSimple, "SPHINCS+-SHAKE-192f-simple", params_sphincs_192f, ShakeSimple);
sphincs_params!(Shake_192fRobust, "SPHINCS+-SHAKE-192f-robust", params_sphincs_192f, ShakeRobust);
sphincs_params!(Shake_256sSimple, "SPHINCS+-SHAKE-256s-simple", params_sphincs_256s, ShakeSimple);
sphincs_params!(Shake_256sRobust, "SPHINCS+-SHAKE-256s-robust", params_sphincs_256s, ShakeRobust);
sphincs_params!(Shake_256fSimple, "SPHINCS+-SHAKE-256f-simple", params_sphincs_256f, ShakeSimple);
sphincs_params!(Shake_256fRobust, "SPHINCS+-SHAKE-256f-robust", params_sphincs_256f, ShakeRobust);
