//! The `ParameterSet` trait: compile-time constants of a SPHINCS+ parameter set, as seen by
//! the XMSS subtree core.
//!
//! Working buffers of the core live on the call stack and are sized by the `MAX_*` bounds
//! below; every concrete parameter set is checked against them at compile time.

use crate::hash::TweakableHash;
use crate::sphincs_plus::adrs_offsets::SPX_ADDR_BYTES;
use core::fmt::Debug;

/// Largest supported hash output length in bytes.
pub const MAX_N: usize = 32;

/// Largest supported WOTS+ length (n = 32, w = 4).
pub const MAX_WOTS_LEN: usize = 133;

/// Largest supported WOTS+ signature byte size.
pub const MAX_WOTS_BYTES: usize = MAX_WOTS_LEN * MAX_N;

/// Largest supported XMSS subtree height.
pub const MAX_TREE_HEIGHT: usize = 20;

/// Binary logarithm of a Winternitz parameter in {4, 16, 256}.
pub const fn wots_logw(w: usize) -> usize {
    match w {
        4 => 2,
        16 => 4,
        256 => 8,
        _ => panic!("Winternitz parameter must be 4, 16 or 256"),
    }
}

/// len_1 = ceil(8n / log2(w)).
pub const fn wots_len1(n: usize, w: usize) -> usize {
    let logw = wots_logw(w);
    (8 * n + logw - 1) / logw
}

/// len_2 = floor(log2(len_1 * (w - 1)) / log2(w)) + 1, computed as one more than the
/// largest k with w^k <= len_1 * (w - 1).
pub const fn wots_len2(n: usize, w: usize) -> usize {
    let max_checksum = wots_len1(n, w) * (w - 1);
    let mut power = 1;
    let mut k = 0;
    while power * w <= max_checksum {
        power *= w;
        k += 1;
    }
    k + 1
}

/// Compile-time description of a parameter set.
///
/// Only `N`, the heights and `WOTS_W` drive the XMSS core. The FORS dimensions are carried
/// so that the outer scheme (and the full-signature size constants) can be derived from the
/// same type.
pub trait ParameterSet: Copy + Clone + Debug + Default + Send + Sync + 'static {
    /// The tweakable hash family (SHA2 or SHAKE, simple or robust).
    type Hasher: TweakableHash;

    /// Human readable name, e.g. `SPHINCS+-SHA2-128f-simple`.
    const NAME: &'static str;

    /// Hash output length in bytes.
    const N: usize;

    /// Height of the hypertree.
    const FULL_HEIGHT: usize;

    /// Number of subtree layers.
    const D: usize;

    /// FORS tree height.
    const FORS_HEIGHT: usize;

    /// Number of FORS trees.
    const FORS_TREES: usize;

    /// Winternitz parameter.
    const WOTS_W: usize;

    /// Height of a single XMSS subtree, h' = h / d.
    const TREE_HEIGHT: usize = Self::FULL_HEIGHT / Self::D;

    const WOTS_LOGW: usize = wots_logw(Self::WOTS_W);
    const WOTS_LEN1: usize = wots_len1(Self::N, Self::WOTS_W);
    const WOTS_LEN2: usize = wots_len2(Self::N, Self::WOTS_W);
    const WOTS_LEN: usize = Self::WOTS_LEN1 + Self::WOTS_LEN2;

    /// WOTS+ signature byte size.
    const WOTS_BYTES: usize = Self::WOTS_LEN * Self::N;

    /// XMSS signature byte size: WOTS+ signature followed by the authentication path.
    const XMSS_BYTES: usize = (Self::WOTS_LEN + Self::TREE_HEIGHT) * Self::N;

    /// Encoded XMSS public key byte size: root, public seed and subtree address.
    const XMSS_PK_BYTES: usize = 2 * Self::N + SPX_ADDR_BYTES;

    /// FORS signature byte size.
    const FORS_BYTES: usize = (Self::FORS_HEIGHT + 1) * Self::FORS_TREES * Self::N;

    /// Full SPHINCS+ signature byte size.
    const SPX_BYTES: usize = Self::N + Self::FORS_BYTES + Self::D * Self::XMSS_BYTES;

    /// Full SPHINCS+ public-key byte size.
    const SPX_PK_BYTES: usize = 2 * Self::N;

    /// Full SPHINCS+ secret-key byte size.
    const SPX_SK_BYTES: usize = 2 * Self::N + Self::SPX_PK_BYTES;
}
