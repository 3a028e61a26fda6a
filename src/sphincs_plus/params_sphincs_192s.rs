//! Here are the parameters used for the SPHINCS+ 192s parameter sets, shared by the SHA2 and
//! SHAKE instantiations.
//!
//! With n = 24 the SHA2 instantiation switches H and T_l to SHA-512.

/// Hash output length in bytes.
pub const SPX_N: usize = 24;

/// Height of the hypertree.
pub const SPX_FULL_HEIGHT: usize = 63;
/// Number of subtree layers.
pub const SPX_D: usize = 7;

/// FORS tree dimensions.
pub const SPX_FORS_HEIGHT: usize = 14;
pub const SPX_FORS_TREES: usize = 17;

/// Winternitz parameter.
pub const SPX_WOTS_W: usize = 16;
