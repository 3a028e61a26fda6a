//! Here are the parameters used for the SPHINCS+ 256f parameter sets, shared by the SHA2 and
//! SHAKE instantiations.
//!
//! With n = 32 the SHA2 instantiation switches H and T_l to SHA-512.

/// Hash output length in bytes.
pub const SPX_N: usize = 32;

/// Height of the hypertree.
pub const SPX_FULL_HEIGHT: usize = 68;
/// Number of subtree layers.
pub const SPX_D: usize = 17;

/// FORS tree dimensions.
pub const SPX_FORS_HEIGHT: usize = 9;
pub const SPX_FORS_TREES: usize = 35;

/// Winternitz parameter.
pub const SPX_WOTS_W: usize = 16;
