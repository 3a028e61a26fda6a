//! Here are the parameters used for the SPHINCS+ 192f parameter sets, shared by the SHA2 and
//! SHAKE instantiations.
//!
//! With n = 24 the SHA2 instantiation switches H and T_l to SHA-512.

/// Hash output length in bytes.
pub const SPX_N: usize = 24;

/// Height of the hypertree.
pub const SPX_FULL_HEIGHT: usize = 66;
/// Number of subtree layers.
pub const SPX_D: usize = 22;

/// FORS tree dimensions.
pub const SPX_FORS_HEIGHT: usize = 8;
pub const SPX_FORS_TREES: usize = 33;

/// Winternitz parameter.
pub const SPX_WOTS_W: usize = 16;
