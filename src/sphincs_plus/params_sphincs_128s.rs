//! Here are the parameters used for the SPHINCS+ 128s parameter sets, shared by the SHA2 and
//! SHAKE instantiations.

/// Hash output length in bytes.
pub const SPX_N: usize = 16;

/// Height of the hypertree.
pub const SPX_FULL_HEIGHT: usize = 63;
/// Number of subtree layers.
pub const SPX_D: usize = 7;

/// FORS tree dimensions.
pub const SPX_FORS_HEIGHT: usize = 12;
pub const SPX_FORS_TREES: usize = 14;

/// Winternitz parameter.
pub const SPX_WOTS_W: usize = 16;
